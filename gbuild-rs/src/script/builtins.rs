//! Built-in functions and the reserved-word list.
//!
//! Built-ins appear in factor position as `name '(' args ')'`.  The
//! interpreter parses the argument list; the helpers here implement the
//! value-level behavior so they stay unit-testable without a token
//! stream.

use std::fs;
use std::path::Path;
use std::time::Instant;

use once_cell::sync::Lazy;

use crate::error::ErrorKind;

/// Names a script may never declare as variables.
pub const RESERVED: &[&str] = &[
    "let", "if", "else", "cut", "lengthof", "uptime", "newer", "hashof", "hexof",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// `cut(s, low, high)`: drop `low` bytes from the front and `high` from
/// the back.  Bounds must be non-negative and leave a non-empty result.
pub fn cut(s: &[u8], low: i64, high: i64) -> Result<Vec<u8>, ErrorKind> {
    if low < 0 || high < 0 {
        return Err(ErrorKind::Range(
            "Can't cut with negative bounds".into(),
        ));
    }
    let len = s.len() as i64;
    if low + high >= len {
        return Err(ErrorKind::Range(
            "Can't cut the whole string away".into(),
        ));
    }
    Ok(s[low as usize..(len - high) as usize].to_vec())
}

/// `hashof(s)`: deterministic 64-bit rolling hash, folded to a
/// non-negative integer.
pub fn rolling_hash(bytes: &[u8]) -> i64 {
    const MUL: u64 = 0x0000_0100_0000_01b3;
    const MIX: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut h: u64 = 0;
    for &b in bytes {
        h = (h << 5).wrapping_mul(MUL) ^ (b as u64).wrapping_mul(MIX);
    }
    // checked_abs: i64::MIN has no positive counterpart.
    (h as i64).checked_abs().unwrap_or(0)
}

/// `hexof(n)`: uppercase hexadecimal, no leading zeros, at least one
/// digit.  Negative inputs render as their two's-complement bit pattern.
pub fn hex_of(n: i64) -> String {
    format!("{n:X}")
}

static START: Lazy<Instant> = Lazy::new(Instant::now);

/// Pins the process-start instant.  Called once from `main` so that
/// `uptime()` measures from startup rather than from first use.
pub fn start_clock() {
    Lazy::force(&START);
}

/// `uptime()`: monotonic seconds since process start.
pub fn uptime_secs() -> f64 {
    START.elapsed().as_secs_f64()
}

/// `newer(a, b)`: 0 if `a` is missing, 1 if only `b` is missing,
/// otherwise 1 iff `a` was modified at or after `b`.
pub fn newer(a: &Path, b: &Path) -> i64 {
    let Ok(meta_a) = fs::metadata(a) else {
        return 0;
    };
    let Ok(meta_b) = fs::metadata(b) else {
        return 1;
    };
    match (meta_a.modified(), meta_b.modified()) {
        (Ok(ma), Ok(mb)) => i64::from(ma >= mb),
        // No mtime support on this platform: treat a as up to date.
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn reserved_words() {
        assert!(is_reserved("let"));
        assert!(is_reserved("hexof"));
        assert!(!is_reserved("file"));
        assert!(!is_reserved("x"));
    }

    #[test]
    fn cut_bounds() {
        assert_eq!(cut(b"hello", 0, 0).unwrap(), b"hello".to_vec());
        assert_eq!(cut(b"hello", 1, 1).unwrap(), b"ell".to_vec());
        assert_eq!(cut(b"hello", 4, 0).unwrap(), b"o".to_vec());
        assert!(matches!(cut(b"hello", -1, 0), Err(ErrorKind::Range(_))));
        assert!(matches!(cut(b"hello", 3, 2), Err(ErrorKind::Range(_))));
        assert!(matches!(cut(b"hello", 5, 0), Err(ErrorKind::Range(_))));
    }

    #[test]
    fn hash_is_deterministic_and_non_negative() {
        assert_eq!(rolling_hash(b"gbuild"), rolling_hash(b"gbuild"));
        assert_ne!(rolling_hash(b"gbuild"), rolling_hash(b"gbuile"));
        for s in [&b""[..], b"a", b"abc", b"\xff\xfe"] {
            assert!(rolling_hash(s) >= 0, "hash of {s:?} went negative");
        }
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(hex_of(0), "0");
        assert_eq!(hex_of(255), "FF");
        assert_eq!(hex_of(4096), "1000");
    }

    #[test]
    fn uptime_moves_forward() {
        start_clock();
        let a = uptime_secs();
        let b = uptime_secs();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn newer_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        assert_eq!(newer(&a, &b), 0);
        File::create(&a).unwrap();
        assert_eq!(newer(&a, &b), 1);
        File::create(&b).unwrap();
        // b was created after a.
        assert_eq!(newer(&b, &a), 1);
    }
}
