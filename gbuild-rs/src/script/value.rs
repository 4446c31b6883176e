//! Runtime value type for GBuild scripts.
//!
//! A value is exactly one of integer, float, or string; the tag decides
//! which operations apply.  Strings are raw byte buffers: lengths,
//! indexing, and equality all work on bytes, never on decoded
//! characters.  GBuild rejects most cross-type operations; the only
//! implicit stringification happens on `+` when either operand is a
//! string.

use std::fmt;

use crate::error::ErrorKind;

/// A GBuild runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(Vec<u8>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            // Fixed six-decimal notation, matching C's "%f".
            Value::Float(x) => write!(f, "{x:.6}"),
            Value::Str(s) => f.write_str(&String::from_utf8_lossy(s)),
        }
    }
}

impl Value {
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Numeric-coercion accessor: strings coerce to 0.
    pub fn as_num(&self) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(x) => *x,
            Value::Str(_) => 0.0,
        }
    }

    /// The value rendered as bytes: strings verbatim, numbers in their
    /// decimal notation.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Str(s) => s.clone(),
            other => other.to_string().into_bytes(),
        }
    }

    // ── Operator semantics ────────────────────────────────────────────────────

    /// `*` means repetition when a string is involved, product otherwise.
    pub fn mul(&self, rhs: &Value) -> Result<Value, ErrorKind> {
        match (self, rhs) {
            (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
                if *n < 0 {
                    return Err(ErrorKind::Range(
                        "Can't multiply a string with a negative value".into(),
                    ));
                }
                Ok(Value::Str(s.repeat(*n as usize)))
            }
            (Value::Str(_), _) | (_, Value::Str(_)) => Err(ErrorKind::Type(
                "Can't multiply a string with a non-integer value".into(),
            )),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_mul(*b))),
            _ => Ok(Value::Float(self.as_num() * rhs.as_num())),
        }
    }

    /// `/` is true division; the result is always a float.
    pub fn div(&self, rhs: &Value) -> Result<Value, ErrorKind> {
        if self.is_str() || rhs.is_str() {
            return Err(ErrorKind::Type("Can't divide strings".into()));
        }
        if rhs.as_num() == 0.0 {
            return Err(ErrorKind::Range("Can't divide number by 0".into()));
        }
        Ok(Value::Float(self.as_num() / rhs.as_num()))
    }

    /// `+` is numeric addition, or concatenation when either side is a string.
    pub fn add(&self, rhs: &Value) -> Result<Value, ErrorKind> {
        if self.is_str() || rhs.is_str() {
            let mut out = self.to_bytes();
            out.extend(rhs.to_bytes());
            return Ok(Value::Str(out));
        }
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            _ => Ok(Value::Float(self.as_num() + rhs.as_num())),
        }
    }

    /// `-` is numeric only.
    pub fn sub(&self, rhs: &Value) -> Result<Value, ErrorKind> {
        if self.is_str() || rhs.is_str() {
            return Err(ErrorKind::Type("Can't subtract from strings".into()));
        }
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_sub(*b))),
            _ => Ok(Value::Float(self.as_num() - rhs.as_num())),
        }
    }

    /// `==` / `!=`.  Strings compare byte for byte, length included;
    /// mixed string/non-string is a type error; numerics compare as
    /// doubles.
    pub fn equals(&self, rhs: &Value) -> Result<bool, ErrorKind> {
        match (self, rhs) {
            (Value::Str(a), Value::Str(b)) => Ok(a == b),
            (Value::Str(_), _) | (_, Value::Str(_)) => Err(ErrorKind::Type(
                "Can't compare a string with a non-string value".into(),
            )),
            _ => Ok(self.as_num() == rhs.as_num()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into_bytes())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(1.5).to_string(), "1.500000");
        assert_eq!(Value::Str("hi".into()).to_string(), "hi");
    }

    #[test]
    fn mul_string_repetition() {
        let s = Value::from("ab");
        assert_eq!(s.mul(&Value::Int(3)).unwrap(), Value::from("ababab"));
        assert_eq!(Value::Int(2).mul(&s).unwrap(), Value::from("abab"));
        assert_eq!(s.mul(&Value::Int(0)).unwrap(), Value::from(""));
    }

    #[test]
    fn mul_string_rejects_float_and_negative() {
        let s = Value::from("ab");
        assert!(matches!(s.mul(&Value::Float(2.0)), Err(ErrorKind::Type(_))));
        assert!(matches!(s.mul(&Value::Int(-1)), Err(ErrorKind::Range(_))));
    }

    #[test]
    fn mul_numeric() {
        assert_eq!(Value::Int(3).mul(&Value::Int(4)).unwrap(), Value::Int(12));
        assert_eq!(
            Value::Int(3).mul(&Value::Float(0.5)).unwrap(),
            Value::Float(1.5)
        );
    }

    #[test]
    fn div_is_always_float() {
        assert_eq!(
            Value::Int(10).div(&Value::Int(4)).unwrap(),
            Value::Float(2.5)
        );
        assert_eq!(
            Value::Int(4).div(&Value::Int(2)).unwrap(),
            Value::Float(2.0)
        );
    }

    #[test]
    fn div_errors() {
        assert!(matches!(
            Value::Int(1).div(&Value::Int(0)),
            Err(ErrorKind::Range(_))
        ));
        assert!(matches!(
            Value::from("a").div(&Value::Int(2)),
            Err(ErrorKind::Type(_))
        ));
    }

    #[test]
    fn add_concatenates_with_strings() {
        assert_eq!(
            Value::Int(1).add(&Value::from("x")).unwrap(),
            Value::from("1x")
        );
        assert_eq!(
            Value::from("v=").add(&Value::Float(1.5)).unwrap(),
            Value::from("v=1.500000")
        );
        assert_eq!(Value::Int(2).add(&Value::Int(3)).unwrap(), Value::Int(5));
    }

    #[test]
    fn add_keeps_raw_bytes() {
        let v = Value::Str(vec![0xC3, 0xA9]).add(&Value::from("x")).unwrap();
        assert_eq!(v, Value::Str(vec![0xC3, 0xA9, b'x']));
    }

    #[test]
    fn sub_rejects_strings() {
        assert!(matches!(
            Value::from("a").sub(&Value::Int(1)),
            Err(ErrorKind::Type(_))
        ));
        assert_eq!(Value::Int(5).sub(&Value::Int(2)).unwrap(), Value::Int(3));
    }

    #[test]
    fn eq_numeric_cross_type() {
        assert!(Value::Int(2).equals(&Value::Float(2.0)).unwrap());
        assert!(!Value::Int(2).equals(&Value::Float(2.5)).unwrap());
    }

    #[test]
    fn eq_strings_exact() {
        assert!(Value::from("abc").equals(&Value::from("abc")).unwrap());
        // A shared prefix is not equality: length counts.
        assert!(!Value::from("abc").equals(&Value::from("ab")).unwrap());
        assert!(!Value::from("ab").equals(&Value::from("abc")).unwrap());
        assert!(!Value::from("abc").equals(&Value::from("abd")).unwrap());
    }

    #[test]
    fn eq_mixed_is_error() {
        assert!(matches!(
            Value::from("1").equals(&Value::Int(1)),
            Err(ErrorKind::Type(_))
        ));
    }
}
