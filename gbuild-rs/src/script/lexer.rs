//! GBuild tokenizer and token stream.
//!
//! The whole script is tokenized up front; [`TokenStream`] then exposes the
//! one-token-lookahead interface the fused parser/evaluator needs: peek,
//! advance, push back a just-consumed token, and save/restore a position
//! (used to re-execute a directive body once per iteration).
//!
//! Every token carries the 1-based line it started on, for diagnostics.

use crate::error::{Error, ErrorKind, Result};

// ── Token ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Tok {
    // Literals
    Int(i64),
    Float(f64),
    /// String literal payload, raw bytes.
    Str(Vec<u8>),
    Ident(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Greater,
    Lesser,
    Equals,
    Bang,
    Dollar,
    Amp,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,

    Eof,
}

impl Tok {
    /// Human-readable token name used in "expected X, got Y" diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Tok::Int(_) => "integer",
            Tok::Float(_) => "float",
            Tok::Str(_) => "string",
            Tok::Ident(_) => "identifier",
            Tok::Plus => "'+'",
            Tok::Minus => "'-'",
            Tok::Star => "'*'",
            Tok::Slash => "'/'",
            Tok::Greater => "'>'",
            Tok::Lesser => "'<'",
            Tok::Equals => "'='",
            Tok::Bang => "'!'",
            Tok::Dollar => "'$'",
            Tok::Amp => "'&'",
            Tok::LParen => "'('",
            Tok::RParen => "')'",
            Tok::LBrace => "'{'",
            Tok::RBrace => "'}'",
            Tok::LBracket => "'['",
            Tok::RBracket => "']'",
            Tok::Semicolon => "';'",
            Tok::Comma => "','",
            Tok::Eof => "end of input",
        }
    }
}

/// A token plus the 1-based source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub tok: Tok,
    pub line: u32,
}

// ── Lexer ─────────────────────────────────────────────────────────────────────

struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Lexer {
            src: src.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == b'\n' {
                self.line += 1;
            }
        }
        ch
    }

    fn skip_ws_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => {
                    self.advance();
                }
                // `#` comments run to end of line.
                Some(b'#') => {
                    while !matches!(self.peek(), None | Some(b'\n')) {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_number(&mut self, first: u8) -> Result<Tok> {
        let line = self.line;
        let mut s = String::new();
        s.push(first as char);
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            s.push(self.advance().unwrap() as char);
        }
        if self.peek() == Some(b'.') && matches!(self.src.get(self.pos + 1), Some(b'0'..=b'9')) {
            s.push(self.advance().unwrap() as char);
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                s.push(self.advance().unwrap() as char);
            }
            let x = s.parse().map_err(|_| {
                Error::new(line, ErrorKind::Range(format!("Number '{s}' is out of range")))
            })?;
            Ok(Tok::Float(x))
        } else {
            let n = s.parse().map_err(|_| {
                Error::new(line, ErrorKind::Range(format!("Number '{s}' is out of range")))
            })?;
            Ok(Tok::Int(n))
        }
    }

    // Bytes are accumulated raw, never transcoded: a two-byte source
    // literal yields a two-byte string.
    fn read_string(&mut self) -> Result<Tok> {
        let start_line = self.line;
        let mut buf = Vec::new();
        loop {
            match self.advance() {
                None => {
                    return Err(Error::new(
                        start_line,
                        ErrorKind::Syntax("Unterminated string literal".into()),
                    ))
                }
                Some(b'"') => break,
                Some(b'\\') => match self.advance() {
                    Some(b'n') => buf.push(b'\n'),
                    Some(b't') => buf.push(b'\t'),
                    Some(c) => buf.push(c),
                    None => {
                        return Err(Error::new(
                            start_line,
                            ErrorKind::Syntax("Unterminated string literal".into()),
                        ))
                    }
                },
                Some(c) => buf.push(c),
            }
        }
        Ok(Tok::Str(buf))
    }

    fn read_ident(&mut self, first: u8) -> Tok {
        let mut s = String::new();
        s.push(first as char);
        while matches!(
            self.peek(),
            Some(b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_')
        ) {
            s.push(self.advance().unwrap() as char);
        }
        Tok::Ident(s)
    }

    fn next_token(&mut self) -> Result<Token> {
        self.skip_ws_and_comments();
        let line = self.line;
        let ch = match self.advance() {
            None => return Ok(Token { tok: Tok::Eof, line }),
            Some(c) => c,
        };

        let tok = match ch {
            b'0'..=b'9' => self.read_number(ch)?,
            b'"' => self.read_string()?,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.read_ident(ch),
            b'+' => Tok::Plus,
            b'-' => Tok::Minus,
            b'*' => Tok::Star,
            b'/' => Tok::Slash,
            b'>' => Tok::Greater,
            b'<' => Tok::Lesser,
            b'=' => Tok::Equals,
            b'!' => Tok::Bang,
            b'$' => Tok::Dollar,
            b'&' => Tok::Amp,
            b'(' => Tok::LParen,
            b')' => Tok::RParen,
            b'{' => Tok::LBrace,
            b'}' => Tok::RBrace,
            b'[' => Tok::LBracket,
            b']' => Tok::RBracket,
            b';' => Tok::Semicolon,
            b',' => Tok::Comma,
            c => {
                return Err(Error::new(
                    line,
                    ErrorKind::Syntax(format!("Can't analyze character '{}'", c as char)),
                ))
            }
        };
        Ok(Token { tok, line })
    }
}

/// Tokenize a whole script.  The returned vector always ends with [`Tok::Eof`].
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let t = lexer.next_token()?;
        let done = t.tok == Tok::Eof;
        tokens.push(t);
        if done {
            break;
        }
    }
    Ok(tokens)
}

// ── TokenStream ───────────────────────────────────────────────────────────────

/// A cursor over a tokenized script with one-token pushback and the
/// save/restore hooks the directive dispatcher uses to re-run loop bodies.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        // tokenize() guarantees a trailing Eof; clamp to it.
        self.tokens
            .get(self.pos)
            .unwrap_or_else(|| self.tokens.last().expect("token stream never empty"))
    }

    /// Line of the token about to be processed.
    pub fn line(&self) -> u32 {
        self.current().line
    }

    pub fn peek(&self) -> &Tok {
        &self.current().tok
    }

    /// Consume and return the next token (sticky at Eof).
    pub fn next(&mut self) -> Token {
        let t = self.current().clone();
        if t.tok != Tok::Eof {
            self.pos += 1;
        }
        t
    }

    /// Un-consume the most recently consumed token.
    pub fn back(&mut self) {
        debug_assert!(self.pos > 0);
        self.pos = self.pos.saturating_sub(1);
    }

    /// Consume the next token if it matches `t`.
    pub fn eat(&mut self, t: &Tok) -> bool {
        if self.peek() == t {
            self.next();
            true
        } else {
            false
        }
    }

    pub fn peek_is(&self, t: &Tok) -> bool {
        self.peek() == t
    }

    pub fn peek_ident_is(&self, name: &str) -> bool {
        matches!(self.peek(), Tok::Ident(s) if s == name)
    }

    /// Consume the next token if it is the identifier `name`.
    pub fn eat_ident(&mut self, name: &str) -> bool {
        if self.peek_ident_is(name) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consume the next token, failing with a Syntax error if it isn't `t`.
    pub fn expect(&mut self, t: &Tok) -> Result<Token> {
        let got = self.next();
        if got.tok == *t {
            Ok(got)
        } else {
            Err(Error::new(
                got.line,
                ErrorKind::Syntax(format!("Expected {}, got {}", t.name(), got.tok.name())),
            ))
        }
    }

    /// Save the current position for a later [`rewind`](Self::rewind).
    pub fn mark(&self) -> usize {
        self.pos
    }

    pub fn rewind(&mut self, mark: usize) {
        self.pos = mark;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
