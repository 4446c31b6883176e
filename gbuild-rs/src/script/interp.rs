//! The fused parser/evaluator.
//!
//! There is no AST: each grammar production is a method that consumes
//! tokens and pushes/pops the operand stack as it goes.  Statement
//! dispatch, the expression tiers, block skipping, and the bracket
//! directives all live here; value semantics are in [`super::value`],
//! pure helpers in [`super::builtins`].
//!
//! Directive bodies are re-executed by saving the token position before
//! the body, rewinding to it for every iteration, and finally skipping
//! the body once to move past it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};
use crate::script::builtins;
use crate::script::env::Environment;
use crate::script::lexer::{tokenize, Tok, TokenStream};
use crate::script::shell;
use crate::script::stack::OperandStack;
use crate::script::value::Value;

pub struct Interp {
    ts: TokenStream,
    env: Environment,
    stack: OperandStack,
    work_dir: PathBuf,
    last_shell_status: i32,
}

impl Interp {
    pub fn new(src: &str) -> Result<Self> {
        let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_work_dir(src, work_dir)
    }

    /// Like [`new`](Self::new), with an explicit working directory for
    /// directive file system access and shell commands.
    pub fn with_work_dir(src: &str, work_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Interp {
            ts: TokenStream::new(tokenize(src)?),
            env: Environment::new(),
            stack: OperandStack::new(),
            work_dir: work_dir.into(),
            last_shell_status: 0,
        })
    }

    /// Exposes the process arguments to the script: `arg0`..`argN` as
    /// strings plus the integer `argc`, all in the root scope.
    pub fn bind_args(&mut self, args: &[String]) -> Result<()> {
        for (i, arg) in args.iter().enumerate() {
            self.env
                .declare(&format!("arg{i}"), Value::Str(arg.clone().into_bytes()))
                .map_err(|k| self.err(k))?;
        }
        self.env
            .declare("argc", Value::Int(args.len() as i64))
            .map_err(|k| self.err(k))?;
        Ok(())
    }

    /// Current value of a variable, if bound.  Test hook.
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.env.get(name).ok()
    }

    /// Executes the whole script.  On normal completion the result is
    /// the status of the most recent shell command (0 if none ran).
    pub fn run(&mut self) -> Result<i32> {
        while !self.ts.peek_is(&Tok::Eof) {
            self.statement()?;
            self.stack.clear();
        }
        Ok(self.last_shell_status)
    }

    // ── Error/stack plumbing ──────────────────────────────────────────────────

    fn err(&self, kind: ErrorKind) -> Error {
        Error::new(self.ts.line(), kind)
    }

    fn push(&mut self, v: Value) -> Result<()> {
        let line = self.ts.line();
        self.stack.push(v).map_err(|k| Error::new(line, k))
    }

    fn pop(&mut self) -> Result<Value> {
        let line = self.ts.line();
        self.stack.pop().map_err(|k| Error::new(line, k))
    }

    // ── Statements ────────────────────────────────────────────────────────────

    fn statement(&mut self) -> Result<()> {
        if self.ts.eat_ident("let") {
            self.var_decl()?;
            self.ts.expect(&Tok::Semicolon)?;
        } else if self.ts.eat_ident("if") {
            self.if_stmt()?;
        } else if self.ts.peek_is(&Tok::LBrace) {
            self.body()?;
        } else if self.ts.eat(&Tok::LBracket) {
            self.directive()?;
        } else {
            self.comparison()?;
            self.ts.expect(&Tok::Semicolon)?;
        }
        Ok(())
    }

    fn var_decl(&mut self) -> Result<()> {
        let tok = self.ts.next();
        let Tok::Ident(name) = tok.tok else {
            return Err(Error::new(
                tok.line,
                ErrorKind::Syntax(format!("Expected identifier, got {}", tok.tok.name())),
            ));
        };
        if builtins::is_reserved(&name) {
            return Err(Error::new(
                tok.line,
                ErrorKind::Name(format!("Variable name '{name}' is reserved")),
            ));
        }
        let value = if self.ts.eat(&Tok::Equals) {
            self.comparison()?;
            self.pop()?
        } else {
            Value::Int(0)
        };
        self.env
            .declare(&name, value)
            .map_err(|k| Error::new(tok.line, k))
    }

    fn if_stmt(&mut self) -> Result<()> {
        self.ts.expect(&Tok::LParen)?;
        let negate = self.ts.eat(&Tok::Bang);
        self.comparison()?;
        let cond = self.pop()?;
        if cond.is_str() {
            return Err(self.err(ErrorKind::Type(
                "A string can't be true / false".into(),
            )));
        }
        self.ts.expect(&Tok::RParen)?;
        let taken = (cond.as_num() != 0.0) != negate;
        if taken {
            self.body()?;
            if self.ts.eat_ident("else") {
                self.skip_body()?;
            }
        } else {
            self.skip_body()?;
            if self.ts.eat_ident("else") {
                self.body()?;
            }
        }
        Ok(())
    }

    /// Executes a braced block in a fresh scope.
    fn body(&mut self) -> Result<()> {
        self.ts.expect(&Tok::LBrace)?;
        self.env.push_scope();
        loop {
            if self.ts.peek_is(&Tok::RBrace) {
                break;
            }
            if self.ts.peek_is(&Tok::Eof) {
                return Err(self.err(ErrorKind::Syntax("Can't find matching '}'".into())));
            }
            self.statement()?;
            self.stack.clear();
        }
        self.env.pop_scope();
        self.ts.expect(&Tok::RBrace)?;
        Ok(())
    }

    /// Consumes a braced block without interpreting it.  Skipped tokens
    /// have no effect whatsoever: no lookups, no declarations, no shell.
    fn skip_body(&mut self) -> Result<()> {
        self.ts.expect(&Tok::LBrace)?;
        let mut depth = 1u32;
        loop {
            let tok = self.ts.next();
            match tok.tok {
                Tok::Eof => {
                    return Err(Error::new(
                        tok.line,
                        ErrorKind::Syntax("Can't find matching '}'".into()),
                    ))
                }
                Tok::LBrace => depth += 1,
                Tok::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    // ── Directives ────────────────────────────────────────────────────────────

    fn directive(&mut self) -> Result<()> {
        let tok = self.ts.next();
        let Tok::Ident(name) = &tok.tok else {
            return Err(Error::new(
                tok.line,
                ErrorKind::Syntax(format!("Expected directive name, got {}", tok.tok.name())),
            ));
        };
        match name.as_str() {
            "exit" => self.dir_exit(),
            "foreach" => self.dir_foreach(),
            "foreach_line" => self.dir_foreach_line(),
            other => Err(Error::new(
                tok.line,
                ErrorKind::Syntax(format!("Unknown directive '{other}'")),
            )),
        }
    }

    fn dir_exit(&mut self) -> Result<()> {
        self.comparison()?;
        let v = self.pop()?;
        let Value::Int(n) = v else {
            return Err(self.err(ErrorKind::Type("exit expects an integer value".into())));
        };
        self.ts.expect(&Tok::RBracket)?;
        let status = (n.unsigned_abs() % 256) as i32;
        debug!(status, "exit directive");
        Err(self.err(ErrorKind::Exit(status)))
    }

    /// Reads a directive's string-literal argument.
    fn literal_arg(&mut self) -> Result<String> {
        self.ts.expect(&Tok::LParen)?;
        let tok = self.ts.next();
        let Tok::Str(s) = tok.tok else {
            return Err(Error::new(
                tok.line,
                ErrorKind::Syntax(format!("Expected string, got {}", tok.tok.name())),
            ));
        };
        if s.is_empty() {
            return Err(Error::new(
                tok.line,
                ErrorKind::Syntax("Can't have zero length strings".into()),
            ));
        }
        self.ts.expect(&Tok::RParen)?;
        self.ts.expect(&Tok::RBracket)?;
        Ok(String::from_utf8_lossy(&s).into_owned())
    }

    fn dir_foreach(&mut self) -> Result<()> {
        for reserved in ["file", "dir"] {
            if self.env.contains(reserved) {
                return Err(self.err(ErrorKind::Name(format!(
                    "The variable '{reserved}' is used by foreach"
                ))));
            }
        }
        let ext = self.literal_arg()?;
        if ext.starts_with('.') {
            return Err(self.err(ErrorKind::Syntax(
                "Extension must be given without a leading '.'".into(),
            )));
        }
        self.env.push_scope();
        self.env
            .declare("file", Value::Str(Vec::new()))
            .map_err(|k| self.err(k))?;
        self.env
            .declare("dir", Value::Str(b".".to_vec()))
            .map_err(|k| self.err(k))?;
        let mark = self.ts.mark();
        let result = self.walk_dir(&ext, Path::new("."), mark);
        self.env.pop_scope();
        result?;
        self.ts.rewind(mark);
        self.skip_body()
    }

    /// Depth-first walk in readdir order, skipping dot-directories.
    /// Runs the directive body once for every regular file whose
    /// extension (text after the LAST dot) equals `ext`.
    fn walk_dir(&mut self, ext: &str, rel: &Path, mark: usize) -> Result<()> {
        let entries = match fs::read_dir(self.work_dir.join(rel)) {
            Ok(entries) => entries,
            // Unopenable directory: zero iterations, not an error.
            Err(_) => return Ok(()),
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let Ok(kind) = entry.file_type() else {
                continue;
            };
            if kind.is_dir() {
                if name.starts_with('.') {
                    continue;
                }
                self.walk_dir(ext, &rel.join(&name), mark)?;
            } else if kind.is_file() {
                let matches = name
                    .rfind('.')
                    .is_some_and(|dot| &name[dot + 1..] == ext);
                if matches {
                    trace!(file = %name, dir = %rel.display(), "foreach iteration");
                    self.env
                        .assign("file", Value::Str(name.clone().into_bytes()))
                        .map_err(|k| self.err(k))?;
                    self.env
                        .assign("dir", Value::Str(rel.display().to_string().into_bytes()))
                        .map_err(|k| self.err(k))?;
                    self.ts.rewind(mark);
                    self.body()?;
                    self.stack.clear();
                }
            }
        }
        Ok(())
    }

    fn dir_foreach_line(&mut self) -> Result<()> {
        if self.env.contains("line") {
            return Err(self.err(ErrorKind::Name(
                "The variable 'line' is used by foreach_line".into(),
            )));
        }
        let path = self.literal_arg()?;
        // Unreadable or empty file: zero iterations.
        let content = fs::read_to_string(self.work_dir.join(&path)).unwrap_or_default();
        let mut lines: Vec<&str> = if content.is_empty() {
            Vec::new()
        } else {
            content.split('\n').collect()
        };
        // A trailing newline does not start an extra empty line.
        if content.ends_with('\n') {
            lines.pop();
        }
        self.env.push_scope();
        self.env
            .declare("line", Value::Str(Vec::new()))
            .map_err(|k| self.err(k))?;
        let mark = self.ts.mark();
        let mut result = Ok(());
        for line in lines {
            trace!(line, "foreach_line iteration");
            if let Err(k) = self.env.assign("line", Value::Str(line.as_bytes().to_vec())) {
                result = Err(self.err(k));
                break;
            }
            self.ts.rewind(mark);
            if let Err(e) = self.body() {
                result = Err(e);
                break;
            }
            self.stack.clear();
        }
        self.env.pop_scope();
        result?;
        self.ts.rewind(mark);
        self.skip_body()
    }

    // ── Expression tiers ──────────────────────────────────────────────────────

    fn comparison(&mut self) -> Result<()> {
        self.additive()?;
        loop {
            if self.ts.eat(&Tok::Greater) {
                let or_equal = self.ts.eat(&Tok::Equals);
                self.ordered(or_equal, false)?;
            } else if self.ts.eat(&Tok::Lesser) {
                let or_equal = self.ts.eat(&Tok::Equals);
                self.ordered(or_equal, true)?;
            } else if self.ts.eat(&Tok::Equals) {
                self.ts.expect(&Tok::Equals)?;
                self.additive()?;
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                let eq = lhs.equals(&rhs).map_err(|k| self.err(k))?;
                self.push(Value::Int(i64::from(eq)))?;
            } else if self.ts.peek_is(&Tok::Bang) {
                self.ts.next();
                self.ts.expect(&Tok::Equals)?;
                self.additive()?;
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                let eq = lhs.equals(&rhs).map_err(|k| self.err(k))?;
                self.push(Value::Int(i64::from(!eq)))?;
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Shared tail of `>`, `>=`, `<`, `<=`.
    fn ordered(&mut self, or_equal: bool, lesser: bool) -> Result<()> {
        self.additive()?;
        let rhs = self.pop()?;
        let lhs = self.pop()?;
        if lhs.is_str() || rhs.is_str() {
            return Err(self.err(ErrorKind::Type(
                "Can't compare strings with '<' or '>'".into(),
            )));
        }
        let (a, b) = (lhs.as_num(), rhs.as_num());
        let res = match (lesser, or_equal) {
            (false, false) => a > b,
            (false, true) => a >= b,
            (true, false) => a < b,
            (true, true) => a <= b,
        };
        self.push(Value::Int(i64::from(res)))
    }

    fn additive(&mut self) -> Result<()> {
        self.term()?;
        loop {
            if self.ts.eat(&Tok::Plus) {
                self.term()?;
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                let v = lhs.add(&rhs).map_err(|k| self.err(k))?;
                self.push(v)?;
            } else if self.ts.eat(&Tok::Minus) {
                self.term()?;
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                let v = lhs.sub(&rhs).map_err(|k| self.err(k))?;
                self.push(v)?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn term(&mut self) -> Result<()> {
        self.factor()?;
        loop {
            if self.ts.eat(&Tok::Star) {
                self.factor()?;
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                let v = lhs.mul(&rhs).map_err(|k| self.err(k))?;
                self.push(v)?;
            } else if self.ts.eat(&Tok::Slash) {
                self.factor()?;
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                let v = lhs.div(&rhs).map_err(|k| self.err(k))?;
                self.push(v)?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<()> {
        let tok = self.ts.next();
        match tok.tok {
            Tok::Int(n) => self.push(Value::Int(n)),
            Tok::Float(x) => self.push(Value::Float(x)),
            Tok::Str(s) => {
                if s.is_empty() {
                    return Err(Error::new(
                        tok.line,
                        ErrorKind::Syntax("Can't have zero length strings".into()),
                    ));
                }
                self.push(Value::Str(s))
            }
            Tok::LParen => {
                self.comparison()?;
                self.ts.expect(&Tok::RParen)?;
                Ok(())
            }
            Tok::Bang => {
                self.comparison()?;
                let v = self.pop()?;
                if v.is_str() {
                    return Err(self.err(ErrorKind::Type(
                        "A string can't be true / false".into(),
                    )));
                }
                self.push(Value::Int(i64::from(v.as_num() == 0.0)))
            }
            Tok::Minus => {
                self.factor()?;
                let v = self.pop()?;
                match v {
                    Value::Int(n) => self.push(Value::Int(n.wrapping_neg())),
                    Value::Float(x) => self.push(Value::Float(-x)),
                    Value::Str(_) => Err(self.err(ErrorKind::Type(
                        "Can't negate a string value".into(),
                    ))),
                }
            }
            Tok::Dollar => self.shell_factor(),
            Tok::Ident(name) => self.ident_factor(name, tok.line),
            other => Err(Error::new(
                tok.line,
                ErrorKind::Syntax(format!("Unexpected {}", other.name())),
            )),
        }
    }

    /// `$ expr [&]`: evaluate to a command string and run it.
    fn shell_factor(&mut self) -> Result<()> {
        self.comparison()?;
        let v = self.pop()?;
        let Value::Str(cmd) = v else {
            return Err(self.err(ErrorKind::Type(
                "Can't execute a non-string value".into(),
            )));
        };
        let cmd = String::from_utf8_lossy(&cmd).into_owned();
        let quiet = self.ts.eat(&Tok::Amp);
        if !quiet {
            println!("{cmd}");
        }
        let status = shell::run(&cmd, &self.work_dir);
        self.last_shell_status = status;
        self.push(Value::Int(i64::from(status)))
    }

    fn ident_factor(&mut self, name: String, line: u32) -> Result<()> {
        match name.as_str() {
            "lengthof" => {
                let v = self.unary_arg()?;
                let Value::Str(s) = v else {
                    return Err(self.err(ErrorKind::Type(
                        "lengthof expects a string value".into(),
                    )));
                };
                self.push(Value::Int(s.len() as i64))
            }
            "cut" => self.cut_call(),
            "hexof" => {
                let v = self.unary_arg()?;
                let Value::Int(n) = v else {
                    return Err(self.err(ErrorKind::Type(
                        "hexof expects an integer value".into(),
                    )));
                };
                self.push(Value::Str(builtins::hex_of(n).into_bytes()))
            }
            "hashof" => {
                let v = self.unary_arg()?;
                let Value::Str(s) = v else {
                    return Err(self.err(ErrorKind::Type(
                        "hashof expects a string value".into(),
                    )));
                };
                self.push(Value::Int(builtins::rolling_hash(&s)))
            }
            "uptime" => {
                self.ts.expect(&Tok::LParen)?;
                self.ts.expect(&Tok::RParen)?;
                self.push(Value::Float(builtins::uptime_secs()))
            }
            "newer" => {
                self.ts.expect(&Tok::LParen)?;
                self.comparison()?;
                self.ts.expect(&Tok::Comma)?;
                self.comparison()?;
                self.ts.expect(&Tok::RParen)?;
                let b = self.pop()?;
                let a = self.pop()?;
                let (Value::Str(a), Value::Str(b)) = (a, b) else {
                    return Err(self.err(ErrorKind::Type(
                        "newer expects two string values".into(),
                    )));
                };
                let a = String::from_utf8_lossy(&a).into_owned();
                let b = String::from_utf8_lossy(&b).into_owned();
                let res = builtins::newer(&self.work_dir.join(a), &self.work_dir.join(b));
                self.push(Value::Int(res))
            }
            _ => self.variable_factor(&name, line),
        }
    }

    /// Parses `'(' comparison ')'` and pops the result.
    fn unary_arg(&mut self) -> Result<Value> {
        self.ts.expect(&Tok::LParen)?;
        self.comparison()?;
        self.ts.expect(&Tok::RParen)?;
        self.pop()
    }

    fn cut_call(&mut self) -> Result<()> {
        self.ts.expect(&Tok::LParen)?;
        self.comparison()?;
        self.ts.expect(&Tok::Comma)?;
        self.comparison()?;
        self.ts.expect(&Tok::Comma)?;
        self.comparison()?;
        self.ts.expect(&Tok::RParen)?;
        let high = self.pop()?;
        let low = self.pop()?;
        let s = self.pop()?;
        let Value::Str(s) = s else {
            return Err(self.err(ErrorKind::Type("cut expects a string value".into())));
        };
        let (Value::Int(low), Value::Int(high)) = (low, high) else {
            return Err(self.err(ErrorKind::Type(
                "cut expects integer bounds".into(),
            )));
        };
        let out = builtins::cut(&s, low, high).map_err(|k| self.err(k))?;
        self.push(Value::Str(out))
    }

    /// A variable reference, possibly followed by assignment or indexing.
    fn variable_factor(&mut self, name: &str, line: u32) -> Result<()> {
        if !self.env.contains(name) {
            return Err(Error::new(
                line,
                ErrorKind::Name(format!("Can't find variable '{name}'")),
            ));
        }
        if self.ts.eat(&Tok::Equals) {
            if self.ts.peek_is(&Tok::Equals) {
                // That was the first half of '=='.  Put it back and let
                // the comparison tier handle it.
                self.ts.back();
            } else {
                self.comparison()?;
                let v = self.pop()?;
                self.env
                    .assign(name, v.clone())
                    .map_err(|k| Error::new(line, k))?;
                return self.push(v);
            }
        } else if self.ts.eat(&Tok::LBracket) {
            return self.index_factor(name, line);
        }
        let v = self.env.get(name).map_err(|k| Error::new(line, k))?.clone();
        self.push(v)
    }

    fn index_factor(&mut self, name: &str, line: u32) -> Result<()> {
        let v = self.env.get(name).map_err(|k| Error::new(line, k))?.clone();
        let Value::Str(s) = v else {
            return Err(self.err(ErrorKind::Type(
                "Can't index a non-string value".into(),
            )));
        };
        self.comparison()?;
        self.ts.expect(&Tok::RBracket)?;
        let idx = self.pop()?;
        let Value::Int(i) = idx else {
            return Err(self.err(ErrorKind::Type(
                "Index must be an integer value".into(),
            )));
        };
        if i < 0 || i as usize >= s.len() {
            return Err(self.err(ErrorKind::Range(format!(
                "Index {i} out of range"
            ))));
        }
        // A single raw byte, never a transcoded character.
        self.push(Value::Str(vec![s[i as usize]]))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(src: &str) -> Interp {
        let mut it = Interp::new(src).expect("tokenize failed");
        it.run().expect("script failed");
        it
    }

    fn result_of(expr: &str) -> Value {
        let it = run_script(&format!("let r = {expr};"));
        it.var("r").cloned().expect("no result variable")
    }

    #[test]
    fn precedence() {
        assert_eq!(result_of("2 + 3 * 4"), Value::Int(14));
        assert_eq!(result_of("(2 + 3) * 4"), Value::Int(20));
        assert_eq!(result_of("10 - 2 - 3"), Value::Int(5));
    }

    #[test]
    fn comparisons_yield_ints() {
        assert_eq!(result_of("3 > 2"), Value::Int(1));
        assert_eq!(result_of("3 < 2"), Value::Int(0));
        assert_eq!(result_of("3 >= 3"), Value::Int(1));
        assert_eq!(result_of("3 <= 2"), Value::Int(0));
        assert_eq!(result_of("2 == 2"), Value::Int(1));
        assert_eq!(result_of("2 != 2"), Value::Int(0));
    }

    #[test]
    fn unary_operators() {
        assert_eq!(result_of("-5 + 3"), Value::Int(-2));
        assert_eq!(result_of("!0"), Value::Int(1));
        assert_eq!(result_of("!(2 > 1)"), Value::Int(0));
    }

    #[test]
    fn assignment_yields_new_value() {
        let it = run_script("let x = 1; let y = (x = 5) + 1;");
        assert_eq!(it.var("x"), Some(&Value::Int(5)));
        assert_eq!(it.var("y"), Some(&Value::Int(6)));
    }

    #[test]
    fn assignment_vs_equality() {
        let it = run_script("let x = 3; let same = x == 3;");
        assert_eq!(it.var("x"), Some(&Value::Int(3)));
        assert_eq!(it.var("same"), Some(&Value::Int(1)));
    }

    #[test]
    fn string_indexing() {
        let it = run_script("let s = \"abc\"; let r = s[1];");
        assert_eq!(it.var("r"), Some(&Value::Str("b".into())));
    }

    #[test]
    fn index_out_of_range() {
        let mut it = Interp::new("let s = \"abc\"; let r = s[3];").unwrap();
        assert!(matches!(it.run().unwrap_err().kind, ErrorKind::Range(_)));
    }

    #[test]
    fn if_else_branches() {
        let it = run_script("let r = 0; if (1 > 2) { r = 1; } else { r = 2; }");
        assert_eq!(it.var("r"), Some(&Value::Int(2)));
    }

    #[test]
    fn skipped_branch_is_inert() {
        // The untaken branch references an undeclared variable and would
        // run a directive; neither may have any effect.
        let it = run_script("let r = 1; if (1) { r = 2; } else { nope = 3; [exit 9] }");
        assert_eq!(it.var("r"), Some(&Value::Int(2)));
    }

    #[test]
    fn reserved_let_name_rejected() {
        let mut it = Interp::new("let cut = 1;").unwrap();
        let err = it.run().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Name(_)));
    }

    #[test]
    fn string_condition_is_type_error() {
        let mut it = Interp::new("if (\"s\") { let x; }").unwrap();
        assert!(matches!(it.run().unwrap_err().kind, ErrorKind::Type(_)));
    }
}
