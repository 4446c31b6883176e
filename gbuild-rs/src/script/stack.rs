//! The evaluator's operand stack.
//!
//! Fixed capacity, like the original interpreter's value array.  Overflow
//! and underflow are grammar invariant violations surfaced as Resource
//! errors rather than panics.

use crate::error::ErrorKind;
use crate::script::value::Value;

const CAPACITY: usize = 1024;

#[derive(Debug, Default)]
pub struct OperandStack {
    vals: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack { vals: Vec::new() }
    }

    pub fn push(&mut self, v: Value) -> Result<(), ErrorKind> {
        if self.vals.len() >= CAPACITY {
            return Err(ErrorKind::Resource("Stack size exceeded".into()));
        }
        self.vals.push(v);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Value, ErrorKind> {
        self.vals
            .pop()
            .ok_or_else(|| ErrorKind::Resource("Stack underflow".into()))
    }

    /// Top of the stack without consuming it.
    pub fn peek(&self) -> Result<&Value, ErrorKind> {
        self.vals
            .last()
            .ok_or_else(|| ErrorKind::Resource("Stack underflow".into()))
    }

    /// Dropped leftovers between statements.
    pub fn clear(&mut self) {
        self.vals.clear();
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }
}
