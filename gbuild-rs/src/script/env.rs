//! Variable environment: one shared name table plus a stack of scope
//! frames.  A frame records only the names it introduced; popping the
//! frame retracts exactly those names.  There is no shadowing: declaring
//! a name that is visible anywhere is an error.

use std::collections::HashMap;

use crate::error::ErrorKind;
use crate::script::value::Value;

#[derive(Debug)]
pub struct Environment {
    table: HashMap<String, Value>,
    scopes: Vec<Vec<String>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            table: HashMap::new(),
            // Root frame for top-level declarations.
            scopes: vec![Vec::new()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Vec::new());
    }

    pub fn pop_scope(&mut self) {
        if let Some(names) = self.scopes.pop() {
            for name in names {
                self.table.remove(&name);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Introduces `name` in the innermost scope.
    pub fn declare(&mut self, name: &str, value: Value) -> Result<(), ErrorKind> {
        if self.table.contains_key(name) {
            return Err(ErrorKind::Name(format!(
                "Variable '{name}' already exists"
            )));
        }
        self.table.insert(name.to_owned(), value);
        if let Some(frame) = self.scopes.last_mut() {
            frame.push(name.to_owned());
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Value, ErrorKind> {
        self.table
            .get(name)
            .ok_or_else(|| ErrorKind::Name(format!("Can't find variable '{name}'")))
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), ErrorKind> {
        match self.table.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ErrorKind::Name(format!("Can't find variable '{name}'"))),
        }
    }
}
