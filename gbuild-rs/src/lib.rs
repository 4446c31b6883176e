//! gbuild: a small interpreted build-scripting language.
//!
//! Scripts have variables, integer/float/string expressions,
//! conditionals, shell invocation via the `$` operator, and bracket
//! directives for iterating over directory trees and file lines.
//! Parsing and evaluation happen in a single fused pass; every contract
//! violation is fatal and reported with its source line.
//!
//! ```
//! use gbuild::script::{Interp, Value};
//!
//! let mut interp = Interp::new("let greeting = \"hi \" * 2;").unwrap();
//! interp.run().unwrap();
//! assert_eq!(interp.var("greeting"), Some(&Value::Str("hi hi ".into())));
//! ```

pub mod cli;
pub mod error;
pub mod script;
