//! The GBuild scripting language: tokenizer, value model, environment,
//! built-ins, shell bridge, and the fused parse-and-evaluate interpreter.

pub mod builtins;
pub mod env;
pub mod interp;
pub mod lexer;
pub mod shell;
pub mod stack;
pub mod value;

pub use interp::Interp;
pub use value::Value;
