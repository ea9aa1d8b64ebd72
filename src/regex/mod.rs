pub mod ast;
pub mod error;
pub mod matcher;
pub mod parser;

pub use ast::{Atom, ClassKind, Pattern, Quantifier, Token};
pub use error::CompileError;
pub use matcher::matches;
pub use parser::compile;
