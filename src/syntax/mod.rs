// Syntax-level wrappers over the parser
pub mod file;

pub use file::{FileExtension, SyntaxFile};
