//! Reader for tether signature files: the binary table describing each type's
//! name, register size, and (for heap-resident types) member layout.

pub mod cli;
pub mod errors;
pub mod parser;
pub mod scanner;
pub mod signature;
pub mod split;
pub mod visualize;

pub use errors::{ParseError, ParseResult};
pub use parser::{load_signature_file, parse};
pub use signature::{Classification, Layout, Member, Signature};
pub use split::split;
pub use visualize::render;
