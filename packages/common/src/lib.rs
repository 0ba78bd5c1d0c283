pub mod casing;
pub mod diagnostic;
pub mod error;
pub mod filesystem;
pub mod result;

pub use casing::*;
pub use diagnostic::*;
pub use error::*;
pub use filesystem::*;
pub use result::*;
