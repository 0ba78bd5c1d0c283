pub mod convert;
pub mod init;

pub use convert::{convert, ConvertArgs};
pub use init::{init, InitArgs};
