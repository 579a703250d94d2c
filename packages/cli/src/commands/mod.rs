pub mod compile;
pub mod infer;
pub mod init;

pub use compile::{compile, CompileArgs};
pub use infer::{infer, InferArgs};
pub use init::{init, InitArgs};
