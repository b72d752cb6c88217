//! Running shell scripts, either locally or on the Zoo.
//!
//! Every call blocks the caller until the child exits. There is no timeout.

pub mod exec;
pub mod model;

pub use exec::ShellExecutor;
pub use model::{RemoteExecutor, Shell};
