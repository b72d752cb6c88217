//! Client-side wrapper for Yale CPSC's Zoo submit system.
//!
//! Files are copied with `scp`, and the autograder, `submit` and `check`
//! scripts are run by piping shell commands into `ssh zoo bash`.

pub mod client;
pub mod config;
mod err;
pub mod opt;
pub mod prompt;
pub mod runner;
pub mod ssh_config;
pub mod tester;

#[cfg(test)]
mod test;

pub use err::*;
