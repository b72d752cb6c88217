//! Interpreting autograder output.
//!
//! The autograder on the Zoo prints free-form text. The only structure we rely
//! on is a `==== ... Problem ... ====` header line between problems and one
//! `Your output is CORRECT` / `Your output is WRONG` line per checked case.

mod report;

pub use report::*;
