//! Subcommand modules for the `cplx` binary.

pub mod compare;
pub mod run;
pub mod taxa;
pub mod to_long;
