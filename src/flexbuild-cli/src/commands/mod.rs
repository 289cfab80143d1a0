//! Command handlers for flexbuild CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod decode;
pub mod encode;
pub mod inspect;
