//! Flows module - commands built on the header closure
//!
//! Provides:
//! - check: list the closure of a source file
//! - latest: newest modification time among a source file and its closure

pub mod check;
pub mod latest;
