//! Includes module - user header discovery
//!
//! Provides:
//! - parse: extraction of include targets from source text
//! - search: include path resolution
//! - closure: transitive, cycle-safe user header closure

pub mod closure;
pub mod parse;
pub mod search;
