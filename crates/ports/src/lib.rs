//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: resolving files, stdin and inline text into readable content
//! - [`sample`]: writing generated sample files
//!
//! These ports keep the use case layer independent of the filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sample;
pub mod source;
