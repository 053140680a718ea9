//! CLI command implementations for umireport.
//!
//! - [`extract`] - Parse a tree of UMI-tools extract logs and write the module's data
//!   files and report contribution
//! - [`parse`] - Parse a single log and print the result, for checking how a log is read

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod command;
pub mod common;
pub mod extract;
pub mod parse;
