#![forbid(unsafe_code)]

//! autoedit demo library: CLI parsing, logging setup and the session loop
//! behind the `autoedit-demo` binary.

pub mod app;
pub mod cli;
pub mod logging;
