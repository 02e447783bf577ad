//! Command implementations for the java2js CLI.

pub mod convert;
