//! File driver around the `java2js-rewrite` engine.

pub mod commands;
pub mod logging;
