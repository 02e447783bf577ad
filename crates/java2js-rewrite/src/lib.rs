//! Best-effort Java to JavaScript translation by ordered text rewriting.
//!
//! There is no lexer or syntax tree here. A conversion is a sequence of
//! regex find-and-replace passes over the raw source:
//!
//! ```text
//! Java text ─> primary rules ─> template rules ─> header ─> JavaScript text
//!              (registry.rs,     (registry.rs,
//!               transform.rs)     ${n} templates)
//! ```
//!
//! Each primary rule rewrites every match in the whole text before the next
//! rule runs, so later rules see earlier output and list order is priority.
//!
//! # Example
//!
//! ```
//! let js = java2js_rewrite::convert("System.out.println(\"hi\");");
//! assert!(js.contains("console.log(\"hi\");"));
//! ```
//!
//! # Note on Translation Fidelity
//!
//! This maps surface syntax for the constructs the rules name and nothing
//! more. Output for anything else (generics, lambdas, annotations, statements
//! split across lines) is whatever falls out of the rules, and need not be
//! valid JavaScript.

pub mod config;
pub mod engine;
pub mod example;
pub mod registry;
pub mod rule;
pub mod transform;

use std::sync::OnceLock;

pub use config::{ConfigError, ConverterConfig, RulesConfig};
pub use engine::{ConversionUnit, Converter, PROVENANCE_HEADER};
pub use example::EXAMPLE_JAVA;
pub use registry::{RuleSet, builtin_templates};
pub use rule::{Rule, TemplateRule, Transform};

static DEFAULT_CONVERTER: OnceLock<Converter> = OnceLock::new();

/// The shared converter with built-in rules, built on first use.
pub fn default_converter() -> &'static Converter {
    DEFAULT_CONVERTER.get_or_init(Converter::new)
}

/// Convert Java source text to JavaScript with the built-in rules.
pub fn convert(java: &str) -> String {
    default_converter().convert(java)
}
