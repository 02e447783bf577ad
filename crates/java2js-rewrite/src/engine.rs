//! The two-pass rewrite engine.

use crate::config::ConverterConfig;
use crate::registry::{RuleSet, builtin_templates};
use crate::rule::{Rule, TemplateRule};
use regex::Captures;
use std::borrow::Cow;

/// Comment line (plus a blank line) prepended to every conversion result.
pub const PROVENANCE_HEADER: &str = "// Automatically converted from Java to JavaScript\n\n";

/// The text buffer carried through a single conversion.
pub struct ConversionUnit {
    text: String,
}

impl ConversionUnit {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// Replace every non-overlapping match of `rule` in the current text.
    ///
    /// Returns whether the text changed.
    pub fn apply(&mut self, rule: &Rule) -> bool {
        let rewritten = rule
            .pattern()
            .replace_all(&self.text, |caps: &Captures<'_>| rule.transform(caps));
        self.store(owned(rewritten), rule.name())
    }

    /// Replace every non-overlapping match of `rule` by its expanded template.
    pub fn apply_template(&mut self, rule: &TemplateRule) -> bool {
        let rewritten = rule.pattern().replace_all(&self.text, rule.template());
        self.store(owned(rewritten), rule.name())
    }

    fn store(&mut self, rewritten: Option<String>, name: &str) -> bool {
        let Some(text) = rewritten else {
            return false;
        };
        let changed = text != self.text;
        if changed {
            tracing::trace!(rule = name, len = text.len(), "rule rewrote text");
        }
        self.text = text;
        changed
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Prepend the provenance header and hand back the final text.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(PROVENANCE_HEADER.len() + self.text.len());
        out.push_str(PROVENANCE_HEADER);
        out.push_str(&self.text);
        out
    }
}

/// `replace_all` borrows when nothing matched.
fn owned(rewritten: Cow<'_, str>) -> Option<String> {
    match rewritten {
        Cow::Borrowed(_) => None,
        Cow::Owned(text) => Some(text),
    }
}

/// Java to JavaScript converter: a primary rule set plus a template list.
///
/// Both are fixed at construction; `convert` takes `&self` and keeps no state
/// between calls, so one converter can be shared across threads.
#[derive(Debug, Clone)]
pub struct Converter {
    rules: RuleSet,
    templates: Vec<TemplateRule>,
}

impl Converter {
    /// Converter with the built-in rules.
    pub fn new() -> Self {
        Self::from_parts(RuleSet::builtin(), builtin_templates())
    }

    pub fn from_parts(rules: RuleSet, templates: Vec<TemplateRule>) -> Self {
        Self { rules, templates }
    }

    /// Converter with the built-in rules, minus whatever `config` turns off.
    pub fn with_config(config: &ConverterConfig) -> Self {
        let disabled: Vec<&str> = config.rules.disable.iter().map(String::as_str).collect();
        let rules = RuleSet::builtin().without(&disabled);
        let templates = if config.rules.templates {
            builtin_templates()
        } else {
            Vec::new()
        };
        Self::from_parts(rules, templates)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn templates(&self) -> &[TemplateRule] {
        &self.templates
    }

    /// Convert Java source text to JavaScript source text.
    ///
    /// Never fails: text the rules do not recognize passes through unchanged.
    pub fn convert(&self, java: &str) -> String {
        let mut unit = ConversionUnit::new(java);
        let primary = self.rules.iter().filter(|rule| unit.apply(rule)).count();
        let secondary = self
            .templates
            .iter()
            .filter(|rule| unit.apply_template(rule))
            .count();
        tracing::debug!(
            input_len = java.len(),
            output_len = unit.as_str().len(),
            primary,
            secondary,
            "converted"
        );
        unit.finish()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
