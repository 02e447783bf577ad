//! Rule types: matcher/transform pairs and declarative template rules.

use regex::{Captures, Regex};

/// Function producing replacement text from one match's capture groups.
///
/// Optional groups that did not participate in the match are read as empty.
pub type Transform = fn(&Captures<'_>) -> String;

/// A primary rewrite rule: a pattern plus the transform applied to each match.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    transform: Transform,
}

impl Rule {
    /// Build a rule from a pattern literal.
    ///
    /// Panics if `pattern` does not compile. Rule patterns are fixed at build
    /// time, so a bad one is a programming error rather than an input error.
    pub fn new(name: &'static str, pattern: &str, transform: Transform) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("rule `{name}` has an invalid pattern: {e}"));
        Self {
            name,
            pattern,
            transform,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Run the transform for a single match.
    pub fn transform(&self, caps: &Captures<'_>) -> String {
        (self.transform)(caps)
    }
}

/// A secondary rewrite rule: a pattern plus a `${n}` replacement template.
#[derive(Debug, Clone)]
pub struct TemplateRule {
    name: &'static str,
    pattern: Regex,
    template: &'static str,
}

impl TemplateRule {
    /// Build a template rule. Panics on an invalid pattern, like [`Rule::new`].
    pub fn new(name: &'static str, pattern: &str, template: &'static str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("template rule `{name}` has an invalid pattern: {e}"));
        Self {
            name,
            pattern,
            template,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn template(&self) -> &'static str {
        self.template
    }
}

/// Text of capture group `i`, or `""` when the group did not participate.
pub(crate) fn group<'h>(caps: &Captures<'h>, i: usize) -> &'h str {
    caps.get(i).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_second(caps: &Captures<'_>) -> String {
        group(caps, 2).to_string()
    }

    #[test]
    fn test_rule_transform_reads_groups() {
        let rule = Rule::new("pair", r"(\w+)-(\w+)", echo_second);
        let caps = rule.pattern().captures("left-right").unwrap();
        assert_eq!(rule.name(), "pair");
        assert_eq!(rule.transform(&caps), "right");
    }

    #[test]
    fn test_missing_group_is_empty() {
        let re = Regex::new(r"a(b)?").unwrap();
        let caps = re.captures("a").unwrap();
        assert_eq!(group(&caps, 1), "");
    }

    #[test]
    #[should_panic(expected = "invalid pattern")]
    fn test_invalid_pattern_panics() {
        let _ = TemplateRule::new("broken", r"(unclosed", "");
    }
}
