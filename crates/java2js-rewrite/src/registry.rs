//! The built-in rule tables.
//!
//! Primary rules run first, each one rewriting every match in the text before
//! the next starts, so list order is priority. Template rules run afterwards
//! over the primary output, also in list order.

use crate::rule::{Rule, TemplateRule};
use crate::transform;

/// Primitive types (plus `String`) recognized in typed local declarations.
const LOCAL_TYPES: &str = r"int|boolean|String|double|float|long|char|byte|short";

/// Primitive types (plus `String`) recognized in bare and field declarations.
const FIELD_TYPES: &str = r"int|boolean|String|double|float|long|char";

/// Ordered, read-only set of primary rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The canonical Java to JavaScript rules in application order.
    pub fn builtin() -> Self {
        Self::new(builtin_rules())
    }

    /// Rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Look a rule up by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// A new set without the named rules. Remaining rules keep their order.
    pub fn without(&self, names: &[&str]) -> Self {
        Self::new(
            self.rules
                .iter()
                .filter(|r| !names.contains(&r.name()))
                .cloned()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "class_definition",
            r"public\s+class\s+(\w+)(?:\s+extends\s+(\w+))?(?:\s+implements\s+([\w,\s]+))?\s*\{",
            transform::class_definition,
        ),
        // Group 5 is the gap before `(`; groups 7/8 pick up a single-statement
        // getter/setter body so accessors can be passed through to the
        // accessor rules below.
        Rule::new(
            "method",
            r"(public|private|protected)?\s*(static)?\s*(\w+)\s+(\w+)(\s*)\((.*?)\)\s*\{(?:(\s*return\s+this\.\w+;\s*\})|(\s*this\.\w+\s*=\s*\w+;\s*\}))?",
            transform::method,
        ),
        Rule::new(
            "variable_declaration",
            &format!(r"({LOCAL_TYPES})\s+(\w+)\s*=\s*(.*?);"),
            transform::variable_declaration,
        ),
        Rule::new(
            "for_loop",
            r"for\s*\(\s*(int\s+)?(\w+)\s*=\s*(.+?)\s*;\s*(.+?)\s*;\s*(.+?)\s*\)",
            transform::for_loop,
        ),
        Rule::new(
            "print",
            r"System\.out\.println\((.*?)\);",
            transform::print,
        ),
        Rule::new("import", r"import\s+[\w\.]+;", transform::import),
        Rule::new(
            "array_declaration",
            r"(\w+)\[\]\s+(\w+)\s*=\s*new\s+\w+\[(\d+)\];",
            transform::array_declaration,
        ),
        Rule::new(
            "arraylist",
            r"ArrayList<(\w+)>\s+(\w+)\s*=\s*new\s+ArrayList<\w*>\(\);",
            transform::arraylist,
        ),
        Rule::new(
            "main_method",
            r"public\s+static\s+void\s+main\s*\(\s*String\s*\[\]\s*\w+\s*\)",
            transform::main_method,
        ),
        Rule::new(
            "getter",
            r"public\s+(\w+)\s+get(\w+)\(\)\s*\{\s*return\s+this\.(\w+);\s*\}",
            transform::getter,
        ),
        Rule::new(
            "setter",
            r"public\s+void\s+set(\w+)\((\w+)\s+(\w+)\)\s*\{\s*this\.(\w+)\s*=\s*\w+;\s*\}",
            transform::setter,
        ),
        Rule::new("typecast", r"\(\s*(\w+)\s*\)\s*(\w+)", transform::typecast),
        Rule::new(
            "interface",
            r"public\s+interface\s+(\w+)\s*\{",
            transform::interface,
        ),
    ]
}

/// The secondary substitutions in application order.
///
/// Field erasure runs before bare declaration erasure; the other way round
/// the bare rule would claim `private int x;` as `private let x;`.
pub fn builtin_templates() -> Vec<TemplateRule> {
    vec![
        TemplateRule::new(
            "public_field",
            &format!(r"public\s+({FIELD_TYPES})\s+(\w+)\s*;"),
            "${2};",
        ),
        TemplateRule::new(
            "private_field",
            &format!(r"private\s+({FIELD_TYPES})\s+(\w+)\s*;"),
            "#${2};",
        ),
        TemplateRule::new(
            "bare_declaration",
            &format!(r"({FIELD_TYPES})\s+(\w+)\s*;"),
            "let ${2};",
        ),
        TemplateRule::new(
            "void_method",
            r"public\s+void\s+(\w+)\s*\((.*?)\)",
            "function ${1}(${2})",
        ),
        TemplateRule::new("array_length", r"(\w+)\.length", "${1}.length"),
        TemplateRule::new("this_member", r"this\.(\w+)", "this.${1}"),
        TemplateRule::new(
            "constructor",
            r"public\s+(\w+)\s*\((.*?)\)\s*\{",
            "constructor(${2}) {",
        ),
        TemplateRule::new(
            "package",
            r"package\s+[\w\.]+;",
            "// Package information removed",
        ),
        TemplateRule::new("new_expression", r"\bnew\s+(\w+)\s*\((.*?)\)", "new ${1}(${2})"),
        TemplateRule::new("try", r"try\s*\{", "try {"),
        TemplateRule::new(
            "catch",
            r"catch\s*\(\s*(\w+)\s+(\w+)\s*\)\s*\{",
            "catch(error) {",
        ),
        TemplateRule::new("finally", r"finally\s*\{", "finally {"),
        TemplateRule::new("parse_int", r"Integer\.parseInt\((.*?)\)", "parseInt(${1})"),
        TemplateRule::new(
            "parse_double",
            r"Double\.parseDouble\((.*?)\)",
            "parseFloat(${1})",
        ),
        TemplateRule::new("parse_float", r"Float\.parseFloat\((.*?)\)", "parseFloat(${1})"),
        TemplateRule::new(
            "parse_boolean",
            r"Boolean\.parseBoolean\((.*?)\)",
            "Boolean(${1})",
        ),
        TemplateRule::new("equals", r"\.equals\((.*?)\)", " === ${1}"),
        TemplateRule::new(
            "equals_ignore_case",
            r"\.equalsIgnoreCase\((.*?)\)",
            ".toLowerCase() === ${1}.toLowerCase()",
        ),
        TemplateRule::new("char_at", r"\.charAt\((.*?)\)", ".charAt(${1})"),
        TemplateRule::new("substring", r"\.substring\((.*?)\)", ".substring(${1})"),
        TemplateRule::new("final", r"\bfinal\s+", ""),
        TemplateRule::new("static_block", r"static\s*\{", "static {"),
    ]
}
