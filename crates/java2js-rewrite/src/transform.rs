//! Transformer functions for the primary rules.
//!
//! Each function sees only the captures of its own rule's pattern and maps
//! them to JavaScript text. Group numbering follows the patterns in
//! [`crate::registry`].

use crate::rule::group;
use regex::Captures;

/// `public class Name [extends Parent] [implements ...] {`
///
/// Groups: 1 name, 2 parent, 3 interfaces (dropped).
pub fn class_definition(caps: &Captures<'_>) -> String {
    let mut out = format!("class {} ", group(caps, 1));
    let parent = group(caps, 2);
    if !parent.is_empty() {
        out.push_str("extends ");
        out.push_str(parent);
        out.push(' ');
    }
    out.push('{');
    out
}

/// Method header with typed parameters.
///
/// Groups: 1 access, 2 static, 3 return type, 4 name, 5 gap before `(`,
/// 6 params, 7 `return this.x; }` body, 8 `this.x = y; }` body.
///
/// Headers that belong to other rules come back unchanged: a public
/// constructor (the "return type" is `public`) and a public single-statement
/// accessor in exactly the shape the `getter`/`setter` rules take. A
/// captured body is otherwise re-emitted after the rewritten header.
pub fn method(caps: &Captures<'_>) -> String {
    if group(caps, 3) == "public" || is_accessor(caps) {
        return group(caps, 0).to_string();
    }

    let mut out = String::new();
    if caps.get(2).is_some() {
        out.push_str("static ");
    }
    out.push_str(group(caps, 4));
    out.push('(');
    out.push_str(&strip_param_types(group(caps, 6)));
    out.push_str(") {");
    out.push_str(group(caps, 7));
    out.push_str(group(caps, 8));
    out
}

/// Whether the match has exactly the shape the `getter` or `setter` rule expects.
fn is_accessor(caps: &Captures<'_>) -> bool {
    if group(caps, 1) != "public" || caps.get(2).is_some() || !group(caps, 5).is_empty() {
        return false;
    }
    let name = group(caps, 4);
    let params = group(caps, 6);
    if caps.get(7).is_some() {
        return name.len() > 3 && name.starts_with("get") && params.is_empty();
    }
    if caps.get(8).is_some() {
        return name.len() > 3
            && name.starts_with("set")
            && group(caps, 3) == "void"
            && is_single_typed_param(params);
    }
    false
}

/// `Type name` with nothing around it.
fn is_single_typed_param(params: &str) -> bool {
    let mut parts = params.split_whitespace();
    let (Some(ty), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let is_word = |s: &str| s.chars().all(|c| c.is_alphanumeric() || c == '_');
    params.starts_with(ty) && params.ends_with(name) && is_word(ty) && is_word(name)
}

/// Keep only the last whitespace-separated token of each parameter.
fn strip_param_types(params: &str) -> String {
    if params.trim().is_empty() {
        return String::new();
    }
    params
        .split(',')
        .map(|param| param.split_whitespace().last().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Type name = value;` for primitive and `String` types.
///
/// Groups: 1 type, 2 name, 3 initializer.
pub fn variable_declaration(caps: &Captures<'_>) -> String {
    format!("let {} = {};", group(caps, 2), group(caps, 3))
}

/// `for (int i = a; cond; step)`.
///
/// Groups: 1 `int ` when the loop declares its variable, 2 variable,
/// 3 initializer, 4 condition, 5 step.
pub fn for_loop(caps: &Captures<'_>) -> String {
    let decl = if caps.get(1).is_some() { "let " } else { "" };
    format!(
        "for ({decl}{} = {}; {}; {})",
        group(caps, 2),
        group(caps, 3),
        group(caps, 4),
        group(caps, 5)
    )
}

/// `System.out.println(expr);`
pub fn print(caps: &Captures<'_>) -> String {
    format!("console.log({});", group(caps, 1))
}

/// Comment out an import so the original statement stays recoverable.
pub fn import(caps: &Captures<'_>) -> String {
    format!("// {}", group(caps, 0))
}

/// `Type[] name = new Type[size];`
///
/// Groups: 1 element type, 2 name, 3 size.
pub fn array_declaration(caps: &Captures<'_>) -> String {
    format!("let {} = new Array({});", group(caps, 2), group(caps, 3))
}

/// `ArrayList<T> name = new ArrayList<>();`
///
/// Groups: 1 element type, 2 name.
pub fn arraylist(caps: &Captures<'_>) -> String {
    format!("let {} = [];", group(caps, 2))
}

pub fn main_method(_caps: &Captures<'_>) -> String {
    "function main()".to_string()
}

/// `public T getX() { return this.x; }`
///
/// Groups: 1 return type, 2 property suffix, 3 backing field.
pub fn getter(caps: &Captures<'_>) -> String {
    format!(
        "get {}() {{ return this.{}; }}",
        lower_first(group(caps, 2)),
        group(caps, 3)
    )
}

/// `public void setX(T x) { this.x = x; }`
///
/// Groups: 1 property suffix, 2 parameter type, 3 parameter, 4 backing field.
pub fn setter(caps: &Captures<'_>) -> String {
    let param = group(caps, 3);
    format!(
        "set {}({param}) {{ this.{} = {param}; }}",
        lower_first(group(caps, 1)),
        group(caps, 4)
    )
}

/// `(Type) value` -> `value`.
///
/// Also fires on any parenthesized single identifier followed by another
/// identifier, e.g. `if (ready) go();` loses its condition.
pub fn typecast(caps: &Captures<'_>) -> String {
    group(caps, 2).to_string()
}

pub fn interface(caps: &Captures<'_>) -> String {
    let name = group(caps, 1);
    format!("// Interface {name} converted to class\nclass {name} {{")
}

/// Lower-case the first character: `Name` -> `name`.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn apply(pattern: &str, f: fn(&Captures<'_>) -> String, input: &str) -> String {
        let re = Regex::new(pattern).unwrap();
        re.replace_all(input, |caps: &Captures<'_>| f(caps)).into_owned()
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Name"), "name");
        assert_eq!(lower_first("URL"), "uRL");
        assert_eq!(lower_first("x"), "x");
        assert_eq!(lower_first(""), "");
        assert_eq!(lower_first("Ärger"), "ärger");
    }

    #[test]
    fn test_strip_param_types() {
        assert_eq!(strip_param_types(""), "");
        assert_eq!(strip_param_types("   "), "");
        assert_eq!(strip_param_types("int a"), "a");
        assert_eq!(strip_param_types("String name, int age"), "name, age");
        assert_eq!(strip_param_types("x, final int y"), "x, y");
    }

    #[test]
    fn test_single_typed_param() {
        assert!(is_single_typed_param("String name"));
        assert!(is_single_typed_param("int\tcount"));
        assert!(!is_single_typed_param("name"));
        assert!(!is_single_typed_param(" int x"));
        assert!(!is_single_typed_param("int x, int y"));
        assert!(!is_single_typed_param("List<String> xs"));
    }

    #[test]
    fn test_class_without_parent() {
        let out = apply(
            r"public\s+class\s+(\w+)(?:\s+extends\s+(\w+))?(?:\s+implements\s+([\w,\s]+))?\s*\{",
            class_definition,
            "public class Foo implements A, B {",
        );
        assert_eq!(out, "class Foo {");
    }

    #[test]
    fn test_for_loop_keeps_declaration_keyword_only_when_typed() {
        let pattern = r"for\s*\(\s*(int\s+)?(\w+)\s*=\s*(.+?)\s*;\s*(.+?)\s*;\s*(.+?)\s*\)";
        assert_eq!(
            apply(pattern, for_loop, "for (int i = 0; i < n; i++)"),
            "for (let i = 0; i < n; i++)"
        );
        assert_eq!(
            apply(pattern, for_loop, "for(i = 1;i<n;i++)"),
            "for (i = 1; i<n; i++)"
        );
    }

    #[test]
    fn test_interface_emits_annotation_line() {
        let out = apply(r"public\s+interface\s+(\w+)\s*\{", interface, "public interface Shape {");
        assert_eq!(out, "// Interface Shape converted to class\nclass Shape {");
    }
}
