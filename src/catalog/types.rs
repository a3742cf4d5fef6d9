//! Type-name scanning for code samples.
//!
//! A regex scan, not a parser: good enough to tell whether a short sample
//! names a type it never defines or imports.

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref NOISE: Regex =
        Regex::new(r#"(?s)//[^\n]*|/\*.*?\*/|"(?:[^"\\]|\\.)*"|#!?\[[^\]]*\]"#).unwrap();
    static ref USE_ITEM: Regex = Regex::new(r"\buse\s+[^;]+;").unwrap();
    static ref DEFINITION: Regex =
        Regex::new(r"\b(?:struct|enum|trait|type|union)\s+([A-Z][A-Za-z0-9_]*)").unwrap();
    static ref ENUM_OPEN: Regex = Regex::new(r"\benum\s+[A-Z][A-Za-z0-9_]*[^{;]*\{").unwrap();
    static ref GENERICS_OPEN: Regex = Regex::new(
        r"\b(?:impl|(?:struct|enum|trait|fn|type|union)\s+[A-Za-z_][A-Za-z0-9_]*)\s*<"
    )
    .unwrap();
    static ref IDENT: Regex = Regex::new(r"(::)?\b([A-Z][A-Za-z0-9_]*)\b").unwrap();
    static ref CAMEL_IN_USE: Regex = Regex::new(r"\b([A-Z][A-Za-z0-9_]*)\b").unwrap();
}

/// Names every Rust sample may use without defining them.
pub const PRELUDE_TYPES: &[&str] = &[
    "Self", "String", "Vec", "Box", "Option", "Some", "None", "Result", "Ok", "Err",
    "Clone", "Copy", "Debug", "Default", "PartialEq", "Eq", "PartialOrd", "Ord", "Hash",
    "Send", "Sync", "Sized", "Drop", "Fn", "FnMut", "FnOnce", "From", "Into", "AsRef",
    "AsMut", "Iterator", "IntoIterator", "ToString", "ToOwned", "TryFrom", "TryInto",
    "Extend", "DoubleEndedIterator", "ExactSizeIterator",
];

/// Blanks comments, string literals and attributes, keeping every newline so
/// byte offsets still map to the same lines.
fn strip_noise(code: &str) -> String {
    NOISE
        .replace_all(code, |caps: &Captures| {
            caps[0]
                .chars()
                .map(|c| if c == '\n' { '\n' } else { ' ' })
                .collect::<String>()
        })
        .into_owned()
}

fn has_lowercase(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_lowercase())
}

/// Leading UpperCamelCase identifier of an enum variant or generic parameter.
fn item_head(item: &str) -> Option<String> {
    let item = item.trim_start();
    let item = item.strip_prefix("const ").unwrap_or(item).trim_start();
    let name: String = item
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    name.starts_with(|c: char| c.is_ascii_uppercase()).then_some(name)
}

/// Heads of the comma-separated items of a bracketed list. `start` points just
/// past the opening bracket; the scan stops at the matching close. Anything
/// nested deeper (struct-like variant fields, tuple fields, bounds) is skipped.
fn list_heads(code: &str, start: usize) -> Vec<String> {
    let mut heads = Vec::new();
    let mut depth = 0usize;
    let mut item = String::new();
    let mut prev = ' ';

    for c in code[start..].chars() {
        match c {
            '>' if prev == '-' => {}
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            ',' if depth == 0 => {
                heads.extend(item_head(&item));
                item.clear();
            }
            _ if depth == 0 => item.push(c),
            _ => {}
        }
        prev = c;
    }
    heads.extend(item_head(&item));
    heads
}

/// Names a sample introduces itself: items, enum variants, generic
/// parameters, imports.
pub fn defined_types(code: &str) -> BTreeSet<String> {
    let code = strip_noise(code);
    let mut names: BTreeSet<String> = DEFINITION
        .captures_iter(&code)
        .map(|caps| caps[1].to_string())
        .collect();

    for open in ENUM_OPEN.find_iter(&code) {
        names.extend(list_heads(&code, open.end()));
    }

    for open in GENERICS_OPEN.find_iter(&code) {
        names.extend(list_heads(&code, open.end()));
    }

    for item in USE_ITEM.find_iter(&code) {
        names.extend(CAMEL_IN_USE.captures_iter(item.as_str()).map(|caps| caps[1].to_string()));
    }
    names
}

/// UpperCamelCase names a sample refers to, each with the 0-based line of
/// its first use. Path tails (`Kind::Variant`), `use` items, single-letter
/// generic parameters and SCREAMING_CASE constants are skipped.
pub fn referenced_types(code: &str) -> BTreeMap<String, usize> {
    let mut code = strip_noise(code);
    code = USE_ITEM
        .replace_all(&code, |caps: &Captures| {
            caps[0]
                .chars()
                .map(|c| if c == '\n' { '\n' } else { ' ' })
                .collect::<String>()
        })
        .into_owned();

    let mut found = BTreeMap::new();
    for caps in IDENT.captures_iter(&code) {
        if caps.get(1).is_some() {
            continue;
        }
        let name = &caps[2];
        if name.len() == 1 || !has_lowercase(name) {
            continue;
        }
        let offset = caps.get(2).map_or(0, |m| m.start());
        let line = code[..offset].matches('\n').count();
        found.entry(name.to_string()).or_insert(line);
    }
    found
}

/// Referenced names that are neither defined in the sample nor in `known`.
pub fn undefined_types(code: &str, known: &BTreeSet<String>) -> Vec<(String, usize)> {
    let defined = defined_types(code);
    let mut missing: Vec<(String, usize)> = referenced_types(code)
        .into_iter()
        .filter(|(name, _)| !defined.contains(name) && !known.contains(name))
        .collect();
    missing.sort_by_key(|(name, line)| (*line, name.clone()));
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> BTreeSet<String> {
        PRELUDE_TYPES.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_defined_items_and_variants() {
        let code = "struct Circle;\ntrait Shape {}\nenum Kind { Credit, Debit }\ntype Id = u32;";
        let defined = defined_types(code);
        for name in ["Circle", "Shape", "Kind", "Credit", "Debit", "Id"] {
            assert!(defined.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_imports_count_as_defined() {
        let defined = defined_types("use std::fmt::{self, Display};\nuse std::rc::Rc;");
        assert!(defined.contains("Display"));
        assert!(defined.contains("Rc"));
    }

    #[test]
    fn test_path_tails_are_not_references() {
        let refs = referenced_types("let k = Kind::Credit;\nlet f = Self::ANNUAL_FEE;");
        assert_eq!(refs.keys().collect::<Vec<_>>(), vec!["Kind", "Self"]);
    }

    #[test]
    fn test_strings_comments_and_attributes_are_ignored() {
        let code = "#[derive(Debug, Clone)]\n// Player is mentioned here\nfn f() { println!(\"Player\"); }";
        assert!(referenced_types(code).is_empty());
    }

    #[test]
    fn test_reference_lines() {
        let refs = referenced_types("fn main() {\n    let c = Circle::new(Box::new(RedCircle));\n}");
        assert_eq!(refs.get("Circle"), Some(&1));
        assert_eq!(refs.get("RedCircle"), Some(&1));
    }

    #[test]
    fn test_undefined_types_reported() {
        let code = "struct AudioPlayer;\nimpl MediaPlayer for AudioPlayer {}\n";
        let missing = undefined_types(code, &known());
        assert_eq!(missing, vec![("MediaPlayer".to_string(), 1)]);
    }

    #[test]
    fn test_generic_params_are_not_references() {
        let code = "struct Adapter<T> { inner: T }\nimpl<Player: Clone> Adapter<Player> {}";
        assert!(undefined_types(code, &known()).is_empty());
    }

    #[test]
    fn test_unbounded_generic_param_is_defined() {
        let code = "struct Wrapper<Inner> { inner: Inner }\nfn wrap<Item>(item: Item) -> Wrapper<Item> { Wrapper { inner: item } }";
        assert!(undefined_types(code, &known()).is_empty());
    }

    #[test]
    fn test_where_bounded_generic_param_is_defined() {
        let code = "trait Play {}\nstruct Adapter<Player> { p: Player }\nimpl<Player> Adapter<Player> where Player: Play {}";
        assert!(undefined_types(code, &known()).is_empty());
    }

    #[test]
    fn test_bounds_are_still_references() {
        let code = "struct Adapter<Player: Play, const N: usize> { p: [Player; N] }";
        let defined = defined_types(code);
        assert!(defined.contains("Player"));
        assert!(!defined.contains("Play"));
        assert_eq!(undefined_types(code, &known()), vec![("Play".to_string(), 0)]);
    }

    #[test]
    fn test_generic_list_with_fn_bound() {
        let defined = defined_types("fn run<Job: Fn() -> u32, Out>(job: Job) -> Out { todo!() }");
        assert!(defined.contains("Job"));
        assert!(defined.contains("Out"));
    }

    #[test]
    fn test_variants_after_struct_like_variant() {
        let code = "enum Shape { Circle { r: u32 }, Square }\nuse Shape::*;\nfn f(s: Shape) { match s { Circle { .. } => {}, Square => {} } }";
        assert!(undefined_types(code, &known()).is_empty());
    }

    #[test]
    fn test_tuple_variant_fields_are_not_variants() {
        let defined = defined_types("enum Msg { Move(u32, Point), Quit, Paint { ink: Ink } }");
        for name in ["Msg", "Move", "Quit", "Paint"] {
            assert!(defined.contains(name), "missing {name}");
        }
        assert!(!defined.contains("Point"));
        assert!(!defined.contains("Ink"));
    }

    #[test]
    fn test_self_consistent_sample() {
        let code = r#"
trait DrawApi { fn draw(&self) -> String; }
struct Red;
impl DrawApi for Red { fn draw(&self) -> String { "red".to_string() } }
fn main() { let api: Box<dyn DrawApi> = Box::new(Red); println!("{}", api.draw()); }
"#;
        assert!(undefined_types(code, &known()).is_empty());
    }
}
