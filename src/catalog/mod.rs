//! Checks the catalog document: every pattern section pairs prose with one
//! self-contained code sample.

mod config;
mod document;
mod report;
mod types;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::CatalogError;

pub use config::{CatalogConfig, DEFAULT_DOCUMENT};
pub use document::{parse_document, CodeBlock, Document, Section};
pub use report::{Finding, FindingKind, Report};
pub use types::{defined_types, referenced_types, undefined_types, PRELUDE_TYPES};

pub fn check_document(document: &Document, config: &CatalogConfig) -> Report {
    let known: BTreeSet<String> = PRELUDE_TYPES
        .iter()
        .map(|name| name.to_string())
        .chain(config.known_types.iter().cloned())
        .collect();

    let mut report = Report::default();
    for name in &config.required_sections {
        let Some(section) = document.find_section(name) else {
            report.push(name, None, FindingKind::MissingSection);
            continue;
        };
        report.sections_checked += 1;
        debug!(section = %section.title, line = section.line, "checking section");

        if !section.has_prose() {
            report.push(name, Some(section.line), FindingKind::MissingProse);
        }

        let blocks = section.code_blocks();
        let [block] = blocks else {
            report.push(
                name,
                Some(section.line),
                FindingKind::CodeSampleCount {
                    found: blocks.len(),
                },
            );
            continue;
        };

        if !block.language.eq_ignore_ascii_case(&config.language) {
            report.push(
                name,
                Some(block.line),
                FindingKind::WrongLanguage {
                    expected: config.language.clone(),
                    found: block.language.clone(),
                },
            );
            continue;
        }

        for (type_name, offset) in undefined_types(&block.body, &known) {
            report.push(
                name,
                Some(block.line + offset),
                FindingKind::UndefinedType { name: type_name },
            );
        }
    }
    report
}

pub fn check_source(source: &str, config: &CatalogConfig) -> Report {
    check_document(&parse_document(source), config)
}

pub fn check_file(path: &Path, config: &CatalogConfig) -> Result<Report, CatalogError> {
    let source = fs::read_to_string(path).map_err(|err| CatalogError::io(path, err))?;
    let report = check_source(&source, config);
    info!(
        document = %path.display(),
        sections = report.sections_checked,
        findings = report.findings.len(),
        "catalog checked"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = include_str!("../../docs/design-patterns.md");

    #[test]
    fn test_shipped_catalog_is_clean() {
        let report = check_source(CATALOG, &CatalogConfig::default());
        assert!(report.is_clean(), "{:#?}", report.findings);
        assert_eq!(report.sections_checked, 3);
    }

    #[test]
    fn test_missing_section() {
        let report = check_source("## Adapter\n\nText.\n\n```rust\nfn main() {}\n```\n", &CatalogConfig::default());
        let missing: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.kind == FindingKind::MissingSection)
            .map(|f| f.section.as_str())
            .collect();
        assert_eq!(missing, vec!["Bridge", "Builder"]);
        assert_eq!(report.sections_checked, 1);
    }

    #[test]
    fn test_two_samples_and_no_prose() {
        let config = CatalogConfig {
            required_sections: vec!["Bridge".to_string()],
            ..CatalogConfig::default()
        };
        let source = "## Bridge\n```rust\nfn a() {}\n```\n```rust\nfn b() {}\n```\n";
        let report = check_source(source, &config);
        let kinds: Vec<_> = report.findings.iter().map(|f| f.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![FindingKind::MissingProse, FindingKind::CodeSampleCount { found: 2 }]
        );
    }

    #[test]
    fn test_wrong_language() {
        let config = CatalogConfig {
            required_sections: vec!["Builder".to_string()],
            ..CatalogConfig::default()
        };
        let report = check_source("## Builder\nProse.\n```java\nclass Card {}\n```\n", &config);
        assert_eq!(
            report.findings[0].kind,
            FindingKind::WrongLanguage {
                expected: "rust".to_string(),
                found: "java".to_string()
            }
        );
        assert_eq!(report.findings[0].line, Some(4));
    }

    #[test]
    fn test_language_tag_ignores_case() {
        let config = CatalogConfig {
            required_sections: vec!["Builder".to_string()],
            ..CatalogConfig::default()
        };
        let report = check_source("## Builder\nProse.\n```Rust\nstruct Card;\n```\n", &config);
        assert!(report.is_clean(), "{:#?}", report.findings);
    }

    #[test]
    fn test_undefined_type_line_and_known_types() {
        let source = "## Adapter\nProse.\n```rust\nstruct Audio;\nimpl MediaPlayer for Audio {}\n```\n";
        let mut config = CatalogConfig {
            required_sections: vec!["Adapter".to_string()],
            ..CatalogConfig::default()
        };
        let report = check_source(source, &config);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].line, Some(5));
        assert_eq!(
            report.findings[0].kind,
            FindingKind::UndefinedType {
                name: "MediaPlayer".to_string()
            }
        );

        config.known_types.push("MediaPlayer".to_string());
        assert!(check_source(source, &config).is_clean());
    }

    #[test]
    fn test_check_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let report = check_file(file.path(), &CatalogConfig::default()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_check_missing_file() {
        let result = check_file(Path::new("no/such/doc.md"), &CatalogConfig::default());
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
