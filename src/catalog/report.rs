use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    MissingSection,
    MissingProse,
    CodeSampleCount { found: usize },
    WrongLanguage { expected: String, found: String },
    UndefinedType { name: String },
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingSection => write!(f, "section is missing"),
            Self::MissingProse => write!(f, "section has no prose"),
            Self::CodeSampleCount { found } => {
                write!(f, "expected exactly one code sample, found {}", found)
            }
            Self::WrongLanguage { expected, found } => {
                write!(f, "code sample is tagged '{}', expected '{}'", found, expected)
            }
            Self::UndefinedType { name } => {
                write!(f, "'{}' is used but not defined in the sample", name)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub section: String,
    /// 1-based document line, absent for missing sections.
    pub line: Option<usize>,
    #[serde(flatten)]
    pub kind: FindingKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub sections_checked: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub(crate) fn push(&mut self, section: &str, line: Option<usize>, kind: FindingKind) {
        self.findings.push(Finding {
            section: section.to_string(),
            line,
            kind,
        });
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self, document: &str) -> String {
        if self.is_clean() {
            return format!(
                "{} {} ({} sections)",
                "✓".green(),
                document,
                self.sections_checked
            );
        }

        let mut output = format!(
            "{}\n{}\n",
            format!("Catalog check failed: {}", document).bold().red(),
            "=".repeat(60)
        );
        for finding in &self.findings {
            let location = match finding.line {
                Some(line) => format!("{}:{}", document, line),
                None => document.to_string(),
            };
            output.push_str(&format!(
                "{} [{}] {}\n",
                location.dimmed(),
                finding.section.yellow(),
                finding.kind
            ));
        }
        output.push_str(&format!("\n{} finding(s)", self.findings.len()));
        output
    }
}
