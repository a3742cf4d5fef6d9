use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // Matches e.g. "## Adapter" or "### Builder ###"
    static ref HEADING: Regex = Regex::new(r"^(?P<hashes>#{1,6})\s+(?P<title>.*?)\s*#*\s*$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// First word of the fence's info string, empty when absent.
    pub language: String,
    pub body: String,
    /// 1-based line of the first body line.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub level: usize,
    pub title: String,
    /// 1-based line of the heading.
    pub line: usize,
    prose: Vec<String>,
    code_blocks: Vec<CodeBlock>,
}

impl Section {
    fn new(level: usize, title: &str, line: usize) -> Self {
        Self {
            level,
            title: title.to_string(),
            line,
            prose: Vec::new(),
            code_blocks: Vec::new(),
        }
    }

    /// Non-blank lines outside code fences.
    pub fn prose(&self) -> &[String] {
        &self.prose
    }

    pub fn code_blocks(&self) -> &[CodeBlock] {
        &self.code_blocks
    }

    pub fn has_prose(&self) -> bool {
        !self.prose.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Non-blank lines before the first heading.
    pub preamble: Vec<String>,
    /// Fenced blocks that open before the first heading.
    pub preamble_code: Vec<CodeBlock>,
    pub sections: Vec<Section>,
}

impl Document {
    fn push_code(&mut self, block: CodeBlock) {
        match self.sections.last_mut() {
            Some(section) => section.code_blocks.push(block),
            None => {
                debug!(line = block.line, "code block before the first heading");
                self.preamble_code.push(block);
            }
        }
    }

    /// First section whose title mentions `name`, ignoring case.
    pub fn find_section(&self, name: &str) -> Option<&Section> {
        let needle = name.to_lowercase();
        self.sections
            .iter()
            .find(|section| section.title.to_lowercase().contains(&needle))
    }
}

/// An open ``` or ~~~ fence.
struct Fence {
    marker: char,
    width: usize,
    language: String,
    start: usize,
    body: Vec<String>,
}

impl Fence {
    fn open(line: &str, line_no: usize) -> Option<Self> {
        let trimmed = line.trim_start();
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let width = trimmed.chars().take_while(|c| *c == marker).count();
        if width < 3 {
            return None;
        }
        let language = trimmed[width..]
            .split_whitespace()
            .next()
            .unwrap_or("")
            .trim_matches(|c| c == '{' || c == '}')
            .to_string();
        Some(Self {
            marker,
            width,
            language,
            start: line_no + 1,
            body: Vec::new(),
        })
    }

    fn closes(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.len() >= self.width && trimmed.chars().all(|c| c == self.marker)
    }

    fn finish(self) -> CodeBlock {
        CodeBlock {
            language: self.language,
            body: self.body.join("\n"),
            line: self.start,
        }
    }
}

/// Splits markdown into heading-delimited sections.
///
/// Headings inside fences are ignored. An unterminated fence runs to the end
/// of the document and is still recorded.
pub fn parse_document(source: &str) -> Document {
    let mut document = Document::default();
    let mut fence: Option<Fence> = None;

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(open) = fence.as_mut() {
            if open.closes(line) {
                if let Some(closed) = fence.take() {
                    document.push_code(closed.finish());
                }
            } else {
                open.body.push(line.to_string());
            }
            continue;
        }

        if let Some(opened) = Fence::open(line, line_no) {
            fence = Some(opened);
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            let level = caps["hashes"].len();
            document
                .sections
                .push(Section::new(level, &caps["title"], line_no));
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }
        match document.sections.last_mut() {
            Some(section) => section.prose.push(line.trim().to_string()),
            None => document.preamble.push(line.trim().to_string()),
        }
    }

    if let Some(open) = fence {
        document.push_code(open.finish());
    }

    document
}
