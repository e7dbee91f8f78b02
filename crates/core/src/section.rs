//! Markdown section segmentation.
//!
//! A single left-to-right pass over the document's lines partitions it into
//! an ordered sequence of navigable sections keyed by heading structure.
//! Content before the first heading becomes an implicit "Introduction"
//! section, fenced code is never mistaken for structure, and every section
//! carries a word count for reading estimates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::frontmatter::extract_frontmatter;
use crate::slug::slugify;
use crate::text::count_words;

/// Deepest heading level that opens a new section.
///
/// `####` and deeper never start a section; they stay inside the enclosing
/// section as plain content.
pub const MAX_HEADING_DEPTH: u8 = 3;

/// Section id of the implicit lead section.
pub const INTRODUCTION_ID: &str = "introduction";

/// Section title of the implicit lead section.
pub const INTRODUCTION_TITLE: &str = "Introduction";

/// A contiguous, navigable span of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Slug derived from the title; [`INTRODUCTION_ID`] for the lead section.
    ///
    /// Unique per document only when titles are unique: repeated titles
    /// repeat their slug (see [`crate::slug::Slugger`]).
    pub id: String,
    /// Heading text without markers; [`INTRODUCTION_TITLE`] for the lead section.
    pub title: String,
    /// Raw markdown of the section, its heading line included, with every
    /// line newline-terminated and code fences preserved verbatim.
    pub content: String,
    /// Heading level that opened the section; 0 for the lead section.
    pub level: u8,
    /// Prose words in `content` after markdown syntax is stripped.
    pub word_count: usize,
}

/// Everything the reading surface needs from one parsed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Frontmatter mapping, when the document carries one.
    pub metadata: Option<Map<String, JsonValue>>,
}

// Exact-marker-count patterns, deepest first, so a shallow pattern can
// never shadow a deeper marker.
static HEADING_PATTERNS: Lazy<Vec<(u8, Regex)>> = Lazy::new(|| {
    (1..=MAX_HEADING_DEPTH)
        .rev()
        .map(|level| {
            let pattern = format!(r"^#{{{level}}}\s+(.+)$");
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Parses a full markdown document: frontmatter first, then sections.
///
/// The one-call entry point for the reading surface. Malformed frontmatter
/// is recovered per [`extract_frontmatter`]; the segmenter itself cannot
/// fail for any string input.
pub fn parse_markdown_into_sections(markdown: &str) -> ParseResult {
    let extraction = extract_frontmatter(markdown);
    let body = &markdown[extraction.body_start..];

    ParseResult {
        sections: parse_sections(body),
        metadata: extraction.metadata,
    }
}

/// Splits body markdown (frontmatter already removed) into sections.
pub fn parse_sections(body: &str) -> Vec<Section> {
    let state = body.split('\n').fold(ScanState::default(), scan_line);

    let mut sections = state.finish();
    for section in &mut sections {
        // One deliberate second pass: the count always reflects the final
        // accumulated content, however many lines were appended after the
        // section opened.
        section.word_count = count_words(&section.content);
    }
    sections
}

/// Accumulator threaded through the line scan.
#[derive(Default)]
struct ScanState {
    sections: Vec<Section>,
    current: Option<Section>,
    intro: String,
    in_code_block: bool,
}

impl ScanState {
    /// Appends a content line to the open section, or to the intro buffer
    /// when no heading has been seen yet.
    fn push_content_line(&mut self, line: &str) {
        let buffer = match self.current.as_mut() {
            Some(section) => &mut section.content,
            None => &mut self.intro,
        };
        buffer.push_str(line);
        buffer.push('\n');
    }

    fn open_section(&mut self, level: u8, title: String) {
        if let Some(done) = self.current.take() {
            self.sections.push(done);
        } else if !self.intro.trim().is_empty() {
            let intro = std::mem::take(&mut self.intro);
            self.sections.push(introduction_section(intro));
        }

        self.current = Some(Section {
            id: slugify(&title),
            content: format!("{} {}\n", "#".repeat(usize::from(level)), title),
            title,
            level,
            word_count: 0,
        });
    }

    fn finish(mut self) -> Vec<Section> {
        if let Some(done) = self.current.take() {
            self.sections.push(done);
        } else if !self.intro.trim().is_empty() {
            self.sections.push(introduction_section(self.intro));
        }
        self.sections
    }
}

fn scan_line(mut state: ScanState, line: &str) -> ScanState {
    // A fence line is always content, never a heading, and flips the fence
    // state even when the document leaves it unbalanced.
    if is_fence_line(line) {
        state.in_code_block = !state.in_code_block;
        state.push_content_line(line);
        return state;
    }

    if state.in_code_block {
        state.push_content_line(line);
        return state;
    }

    if let Some((level, title)) = match_heading(line) {
        state.open_section(level, title);
        return state;
    }

    state.push_content_line(line);
    state
}

fn is_fence_line(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

fn match_heading(line: &str) -> Option<(u8, String)> {
    for (level, pattern) in HEADING_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(line) {
            return Some((*level, captures[1].trim().to_string()));
        }
    }
    None
}

fn introduction_section(content: String) -> Section {
    Section {
        id: INTRODUCTION_ID.to_string(),
        title: INTRODUCTION_TITLE.to_string(),
        content,
        level: 0,
        word_count: 0,
    }
}
