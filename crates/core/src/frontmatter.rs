use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// Result returned after extracting frontmatter from a markdown document.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterExtraction {
    /// Parsed frontmatter mapping, when a valid non-empty block was found.
    pub metadata: Option<Map<String, JsonValue>>,
    /// Byte offset inside the original document where body content begins.
    pub body_start: usize,
}

impl FrontmatterExtraction {
    fn body_only() -> Self {
        Self {
            metadata: None,
            body_start: 0,
        }
    }
}

/// Errors emitted while parsing a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening `---` fence with no closing fence.
    #[error("unterminated frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML inside the block failed to parse.
    #[error("frontmatter parse error: {0}")]
    Parse(String),
}

/// Extracts YAML frontmatter, recovering from malformed blocks.
///
/// A block is recognized only when the document's first line (after an
/// optional BOM) is exactly `---` and a later line closes it. An
/// unterminated block or invalid YAML is logged and the whole document is
/// kept as body content: a reader must never lose a document to a broken
/// metadata block.
pub fn extract_frontmatter(input: &str) -> FrontmatterExtraction {
    match try_extract_frontmatter(input) {
        Ok(extraction) => extraction,
        Err(err) => {
            log::warn!("ignoring malformed frontmatter: {err}");
            FrontmatterExtraction::body_only()
        }
    }
}

/// Strict variant of [`extract_frontmatter`].
///
/// Surfaces [`FrontmatterError`] instead of recovering. A document without
/// an opening fence is not an error: it extracts to `metadata: None` with
/// the body starting at offset 0.
pub fn try_extract_frontmatter(input: &str) -> Result<FrontmatterExtraction, FrontmatterError> {
    match find_yaml_block(input)? {
        Some((block, body_start)) => Ok(FrontmatterExtraction {
            metadata: parse_yaml_block(&block)?,
            body_start,
        }),
        None => Ok(FrontmatterExtraction::body_only()),
    }
}

/// Empty mappings and non-mapping roots yield no metadata.
fn parse_yaml_block(block: &str) -> Result<Option<Map<String, JsonValue>>, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(None);
    }

    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    let json_value = serde_json::to_value(yaml_value)
        .map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match json_value {
        JsonValue::Object(map) if !map.is_empty() => Ok(Some(map)),
        _ => Ok(None),
    }
}

fn find_yaml_block(input: &str) -> Result<Option<(String, usize)>, FrontmatterError> {
    let (without_bom, bom_len) = strip_bom(input);

    // The opening fence must be the very first line.
    let Some((first_line, block_start)) = next_line(without_bom, 0) else {
        return Ok(None);
    };
    if !is_yaml_fence(first_line) {
        return Ok(None);
    }

    let mut scan_cursor = block_start;
    loop {
        match next_line(without_bom, scan_cursor) {
            Some((line, next_cursor)) => {
                if is_yaml_fence(line) {
                    let raw_block = &without_bom[block_start..scan_cursor];
                    let trimmed = raw_block.trim_end_matches(['\r', '\n']);
                    return Ok(Some((trimmed.to_string(), bom_len + next_cursor)));
                }
                scan_cursor = next_cursor;
            }
            None => return Err(FrontmatterError::Unterminated),
        }
    }
}

fn strip_bom(input: &str) -> (&str, usize) {
    if let Some(stripped) = input.strip_prefix('\u{feff}') {
        (stripped, '\u{feff}'.len_utf8())
    } else {
        (input, 0)
    }
}

fn next_line(input: &str, start: usize) -> Option<(&str, usize)> {
    if start >= input.len() {
        return None;
    }

    let bytes = &input.as_bytes()[start..];
    if let Some(pos) = bytes.iter().position(|b| *b == b'\n') {
        let line_end = start + pos;
        Some((&input[start..line_end], line_end + 1))
    } else {
        Some((&input[start..], input.len()))
    }
}

fn is_yaml_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}
