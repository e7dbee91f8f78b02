use once_cell::sync::Lazy;
use regex::Regex;

// Markdown constructs removed before counting words. Code is removed first
// so fenced or inline code never leaks into the prose count.
static FENCED_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").unwrap());
static HEADING_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static STRONG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").unwrap());
static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*|_([^_]+)_").unwrap());
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Strips markdown syntax from `text`, leaving plain prose.
///
/// Fenced code blocks and inline code spans are removed outright; heading
/// markers, link targets, image literals, emphasis markers, and HTML tags
/// are removed while their visible text (link labels, emphasized words)
/// is kept. Images must be removed before links: an image literal embeds
/// the link syntax.
pub fn strip_markdown(text: &str) -> String {
    let text = FENCED_CODE_RE.replace_all(text, "");
    let text = INLINE_CODE_RE.replace_all(&text, "");
    let text = HEADING_MARKER_RE.replace_all(&text, "");
    let text = IMAGE_RE.replace_all(&text, "");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = STRONG_RE.replace_all(&text, "$1$2");
    let text = EMPHASIS_RE.replace_all(&text, "$1$2");
    HTML_TAG_RE.replace_all(&text, "").into_owned()
}

/// Counts prose words in `text` after markdown syntax is stripped.
///
/// A word is a maximal run of non-whitespace characters. Empty input
/// yields 0.
pub fn count_words(text: &str) -> usize {
    strip_markdown(text).split_whitespace().count()
}
