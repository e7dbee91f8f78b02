//! WebAssembly surface of the Marklens sectioning core.
//!
//! Exposes the core's pure functions to the browser application with
//! camelCase names and plain-object results. Every export is a thin
//! conversion layer: parsing and arithmetic live in `marklens-core`.

use marklens_core::DEFAULT_WORDS_PER_MINUTE;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

fn wpm_or_default(wpm: Option<u32>) -> u32 {
    wpm.unwrap_or(DEFAULT_WORDS_PER_MINUTE)
}

/// Parses a markdown document into ordered sections plus frontmatter
/// metadata.
///
/// Returns `{ sections: [{ id, title, content, level, wordCount }],
/// metadata: object | undefined }`. Never throws for malformed markdown or
/// frontmatter; the only error path is result serialization.
#[wasm_bindgen(js_name = parseMarkdownIntoSections)]
pub fn parse_markdown_into_sections(markdown: &str) -> Result<JsValue, JsError> {
    let result = marklens_core::parse_markdown_into_sections(markdown);
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Counts prose words in `text` after markdown syntax is stripped.
#[wasm_bindgen(js_name = countWords)]
pub fn count_words(text: &str) -> u32 {
    marklens_core::count_words(text) as u32
}

/// Derives a URL-safe anchor id from a heading title.
#[wasm_bindgen(js_name = slugify)]
pub fn slugify(title: &str) -> String {
    marklens_core::slugify(title)
}

/// Estimated reading time for `word_count` words, in milliseconds.
///
/// `wpm` defaults to 250 when omitted.
#[wasm_bindgen(js_name = estimateReadingTime)]
pub fn estimate_reading_time(word_count: u32, wpm: Option<u32>) -> f64 {
    marklens_core::estimate_reading_time(word_count as usize, wpm_or_default(wpm)) as f64
}

/// Reading progress after `time_spent_ms`, as a whole percentage 0..=100.
#[wasm_bindgen(js_name = estimateReadingProgress)]
pub fn estimate_reading_progress(word_count: u32, time_spent_ms: f64, wpm: Option<u32>) -> u32 {
    if time_spent_ms <= 0.0 {
        return 0;
    }
    u32::from(marklens_core::estimate_reading_progress(
        word_count as usize,
        time_spent_ms as u64,
        wpm_or_default(wpm),
    ))
}

/// Words covered after reading for `time_spent_ms`, floored.
#[wasm_bindgen(js_name = estimateWordsRead)]
pub fn estimate_words_read(time_spent_ms: f64, wpm: Option<u32>) -> u32 {
    if time_spent_ms <= 0.0 {
        return 0;
    }
    marklens_core::estimate_words_read(time_spent_ms as u64, wpm_or_default(wpm)) as u32
}
