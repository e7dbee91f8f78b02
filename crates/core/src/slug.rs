use std::collections::HashMap;

/// Derives a URL-safe identifier from a heading title.
///
/// Lowercases the title, drops every character that is not a letter, digit,
/// underscore, whitespace, or hyphen, turns whitespace runs into single
/// hyphens, collapses hyphen runs, and trims hyphens from both ends.
/// Non-ASCII letters are kept.
///
/// Deterministic and collision-blind: two identical titles map to the same
/// slug, and the section segmenter does not disambiguate repeats. Use
/// [`Slugger`] when unique anchors are required.
///
/// # Examples
///
/// ```
/// use marklens_core::slugify;
///
/// assert_eq!(slugify("Hello, World!  Foo"), "hello-world-foo");
/// assert_eq!(slugify("  Getting -- Started  "), "getting-started");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        }
        // Everything else (punctuation, symbols) is dropped.
    }

    slug
}

/// Collision-counting slug generator.
///
/// [`slugify`] alone reproduces duplicate ids for duplicate titles; callers
/// that anchor DOM nodes per slug use this to suffix repeats with `-1`,
/// `-2`, and so on.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slug for `title`, suffixed with `-N` on repeats.
    ///
    /// A title that slugifies to nothing falls back to `section`.
    pub fn next_slug(&mut self, title: &str) -> String {
        let mut slug = slugify(title);
        if slug.is_empty() {
            slug.push_str("section");
        }

        let seen = self.counts.entry(slug.clone()).or_insert(0);
        if *seen > 0 {
            slug.push_str(&format!("-{seen}"));
        }
        *seen += 1;

        slug
    }

    /// Reserves a slug so later generated slugs cannot collide with it.
    pub fn reserve(&mut self, slug: &str) {
        *self.counts.entry(slug.to_string()).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn deterministic() {
        assert_eq!(slugify("Hello, World!  Foo"), slugify("Hello, World!  Foo"));
        assert_eq!(slugify("Hello, World!  Foo"), "hello-world-foo");
    }

    #[test]
    fn punctuation_dropped() {
        assert_eq!(slugify("Why Markdown?"), "why-markdown");
        assert_eq!(slugify("Setup & Teardown"), "setup-teardown");
    }

    #[test]
    fn underscores_kept() {
        assert_eq!(slugify("Using __dirname"), "using-__dirname");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(slugify("a---b"), "a-b");
        assert_eq!(slugify("a - - b"), "a-b");
    }

    #[test]
    fn leading_and_trailing_hyphens_trimmed() {
        assert_eq!(slugify("  -- padded -- "), "padded");
        assert_eq!(slugify("-start"), "start");
        assert_eq!(slugify("end-"), "end");
    }

    #[test]
    fn unicode_letters_preserved() {
        assert_eq!(slugify("読書 ガイド"), "読書-ガイド");
        assert_eq!(slugify("Héllo Wörld"), "héllo-wörld");
    }

    #[test]
    fn symbol_only_title_slugifies_to_nothing() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugger_deduplicates() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("Title"), "title");
        assert_eq!(slugger.next_slug("Title"), "title-1");
        assert_eq!(slugger.next_slug("Title"), "title-2");
    }

    #[test]
    fn slugger_reserve_prevents_collision() {
        let mut slugger = Slugger::new();
        slugger.reserve("introduction");
        assert_eq!(slugger.next_slug("Introduction"), "introduction-1");
    }

    #[test]
    fn slugger_falls_back_for_empty_slugs() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("!!!"), "section");
        assert_eq!(slugger.next_slug("???"), "section-1");
    }
}
