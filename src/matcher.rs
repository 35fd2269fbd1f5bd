use log::warn;
use regex::{Regex, RegexBuilder};

use crate::Segment;

/// Caption lines of context included before and after a hit
pub const DEFAULT_CONTEXT: usize = 2;

/// Keywords compiled into case-insensitive patterns
pub struct KeywordSet {
    patterns: Vec<Regex>,
}

impl KeywordSet {
    /// Compile keywords for matching. In literal mode each keyword is
    /// escaped before compilation so pattern metacharacters match
    /// themselves; in regex mode it is compiled as written. A keyword
    /// that fails to compile is dropped with a warning rather than
    /// aborting the scan.
    pub fn compile(keywords: &[String], use_regex: bool) -> Self {
        let mut patterns = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let source = if use_regex {
                keyword.clone()
            } else {
                regex::escape(keyword)
            };
            match RegexBuilder::new(&source).case_insensitive(true).build() {
                Ok(re) => patterns.push(re),
                Err(e) => warn!("skipping unusable keyword pattern {keyword:?}: {e}"),
            }
        }
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if any keyword matches anywhere in the text
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

/// A contiguous run of segments around one matching segment. Always
/// contains the triggering segment, so never empty.
#[derive(Debug)]
pub struct MatchWindow<'a> {
    pub start_index: usize,
    pub segments: &'a [Segment],
}

impl MatchWindow<'_> {
    pub fn first(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn last(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// All window text, space-joined
    pub fn joined_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Scan a transcript for segments matching any keyword. Each matching
/// segment yields one window covering `context` segments on either side,
/// clamped to the transcript bounds. Windows come back in transcript
/// order and are never merged, so nearby hits overlap.
pub fn scan<'a>(segments: &'a [Segment], keywords: &KeywordSet, context: usize) -> Vec<MatchWindow<'a>> {
    let mut windows = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if !keywords.matches(&segment.text) {
            continue;
        }
        let start = i.saturating_sub(context);
        let end = (i + context + 1).min(segments.len());
        windows.push(MatchWindow {
            start_index: start,
            segments: &segments[start..end],
        });
    }
    windows
}
