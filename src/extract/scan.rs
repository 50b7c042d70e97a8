//! Boundary-aware matching over a firmware buffer.

use std::collections::HashSet;

use regex::bytes::{Captures, Regex};
use tracing::trace;

use crate::config::ExtractorConfig;
use crate::traits::ExtractError;

/// A firmware image together with the settings extractors read it with.
#[derive(Debug, Clone, Copy)]
pub struct Scan<'a> {
    data: &'a [u8],
    config: &'a ExtractorConfig,
}

impl<'a> Scan<'a> {
    pub fn new(data: &'a [u8], config: &'a ExtractorConfig) -> Self {
        Self { data, config }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn config(&self) -> &'a ExtractorConfig {
        self.config
    }

    pub fn contains(&self, re: &Regex) -> bool {
        re.is_match(self.data)
    }

    /// First match anywhere, boundaries unchecked.
    pub fn first(&self, re: &Regex) -> Option<Captures<'a>> {
        re.captures(self.data)
    }

    /// Every match not touching another alphanumeric byte, in file order.
    pub fn isolated(&self, re: &Regex) -> Vec<Captures<'a>> {
        isolated_captures(re, self.data)
    }

    /// True when `value` looks like a placeholder such as `22222222FU`.
    pub fn is_dummy(&self, value: &str) -> bool {
        is_dummy(
            value,
            self.config.dummy_prefix_len,
            self.config.dummy_min_distinct,
        )
    }
}

/// Collects the matches of `re` in `haystack` whose whole match is neither
/// preceded nor followed by an ASCII alphanumeric byte.
///
/// A rejected match does not hide a later one: the search resumes one byte
/// after the rejected match's start.
pub fn isolated_captures<'h>(re: &Regex, haystack: &'h [u8]) -> Vec<Captures<'h>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos <= haystack.len() {
        let Some(caps) = re.captures_at(haystack, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if whole.start() == whole.end() {
            pos = whole.end() + 1;
            continue;
        }

        let start = whole.start();
        let accepted = if is_isolated(haystack, start, whole.end()) {
            Some(caps)
        } else if start == 0 || !haystack[start - 1].is_ascii_alphanumeric() {
            shorter_isolated(re, haystack, start, whole.end())
        } else {
            None
        };

        match accepted {
            Some(caps) => {
                pos = match_end(&caps).max(start + 1);
                found.push(caps);
            }
            None => pos = start + 1,
        }
    }

    found
}

/// Retries `re` at `start` on ever shorter prefixes of `haystack`, so an
/// optional tail that runs into an alphanumeric byte does not hide the
/// shorter match it extends.
fn shorter_isolated<'h>(
    re: &Regex,
    haystack: &'h [u8],
    start: usize,
    end: usize,
) -> Option<Captures<'h>> {
    let mut limit = end;
    while limit > start + 1 {
        limit -= 1;
        let caps = re.captures_at(&haystack[..limit], start)?;
        let whole = caps.get(0)?;
        if whole.start() != start || whole.end() == start {
            return None;
        }
        if is_isolated(haystack, start, whole.end()) {
            return Some(caps);
        }
        limit = whole.end();
    }
    None
}

fn match_end(caps: &Captures<'_>) -> usize {
    caps.get(0).map(|m| m.end()).unwrap_or(0)
}

fn is_isolated(haystack: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !haystack[start - 1].is_ascii_alphanumeric();
    let after_ok = end >= haystack.len() || !haystack[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

/// Decodes a matched span, refusing anything outside 7-bit ASCII.
pub fn decode_ascii(bytes: &[u8], offset: usize) -> Result<String, ExtractError> {
    if !bytes.is_ascii() {
        return Err(ExtractError::NonAscii { offset });
    }
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Text of capture group `index`, or `None` when the group did not
/// participate or is not ASCII.
pub fn group_text(caps: &Captures<'_>, index: usize) -> Option<String> {
    let m = caps.get(index)?;
    match decode_ascii(m.as_bytes(), m.start()) {
        Ok(text) => Some(text),
        Err(e) => {
            trace!(error = %e, "Discarding candidate");
            None
        }
    }
}

/// Start offset of the whole match.
pub fn match_offset(caps: &Captures<'_>) -> usize {
    caps.get(0).map(|m| m.start()).unwrap_or(0)
}

/// A candidate is a placeholder when its first `prefix_len` characters hold
/// fewer than `min_distinct` distinct characters.
pub fn is_dummy(value: &str, prefix_len: usize, min_distinct: usize) -> bool {
    let distinct: HashSet<char> = value.chars().take(prefix_len).collect();
    distinct.len() < min_distinct
}
