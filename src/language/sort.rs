//! Ordering of language options for display in a selection list.
//!
//! Options are ordered by a key derived from the first character of their
//! display name. Latin-1 characters compare case-insensitively, Han
//! ideographs compare by their pinyin reading, and everything else (kana,
//! hangul, ...) compares by code point. Keys are compared as plain strings,
//! so the relative order of keys from different scripts follows code-point
//! order.

use pinyin::ToPinyin;

use super::option::LanguageOption;

/// Sort key for a display name.
pub fn sort_key(display_name: &str) -> String {
    let Some(c) = display_name.chars().next() else {
        return String::new();
    };

    if u32::from(c) <= 0xFF {
        return c.to_lowercase().collect();
    }

    if is_han(c) {
        if let Some(reading) = c.to_pinyin() {
            return reading.plain().to_lowercase();
        }
    }

    c.to_string()
}

fn is_han(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Stable sort of `options` by [`sort_key`] of their display names.
pub fn sort_options(options: &[LanguageOption]) -> Vec<LanguageOption> {
    let mut sorted = options.to_vec();
    sorted.sort_by_cached_key(|o| sort_key(o.display_name));
    sorted
}
