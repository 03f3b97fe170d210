//! Human readable byte counts, memoized per invocation
//!

use std::collections::HashMap;

const SUFFIXES: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Formats byte counts as `<whole units><suffix>`, truncating instead of rounding.
///
/// Every distinct input is formatted once and cached for the lifetime of the formatter.
#[derive(Debug, Default)]
pub struct ByteFormatter {
    cache: HashMap<i64, String>,
}

impl ByteFormatter {
    pub fn new() -> ByteFormatter {
        ByteFormatter::default()
    }

    pub fn format(&mut self, bytes: i64) -> &str {
        self.cache
            .entry(bytes)
            .or_insert_with(|| describe(bytes))
            .as_str()
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

fn describe(bytes: i64) -> String {
    let max = SUFFIXES.len() - 1;
    let mut value = bytes;
    let mut i = 0;
    // Negative counts fail the first check and come out raw
    while value / 1024 >= 1 && i < max {
        value /= 1024;
        i += 1;
    }
    format!("{value}{}", SUFFIXES[i])
}
