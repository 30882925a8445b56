// SPDX-License-Identifier: MPL-2.0
//! File name filters for the image list.
//!
//! Filters are shell-style globs (`*.png`, `IMG_????.jpg`) compiled once into
//! anchored, case-insensitive regular expressions. The image list offers them
//! through a picker whose first entry, [`FilterChoice::All`], accepts a file
//! matching any pattern.
//!
//! # Example
//!
//! ```
//! use tree_lens::media::filter::{FilterChoice, NameFilters};
//!
//! let filters = NameFilters::new(["*.png", "*.jpg"]).unwrap();
//! assert!(filters.matches(&FilterChoice::All, "photo.JPG"));
//! assert!(!filters.matches(&FilterChoice::Pattern("*.png".into()), "photo.jpg"));
//! ```

use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// A single compiled glob.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: String,
    regex: Regex,
}

impl NameFilter {
    /// Compiles a glob pattern. `*` matches any run of characters, `?` a
    /// single character; everything else is literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::error::Error::Config) if the
    /// translated expression is rejected (e.g. exceeds the size limit).
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&glob_to_regex(pattern))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The glob as written in the configuration.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if `file_name` matches the whole pattern.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}

/// Entry of the filter picker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterChoice {
    /// Every configured pattern.
    #[default]
    All,
    /// One pattern, by its glob text.
    Pattern(String),
}

/// Ordered set of compiled filters.
#[derive(Debug, Clone, Default)]
pub struct NameFilters {
    filters: Vec<NameFilter>,
}

impl NameFilters {
    /// Compiles every pattern, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails on the first pattern that does not compile.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filters = patterns
            .into_iter()
            .map(|pattern| NameFilter::new(pattern.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { filters })
    }

    /// Picker entries: `All` followed by each pattern.
    #[must_use]
    pub fn choices(&self) -> Vec<FilterChoice> {
        std::iter::once(FilterChoice::All)
            .chain(
                self.filters
                    .iter()
                    .map(|filter| FilterChoice::Pattern(filter.pattern.clone())),
            )
            .collect()
    }

    /// Returns true if `file_name` passes the filter selected by `choice`.
    ///
    /// A choice naming a pattern that is not in the set matches nothing.
    #[must_use]
    pub fn matches(&self, choice: &FilterChoice, file_name: &str) -> bool {
        match choice {
            FilterChoice::All => self.filters.iter().any(|filter| filter.matches(file_name)),
            FilterChoice::Pattern(pattern) => self
                .filters
                .iter()
                .filter(|filter| filter.pattern == *pattern)
                .any(|filter| filter.matches(file_name)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let mut expression = String::with_capacity(pattern.len() + 8);
    expression.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => expression.push_str(".*"),
            '?' => expression.push('.'),
            other => expression.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    expression.push('$');
    expression
}
