use crate::caps::{CapStyle, capitalize};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// An owning, chainable wrapper around a text value
///
/// Each transform consumes the pipeline, replaces the owned value with a
/// newly derived one, and hands the pipeline back for further chaining. The
/// terminal [as_str](TextPipeline::as_str) reads the current value without
/// consuming anything, so a pipeline can keep going after being inspected.
///
/// Transforms never fail: the empty string is a fixed point of
/// [trim](TextPipeline::trim), [remove_spaces](TextPipeline::remove_spaces),
/// and [reverse](TextPipeline::reverse). The chain evaluates strictly in
/// call order.
///
/// ```
/// use vesper_text::TextPipeline;
///
/// let result = TextPipeline::new("  hello world  ")
///     .trim()
///     .capitalize()
///     .remove_spaces()
///     .prepend("Welcome_")
///     .append("_2024");
///
/// assert_eq!(result.as_str(), "Welcome_Helloworld_2024");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextPipeline {
    value: String,
}

impl TextPipeline {
    /// Makes a new pipeline owning the given initial value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Removes leading and trailing whitespace
    #[must_use]
    pub fn trim(mut self) -> Self {
        self.value = self.value.trim().to_string();
        self
    }

    /// Uppercases the first grapheme and lowercases the remainder
    #[must_use]
    pub fn capitalize(self) -> Self {
        self.capitalize_as(CapStyle::First)
    }

    /// Capitalizes in the given [CapStyle]
    #[must_use]
    pub fn capitalize_as(mut self, style: CapStyle) -> Self {
        self.value = capitalize(&self.value, style);
        self
    }

    /// Reverses the grapheme sequence
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.value = self.value.graphemes(true).rev().collect();
        self
    }

    /// Deletes every whitespace run
    #[must_use]
    pub fn remove_spaces(mut self) -> Self {
        self.value = WHITESPACE.replace_all(&self.value, "").into_owned();
        self
    }

    /// Prepends the given prefix
    #[must_use]
    pub fn prepend(mut self, prefix: &str) -> Self {
        self.value.insert_str(0, prefix);
        self
    }

    /// Appends the given suffix
    #[must_use]
    pub fn append(mut self, suffix: &str) -> Self {
        self.value.push_str(suffix);
        self
    }

    /// Returns the current value without consuming the pipeline
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the pipeline, returning the owned value
    pub fn into_string(self) -> String {
        self.value
    }
}

impl From<&str> for TextPipeline {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TextPipeline {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for TextPipeline {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TextPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
