use std::fmt;

use vesper_memory::Address;

use crate::Text;

/// A helper for rendering values as strings
///
/// Contained values need to be displayed differently:
/// - Strings are quoted when they're inside a container.
/// - Containers check the parent list to avoid recursing into themselves.
#[derive(Default)]
pub struct DisplayContext {
    result: String,
    parent_containers: Vec<Address>,
}

impl DisplayContext {
    /// Makes a display context with the given reserved capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            result: String::with_capacity(capacity),
            parent_containers: Vec::default(),
        }
    }

    /// Appends to the end of the string
    pub fn append<'a>(&mut self, s: impl Into<StringBuilderAppend<'a>>) {
        s.into().append(&mut self.result);
    }

    /// Returns the resulting string and consumes the context
    pub fn result(self) -> String {
        self.result
    }

    /// Returns true if the value that's being displayed is in a container
    pub fn is_contained(&self) -> bool {
        !self.parent_containers.is_empty()
    }

    /// Returns true if the given ID is present in the parent container list
    pub fn is_in_parents(&self, id: Address) -> bool {
        self.parent_containers
            .iter()
            .any(|parent_id| *parent_id == id)
    }

    /// Adds the given ID to the parents list
    ///
    /// Containers should call this before displaying their contained values.
    pub fn push_container(&mut self, id: Address) {
        self.parent_containers.push(id);
    }

    /// Pops the previously added parent ID
    ///
    /// Containers should call this after displaying their contained values.
    pub fn pop_container(&mut self) {
        self.parent_containers.pop();
    }
}

impl fmt::Write for DisplayContext {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

/// Types that can be appended to [DisplayContext]
#[allow(missing_docs)]
pub enum StringBuilderAppend<'a> {
    Char(char),
    Str(&'a str),
    String(String),
    Text(Text),
    TextRef(&'a Text),
}

impl From<char> for StringBuilderAppend<'_> {
    fn from(value: char) -> Self {
        StringBuilderAppend::Char(value)
    }
}

impl<'a> From<&'a str> for StringBuilderAppend<'a> {
    fn from(value: &'a str) -> Self {
        StringBuilderAppend::Str(value)
    }
}

impl From<String> for StringBuilderAppend<'_> {
    fn from(value: String) -> Self {
        StringBuilderAppend::String(value)
    }
}

impl From<Text> for StringBuilderAppend<'_> {
    fn from(value: Text) -> Self {
        StringBuilderAppend::Text(value)
    }
}

impl<'a> From<&'a Text> for StringBuilderAppend<'a> {
    fn from(value: &'a Text) -> Self {
        StringBuilderAppend::TextRef(value)
    }
}

impl StringBuilderAppend<'_> {
    fn append(self, string: &mut String) {
        match self {
            StringBuilderAppend::Char(c) => string.push(c),
            StringBuilderAppend::Str(s) => string.push_str(s),
            StringBuilderAppend::String(s) => string.push_str(&s),
            StringBuilderAppend::Text(s) => string.push_str(s.as_str()),
            StringBuilderAppend::TextRef(s) => string.push_str(s.as_str()),
        }
    }
}
