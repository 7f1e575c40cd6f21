use crate::DisplayContext;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, Range},
};
use unicode_segmentation::UnicodeSegmentation;
use vesper_memory::Ptr;

/// The string type used by the value model
///
/// The underlying string data is immutable and shared between instances, with
/// bounds allowing subslices to reuse the same allocation. Every deriving
/// operation returns a new `Text`; none of them touch existing data.
///
/// [`AsRef`](std::convert::AsRef) is implemented for `&str`, which
/// automatically resolves to the correct slice of the string data.
#[derive(Clone)]
pub struct Text {
    data: Ptr<str>,
    bounds: Range<usize>,
}

impl Text {
    /// Returns the empty string
    ///
    /// This returns a clone of an empty Text which is initialized once per
    /// thread.
    pub fn empty() -> Self {
        let data = EMPTY_STRING.with(|s| s.clone());
        Self { data, bounds: 0..0 }
    }

    /// Returns a new Text sharing this one's data, with new bounds
    ///
    /// The bounds are relative to the current view. If they lie outside the
    /// view, or don't fall on char boundaries, then `None` is returned.
    pub fn with_bounds(&self, bounds: Range<usize>) -> Option<Self> {
        let start = self.bounds.start + bounds.start;
        let end = self.bounds.start + bounds.end;

        if start > end || end > self.bounds.end {
            return None;
        }
        if !self.data.is_char_boundary(start) || !self.data.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            data: self.data.clone(),
            bounds: start..end,
        })
    }

    /// Returns a new Text with shared data and bounds defined by the grapheme indices
    ///
    /// This allows for subslicing by index, with the index referring to
    /// unicode graphemes. If the provided indices are out of bounds then an
    /// empty string will be returned.
    pub fn with_grapheme_indices(&self, indices: Range<usize>) -> Self {
        let start = indices.start;
        let end = indices.end;

        if start == end {
            return Self::empty();
        }

        let mut result_start = if start == 0 { Some(0) } else { None };
        let mut result_end = None;

        for (i, (grapheme_start, grapheme)) in self.grapheme_indices(true).enumerate() {
            if result_start.is_none() && i == start - 1 {
                // Checking against start - 1 rather than waiting for the next
                // iteration allows indexing from one-past-the-end to produce
                // the empty string.
                result_start = Some(grapheme_start + grapheme.len());
            }

            if i == end - 1 {
                result_end = Some(grapheme_start + grapheme.len());
                break;
            }
        }

        let result_bounds = match (result_start, result_end) {
            (Some(result_start), Some(result_end)) => result_start..result_end,
            (Some(result_start), None) => result_start..self.len(),
            _ => return Self::empty(),
        };

        self.with_bounds(result_bounds).unwrap_or_else(Self::empty)
    }

    /// Returns a clamped subslice selected by signed grapheme indices
    ///
    /// Negative indices count back from the end of the string, out-of-range
    /// indices are clamped, and an inverted range produces the empty string,
    /// so the operation is total. `None` as the end index means
    /// 'to the end of the string'.
    pub fn slice(&self, start: i64, end: Option<i64>) -> Self {
        let count = self.grapheme_count() as i64;
        let resolve = |index: i64| {
            if index < 0 {
                (count + index).max(0) as usize
            } else {
                index.min(count) as usize
            }
        };

        let start = resolve(start);
        let end = resolve(end.unwrap_or(count));
        if end <= start {
            Self::empty()
        } else {
            self.with_grapheme_indices(start..end)
        }
    }

    /// Returns the number of graphemes contained within the Text's bounds
    pub fn grapheme_count(&self) -> usize {
        self.graphemes(true).count()
    }

    /// Returns the `&str` within the Text's bounds
    pub fn as_str(&self) -> &str {
        &self.data[self.bounds.clone()]
    }

    /// Returns true if the two `Text`s are views into the same allocation
    pub fn is_same_data(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.data, &other.data)
    }

    /// Renders the string to the provided display context
    pub fn display(&self, ctx: &mut DisplayContext) {
        if ctx.is_contained() {
            ctx.append('\'');
            ctx.append(self);
            ctx.append('\'');
        } else {
            ctx.append(self);
        }
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Ptr<str>> for Text {
    fn from(string: Ptr<str>) -> Self {
        let bounds = 0..string.len();
        Self {
            data: string,
            bounds,
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::from(Ptr::<str>::from(s))
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from(Ptr::<str>::from(s))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

thread_local!(
    static EMPTY_STRING: Ptr<str> = Ptr::from("");
);
