use unicode_segmentation::UnicodeSegmentation;

/// The capitalization styles understood by [capitalize]
///
/// A closed set dispatched by `match`, so an unsupported style is a
/// compile-time error rather than a silent fallthrough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapStyle {
    /// Uppercase the first grapheme, lowercase the remainder
    #[default]
    First,
    /// Uppercase everything
    All,
    /// Uppercase the first grapheme of every word, lowercase the rest
    Words,
    /// Alternate upper/lower case per char, starting with upper
    Toggle,
}

/// Returns the input capitalized in the given style
///
/// Word detection in [Words](CapStyle::Words) follows Unicode word
/// boundaries, so punctuation and whitespace pass through unchanged.
pub fn capitalize(input: &str, style: CapStyle) -> String {
    match style {
        CapStyle::First => first_upper_rest_lower(input),
        CapStyle::All => input.chars().flat_map(char::to_uppercase).collect(),
        CapStyle::Words => input
            .split_word_bounds()
            .map(|word| {
                if word.chars().next().is_some_and(char::is_alphabetic) {
                    first_upper_rest_lower(word)
                } else {
                    word.to_string()
                }
            })
            .collect(),
        CapStyle::Toggle => {
            let mut result = String::with_capacity(input.len());
            for (i, c) in input.chars().enumerate() {
                if i % 2 == 0 {
                    result.extend(c.to_uppercase());
                } else {
                    result.extend(c.to_lowercase());
                }
            }
            result
        }
    }
}

fn first_upper_rest_lower(input: &str) -> String {
    let mut graphemes = input.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut result = String::with_capacity(input.len());
            result.extend(first.chars().flat_map(char::to_uppercase));
            result.extend(graphemes.flat_map(str::chars).flat_map(char::to_lowercase));
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(CapStyle::First, "Hello world" ; "first")]
    #[test_case(CapStyle::All, "HELLO WORLD" ; "all")]
    #[test_case(CapStyle::Words, "Hello World" ; "words")]
    #[test_case(CapStyle::Toggle, "HeLlO WoRlD" ; "toggle")]
    fn styles(style: CapStyle, expected: &str) {
        assert_eq!(capitalize("hello world", style), expected);
    }

    #[test]
    fn mixed_case_input_is_normalized() {
        assert_eq!(capitalize("hELLO wORLD", CapStyle::First), "Hello world");
        assert_eq!(capitalize("hELLO wORLD", CapStyle::Words), "Hello World");
    }

    #[test]
    fn empty_input_is_a_fixed_point() {
        assert_eq!(capitalize("", CapStyle::First), "");
        assert_eq!(capitalize("", CapStyle::Words), "");
    }

    #[test]
    fn words_ignores_punctuation() {
        assert_eq!(
            capitalize("hello, world-wide web", CapStyle::Words),
            "Hello, World-Wide Web"
        );
    }
}
