use test_case::test_case;
use vesper_text::{CapStyle, TextPipeline, capitalize};

mod capitalization {
    use super::*;
    use test_case::test_case;

    #[test_case(CapStyle::First, "Ada was here" ; "first")]
    #[test_case(CapStyle::All, "ADA WAS HERE" ; "all")]
    #[test_case(CapStyle::Words, "Ada Was Here" ; "words")]
    #[test_case(CapStyle::Toggle, "AdA WaS HeRe" ; "toggle")]
    fn each_style_is_reachable_through_the_pipeline(style: CapStyle, expected: &str) {
        let result = TextPipeline::new("ada was here").capitalize_as(style);
        assert_eq!(result.as_str(), expected);
    }

    #[test]
    fn default_style_is_first() {
        assert_eq!(
            capitalize("ada was here", CapStyle::default()),
            "Ada was here"
        );
    }

    #[test]
    fn single_grapheme_inputs() {
        assert_eq!(capitalize("a", CapStyle::First), "A");
        assert_eq!(capitalize("A", CapStyle::Toggle), "A");
        assert_eq!(capitalize("é", CapStyle::First), "É");
    }

    #[test]
    fn non_letter_leading_chars_pass_through() {
        assert_eq!(capitalize(" ada", CapStyle::First), " ada");
        assert_eq!(capitalize("42nd street", CapStyle::Words), "42nd Street");
    }
}
