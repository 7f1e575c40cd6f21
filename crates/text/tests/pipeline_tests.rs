use test_case::test_case;
use vesper_text::{CapStyle, TextPipeline};

mod pipelines {
    use super::*;
    use test_case::test_case;

    #[test_case("" ; "empty")]
    #[test_case("hello" ; "plain")]
    #[test_case("  spaced  " ; "spaced")]
    #[test_case("mixed CASE 123" ; "mixed")]
    fn an_empty_chain_is_the_identity(input: &str) {
        assert_eq!(TextPipeline::new(input).as_str(), input);
    }

    #[test_case("  a b  " ; "whitespace heavy")]
    #[test_case("ab" ; "nothing to do")]
    #[test_case("" ; "empty")]
    fn trim_and_remove_spaces_are_idempotent(input: &str) {
        let once = TextPipeline::new(input).trim();
        let twice = once.clone().trim();
        assert_eq!(once.as_str(), twice.as_str());

        let once = TextPipeline::new(input).remove_spaces();
        let twice = once.clone().remove_spaces();
        assert_eq!(once.as_str(), twice.as_str());
    }

    #[test_case("" ; "empty")]
    #[test_case("abc" ; "ascii")]
    #[test_case("he\u{0301}llo" ; "combining mark")]
    #[test_case("🦀 rust" ; "emoji")]
    fn reverse_is_self_inverse(input: &str) {
        let round_trip = TextPipeline::new(input).reverse().reverse();
        assert_eq!(round_trip.as_str(), input);
    }

    #[test]
    fn chain_order_is_significant() {
        // Trimming first exposes 'a' as the first grapheme...
        let trimmed_first = TextPipeline::new("  ab  ").trim().capitalize();
        assert_eq!(trimmed_first.as_str(), "Ab");

        // ...while capitalizing first uppercases a space, leaving the letters
        // lowercase
        let capitalized_first = TextPipeline::new("  ab  ").capitalize().trim();
        assert_eq!(capitalized_first.as_str(), "ab");
    }

    #[test]
    fn the_welcome_chain() {
        let result = TextPipeline::new("  hello world  ")
            .trim()
            .capitalize()
            .remove_spaces()
            .prepend("Welcome_")
            .append("_2024");

        assert_eq!(result.as_str(), "Welcome_Helloworld_2024");
    }

    #[test]
    fn inspection_does_not_end_the_chain() {
        let pipeline = TextPipeline::new(" draft ").trim();
        assert_eq!(pipeline.as_str(), "draft");

        let finished = pipeline.capitalize_as(CapStyle::All).into_string();
        assert_eq!(finished, "DRAFT");
    }

    #[test]
    fn remove_spaces_deletes_interior_runs() {
        let result = TextPipeline::new("a b\t c\n\nd").remove_spaces();
        assert_eq!(result.as_str(), "abcd");
    }

    #[test]
    fn reverse_keeps_graphemes_intact() {
        // 'e' plus combining acute stays a single unit
        let result = TextPipeline::new("he\u{0301}y").reverse();
        assert_eq!(result.as_str(), "ye\u{0301}h");
    }
}
