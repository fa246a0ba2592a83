//! Tests for chatbot module
//!
//! These tests verify the matching ladder: keyword with plural and word
//! boundary handling, FAQ substring matching, and the fallback.

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_keyword_match_returns_canned_response() {
        let bot = ChatbotResponder::with_defaults();

        let response = bot.respond("I want a refund");
        assert!(response.contains("Refunds are processed"));
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let bot = ChatbotResponder::with_defaults();

        assert_eq!(bot.respond("REFUND please"), bot.respond("refund please"));
    }

    #[test]
    fn test_keyword_matches_simple_plural() {
        let bot = ChatbotResponder::with_defaults();

        let response = bot.respond("do you give refunds?");
        assert!(response.contains("Refunds are processed"));
    }

    #[test]
    fn test_keyword_respects_word_boundaries() {
        let bot = ChatbotResponder::with_defaults();

        // "refundable" is not the word "refund" or its plural
        assert_eq!(bot.respond("is this refundable"), bot.fallback());
    }

    #[test]
    fn test_first_matching_keyword_wins() {
        let bot = ChatbotResponder::new(
            &[("alpha", "first"), ("beta", "second")],
            &[],
            "fallback",
        );

        assert_eq!(bot.respond("beta and alpha"), "first");
    }

    #[test]
    fn test_faq_substring_match() {
        let bot = ChatbotResponder::with_defaults();

        let response = bot.respond("Hey, how do I log a trip on here?");
        assert!(response.contains("Open the dashboard"));
    }

    #[test]
    fn test_keywords_take_precedence_over_faqs() {
        let bot = ChatbotResponder::new(
            &[("trip", "keyword answer")],
            &[("how do i log a trip", "faq answer")],
            "fallback",
        );

        assert_eq!(bot.respond("how do i log a trip"), "keyword answer");
    }

    #[test]
    fn test_unmatched_input_returns_fallback() {
        let bot = ChatbotResponder::with_defaults();

        assert_eq!(bot.respond("xyzzy"), bot.fallback());
        assert_eq!(bot.respond(""), bot.fallback());
    }

    #[test]
    fn test_keyword_with_regex_metacharacters_is_escaped() {
        // Construction must not panic when a keyword contains metacharacters,
        // and the bare prefix must not match
        let bot = ChatbotResponder::new(&[("c++", "a language")], &[], "fallback");

        assert_eq!(bot.respond("tell me about c"), "fallback");
    }
}
