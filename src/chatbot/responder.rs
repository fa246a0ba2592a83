//! The canned-answer matcher behind the chat widget

use regex::Regex;

struct KeywordRule {
    pattern: Regex,
    response: String,
}

struct FaqEntry {
    question: String,
    answer: String,
}

/// Maps free-text input to a canned reply.
///
/// Keywords are checked in configuration order with a word-boundary pattern
/// that also accepts the simple plural; FAQs are checked afterwards by
/// substring. Everything is matched against the lower-cased input.
pub struct ChatbotResponder {
    keywords: Vec<KeywordRule>,
    faqs: Vec<FaqEntry>,
    fallback: String,
}

impl ChatbotResponder {
    pub fn new(keywords: &[(&str, &str)], faqs: &[(&str, &str)], fallback: &str) -> Self {
        let keywords = keywords
            .iter()
            .map(|(keyword, response)| KeywordRule {
                pattern: Regex::new(&format!(
                    r"\b{}s?\b",
                    regex::escape(&keyword.to_lowercase())
                ))
                .expect("keyword patterns are built from plain words"),
                response: response.to_string(),
            })
            .collect();

        let faqs = faqs
            .iter()
            .map(|(question, answer)| FaqEntry {
                question: question.to_lowercase(),
                answer: answer.to_string(),
            })
            .collect();

        Self {
            keywords,
            faqs,
            fallback: fallback.to_string(),
        }
    }

    /// The stock configuration served by `/ask`
    pub fn with_defaults() -> Self {
        Self::new(
            &[
                (
                    "refund",
                    "Refunds are processed back to your original payment method within 5-7 \
                     business days. Contact support with your booking reference to get started.",
                ),
                (
                    "ticket",
                    "Tickets for recorded trips are available from your dashboard after logging in.",
                ),
                (
                    "cancel",
                    "Logged trips cannot be cancelled, but they never affect your account standing.",
                ),
                (
                    "password",
                    "You can reset your password from the login page. If you are still locked \
                     out, contact support.",
                ),
                (
                    "account",
                    "You can register a free account from the home page, or log in if you \
                     already have one.",
                ),
            ],
            &[
                (
                    "how do i log a trip",
                    "Open the dashboard, pick your start and end points on the map, choose a \
                     transport mode and hit save.",
                ),
                (
                    "how is my carbon footprint calculated",
                    "The trip distance is multiplied by an emission factor for the chosen \
                     transport mode.",
                ),
                (
                    "is my data private",
                    "Your trips are only visible to your own account. We never share your data.",
                ),
                (
                    "which transport modes are supported",
                    "Any mode you like - bus, bike, car, train and walking are the common ones.",
                ),
            ],
            "I'm sorry, I don't understand that yet. Try asking about trips, refunds or \
             your account.",
        )
    }

    /// Map one input to one reply
    pub fn respond(&self, input: &str) -> String {
        let input = input.to_lowercase();

        for rule in &self.keywords {
            if rule.pattern.is_match(&input) {
                return rule.response.clone();
            }
        }

        for faq in &self.faqs {
            if input.contains(&faq.question) {
                return faq.answer.clone();
            }
        }

        self.fallback().to_string()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
