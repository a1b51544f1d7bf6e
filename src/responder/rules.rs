//! The ordered rule table. First match wins.

use std::sync::LazyLock;

use regex::Regex;

use super::intent::Intent;

/// One entry of the priority list.
#[derive(Debug)]
pub struct PatternRule {
    pub intent: Intent,
    pub pattern: Regex,
}

impl PatternRule {
    fn new(intent: Intent, pattern: &str) -> Self {
        Self {
            intent,
            pattern: Regex::new(pattern).expect("built-in pattern should compile"),
        }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }
}

/// Patterns accept input with or without apostrophes so they work for both
/// normalization modes. Greeting and farewell are bare prefixes and the
/// conversational rules are bare substrings, so "hiya" greets and "helpful"
/// asks for help. Only the keyword triggers require whole words.
pub static RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        // Outranks every generic rule.
        PatternRule::new(Intent::LuluKutu, r"lulu.*kutu|kutu.*lulu"),
        PatternRule::new(
            Intent::Greeting,
            r"^(?:hi|hello|hey|greetings|good (?:morning|afternoon|evening))",
        ),
        PatternRule::new(Intent::Farewell, r"^(?:bye|goodbye|see you|see ya|farewell)"),
        PatternRule::new(Intent::Thanks, r"thank|thx|appreciate"),
        PatternRule::new(
            Intent::HowAreYou,
            r"how are you|how r u|how'?re you|how'?s it going|what'?s up",
        ),
        PatternRule::new(Intent::Name, r"your name|who are you|what are you"),
        PatternRule::new(
            Intent::Help,
            r"help|what can you do|your purpose|capabilities",
        ),
        PatternRule::new(
            Intent::Weather,
            r"\b(?:weather|forecast|temperature|raining|sunny)\b",
        ),
        PatternRule::new(Intent::Time, r"\b(?:what time|time is it|current time)\b"),
        PatternRule::new(
            Intent::Date,
            r"\b(?:what day|what date|what'?s the date|today'?s date|date today)\b",
        ),
    ]
});
