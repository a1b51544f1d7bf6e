//! Reply selection over the rule table.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use log::debug;
use rand::Rng;

use super::{intent::Intent, normalize::normalize, pools::DEFAULT_POOL, rules::RULES};

/// Switches between the two matching variants behind the same priority list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponderOptions {
    /// Drop non-word characters before matching.
    pub strip_punctuation: bool,
    /// Enable the weather/time/date rules.
    pub keyword_triggers: bool,
}

impl Default for ResponderOptions {
    fn default() -> Self {
        Self {
            strip_punctuation: true,
            keyword_triggers: true,
        }
    }
}

/// A chosen reply and the intent that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

/// Stateless responder. Every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    options: ResponderOptions,
}

impl Responder {
    #[must_use]
    pub fn new(options: ResponderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> ResponderOptions {
        self.options
    }

    /// Intent of the first rule matching the normalized utterance.
    #[must_use]
    pub fn classify(&self, utterance: &str) -> Intent {
        let normalized = normalize(utterance, self.options.strip_punctuation);

        let intent = RULES
            .iter()
            .filter(|rule| self.options.keyword_triggers || !rule.intent.is_keyword_trigger())
            .find(|rule| rule.matches(&normalized))
            .map_or(Intent::Default, |rule| rule.intent);

        debug!("Classified '{normalized}' as {intent}");
        intent
    }

    /// Reply using the local clock and the thread-local RNG.
    #[must_use]
    pub fn reply(&self, utterance: &str) -> Reply {
        self.reply_with(utterance, &Local::now(), &mut rand::rng())
    }

    /// Reply with an explicit clock reading and randomness source.
    pub fn reply_with<Tz, R>(&self, utterance: &str, now: &DateTime<Tz>, rng: &mut R) -> Reply
    where
        Tz: TimeZone,
        Tz::Offset: Display,
        R: Rng + ?Sized,
    {
        let intent = self.classify(utterance);
        let text = match intent {
            Intent::Time => now.format("It's currently %-I:%M %p.").to_string(),
            Intent::Date => now.format("Today is %A, %B %-d, %Y.").to_string(),
            _ => {
                let pool = intent.pool().unwrap_or(&DEFAULT_POOL);
                debug!("Picking from the {} pool", pool.name());
                pool.pick(rng).to_string()
            }
        };

        Reply { intent, text }
    }
}
