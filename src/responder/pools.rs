//! Canned reply pools.

use rand::{Rng, prelude::IndexedRandom};

/// A named, non-empty set of interchangeable replies.
#[derive(Debug)]
pub struct ReplyPool {
    name: &'static str,
    replies: &'static [&'static str],
}

impl ReplyPool {
    /// Panics at compile time when used to build a `static` with no replies.
    pub const fn new(name: &'static str, replies: &'static [&'static str]) -> Self {
        assert!(!replies.is_empty(), "reply pool must not be empty");
        Self { name, replies }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn replies(&self) -> &'static [&'static str] {
        self.replies
    }

    #[must_use]
    pub fn contains(&self, reply: &str) -> bool {
        self.replies.contains(&reply)
    }

    /// Pick one reply uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.replies.choose(rng).copied().unwrap_or_default()
    }
}

pub static GREETINGS: ReplyPool = ReplyPool::new(
    "greetings",
    &[
        "Hello! How can I assist you today?",
        "Hi there! What can I do for you?",
        "Hey! Nice to meet you!",
        "Greetings! How may I help you?",
    ],
);

pub static FAREWELL: ReplyPool = ReplyPool::new(
    "farewell",
    &[
        "Goodbye! Have a great day!",
        "See you later! Take care!",
        "Bye! Feel free to come back anytime!",
        "Farewell! It was nice chatting with you!",
    ],
);

pub static THANKS: ReplyPool = ReplyPool::new(
    "thanks",
    &[
        "You're welcome! Happy to help!",
        "No problem at all!",
        "Anytime! That's what I'm here for!",
        "Glad I could help!",
    ],
);

pub static HOW_ARE_YOU: ReplyPool = ReplyPool::new(
    "how_are_you",
    &[
        "I'm doing great, thank you for asking! How about you?",
        "I'm just a bot, but I'm functioning perfectly! How are you?",
        "I'm excellent! Ready to chat with you!",
    ],
);

pub static NAME: ReplyPool = ReplyPool::new(
    "name",
    &[
        "I'm ChatBot, your friendly AI assistant!",
        "You can call me ChatBot!",
        "I'm ChatBot, nice to meet you!",
    ],
);

pub static HELP: ReplyPool = ReplyPool::new(
    "help",
    &[
        "I can chat with you, answer questions, and have friendly conversations! Just type anything you'd like to talk about.",
        "I'm here to chat and help! You can ask me about myself, have a conversation, or just say hello!",
        "Feel free to ask me anything or just chat! I can discuss various topics with you.",
    ],
);

pub static LULU_KUTU: ReplyPool = ReplyPool::new(
    "lulu_kutu",
    &[
        "Yes, Lulu loves Kutu very much!",
        "Lulu and Kutu are best friends!",
        "Absolutely! Lulu loves Kutu!",
    ],
);

pub static WEATHER: ReplyPool = ReplyPool::new(
    "weather",
    &[
        "I can't look outside, but I hope the weather is lovely where you are!",
        "I don't have a weather feed, sorry! A quick look out the window might help.",
        "Weather is beyond me, but I'm always sunny in here!",
    ],
);

pub static DEFAULT_POOL: ReplyPool = ReplyPool::new(
    "default",
    &[
        "That's interesting! Tell me more.",
        "I see! Can you elaborate on that?",
        "Interesting point! What else would you like to know?",
        "I appreciate you sharing that! Anything else on your mind?",
        "That's a good question! While I'm a simple chatbot, I'm here to chat with you.",
        "I'm still learning, but I'd love to continue our conversation!",
        "Thanks for chatting with me! What else would you like to talk about?",
    ],
);
