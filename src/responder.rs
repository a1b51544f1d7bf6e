//! Rule-based reply selection: ordered regex rules over a normalized utterance.

mod engine;
mod intent;
mod normalize;
mod pools;
mod rules;

pub use engine::{Reply, Responder, ResponderOptions};
pub use intent::Intent;
pub use normalize::normalize;
pub use pools::ReplyPool;

/// Reply to `utterance` with the default responder options.
#[must_use]
pub fn respond(utterance: &str) -> String {
    Responder::default().reply(utterance).text
}
