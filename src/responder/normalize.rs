/// Lowercase and trim an utterance. With `strip_punctuation`, drop every non-word
/// character and collapse runs of whitespace to a single space.
#[must_use]
pub fn normalize(utterance: &str, strip_punctuation: bool) -> String {
    let lowered = utterance.trim().to_lowercase();
    if !strip_punctuation {
        return lowered;
    }

    lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
