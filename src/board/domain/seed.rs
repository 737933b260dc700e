//! Deterministic seed data for fixtures.

use super::Message;

const SEED_TEXTS: [&str; 3] = [
    "You're standing on my scarf.",
    "Would you like a jelly baby?",
    "To the rational mind, nothing is inexplicable; only unexplained.",
];

/// Returns the fixed set of sample messages used to initialise fixtures.
///
/// The result is identical on every call: ids `1..=3` paired with the same
/// texts, in ascending id order.
///
/// # Examples
///
/// ```
/// use message_board::board::domain::{MessageId, seed_messages};
///
/// let seeds = seed_messages();
/// assert_eq!(seeds.len(), 3);
/// assert_eq!(seeds.first().map(|m| m.id()), Some(MessageId::new(1)));
/// ```
#[must_use]
pub fn seed_messages() -> Vec<Message> {
    (1..)
        .zip(SEED_TEXTS)
        .map(|(id, text)| Message::new(id, text))
        .collect()
}
