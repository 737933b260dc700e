//! Diesel schema for message board persistence.

diesel::table! {
    /// Messages posted to the board.
    messages (id) {
        /// Caller-supplied message identifier.
        id -> Int4,
        /// Message text.
        text -> Text,
    }
}
