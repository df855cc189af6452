//! The parsed record set.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::ExportLayout;
use crate::message::{Message, Sender};

/// Ordered, read-only collection of parsed messages.
///
/// Built once per export by [`ChatParser`](crate::parser::ChatParser) and never
/// mutated afterwards; narrowing (by sender or date window) produces a view or
/// a new set.
///
/// # Example
///
/// ```
/// use chatlens::parse;
///
/// let records = parse("12/1/23, 10:00 am - Alice: Hello\n12/1/23, 10:01 am - Bob: Hi\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records.user_names(), vec!["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    messages: Vec<Message>,
    #[serde(skip)]
    dropped: usize,
    #[serde(skip)]
    layout: Option<ExportLayout>,
}

impl RecordSet {
    /// Creates a record set from messages in source order.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            dropped: 0,
            layout: None,
        }
    }

    /// Records how many timestamp prefixes were dropped while parsing.
    #[must_use]
    pub fn with_dropped(mut self, dropped: usize) -> Self {
        self.dropped = dropped;
        self
    }

    /// Records the layout the export was parsed with.
    #[must_use]
    pub fn with_layout(mut self, layout: ExportLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Returns the messages in source order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterates over the messages in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of rows whose timestamp could not be parsed and were skipped.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Layout detected (or forced) while parsing, if any.
    pub fn layout(&self) -> Option<ExportLayout> {
        self.layout
    }

    /// Distinct senders in first-encounter order, system included.
    pub fn senders(&self) -> Vec<&Sender> {
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .map(|m| &m.sender)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Sorted distinct participant names, system notices excluded.
    pub fn user_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .senders()
            .into_iter()
            .filter(|s| !s.is_system())
            .map(Sender::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if `sender` wrote at least one message.
    pub fn contains_sender(&self, sender: &Sender) -> bool {
        self.messages.iter().any(|m| &m.sender == sender)
    }

    /// Consumes the set, keeping only messages for which `keep` returns
    /// `true`. Order and parse metadata are preserved.
    #[must_use]
    pub fn retain(mut self, keep: impl FnMut(&Message) -> bool) -> Self {
        self.messages.retain(keep);
        self
    }

    /// Consumes the set, returning the messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl FromIterator<Message> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: Sender, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_senders_encounter_order() {
        let records = RecordSet::new(vec![
            msg(Sender::user("Zoe"), "a"),
            msg(Sender::System, "joined"),
            msg(Sender::user("Adam"), "b"),
            msg(Sender::user("Zoe"), "c"),
        ]);
        let senders: Vec<&str> = records.senders().into_iter().map(Sender::as_str).collect();
        assert_eq!(senders, vec!["Zoe", "system", "Adam"]);
    }

    #[test]
    fn test_user_names_sorted_without_system() {
        let records = RecordSet::new(vec![
            msg(Sender::user("Zoe"), "a"),
            msg(Sender::System, "joined"),
            msg(Sender::user("Adam"), "b"),
        ]);
        assert_eq!(records.user_names(), vec!["Adam", "Zoe"]);
    }

    #[test]
    fn test_contains_sender() {
        let records = RecordSet::new(vec![msg(Sender::user("Zoe"), "a")]);
        assert!(records.contains_sender(&Sender::user("Zoe")));
        assert!(!records.contains_sender(&Sender::user("zoe")));
        assert!(!records.contains_sender(&Sender::System));
    }

    #[test]
    fn test_metadata_builders() {
        let records = RecordSet::default()
            .with_dropped(3)
            .with_layout(ExportLayout::Ios);
        assert!(records.is_empty());
        assert_eq!(records.dropped(), 3);
        assert_eq!(records.layout(), Some(ExportLayout::Ios));
    }

    #[test]
    fn test_from_iterator() {
        let records: RecordSet = vec![msg(Sender::user("A"), "x"), msg(Sender::user("B"), "y")]
            .into_iter()
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!((&records).into_iter().count(), 2);
    }
}
