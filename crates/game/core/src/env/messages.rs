//! Player-facing message capability.
//!
//! The core never prints; it posts categorized text to a [`MessageSink`].
//! Diagnostics go through `tracing` instead.

use std::collections::VecDeque;

/// Category attached to each message so front ends can colour or filter them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MessageCategory {
    /// Neutral narration.
    Info,
    /// Status effect gained or lost.
    Status,
    /// Hits, misses and damage summaries.
    Combat,
    /// Kills and the player's death.
    Death,
    /// Failed or blocked actions.
    Failure,
}

/// Narrow messaging collaborator.
pub trait MessageSink {
    /// Appends a message to the persistent log.
    fn post(&mut self, category: MessageCategory, text: String);

    /// Shows an ephemeral, player-only notice.
    fn flash(&mut self, category: MessageCategory, text: String);
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub category: MessageCategory,
    pub text: String,
    /// True for ephemeral notices.
    pub flash: bool,
}

/// Circular buffer of messages.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    /// Returns true if any entry's text contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.text.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes and returns every entry, oldest first.
    pub fn drain(&mut self) -> Vec<MessageEntry> {
        self.entries.drain(..).collect()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl MessageSink for MessageLog {
    fn post(&mut self, category: MessageCategory, text: String) {
        self.push(MessageEntry {
            category,
            text,
            flash: false,
        });
    }

    fn flash(&mut self, category: MessageCategory, text: String) {
        self.push(MessageEntry {
            category,
            text,
            flash: true,
        });
    }
}
