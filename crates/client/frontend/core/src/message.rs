//! Bounded log of dispatch results shown beside the stats.
use std::collections::VecDeque;

use clicker_core::{DispatchError, DispatchOutcome};

use crate::format::format_outcome;

/// How a log line is presented.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    /// Applied actions and session notes.
    Info,
    /// The request named no known action.
    Warning,
    /// A known action could not read or write its fields.
    Error,
}

impl MessageLevel {
    /// Level used when an action is skipped for `error`.
    pub fn for_error(error: &DispatchError) -> Self {
        match error {
            DispatchError::UnrecognizedAction(_) => Self::Warning,
            DispatchError::MissingField(_) | DispatchError::InvalidValue { .. } => Self::Error,
        }
    }

    /// Short tag shown before diagnostic lines.
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Warning => Some("warn"),
            Self::Error => Some("error"),
        }
    }
}

/// One line of the log.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Number of the dispatch that produced this line; `None` for notes.
    pub sequence: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    /// Free-form informational line not tied to a dispatch.
    pub fn note(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sequence: None,
            level: MessageLevel::Info,
        }
    }

    /// Line describing the `sequence`-th dispatch.
    pub fn from_outcome(outcome: &DispatchOutcome, sequence: u64) -> Self {
        let (text, level) = format_outcome(outcome);
        Self {
            text,
            sequence: Some(sequence),
            level,
        }
    }

    /// True for skipped actions.
    pub fn is_diagnostic(&self) -> bool {
        self.level != MessageLevel::Info
    }
}

/// Ring buffer holding the most recent dispatch results.
///
/// Storage grows with use up to the capacity; the oldest line is evicted
/// once it is reached.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    /// Largest capacity accepted; larger requests are clamped.
    pub const MAX_CAPACITY: usize = 1024;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.clamp(1, Self::MAX_CAPACITY),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_note(&mut self, text: impl Into<String>) {
        self.push(MessageEntry::note(text));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    /// Number of retained lines reporting a skipped action.
    pub fn diagnostics(&self) -> usize {
        self.entries.iter().filter(|e| e.is_diagnostic()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
