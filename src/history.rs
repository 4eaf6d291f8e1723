//! Where finished conversions are reported.
//!
//! Encoders never touch history. [`crate::Converter`] calls into whichever
//! [`History`] it was built with.

use serde::Deserialize;
use serde::Serialize;
use std::collections::VecDeque;

/// Number of entries [`MemoryHistory`] keeps.
pub const MAX_HISTORY_ITEMS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    Standard,
    Custom,
}

impl ConversionKind {
    pub fn label(self) -> &'static str {
        match self {
            ConversionKind::Standard => "IEEE 754标准转换",
            ConversionKind::Custom => "自定义转换",
        }
    }
}

pub trait History {
    fn add(&mut self, input: f64, result: &str, kind: ConversionKind);
}

/// Discards everything.
impl History for () {
    fn add(&mut self, _input: f64, _result: &str, _kind: ConversionKind) {}
}

impl<H: History + ?Sized> History for &mut H {
    fn add(&mut self, input: f64, result: &str, kind: ConversionKind) {
        (**self).add(input, result, kind)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input: f64,
    pub result: String,
    pub kind: ConversionKind,
}

impl HistoryEntry {
    /// First line of the rendered result.
    pub fn summary(&self) -> &str {
        self.result.lines().next().unwrap_or("")
    }
}

/// Most recent conversions, newest first, capped at [`MAX_HISTORY_ITEMS`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryHistory {
    entries: VecDeque<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn remove(&mut self, index: usize) -> Option<HistoryEntry> {
        self.entries.remove(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl History for MemoryHistory {
    fn add(&mut self, input: f64, result: &str, kind: ConversionKind) {
        self.entries.push_front(HistoryEntry {
            input,
            result: result.to_string(),
            kind,
        });
        self.entries.truncate(MAX_HISTORY_ITEMS);
    }
}
