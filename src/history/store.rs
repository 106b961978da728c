use super::item::HistoryItem;
use crate::detection::Verdict;
use std::collections::VecDeque;
use tracing::info;

/// In-memory log of successful scans, most recent first.
///
/// Only `Verdict`s can be recorded, so error responses never land here.
/// Entries live as long as the store; nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    items: VecDeque<HistoryItem>,
    /// Oldest entries are evicted past this many; `None` keeps everything
    limit: Option<usize>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            items: VecDeque::new(),
            limit,
        }
    }

    /// Prepend a new entry and return it
    pub fn record(&mut self, verdict: Verdict, file_name: impl Into<String>) -> &HistoryItem {
        let item = HistoryItem::new(verdict, file_name);
        info!(
            "Recorded {} ({}) as {}",
            item.file_name,
            item.verdict.language,
            item.verdict.classification.badge()
        );
        self.items.push_front(item);

        if let Some(limit) = self.limit {
            self.items.truncate(limit.max(1));
        }

        &self.items[0]
    }

    pub fn list(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<HistoryItem> {
        self.items.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        info!("Clearing {} history entries", self.items.len());
        self.items.clear();
    }
}
