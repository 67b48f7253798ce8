//! Per-URL outcomes and the batch summary.

use std::path::PathBuf;

/// What happened to one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Image written to `path`.
    Saved { filename: String, path: PathBuf },
    /// 2xx response whose `Content-Type` is not `image/*`.
    NotImage { content_type: Option<String> },
    /// A file named `filename` already existed; nothing written.
    Duplicate { filename: String, path: PathBuf },
    /// Transport failure or non-2xx status.
    ConnectionError(String),
    /// Any other failure (e.g. disk write).
    Error(String),
}

impl ItemOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ItemOutcome::Saved { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ItemOutcome::ConnectionError(_) | ItemOutcome::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub url: String,
    pub outcome: ItemOutcome,
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    pub fn saved(&self) -> usize {
        self.count(ItemOutcome::is_saved)
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::NotImage { .. }))
    }

    pub fn duplicates(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Duplicate { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(ItemOutcome::is_failure)
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.outcome)).count()
    }
}
