use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;
use crate::store::{BookStore, StorageBackend};

/// Aggregate counts over the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    pub unique_titles: usize,
    pub total_copies: u64,
    pub issued_copies: u64,
    pub available_copies: u64,
    /// Most issued books, highest first. Ties go to the lower id.
    pub top_issued: Vec<Book>,
}

pub fn run<B: StorageBackend>(store: &BookStore<B>, top_limit: usize) -> Result<CmdResult> {
    let total_copies: u64 = store.books().map(|b| u64::from(b.total_copies)).sum();
    let issued_copies: u64 = store.books().map(|b| u64::from(b.issued_count)).sum();

    // Stable sort over id-ordered input keeps ties in id order.
    let mut top_issued: Vec<Book> = store.books().cloned().collect();
    top_issued.sort_by(|a, b| b.issued_count.cmp(&a.issued_count));
    top_issued.truncate(top_limit);

    let report = InventoryReport {
        unique_titles: store.len(),
        total_copies,
        issued_copies,
        available_copies: total_copies - issued_copies,
        top_issued,
    };
    Ok(CmdResult::default().with_report(report))
}
