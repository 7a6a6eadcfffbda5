use colored::Colorize;
use librarian::api::{CmdMessage, InventoryReport, MessageLevel};
use librarian::error::LibraryError;
use librarian::model::Book;
use std::io::{self, Write};

use super::table::render_table;

const BOOK_HEADERS: [&str; 6] = ["ID", "Title", "Author", "Total", "Issued", "Available"];

pub(crate) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &LibraryError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

pub(super) fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.title.clone(),
                b.author.clone(),
                b.total_copies.to_string(),
                b.issued_count.to_string(),
                b.available().to_string(),
            ]
        })
        .collect();
    writeln!(out, "{}", render_table(&BOOK_HEADERS, &rows))
}

pub(super) fn print_report<W: Write>(out: &mut W, report: &InventoryReport) -> io::Result<()> {
    writeln!(out, "{}", "Library Report".bold())?;
    writeln!(out, "--------------")?;
    writeln!(out, "Unique titles : {}", report.unique_titles)?;
    writeln!(out, "Total copies  : {}", report.total_copies)?;
    writeln!(out, "Issued copies : {}", report.issued_copies)?;
    writeln!(out, "Available now : {}", report.available_copies)?;

    if !report.top_issued.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top issued books:")?;
        for book in &report.top_issued {
            writeln!(out, "- {} (issued: {})", book.title, book.issued_count)?;
        }
    }
    Ok(())
}
