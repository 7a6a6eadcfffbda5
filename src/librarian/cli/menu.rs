use librarian::api::{copy_count, CmdResult, LibraryApi};
use librarian::error::Result as LibResult;
use librarian::model::Book;
use librarian::store::StorageBackend;
use std::io::{self, BufRead, Write};

use super::print::{print_books, print_error, print_messages, print_report};
use super::prompt::{prompt_int, prompt_line};

const MENU: &str = "
Library Book Inventory Manager
------------------------------
1. Add book
2. Update book copies
3. Search books (title/author)
4. Issue book
5. Return book
6. List all books
7. Report
8. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Update,
    Search,
    Issue,
    Return,
    List,
    Report,
    Exit,
}

impl Choice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Update),
            "3" => Some(Choice::Search),
            "4" => Some(Choice::Issue),
            "5" => Some(Choice::Return),
            "6" => Some(Choice::List),
            "7" => Some(Choice::Report),
            "8" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Runs the interactive menu until the user exits or input ends.
pub fn run<B, R, W>(api: &mut LibraryApi<B>, input: &mut R, out: &mut W) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let answer = match prompt_line(input, out, "Choose (1-8): ") {
            Ok(answer) => answer,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e),
        };

        let Some(choice) = Choice::parse(&answer) else {
            writeln!(out, "Invalid option.\n")?;
            continue;
        };
        if choice == Choice::Exit {
            writeln!(out, "Exiting.")?;
            return Ok(());
        }

        match handle(choice, api, input, out) {
            Ok(()) => {}
            // Input ran out mid-prompt: leave the same way as "Exit".
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                writeln!(out)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

fn handle<B, R, W>(choice: Choice, api: &mut LibraryApi<B>, input: &mut R, out: &mut W) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    match choice {
        Choice::Add => handle_add(api, input, out),
        Choice::Update => handle_update(api, input, out),
        Choice::Search => handle_search(api, input, out),
        Choice::Issue => {
            let id = prompt_line(input, out, "Book ID to issue: ")?;
            report_outcome(out, api.issue(&id))
        }
        Choice::Return => {
            let id = prompt_line(input, out, "Book ID to return: ")?;
            report_outcome(out, api.return_copy(&id))
        }
        Choice::List => handle_list(api, out),
        Choice::Report => handle_report(api, out),
        Choice::Exit => Ok(()),
    }
}

fn handle_add<B: StorageBackend, R: BufRead, W: Write>(
    api: &mut LibraryApi<B>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\nAdd Book")?;
    let id = prompt_line(input, out, "Book ID (unique): ")?;
    let title = prompt_line(input, out, "Title: ")?;
    let author = prompt_line(input, out, "Author: ")?;
    let total = prompt_int(input, out, "Total copies: ", Some(1))?;

    if id.is_empty() || title.is_empty() {
        writeln!(out, "Book ID and Title required.")?;
        return Ok(());
    }
    let total = match copy_count(total) {
        Ok(total) => total,
        Err(e) => return print_error(out, &e),
    };
    report_outcome(out, api.add_book(Book::new(id, title, author, total)))
}

fn handle_update<B: StorageBackend, R: BufRead, W: Write>(
    api: &mut LibraryApi<B>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\nUpdate Book Copies")?;
    let id = prompt_line(input, out, "Book ID: ")?;
    if id.is_empty() {
        writeln!(out, "Book ID required.")?;
        return Ok(());
    }
    let Some(book) = api.find_by_id(&id) else {
        writeln!(out, "Book not found.")?;
        return Ok(());
    };
    writeln!(
        out,
        "Current total copies: {}, issued: {}",
        book.total_copies, book.issued_count
    )?;
    let new_total = prompt_int(input, out, "New total copies: ", None)?;
    report_outcome(out, api.update_copies(&id, new_total))
}

fn handle_search<B: StorageBackend, R: BufRead, W: Write>(
    api: &LibraryApi<B>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let keyword = prompt_line(input, out, "Search keyword (title/author): ")?;
    if keyword.is_empty() {
        writeln!(out, "Enter search keyword.")?;
        return Ok(());
    }
    match api.search(&keyword) {
        Ok(result) if result.listed_books.is_empty() => writeln!(out, "No results.\n"),
        Ok(result) => {
            print_books(out, &result.listed_books)?;
            writeln!(out)
        }
        Err(e) => print_error(out, &e),
    }
}

fn handle_list<B: StorageBackend, W: Write>(api: &LibraryApi<B>, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAll Books")?;
    match api.list_all() {
        Ok(result) => {
            if !result.listed_books.is_empty() {
                print_books(out, &result.listed_books)?;
            }
            print_messages(out, &result.messages)?;
            writeln!(out)
        }
        Err(e) => print_error(out, &e),
    }
}

fn handle_report<B: StorageBackend, W: Write>(api: &LibraryApi<B>, out: &mut W) -> io::Result<()> {
    match api.report() {
        Ok(result) => {
            if let Some(report) = &result.report {
                print_report(out, report)?;
            }
            print_messages(out, &result.messages)?;
            writeln!(out)
        }
        Err(e) => print_error(out, &e),
    }
}

fn report_outcome<W: Write>(out: &mut W, outcome: LibResult<CmdResult>) -> io::Result<()> {
    match outcome {
        Ok(result) => print_messages(out, &result.messages),
        Err(e) => print_error(out, &e),
    }
}
