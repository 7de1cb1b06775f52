// Library menu - add, issue, return, list and search

use std::io::BufRead;

use crate::config::Config;
use crate::core::data::Book;
use crate::core::operations::LibraryInventory;
use crate::core::traits::{CatalogSearch, LoadOutcome};
use crate::utils::error::{handle_flow, report_error, AppResult, FlowResult};
use crate::utils::interactive::prompt_input;
use crate::utils::output::{print_goodbye, print_warning, OutputStyle};

const MENU: [&str; 7] = [
    "Add Book",
    "Issue Book",
    "Return Book",
    "View All Books",
    "Search by Title",
    "Search by ISBN",
    "Exit",
];

/// Open the configured catalog, announcing a destructive reset if one happened
pub fn open_inventory(config: &Config) -> AppResult<LibraryInventory> {
    let (inventory, outcome) = LibraryInventory::open(&config.library.catalog_file)?;
    if let LoadOutcome::Recovered(_) = outcome {
        print_warning(&format!(
            "Corrupted file {}. Resetting catalog.",
            inventory.file_path().display()
        ));
    }
    Ok(inventory)
}

/// Run the library menu until the user exits
pub fn run_library<R: BufRead>(inventory: &mut LibraryInventory, input: &mut R) -> AppResult<()> {
    loop {
        OutputStyle::print_menu("--- Library Manager ---", &MENU);
        let choice = prompt_input(input, "Choose option: ")?;

        match choice.as_str() {
            "1" => handle_add(inventory, input)?,
            "2" => handle_issue(inventory, input)?,
            "3" => handle_return(inventory, input)?,
            "4" => handle_list(inventory),
            "5" => handle_search_title(inventory, input)?,
            "6" => handle_search_isbn(inventory, input)?,
            "7" => {
                print_goodbye();
                return Ok(());
            }
            _ => print_warning("Invalid choice."),
        }
    }
}

fn handle_add<R: BufRead>(inventory: &mut LibraryInventory, input: &mut R) -> AppResult<()> {
    let title = prompt_input(input, "Title: ")?;
    let author = prompt_input(input, "Author: ")?;
    let isbn = prompt_input(input, "ISBN: ")?;

    match inventory.add_book(Book::new(&title, &author, &isbn)) {
        Ok(true) => handle_flow(FlowResult::Success("Book added!".to_string())),
        Ok(false) => handle_flow(FlowResult::Rejected("Book already exists!".to_string())),
        Err(e) => report_error(&e),
    }
    Ok(())
}

fn handle_issue<R: BufRead>(inventory: &mut LibraryInventory, input: &mut R) -> AppResult<()> {
    let isbn = prompt_input(input, "Enter ISBN to issue: ")?;

    match inventory.issue_book(&isbn) {
        Ok(true) => handle_flow(FlowResult::Success("Book issued!".to_string())),
        Ok(false) => handle_flow(FlowResult::Rejected("Cannot issue book.".to_string())),
        Err(e) => report_error(&e),
    }
    Ok(())
}

fn handle_return<R: BufRead>(inventory: &mut LibraryInventory, input: &mut R) -> AppResult<()> {
    let isbn = prompt_input(input, "Enter ISBN to return: ")?;

    match inventory.return_book(&isbn) {
        Ok(true) => handle_flow(FlowResult::Success("Book returned!".to_string())),
        Ok(false) => handle_flow(FlowResult::Rejected("Cannot return book.".to_string())),
        Err(e) => report_error(&e),
    }
    Ok(())
}

fn handle_list(inventory: &LibraryInventory) {
    let books = inventory.list_all();
    if books.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "books".to_string(),
        });
        return;
    }
    for book in books {
        OutputStyle::print_book_line(book);
    }
}

fn handle_search_title<R: BufRead>(inventory: &LibraryInventory, input: &mut R) -> AppResult<()> {
    let keyword = prompt_input(input, "Title keyword: ")?;

    let books = inventory.search_by_title(&keyword);
    if books.is_empty() {
        handle_flow(FlowResult::NotFound {
            item_type: "Title".to_string(),
            search_term: keyword,
        });
    }
    for book in books {
        OutputStyle::print_book_line(book);
    }
    Ok(())
}

fn handle_search_isbn<R: BufRead>(inventory: &LibraryInventory, input: &mut R) -> AppResult<()> {
    let isbn = prompt_input(input, "ISBN: ")?;

    match inventory.search_by_isbn(&isbn) {
        Some(book) => OutputStyle::print_book_detailed(book),
        None => println!("Not found"),
    }
    Ok(())
}
