use colored::*;
use crate::core::data::{Book, BookStatus};
use crate::utils::format::format_book_line;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn status(status: BookStatus) -> ColoredString {
        match status {
            BookStatus::Available => status.to_string().green(),
            BookStatus::Issued => status.to_string().yellow(),
        }
    }

    pub fn separator() -> String {
        "-".repeat(39)
    }

    pub fn banner_separator() -> String {
        "=".repeat(30)
    }

    pub fn print_section(title: &str) {
        println!("\n{}", Self::title(&format!("===== {} =====", title)));
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>8}: {}", Self::label(label), color_fn(value));
    }

    /// Numbered menu framed by `=` rules
    pub fn print_menu(title: &str, options: &[&str]) {
        println!("\n{}", Self::banner_separator());
        println!("{}", Self::title(title));
        println!("{}", Self::banner_separator());
        for (i, option) in options.iter().enumerate() {
            println!("{}. {}", i + 1, option);
        }
        println!("{}", Self::banner_separator());
    }

    pub fn print_book_line(book: &Book) {
        println!("{}", format_book_line(book));
    }

    pub fn print_book_detailed(book: &Book) {
        Self::print_field_colored("Title", &book.title, Self::content);
        Self::print_field_colored("Author", &book.author, Self::content);
        Self::print_field_colored("ISBN", &book.isbn, Self::info);
        println!("{:>8}: {}", Self::label("Status"), Self::status(book.status));
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_goodbye() {
    println!("{}", OutputStyle::header("Goodbye!"));
}
