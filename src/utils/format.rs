use crate::core::data::Book;

/// Render a score the way it is shown in tables and exports: whole numbers
/// keep one decimal place (`95.0`), everything else uses the shortest form.
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

/// One-line book summary: `title | author | isbn | status`
pub fn format_book_line(book: &Book) -> String {
    format!("{} | {} | {} | {}", book.title, book.author, book.isbn, book.status)
}

pub fn format_name_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(95.0), "95.0");
        assert_eq!(format_score(58.5), "58.5");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(-3.0), "-3.0");
        assert_eq!(format_score(76.25), "76.25");
    }

    #[test]
    fn test_format_book_line() {
        let mut book = Book::new("Dune", "Frank Herbert", "123");
        book.issue();
        assert_eq!(format_book_line(&book), "Dune | Frank Herbert | 123 | issued");
    }

    #[test]
    fn test_format_name_list() {
        assert_eq!(format_name_list(&[]), "[]");
        assert_eq!(
            format_name_list(&["Asha".to_string(), "Ravi".to_string()]),
            "['Asha', 'Ravi']"
        );
    }
}
