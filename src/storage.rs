//! Whole-file persistence: the JSON catalog and the CSV score files

use crate::core::data::{Book, BookRecord, Catalog, GradeReport, ScoreSheet};
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::format_score;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Serialize the catalog as a pretty-printed JSON array
pub fn encode_catalog(catalog: &Catalog) -> AppResult<String> {
    let records: Vec<BookRecord> = catalog.books.iter().map(Book::to_record).collect();
    serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::Storage(format!("Failed to serialize catalog: {}", e)))
}

/// Decode raw file bytes. Invalid UTF-8 is a parse failure like any other bad JSON.
pub fn decode_catalog(content: impl AsRef<[u8]>) -> AppResult<Catalog> {
    let records: Vec<BookRecord> = serde_json::from_slice(content.as_ref())
        .map_err(|e| AppError::Parse(format!("Failed to parse catalog: {}", e)))?;

    Ok(Catalog {
        books: records.into_iter().map(Book::from_record).collect(),
    })
}

/// Read the raw catalog bytes. `None` when the file does not exist yet.
pub fn read_catalog_file(path: &Path) -> AppResult<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Io(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Overwrite the catalog file with the full catalog
pub fn write_catalog_file(path: &Path, catalog: &Catalog) -> AppResult<()> {
    let content = encode_catalog(catalog)?;
    std::fs::write(path, content).map_err(|e| {
        AppError::Io(format!("Failed to write catalog file {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), books = catalog.len(), "catalog saved");
    Ok(())
}

/// Parse a name/score CSV. The first row is a header and is skipped; rows with
/// fewer than two columns are ignored; a score that is not a number fails the
/// whole import.
pub fn parse_scores_csv<R: Read>(reader: R) -> AppResult<ScoreSheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut sheet = ScoreSheet::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() < 2 {
            continue;
        }
        let name = &record[0];
        let raw = &record[1];
        let score: f64 = raw.trim().parse().map_err(|_| {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            AppError::Parse(format!(
                "Invalid score '{}' for '{}' on line {}",
                raw, name, line
            ))
        })?;
        sheet.insert(name, score);
    }
    Ok(sheet)
}

/// Load scores from a CSV file. `None` when the file does not exist.
pub fn read_scores_csv(path: &Path) -> AppResult<Option<ScoreSheet>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let sheet = parse_scores_csv(file)?;
    info!(path = %path.display(), students = sheet.len(), "scores loaded");
    Ok(Some(sheet))
}

/// Write `Name,Marks,Grade` rows in sheet order
pub fn write_grades_csv<W: Write>(writer: W, sheet: &ScoreSheet, report: &GradeReport) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Name", "Marks", "Grade"])?;
    for (name, score) in sheet.iter() {
        let grade = report
            .grades
            .get(name)
            .map(|g| g.as_str())
            .unwrap_or_default();
        wtr.write_record([name, format_score(score).as_str(), grade])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create or overwrite the export file
pub fn export_grades_csv(path: &Path, sheet: &ScoreSheet, report: &GradeReport) -> AppResult<()> {
    let file = File::create(path)
        .map_err(|e| AppError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
    write_grades_csv(file, sheet, report)?;
    info!(path = %path.display(), students = sheet.len(), "grades exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{BookStatus, Grade};
    use std::io::Cursor;
    use std::path::PathBuf;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("classdesk-storage-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_catalog_encodes_as_empty_array() {
        assert_eq!(encode_catalog(&Catalog::new()).unwrap(), "[]");
    }

    #[test]
    fn test_catalog_encoding_uses_flat_records() {
        let mut catalog = Catalog::new();
        catalog.add_book(Book::new("Emma", "Jane Austen", "42"));
        let json = encode_catalog(&catalog).unwrap();

        assert!(json.contains("\n  {"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Emma");
        assert_eq!(value[0]["author"], "Jane Austen");
        assert_eq!(value[0]["isbn"], "42");
        assert_eq!(value[0]["status"], "available");
    }

    #[test]
    fn test_decode_trims_and_defaults_status() {
        let catalog = decode_catalog(
            r#"[{"title":" Emma ","author":"Jane Austen","isbn":" 42"},
                {"title":"Dune","author":"Herbert","isbn":"7","status":"issued"}]"#,
        )
        .unwrap();

        assert_eq!(catalog.books[0], Book::new("Emma", "Jane Austen", "42"));
        assert_eq!(catalog.books[1].status, BookStatus::Issued);
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        assert!(decode_catalog("not json").is_err());
        assert!(decode_catalog(r#"{"title":"Emma"}"#).is_err());
        assert!(decode_catalog(r#"[{"title":"Emma","author":"A"}]"#).is_err());
        assert!(decode_catalog(r#"[{"title":"E","author":"A","isbn":"1","status":"lost"}]"#).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8_as_parse_error() {
        let err = decode_catalog([0xff, 0xfe, b'[', b']']).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_read_missing_catalog_file() {
        let dir = scratch_dir();
        assert!(read_catalog_file(&dir.join("absent.json")).unwrap().is_none());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_parse_scores_skips_header_and_short_rows() {
        let input = "Name,Score\nAsha,95\nlonely\n\nRavi, 58 \n";
        let sheet = parse_scores_csv(Cursor::new(input)).unwrap();

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("Asha"), Some(95.0));
        assert_eq!(sheet.get("Ravi"), Some(58.0));
    }

    #[test]
    fn test_parse_scores_duplicate_name_overwrites() {
        let input = "Name,Score\nAsha,40\nRavi,58\nAsha,91.5,extra\n";
        let sheet = parse_scores_csv(Cursor::new(input)).unwrap();

        let names: Vec<_> = sheet.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Asha", "Ravi"]);
        assert_eq!(sheet.get("Asha"), Some(91.5));
    }

    #[test]
    fn test_parse_scores_bad_number_fails_whole_import() {
        let input = "Name,Score\nAsha,95\nRavi,absent\n";
        let err = parse_scores_csv(Cursor::new(input)).unwrap_err();
        match err {
            AppError::Parse(msg) => {
                assert!(msg.contains("absent"));
                assert!(msg.contains("line 3"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_csv_import_feeds_report() {
        let sheet = parse_scores_csv(Cursor::new("Name,Score\nAsha,95\nRavi,58\n")).unwrap();
        let report = GradeReport::build(&sheet).unwrap();

        assert_eq!(report.summary.average, 76.5);
        assert_eq!(report.summary.median, 76.5);
        assert_eq!(report.summary.highest, 95.0);
        assert_eq!(report.summary.lowest, 58.0);
        assert_eq!(report.grades.get("Asha"), Some(&Grade::A));
        assert_eq!(report.grades.get("Ravi"), Some(&Grade::F));
        assert_eq!(report.passed, vec!["Asha", "Ravi"]);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn test_parse_scores_header_only() {
        assert!(parse_scores_csv(Cursor::new("Name,Score\n")).unwrap().is_empty());
        assert!(parse_scores_csv(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_scores_missing_file() {
        let dir = scratch_dir();
        assert!(read_scores_csv(&dir.join("nope.csv")).unwrap().is_none());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_export_overwrites_with_header_and_rows() {
        let dir = scratch_dir();
        let path = dir.join("grade_output.csv");
        std::fs::write(&path, "stale contents\nthat must go\n").unwrap();

        let sheet: ScoreSheet = [("Asha", 95.0), ("Ravi", 58.5)].into_iter().collect();
        let report = GradeReport::build(&sheet).unwrap();
        export_grades_csv(&path, &sheet, &report).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Name,Marks,Grade\nAsha,95.0,A\nRavi,58.5,F\n");
        std::fs::remove_dir_all(dir).unwrap();
    }
}
