// Gradebook menu - manual entry, CSV import, analysis and export

use std::io::BufRead;
use std::path::Path;

use crate::config::Config;
use crate::core::data::{GradeReport, ScoreSheet};
use crate::storage;
use crate::utils::error::{handle_flow, report_error, AppResult, FlowResult};
use crate::utils::interactive::{prompt_input, prompt_parse, prompt_yes_no};
use crate::utils::output::{print_goodbye, print_success, print_warning, OutputStyle};
use crate::utils::stats::StatsCalculator;

const MENU: [&str; 3] = ["Manual Entry", "Load from CSV File", "Exit"];

/// Run the gradebook menu until the user exits
pub fn run_gradebook<R: BufRead>(config: &Config, input: &mut R) -> AppResult<()> {
    loop {
        OutputStyle::print_menu("   GRADEBOOK ANALYZER CLI", &MENU);
        let choice = prompt_input(input, "Choose option (1/2/3): ")?;

        let sheet = match choice.as_str() {
            "1" => manual_input(input)?,
            "2" => match load_csv(input)? {
                Some(sheet) => sheet,
                None => continue,
            },
            "3" => {
                println!("Exiting program... Goodbye!");
                return Ok(());
            }
            _ => {
                print_warning("Invalid choice, try again.");
                continue;
            }
        };

        let Some(report) = GradeReport::build(&sheet) else {
            handle_flow(FlowResult::EmptyList {
                item_type: "students to analyze".to_string(),
            });
            continue;
        };

        StatsCalculator::print_report(&sheet, &report);

        if prompt_yes_no(input, "\nExport results to CSV?")? {
            export(&config.gradebook.export_file, &sheet, &report);
        }

        if !prompt_yes_no(input, "\nRun another analysis?")? {
            print_goodbye();
            return Ok(());
        }
    }
}

/// Ask for a student count, then a name and score for each.
/// A repeated name overwrites the earlier score.
pub fn manual_input<R: BufRead>(input: &mut R) -> AppResult<ScoreSheet> {
    let count: usize = prompt_parse(input, "\nEnter number of students: ")?;

    let mut sheet = ScoreSheet::new();
    for _ in 0..count {
        let name = prompt_input(input, "Enter student name: ")?;
        let score: f64 = prompt_parse(input, &format!("Enter marks for {}: ", name))?;
        sheet.insert(name, score);
    }
    Ok(sheet)
}

/// Ask for a CSV path and import it. `None` means there is nothing to analyze.
pub fn load_csv<R: BufRead>(input: &mut R) -> AppResult<Option<ScoreSheet>> {
    let filename = prompt_input(input, "\nEnter CSV filename (example: data.csv): ")?;

    let loaded = storage::read_scores_csv(Path::new(&filename));
    match loaded {
        Ok(Some(sheet)) => {
            print_success("CSV loaded successfully!");
            if sheet.is_empty() {
                handle_flow(FlowResult::EmptyList {
                    item_type: "student rows".to_string(),
                });
                return Ok(None);
            }
            Ok(Some(sheet))
        }
        Ok(None) => {
            handle_flow(FlowResult::NotFound {
                item_type: "CSV file".to_string(),
                search_term: filename,
            });
            Ok(None)
        }
        Err(e) => {
            report_error(&e);
            Ok(None)
        }
    }
}

fn export(path: &Path, sheet: &ScoreSheet, report: &GradeReport) {
    match storage::export_grades_csv(path, sheet, report) {
        Ok(()) => print_success(&format!("CSV exported successfully as {}", path.display())),
        Err(e) => report_error(&e),
    }
}
