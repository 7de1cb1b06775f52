use crate::core::data::{GradeReport, ScoreSheet};
use crate::utils::format::{format_name_list, format_score};
use crate::utils::output::OutputStyle;

/// Printing of a finished grade report
pub struct StatsCalculator;

impl StatsCalculator {
    /// Statistics, distribution, pass/fail summary and the results table
    pub fn print_report(sheet: &ScoreSheet, report: &GradeReport) {
        Self::print_summary(report);
        Self::print_distribution(report);
        Self::print_pass_fail(report);

        OutputStyle::print_section("RESULTS TABLE");
        Self::print_table(sheet, report);
    }

    fn print_summary(report: &GradeReport) {
        let summary = &report.summary;
        OutputStyle::print_section("STATISTICAL ANALYSIS");
        println!("Average Score: {}", OutputStyle::info(&format!("{:.2}", summary.average)));
        println!("Median Score: {}", OutputStyle::info(&format_score(summary.median)));
        println!("Highest Score: {}", OutputStyle::info(&format_score(summary.highest)));
        println!("Lowest Score: {}", OutputStyle::info(&format_score(summary.lowest)));
    }

    fn print_distribution(report: &GradeReport) {
        OutputStyle::print_section("GRADE DISTRIBUTION");
        for (grade, count) in report.distribution.iter() {
            println!("{}: {}", OutputStyle::label(grade.as_str()), count);
        }
    }

    fn print_pass_fail(report: &GradeReport) {
        OutputStyle::print_section("PASS / FAIL SUMMARY");
        println!(
            "{} ({}): {}",
            OutputStyle::success("Passed"),
            report.passed.len(),
            format_name_list(&report.passed)
        );
        println!(
            "{} ({}): {}",
            OutputStyle::error("Failed"),
            report.failed.len(),
            format_name_list(&report.failed)
        );
    }

    /// Tab-separated name / marks / grade rows in sheet order
    pub fn print_table(sheet: &ScoreSheet, report: &GradeReport) {
        println!("\n{}", OutputStyle::header("Name\t\tMarks\tGrade"));
        println!("{}", OutputStyle::separator());
        for line in Self::table_rows(sheet, report) {
            println!("{}", line);
        }
    }

    pub fn table_rows(sheet: &ScoreSheet, report: &GradeReport) -> Vec<String> {
        sheet
            .iter()
            .map(|(name, score)| {
                let grade = report.grades.get(name).map(|g| g.as_str()).unwrap_or_default();
                format!("{}\t\t{}\t{}", name, format_score(score), grade)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_follow_sheet_order() {
        let sheet: ScoreSheet = [("Ravi", 58.0), ("Asha", 95.5)].into_iter().collect();
        let report = GradeReport::build(&sheet).unwrap();

        assert_eq!(
            StatsCalculator::table_rows(&sheet, &report),
            vec!["Ravi\t\t58.0\tF", "Asha\t\t95.5\tA"]
        );
    }
}
