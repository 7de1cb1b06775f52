//! Grade assignment and score statistics

use crate::core::data::{Grade, GradeDistribution, GradeReport, ScoreSheet, ScoreSummary};
use indexmap::IndexMap;

/// Scores at or above this count as passed
pub const PASS_THRESHOLD: f64 = 40.0;

/// Map a score to its grade band. Lower bounds are inclusive; the score is not range-checked.
pub fn assign_grade(score: f64) -> Grade {
    if score >= 90.0 {
        Grade::A
    } else if score >= 80.0 {
        Grade::B
    } else if score >= 70.0 {
        Grade::C
    } else if score >= 60.0 {
        Grade::D
    } else {
        Grade::F
    }
}

fn median(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

impl ScoreSheet {
    /// Mean, median, highest and lowest score. `None` for an empty sheet.
    pub fn summary(&self) -> Option<ScoreSummary> {
        let scores: Vec<f64> = self.marks.values().copied().collect();
        let median = median(&scores)?;

        let average = scores.iter().sum::<f64>() / scores.len() as f64;
        let highest = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lowest = scores.iter().copied().fold(f64::INFINITY, f64::min);

        Some(ScoreSummary {
            average,
            median,
            highest,
            lowest,
        })
    }

    /// Grade for every student, in sheet order
    pub fn grades(&self) -> IndexMap<String, Grade> {
        self.iter()
            .map(|(name, score)| (name.to_string(), assign_grade(score)))
            .collect()
    }

    /// Names split into (passed, failed), each in sheet order
    pub fn pass_fail(&self) -> (Vec<String>, Vec<String>) {
        let mut passed = Vec::new();
        let mut failed = Vec::new();
        for (name, score) in self.iter() {
            if score >= PASS_THRESHOLD {
                passed.push(name.to_string());
            } else {
                failed.push(name.to_string());
            }
        }
        (passed, failed)
    }
}

pub fn grade_distribution<'a>(grades: impl IntoIterator<Item = &'a Grade>) -> GradeDistribution {
    let mut dist = GradeDistribution::default();
    for grade in grades {
        dist.record(*grade);
    }
    dist
}

impl GradeReport {
    /// Build the full report for a sheet. `None` when there is nothing to analyse.
    pub fn build(sheet: &ScoreSheet) -> Option<Self> {
        let summary = sheet.summary()?;
        let grades = sheet.grades();
        let distribution = grade_distribution(grades.values());
        let (passed, failed) = sheet.pass_fail();

        Some(Self {
            summary,
            grades,
            distribution,
            passed,
            failed,
        })
    }
}
