//! Console output formatting.
//!
//! Colored notices and the end-of-run summary table. Log lines go through the
//! logger; this module only prints the final overview.

use crate::file_organizer::MoveReport;
use colored::*;

/// Prints styled messages to the terminal.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Renders the category table as plain rows, without colors.
    ///
    /// # Example
    ///
    /// ```
    /// use organize::file_category::Category;
    /// use organize::file_organizer::MoveReport;
    /// use organize::output::OutputFormatter;
    ///
    /// let mut report = MoveReport::default();
    /// report.per_category.insert(Category::Images, 2);
    /// report.per_category.insert(Category::Others, 1);
    ///
    /// let rows = OutputFormatter::summary_rows(&report);
    /// assert_eq!(rows, vec![
    ///     ("Images".to_string(), 2),
    ///     ("Others".to_string(), 1),
    /// ]);
    /// ```
    pub fn summary_rows(report: &MoveReport) -> Vec<(String, usize)> {
        report
            .per_category
            .iter()
            .map(|(category, count)| (category.dir_name().to_string(), *count))
            .collect()
    }

    /// Prints a summary table with file counts by category.
    pub fn summary_table(report: &MoveReport) {
        if report.dry_run {
            Self::dry_run_notice("No files were modified. Planned layout:");
        }
        Self::header("SUMMARY");

        let rows = Self::summary_rows(report);
        let width = rows
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8); // At least "Category" width

        println!("{:<width$} | {}", "Category".bold(), "Files".bold(), width = width);
        println!("{}", "-".repeat(width + 10));

        for (category, count) in &rows {
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                plural(*count),
                width = width
            );
        }

        let total = report.total();
        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total.to_string().green().bold(),
            plural(total),
            width = width
        );

        if !report.failures.is_empty() {
            Self::warning(&format!(
                "{} {} could not be organized",
                report.failures.len(),
                plural(report.failures.len())
            ));
        } else if !report.dry_run {
            Self::success("Organization complete");
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_category::Category;
    use crate::file_organizer::MoveFailure;
    use std::path::PathBuf;

    #[test]
    fn test_summary_rows_follow_category_order() {
        let mut report = MoveReport::default();
        report.per_category.insert(Category::Others, 1);
        report.per_category.insert(Category::Scripts, 4);
        report.per_category.insert(Category::Images, 2);

        let names: Vec<String> = OutputFormatter::summary_rows(&report)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["Images", "Scripts", "Others"]);
    }

    #[test]
    fn test_summary_table_prints_with_failures() {
        let mut report = MoveReport::default();
        report.per_category.insert(Category::Audio, 1);
        report.failures.push(MoveFailure {
            path: PathBuf::from("x.mp3"),
            reason: "denied".to_string(),
        });
        OutputFormatter::summary_table(&report);
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1), "file");
        assert_eq!(plural(0), "files");
        assert_eq!(plural(2), "files");
    }
}
