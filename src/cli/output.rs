//! Tabular output rendering shared by the list commands.
//!
//! Each list command flattens its records into a [`ListView`] of string
//! cells, then dispatches on the requested format. Structured formats
//! (json, yaml) bypass this and serialize the records directly so no
//! fidelity is lost to display formatting.

use console::style;

use crate::cli::helpers::escape_csv;

/// A flattened table: one header row plus string cells.
pub struct ListView {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl ListView {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Aligned TSV-style table for terminals, with a record count footer.
    pub fn print_tsv(&self, noun: &str, quiet: bool) {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let header_line = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", style(header_line).bold());

        let sep = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", sep);

        for row in &self.rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ");
            println!("{}", line);
        }

        if !quiet {
            println!();
            println!(
                "{}",
                style(format!("{} {}(s) found", self.rows.len(), noun)).cyan()
            );
        }
    }

    pub fn print_csv(&self) {
        println!(
            "{}",
            self.headers
                .iter()
                .map(|h| escape_csv(h))
                .collect::<Vec<_>>()
                .join(",")
        );
        for row in &self.rows {
            println!(
                "{}",
                row.iter()
                    .map(|c| escape_csv(c))
                    .collect::<Vec<_>>()
                    .join(",")
            );
        }
    }

    pub fn print_md(&self) {
        println!("| {} |", self.headers.join(" | "));
        println!(
            "|{}|",
            self.headers
                .iter()
                .map(|_| "---")
                .collect::<Vec<_>>()
                .join("|")
        );
        for row in &self.rows {
            println!("| {} |", row.join(" | "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_and_empty() {
        let mut view = ListView::new(vec!["A", "B"]);
        assert!(view.is_empty());
        view.push_row(vec!["1".into(), "2".into()]);
        assert!(!view.is_empty());
    }
}
