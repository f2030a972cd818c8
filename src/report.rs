// src/report.rs
// =============================================================================
// This module turns the per-year unit sets into the comparison table and
// writes it out.
//
// Shape of the table:
// - one column per requested year, identifiers sorted ascending
// - when exactly two years were requested, two extra columns: the units in
//   the first but not the second, and vice versa
// - every column ends with a blank separator cell and a "total: <n>" marker,
//   where n counts the identifiers only
// - columns have different heights, so rows are padded with empty cells when
//   the grid is assembled
//
// Built once after every year's crawl has finished; never mutated after.
// =============================================================================

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

// The final comparison grid
#[derive(Debug, Serialize)]
pub struct ComparisonTable {
    pub headers: Vec<String>,
    pub columns: Vec<Vec<String>>,
}

impl ComparisonTable {
    // Builds the table from labelled Year Result Sets, in year-argument order
    pub fn build(years: Vec<(String, HashSet<String>)>) -> Self {
        let mut headers: Vec<String> = years.iter().map(|(label, _)| label.clone()).collect();
        let mut columns: Vec<Vec<String>> = years.iter().map(|(_, units)| sorted(units)).collect();

        // The asymmetric differences only make sense for a pairwise comparison
        if let [(label_a, units_a), (label_b, units_b)] = &years[..] {
            headers.push(format!("In {} but not {}", label_a, label_b));
            columns.push(sorted(&(units_a - units_b)));
            headers.push(format!("In {} but not {}", label_b, label_a));
            columns.push(sorted(&(units_b - units_a)));
        }

        for column in &mut columns {
            let total = column.len();
            column.push(String::new());
            column.push(format!("total: {}", total));
        }

        Self { headers, columns }
    }

    // The grid row by row, short columns padded with empty cells
    pub fn rows(&self) -> Vec<Vec<String>> {
        let height = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        (0..height)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.get(row).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    // Writes the header row and the padded grid as CSV
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        writer.write_record(&self.headers)?;
        for row in self.rows() {
            writer.write_record(&row)?;
        }
        writer.flush()?;

        Ok(())
    }
}

fn sorted(units: &HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = units.iter().cloned().collect();
    sorted.sort();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|code| code.to_string()).collect()
    }

    #[test]
    fn test_two_year_comparison() {
        let table = ComparisonTable::build(vec![
            ("2023".to_string(), units(&["ARTS1000", "COMP1001", "MATH2002"])),
            ("2024".to_string(), units(&["COMP1001", "MATH2002", "SCIE3003"])),
        ]);

        assert_eq!(
            table.headers,
            vec![
                "2023",
                "2024",
                "In 2023 but not 2024",
                "In 2024 but not 2023",
            ]
        );
        assert_eq!(
            table.columns[0],
            vec!["ARTS1000", "COMP1001", "MATH2002", "", "total: 3"]
        );
        assert_eq!(
            table.columns[1],
            vec!["COMP1001", "MATH2002", "SCIE3003", "", "total: 3"]
        );
        assert_eq!(table.columns[2], vec!["ARTS1000", "", "total: 1"]);
        assert_eq!(table.columns[3], vec!["SCIE3003", "", "total: 1"]);
    }

    #[test]
    fn test_single_year_has_no_diff_columns() {
        let table = ComparisonTable::build(vec![("2024".to_string(), units(&["COMP1001"]))]);
        assert_eq!(table.headers, vec!["2024"]);
        assert_eq!(table.columns, vec![vec!["COMP1001", "", "total: 1"]]);
    }

    #[test]
    fn test_three_years_have_no_diff_columns() {
        let table = ComparisonTable::build(vec![
            ("2022".to_string(), units(&["AAAA1111"])),
            ("2023".to_string(), units(&["BBBB2222"])),
            ("2024".to_string(), units(&["CCCC3333"])),
        ]);
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.columns.len(), 3);
    }

    #[test]
    fn test_diff_columns_partition_the_union() {
        let a = units(&["AAAA1111", "BBBB2222", "CCCC3333"]);
        let b = units(&["BBBB2222", "CCCC3333", "DDDD4444"]);
        let table = ComparisonTable::build(vec![
            ("A".to_string(), a.clone()),
            ("B".to_string(), b.clone()),
        ]);

        let strip = |column: &Vec<String>| -> HashSet<String> {
            column
                .iter()
                .filter(|cell| !cell.is_empty() && !cell.starts_with("total:"))
                .cloned()
                .collect()
        };

        let only_a = strip(&table.columns[2]);
        let only_b = strip(&table.columns[3]);
        let both: HashSet<String> = a.intersection(&b).cloned().collect();

        // The two diffs are disjoint, and together with the intersection they
        // rebuild the union exactly
        assert!(only_a.is_disjoint(&only_b));
        let rebuilt: HashSet<String> = only_a
            .union(&only_b)
            .cloned()
            .collect::<HashSet<_>>()
            .union(&both)
            .cloned()
            .collect();
        let expected: HashSet<String> = a.union(&b).cloned().collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn test_rows_pad_short_columns() {
        let table = ComparisonTable::build(vec![
            ("2023".to_string(), units(&["AAAA1111", "BBBB2222"])),
            ("2024".to_string(), units(&["AAAA1111"])),
        ]);

        let rows = table.rows();
        // Tallest column: 2 units + separator + total = 4 rows
        assert_eq!(rows.len(), 4);
        // The single-unit year ran out of cells in the last row
        assert_eq!(rows[3][0], "total: 2");
        assert_eq!(rows[3][1], "");
    }

    #[test]
    fn test_write_csv_round_trip() {
        let table = ComparisonTable::build(vec![
            ("2023".to_string(), units(&["ARTS1000"])),
            ("2024".to_string(), units(&["SCIE3003"])),
        ]);

        let path = std::env::temp_dir().join("handbook-diff-report-test.csv");
        table.write_csv(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = written.lines();
        assert_eq!(
            lines.next().unwrap(),
            "2023,2024,In 2023 but not 2024,In 2024 but not 2023"
        );
        assert_eq!(lines.next().unwrap(), "ARTS1000,SCIE3003,ARTS1000,SCIE3003");
        assert_eq!(lines.next().unwrap(), ",,,");
        assert_eq!(
            lines.next().unwrap(),
            "total: 1,total: 1,total: 1,total: 1"
        );
    }
}
