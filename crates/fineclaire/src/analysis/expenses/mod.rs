//! Expense-history CSV intake.
//!
//! Accepts exports with an `amount` column and an optional `month` label
//! column. Only the amounts feed the analysis; the month label exists for
//! human traceability and is ignored by the math.

mod parser;

use std::io::Read;

/// Error raised when an expense-history export cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseImportError {
    #[error("failed to read expense history csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: amount '{value}' is not a number")]
    InvalidAmount { row: usize, value: String },
    #[error("row {row}: negative amount {value}")]
    NegativeAmount { row: usize, value: f64 },
}

/// Reads per-month expense amounts out of a CSV export.
pub struct ExpenseHistoryImporter;

impl ExpenseHistoryImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<f64>, ExpenseImportError> {
        parser::parse_amounts(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_month_and_amount_columns() {
        let csv = "month,amount\n2025-01,4800\n2025-02,4700\n2025-03,4900\n";
        let amounts =
            ExpenseHistoryImporter::from_reader(Cursor::new(csv)).expect("history parses");
        assert_eq!(amounts, vec![4800.0, 4700.0, 4900.0]);
    }

    #[test]
    fn tolerates_amount_only_exports() {
        let csv = "amount\n1200.50\n980\n";
        let amounts =
            ExpenseHistoryImporter::from_reader(Cursor::new(csv)).expect("history parses");
        assert_eq!(amounts, vec![1200.50, 980.0]);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let csv = "month,amount\n 2025-01 , 4800 \n";
        let amounts =
            ExpenseHistoryImporter::from_reader(Cursor::new(csv)).expect("history parses");
        assert_eq!(amounts, vec![4800.0]);
    }

    #[test]
    fn reports_the_offending_row_for_bad_amounts() {
        let csv = "month,amount\n2025-01,4800\n2025-02,lots\n";
        let err = ExpenseHistoryImporter::from_reader(Cursor::new(csv))
            .expect_err("non-numeric amount rejected");
        match err {
            ExpenseImportError::InvalidAmount { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidAmount, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_amounts() {
        let csv = "month,amount\n2025-01,-50\n";
        let err = ExpenseHistoryImporter::from_reader(Cursor::new(csv))
            .expect_err("negative amount rejected");
        assert!(matches!(
            err,
            ExpenseImportError::NegativeAmount { row: 2, .. }
        ));
    }

    #[test]
    fn empty_history_is_allowed() {
        let csv = "month,amount\n";
        let amounts =
            ExpenseHistoryImporter::from_reader(Cursor::new(csv)).expect("history parses");
        assert!(amounts.is_empty());
    }
}
