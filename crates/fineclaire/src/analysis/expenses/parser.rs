use super::ExpenseImportError;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "month", alias = "Month", default)]
    #[allow(dead_code)]
    month: Option<String>,
    #[serde(rename = "amount", alias = "Amount")]
    amount: String,
}

pub(crate) fn parse_amounts<R: Read>(reader: R) -> Result<Vec<f64>, ExpenseImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut amounts = Vec::new();

    for (index, record) in csv_reader.deserialize::<ExpenseRow>().enumerate() {
        let row = record?;
        // header occupies the first line of the file
        let line = index + 2;

        let value = match row.amount.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                return Err(ExpenseImportError::InvalidAmount {
                    row: line,
                    value: row.amount,
                })
            }
        };

        if value < 0.0 {
            return Err(ExpenseImportError::NegativeAmount { row: line, value });
        }

        amounts.push(value);
    }

    Ok(amounts)
}
