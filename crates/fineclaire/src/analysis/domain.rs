use serde::{Deserialize, Serialize};

/// Raw financial figures submitted for a single analysis.
///
/// Callers are expected to supply non-negative amounts; the engine never
/// validates and instead degrades the affected ratio to 0.0 when a
/// denominator is unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub income: f64,
    pub monthly_expenses: Vec<f64>,
    pub discretionary_expenses: f64,
    #[serde(default)]
    pub trading_capital: f64,
    /// Funds available to invest. `None` falls back to `income`.
    #[serde(default)]
    pub investable_funds: Option<f64>,
}

impl FinancialSnapshot {
    /// Multi-month expense total consumed by the savings ratio. The sum is
    /// an orchestration concern, not part of the metric calculators.
    pub fn total_expenses(&self) -> f64 {
        self.monthly_expenses.iter().sum()
    }

    pub fn investable_funds_or_income(&self) -> f64 {
        self.investable_funds.unwrap_or(self.income)
    }
}

/// Normalized financial health ratios, each rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub savings_ratio: f64,
    pub discretionary_percentage: f64,
    pub expense_volatility: f64,
    pub trading_exposure: f64,
}
