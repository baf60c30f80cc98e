//! Metric calculators mapping raw money figures to comparable ratios.
//!
//! Every function is total: an unusable denominator (zero or negative
//! income, empty expense history, zero average) yields 0.0 for that ratio
//! instead of an error.

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// `(income - total_expenses) / income`. Returns 0.0 when `income <= 0`.
pub fn savings_ratio(income: f64, total_expenses: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    round4((income - total_expenses) / income)
}

/// `discretionary_expenses / income`. Returns 0.0 when `income <= 0`.
pub fn discretionary_percentage(discretionary_expenses: f64, income: f64) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }
    round4(discretionary_expenses / income)
}

/// Range-based dispersion of the monthly expense history:
/// `(max - min) / average`. Needs at least two samples and a non-zero
/// average; otherwise 0.0. Deliberately not a standard deviation.
pub fn expense_volatility(monthly_expenses: &[f64]) -> f64 {
    if monthly_expenses.len() < 2 {
        return 0.0;
    }

    let average = monthly_expenses.iter().sum::<f64>() / monthly_expenses.len() as f64;
    if average == 0.0 {
        return 0.0;
    }

    let max = monthly_expenses.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let min = monthly_expenses.iter().fold(f64::INFINITY, |a, &b| a.min(b));

    round4((max - min) / average)
}

/// `trading_capital / investable_funds`. Returns 0.0 when
/// `investable_funds <= 0`.
pub fn trading_exposure(trading_capital: f64, investable_funds: f64) -> f64 {
    if investable_funds <= 0.0 {
        return 0.0;
    }
    round4(trading_capital / investable_funds)
}
