//! Financial analysis pipeline.
//!
//! Three stateless stages run per request: metric derivation, probability
//! scoring, and action recommendation. Data flows one way; the scorer and
//! recommender both consume the metric set and know nothing about each
//! other.

pub mod actions;
pub mod domain;
pub mod expenses;
pub mod metrics;
pub mod probability;

pub use actions::{recommended_actions, ActionId, RecommendedAction};
pub use domain::{FinancialSnapshot, MetricSet};
pub use expenses::{ExpenseHistoryImporter, ExpenseImportError};
pub use probability::{stability_probability, OutcomeProbabilities};

use serde::Serialize;

/// Combined output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialAnalysis {
    pub metrics: MetricSet,
    pub probabilities: OutcomeProbabilities,
    pub recommended_actions: Vec<RecommendedAction>,
}

/// Run the full pipeline over a snapshot.
///
/// The monthly expense history is summed into a single total before the
/// savings ratio is computed; `investable_funds` falls back to `income`
/// when absent.
pub fn analyze(snapshot: &FinancialSnapshot) -> FinancialAnalysis {
    let total_expenses = snapshot.total_expenses();

    let metrics = MetricSet {
        savings_ratio: metrics::savings_ratio(snapshot.income, total_expenses),
        discretionary_percentage: metrics::discretionary_percentage(
            snapshot.discretionary_expenses,
            snapshot.income,
        ),
        expense_volatility: metrics::expense_volatility(&snapshot.monthly_expenses),
        trading_exposure: metrics::trading_exposure(
            snapshot.trading_capital,
            snapshot.investable_funds_or_income(),
        ),
    };

    let probabilities =
        probability::stability_probability(metrics.savings_ratio, metrics.expense_volatility);
    let recommended_actions = actions::recommended_actions(&metrics);

    FinancialAnalysis {
        metrics,
        probabilities,
        recommended_actions,
    }
}
