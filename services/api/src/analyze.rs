use crate::infra::load_expense_history;
use clap::Args;
use fineclaire::analysis::{analyze, FinancialAnalysis, FinancialSnapshot};
use fineclaire::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Single-period income
    #[arg(long)]
    pub(crate) income: f64,
    /// Comma-separated monthly expense history (e.g. 4800,4700,4900)
    #[arg(long, value_delimiter = ',')]
    pub(crate) monthly_expenses: Vec<f64>,
    /// CSV export of the expense history (month,amount); overrides
    /// --monthly-expenses when given
    #[arg(long)]
    pub(crate) expenses_csv: Option<PathBuf>,
    /// Discretionary portion of monthly spending
    #[arg(long, default_value_t = 0.0)]
    pub(crate) discretionary_expenses: f64,
    /// Capital currently allocated to trading
    #[arg(long, default_value_t = 0.0)]
    pub(crate) trading_capital: f64,
    /// Funds available to invest (defaults to income)
    #[arg(long)]
    pub(crate) investable_funds: Option<f64>,
    /// Print the raw JSON payload instead of the rendered report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        income,
        monthly_expenses,
        expenses_csv,
        discretionary_expenses,
        trading_capital,
        investable_funds,
        json,
    } = args;

    let monthly_expenses = match expenses_csv {
        Some(path) => load_expense_history(&path)?,
        None => monthly_expenses,
    };

    let snapshot = FinancialSnapshot {
        income,
        monthly_expenses,
        discretionary_expenses,
        trading_capital,
        investable_funds,
    };

    let analysis = analyze(&snapshot);

    if json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("analysis payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_analysis(&snapshot, &analysis);
    Ok(())
}

fn render_analysis(snapshot: &FinancialSnapshot, analysis: &FinancialAnalysis) {
    println!("FinEclaire analysis");
    println!(
        "- income {:.2} | {} month(s) of expenses totalling {:.2}",
        snapshot.income,
        snapshot.monthly_expenses.len(),
        snapshot.total_expenses()
    );

    println!("Metrics:");
    println!("  - savings ratio: {}", analysis.metrics.savings_ratio);
    println!(
        "  - discretionary percentage: {}",
        analysis.metrics.discretionary_percentage
    );
    println!(
        "  - expense volatility: {}",
        analysis.metrics.expense_volatility
    );
    println!("  - trading exposure: {}", analysis.metrics.trading_exposure);

    println!(
        "Outcome probabilities: loss {:.2} | neutral {:.2} | gain {:.2}",
        analysis.probabilities.loss, analysis.probabilities.neutral, analysis.probabilities.gain
    );

    if analysis.recommended_actions.is_empty() {
        println!("Recommended actions: none");
        return;
    }

    println!("Recommended actions:");
    for action in &analysis.recommended_actions {
        println!("  - [{:?}] {}", action.id, action.title);
        println!("      reason: {}", action.reason);
        println!("      suggested change: {}", action.suggested_change);
    }
}
