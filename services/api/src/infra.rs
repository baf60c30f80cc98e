use fineclaire::analysis::ExpenseHistoryImporter;
use fineclaire::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_expense_history(path: &Path) -> Result<Vec<f64>, AppError> {
    let file = File::open(path)?;
    Ok(ExpenseHistoryImporter::from_reader(file)?)
}
