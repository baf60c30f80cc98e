use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use fineclaire::analysis::{
    analyze, ExpenseHistoryImporter, FinancialSnapshot, MetricSet, OutcomeProbabilities,
    RecommendedAction,
};
use fineclaire::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) income: f64,
    #[serde(default)]
    pub(crate) monthly_expenses: Vec<f64>,
    /// Inline CSV export (`month,amount`) as an alternative expense source.
    #[serde(default)]
    pub(crate) expenses_csv: Option<String>,
    pub(crate) discretionary_expenses: f64,
    #[serde(default)]
    pub(crate) trading_capital: f64,
    #[serde(default)]
    pub(crate) investable_funds: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) expense_source: ExpenseSource,
    pub(crate) metrics: MetricSet,
    pub(crate) probabilities: OutcomeProbabilities,
    pub(crate) recommended_actions: Vec<RecommendedAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ExpenseSource {
    Inline,
    Csv,
}

pub(crate) fn analysis_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/finance/analyze",
            axum::routing::post(analyze_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_endpoint(
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let AnalyzeRequest {
        income,
        monthly_expenses,
        expenses_csv,
        discretionary_expenses,
        trading_capital,
        investable_funds,
    } = payload;

    let (monthly_expenses, expense_source) = if let Some(csv) = expenses_csv {
        let amounts = ExpenseHistoryImporter::from_reader(Cursor::new(csv.into_bytes()))?;
        (amounts, ExpenseSource::Csv)
    } else {
        (monthly_expenses, ExpenseSource::Inline)
    };

    let snapshot = FinancialSnapshot {
        income,
        monthly_expenses,
        discretionary_expenses,
        trading_capital,
        investable_funds,
    };

    let analysis = analyze(&snapshot);

    Ok(Json(AnalyzeResponse {
        expense_source,
        metrics: analysis.metrics,
        probabilities: analysis.probabilities,
        recommended_actions: analysis.recommended_actions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fineclaire::analysis::ActionId;

    fn base_request() -> AnalyzeRequest {
        AnalyzeRequest {
            income: 5000.0,
            monthly_expenses: vec![4800.0, 4700.0, 4900.0],
            expenses_csv: None,
            discretionary_expenses: 500.0,
            trading_capital: 0.0,
            investable_funds: None,
        }
    }

    #[tokio::test]
    async fn analyze_endpoint_returns_the_combined_record() {
        let Json(body) = analyze_endpoint(Json(base_request()))
            .await
            .expect("analysis succeeds");

        assert_eq!(body.expense_source, ExpenseSource::Inline);
        assert_eq!(body.metrics.savings_ratio, -1.88);
        assert_eq!(body.metrics.expense_volatility, 0.0417);
        assert!((body.probabilities.loss + body.probabilities.neutral + body.probabilities.gain
            - 1.0)
            .abs()
            < 1e-9);
        assert_eq!(body.recommended_actions.len(), 1);
        assert_eq!(body.recommended_actions[0].id, ActionId::ReduceDiscretionary);
    }

    #[tokio::test]
    async fn analyze_endpoint_accepts_an_inline_csv_history() {
        let mut request = base_request();
        request.monthly_expenses = Vec::new();
        request.expenses_csv =
            Some("month,amount\n2025-01,4800\n2025-02,4700\n2025-03,4900\n".to_string());

        let Json(body) = analyze_endpoint(Json(request))
            .await
            .expect("analysis succeeds");

        assert_eq!(body.expense_source, ExpenseSource::Csv);
        assert_eq!(body.metrics.expense_volatility, 0.0417);
    }

    #[tokio::test]
    async fn analyze_endpoint_rejects_a_broken_csv_history() {
        let mut request = base_request();
        request.expenses_csv = Some("month,amount\n2025-01,abc\n".to_string());

        let err = analyze_endpoint(Json(request))
            .await
            .expect_err("broken history rejected");
        assert!(matches!(err, AppError::Import(_)));
    }

    #[tokio::test]
    async fn defaults_mirror_the_public_contract() {
        // trading_capital defaults to 0 and investable_funds to income
        let request: AnalyzeRequest = serde_json::from_value(serde_json::json!({
            "income": 1000.0,
            "monthly_expenses": [500.0],
            "discretionary_expenses": 100.0,
        }))
        .expect("minimal payload deserializes");

        let Json(body) = analyze_endpoint(Json(request))
            .await
            .expect("analysis succeeds");
        assert_eq!(body.metrics.trading_exposure, 0.0);
    }

    #[tokio::test]
    async fn missing_required_fields_fail_at_the_boundary() {
        let result: Result<AnalyzeRequest, _> = serde_json::from_value(serde_json::json!({
            "monthly_expenses": [500.0],
            "discretionary_expenses": 100.0,
        }));
        assert!(result.is_err(), "income is required");
    }

    #[tokio::test]
    async fn router_exposes_the_health_endpoint() {
        use tower::ServiceExt;

        let response = analysis_routes()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
