//! Action recommender: an ordered table of independent threshold rules.
//!
//! Rules are evaluated in table order and never suppress one another, so a
//! response carries zero to three actions. Record text is static; only the
//! choice of rule depends on the metrics.

use super::domain::MetricSet;
use serde::{Deserialize, Serialize};

/// Closed set of action identifiers, unique within one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionId {
    ReduceDiscretionary,
    StabilizeExpenses,
    ReduceTradingExposure,
}

/// One rule-triggered recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedAction {
    pub id: ActionId,
    pub title: &'static str,
    pub reason: &'static str,
    pub suggested_change: &'static str,
}

struct ActionRule {
    id: ActionId,
    title: &'static str,
    reason: &'static str,
    suggested_change: &'static str,
    triggers: fn(&MetricSet) -> bool,
}

const SAVINGS_RATIO_FLOOR: f64 = 0.15;
const EXPENSE_VOLATILITY_CEILING: f64 = 0.25;
const TRADING_EXPOSURE_CEILING: f64 = 0.30;

fn savings_below_floor(metrics: &MetricSet) -> bool {
    metrics.savings_ratio < SAVINGS_RATIO_FLOOR
}

fn expenses_too_volatile(metrics: &MetricSet) -> bool {
    metrics.expense_volatility > EXPENSE_VOLATILITY_CEILING
}

fn trading_over_exposed(metrics: &MetricSet) -> bool {
    metrics.trading_exposure > TRADING_EXPOSURE_CEILING
}

// Evaluation order is emission order. `discretionary_percentage` carries no
// rule yet; it stays in MetricSet for future rules.
const ACTION_RULES: [ActionRule; 3] = [
    ActionRule {
        id: ActionId::ReduceDiscretionary,
        title: "Reduce discretionary spending",
        reason: "Savings rate is below a stable threshold",
        suggested_change: "Reduce discretionary expenses by 10–15%",
        triggers: savings_below_floor,
    },
    ActionRule {
        id: ActionId::StabilizeExpenses,
        title: "Stabilize monthly expenses",
        reason: "High month-to-month expense variation",
        suggested_change: "Set fixed monthly caps for non-essential spending",
        triggers: expenses_too_volatile,
    },
    ActionRule {
        id: ActionId::ReduceTradingExposure,
        title: "Reduce trading exposure",
        reason: "High portion of funds allocated to trading",
        suggested_change: "Lower trading capital allocation",
        triggers: trading_over_exposed,
    },
];

/// Evaluate every rule against the metric set, emitting one record per
/// triggered rule in table order.
pub fn recommended_actions(metrics: &MetricSet) -> Vec<RecommendedAction> {
    ACTION_RULES
        .iter()
        .filter(|rule| (rule.triggers)(metrics))
        .map(|rule| RecommendedAction {
            id: rule.id,
            title: rule.title,
            reason: rule.reason,
            suggested_change: rule.suggested_change,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(
        savings_ratio: f64,
        discretionary_percentage: f64,
        expense_volatility: f64,
        trading_exposure: f64,
    ) -> MetricSet {
        MetricSet {
            savings_ratio,
            discretionary_percentage,
            expense_volatility,
            trading_exposure,
        }
    }

    #[test]
    fn healthy_metrics_trigger_nothing() {
        let actions = recommended_actions(&metrics(0.25, 0.1, 0.05, 0.1));
        assert!(actions.is_empty());
    }

    #[test]
    fn thresholds_compare_strictly() {
        // sitting exactly on a boundary fires no rule
        let actions = recommended_actions(&metrics(0.15, 0.1, 0.25, 0.30));
        assert!(actions.is_empty());
    }

    #[test]
    fn each_rule_fires_independently() {
        let low_savings = recommended_actions(&metrics(0.1499, 0.0, 0.0, 0.0));
        assert_eq!(low_savings.len(), 1);
        assert_eq!(low_savings[0].id, ActionId::ReduceDiscretionary);

        let volatile = recommended_actions(&metrics(0.20, 0.0, 0.2501, 0.0));
        assert_eq!(volatile.len(), 1);
        assert_eq!(volatile[0].id, ActionId::StabilizeExpenses);

        let over_exposed = recommended_actions(&metrics(0.20, 0.0, 0.0, 0.3001));
        assert_eq!(over_exposed.len(), 1);
        assert_eq!(over_exposed[0].id, ActionId::ReduceTradingExposure);
    }

    #[test]
    fn all_rules_can_fire_in_table_order() {
        let actions = recommended_actions(&metrics(0.05, 0.4, 0.35, 0.5));
        let ids: Vec<ActionId> = actions.iter().map(|action| action.id).collect();
        assert_eq!(
            ids,
            vec![
                ActionId::ReduceDiscretionary,
                ActionId::StabilizeExpenses,
                ActionId::ReduceTradingExposure,
            ]
        );
    }

    #[test]
    fn discretionary_percentage_triggers_no_rule() {
        let actions = recommended_actions(&metrics(0.20, 0.99, 0.0, 0.0));
        assert!(actions.is_empty());
    }

    #[test]
    fn action_ids_serialize_in_upper_snake_case() {
        let value = serde_json::to_value(ActionId::ReduceTradingExposure).expect("serializes");
        assert_eq!(value, serde_json::json!("REDUCE_TRADING_EXPOSURE"));
    }
}
