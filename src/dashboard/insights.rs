// Insight generator: a light trend heuristic on the first numeric column,
// followed by fixed advisory text.

use crate::table::Table;

const CHANGE_THRESHOLD: f64 = 15.0;
const EPSILON: f64 = 1e-9;

const ADVISORY: [&str; 3] = [
    "Consider tracking MRR, churn %, ARPU, and cohort retention if applicable.",
    "Add segmentation by plan/tier to spot high-ARPU cohorts.",
    "Investigate onboarding flow if churn increased while signups are steady.",
];

pub fn generate_insights(table: &Table) -> Vec<String> {
    let mut insights = Vec::new();

    // Detect spike/drop in the first numeric column
    if let Some(col) = table.columns().iter().find(|c| c.kind.is_numeric()) {
        let series = col.numeric_series();
        if series.len() >= 3 {
            let last = series[series.len() - 1];
            let prev = series[series.len() - 2];
            let change = (last - prev) / (prev.abs() + EPSILON) * 100.0;
            let line = if change > CHANGE_THRESHOLD {
                format!(
                    "{}: Significant uptick of {:.1}% in the latest period.",
                    col.name, change
                )
            } else if change < -CHANGE_THRESHOLD {
                format!(
                    "{}: Significant drop of {:.1}% in the latest period.",
                    col.name, change
                )
            } else {
                format!("{}: Stable trend (Δ {:.1}%).", col.name, change)
            };
            insights.push(line);
        }
    }

    insights.extend(ADVISORY.iter().map(|s| s.to_string()));
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, Column};

    fn numeric_table(name: &str, values: &[i64]) -> Table {
        Table::new(vec![Column::new(
            name,
            values.iter().map(|v| CellValue::Int(*v)).collect(),
        )])
        .unwrap()
    }

    #[test]
    fn detects_significant_uptick() {
        let insights = generate_insights(&numeric_table("mrr", &[100, 120, 200]));
        assert_eq!(insights.len(), 4);
        assert_eq!(
            insights[0],
            "mrr: Significant uptick of 66.7% in the latest period."
        );
    }

    #[test]
    fn detects_significant_drop() {
        let insights = generate_insights(&numeric_table("mrr", &[100, 200, 100]));
        assert_eq!(
            insights[0],
            "mrr: Significant drop of -50.0% in the latest period."
        );
    }

    #[test]
    fn small_changes_read_as_stable() {
        let insights = generate_insights(&numeric_table("mrr", &[100, 100, 110]));
        assert_eq!(insights[0], "mrr: Stable trend (Δ 10.0%).");
    }

    #[test]
    fn zero_previous_value_is_guarded() {
        let insights = generate_insights(&numeric_table("mrr", &[5, 0, 10]));
        assert!(insights[0].contains("Significant uptick"));
    }

    #[test]
    fn short_series_emits_only_advisories() {
        let insights = generate_insights(&numeric_table("mrr", &[100, 120]));
        assert_eq!(insights, ADVISORY.to_vec());
    }

    #[test]
    fn missing_values_are_dropped_before_the_tail() {
        let table = Table::new(vec![Column::new(
            "mrr",
            vec![
                CellValue::Int(100),
                CellValue::Int(120),
                CellValue::Missing,
                CellValue::Int(200),
            ],
        )])
        .unwrap();
        let insights = generate_insights(&table);
        assert_eq!(
            insights[0],
            "mrr: Significant uptick of 66.7% in the latest period."
        );
    }

    #[test]
    fn text_only_table_emits_exactly_the_three_advisories() {
        let table = Table::new(vec![Column::new(
            "plan",
            vec![
                CellValue::Text("basic".to_string()),
                CellValue::Text("pro".to_string()),
                CellValue::Text("pro".to_string()),
            ],
        )])
        .unwrap();
        let insights = generate_insights(&table);
        assert_eq!(insights, ADVISORY.to_vec());
    }

    #[test]
    fn first_numeric_column_is_selected_by_table_order() {
        let table = Table::new(vec![
            Column::new(
                "plan",
                vec![
                    CellValue::Text("a".to_string()),
                    CellValue::Text("b".to_string()),
                    CellValue::Text("c".to_string()),
                ],
            ),
            Column::new(
                "seats",
                vec![CellValue::Int(10), CellValue::Int(10), CellValue::Int(10)],
            ),
            Column::new(
                "mrr",
                vec![CellValue::Int(100), CellValue::Int(120), CellValue::Int(200)],
            ),
        ])
        .unwrap();
        let insights = generate_insights(&table);
        assert!(insights[0].starts_with("seats:"));
    }
}
