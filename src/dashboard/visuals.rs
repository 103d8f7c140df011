// Visualization recommender: three independent, additive rules evaluated
// in fixed order over the semantic assignment.

use serde::Serialize;

use super::semantics::{SemanticLabel, Semantics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Heatmap,
}

/// Value-axis binding: a single column or an ordered shortlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum YAxis {
    Column(String),
    Columns(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualSpec {
    pub title: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<YAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub why: String,
}

const TREND_MEASURE_LIMIT: usize = 3;

pub fn recommend_visuals(semantics: &Semantics) -> Vec<VisualSpec> {
    let mut visuals = Vec::new();

    let date_cols = semantics.names_where(|l| l == SemanticLabel::Date);
    let measure_cols = semantics.names_where(|l| l.is_measure_like());
    let dim_cols = semantics.names_where(|l| l == SemanticLabel::Dimension);

    // Time series if we have a date column
    if !date_cols.is_empty() && !measure_cols.is_empty() {
        visuals.push(VisualSpec {
            title: "Trend Over Time".to_string(),
            chart_type: ChartType::Line,
            x: date_cols[0].to_string(),
            y: Some(YAxis::Columns(
                measure_cols
                    .iter()
                    .take(TREND_MEASURE_LIMIT)
                    .map(|c| (*c).to_string())
                    .collect(),
            )),
            agg: None,
            value: None,
            why: "Shows growth/decline across time for key measures.".to_string(),
        });
    }

    // Top categories
    if let (Some(dim), Some(measure)) = (dim_cols.first(), measure_cols.first()) {
        visuals.push(VisualSpec {
            title: "Top Categories".to_string(),
            chart_type: ChartType::Bar,
            x: (*dim).to_string(),
            y: Some(YAxis::Column((*measure).to_string())),
            agg: Some("sum".to_string()),
            value: None,
            why: "Ranks top contributing categories (customers, plans, regions).".to_string(),
        });
    }

    // Cohort-like suggestion if any signup + retention-like column exists.
    // The emitted axis names are fixed placeholders; the matched column
    // names are deliberately not used here.
    let names_lower: Vec<String> = semantics.iter().map(|(n, _)| n.to_lowercase()).collect();
    let has_signup = names_lower.iter().any(|n| n.contains("signup"));
    let has_retention = names_lower
        .iter()
        .any(|n| n.contains("active") || n.contains("retention"));
    if has_signup && has_retention {
        visuals.push(VisualSpec {
            title: "Retention by Signup Cohort".to_string(),
            chart_type: ChartType::Heatmap,
            x: "signup_month".to_string(),
            y: Some(YAxis::Column("cohort_month".to_string())),
            agg: None,
            value: Some("retention_rate".to_string()),
            why: "Highlights user retention patterns.".to_string(),
        });
    }

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::semantics::classify_table;
    use crate::table::{CellValue, Column, Table};

    fn text(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::Text(v.to_string())).collect()
    }

    fn ints(values: &[i64]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::Int(*v)).collect()
    }

    fn saas_table() -> Table {
        Table::new(vec![
            Column::new("signup_date", text(&["2024-01", "2024-02", "2024-03"])),
            Column::new("mrr", ints(&[100, 120, 200])),
            Column::new("plan", text(&["basic", "basic", "pro"])),
        ])
        .unwrap()
    }

    #[test]
    fn trend_then_top_categories_in_that_order() {
        let visuals = recommend_visuals(&classify_table(&saas_table()));
        assert_eq!(visuals.len(), 2);

        assert_eq!(visuals[0].title, "Trend Over Time");
        assert_eq!(visuals[0].chart_type, ChartType::Line);
        assert_eq!(visuals[0].x, "signup_date");
        assert_eq!(visuals[0].y, Some(YAxis::Columns(vec!["mrr".to_string()])));

        assert_eq!(visuals[1].title, "Top Categories");
        assert_eq!(visuals[1].chart_type, ChartType::Bar);
        assert_eq!(visuals[1].x, "plan");
        assert_eq!(visuals[1].y, Some(YAxis::Column("mrr".to_string())));
        assert_eq!(visuals[1].agg.as_deref(), Some("sum"));
    }

    #[test]
    fn trend_caps_measures_at_three() {
        let table = Table::new(vec![
            Column::new("month", text(&["a"])),
            Column::new("mrr", ints(&[1])),
            Column::new("arr", ints(&[1])),
            Column::new("sales", ints(&[1])),
            Column::new("gmv", ints(&[1])),
        ])
        .unwrap();
        let visuals = recommend_visuals(&classify_table(&table));
        assert_eq!(
            visuals[0].y,
            Some(YAxis::Columns(vec![
                "mrr".to_string(),
                "arr".to_string(),
                "sales".to_string()
            ]))
        );
    }

    #[test]
    fn text_only_table_yields_no_visuals() {
        let table = Table::new(vec![
            Column::new("region", text(&["na", "emea"])),
            Column::new("plan", text(&["basic", "pro"])),
        ])
        .unwrap();
        assert!(recommend_visuals(&classify_table(&table)).is_empty());
    }

    #[test]
    fn heatmap_triggers_on_name_substrings_alone() {
        // Text columns everywhere: no date+measure or dim+measure pair,
        // yet the signup/retention substring rule still fires.
        let table = Table::new(vec![
            Column::new("signup_month", text(&["2024-01"])),
            Column::new("active_users", text(&["many"])),
            Column::new("retention_rate", text(&["high"])),
        ])
        .unwrap();
        let visuals = recommend_visuals(&classify_table(&table));
        let heatmap = visuals
            .iter()
            .find(|v| v.chart_type == ChartType::Heatmap)
            .expect("heatmap expected");

        assert_eq!(heatmap.title, "Retention by Signup Cohort");
        // The axis fields are literal placeholders, not the real
        // matching column names.
        assert_eq!(heatmap.x, "signup_month");
        assert_eq!(heatmap.y, Some(YAxis::Column("cohort_month".to_string())));
        assert_eq!(heatmap.value.as_deref(), Some("retention_rate"));
    }

    #[test]
    fn heatmap_placeholders_ignore_actual_column_names() {
        let table = Table::new(vec![
            Column::new("trial_signup_week", text(&["w1"])),
            Column::new("pct_active", text(&["0.4"])),
        ])
        .unwrap();
        let visuals = recommend_visuals(&classify_table(&table));
        let heatmap = visuals
            .iter()
            .find(|v| v.chart_type == ChartType::Heatmap)
            .expect("heatmap expected");
        // Still the fixed placeholder axes, even though neither matching
        // column is literally named "signup_month".
        assert_eq!(heatmap.x, "signup_month");
    }

    #[test]
    fn visual_spec_serializes_with_original_field_names() {
        let visuals = recommend_visuals(&classify_table(&saas_table()));
        let json = serde_json::to_value(&visuals[1]).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["y"], "mrr");
        assert_eq!(json["agg"], "sum");
        assert!(json.get("value").is_none());
    }
}
