// Formula suggester: a constant catalog of DAX templates for the Power BI
// export, bundled with the recommended visuals. The expressions reference
// a generic 'Table'/'Calendar' naming convention and are not validated
// against the uploaded columns.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::visuals::VisualSpec;

const DAX_FORMULAS: &[(&str, &str)] = &[
    ("MRR", "MRR = SUM('Table'[MRR])"),
    ("ARR", "ARR = [MRR] * 12"),
    (
        "Churn %",
        "Churn % = DIVIDE(SUM('Table'[ChurnCount]), SUM('Table'[CustomersPrevMonth]))",
    ),
    (
        "ARPU",
        "ARPU = DIVIDE(SUM('Table'[Revenue]), SUM('Table'[ActiveUsers]))",
    ),
    (
        "MoM Growth %",
        "MoM Growth % = DIVIDE([MRR] - CALCULATE([MRR], DATEADD('Calendar'[Date], -1, MONTH)), CALCULATE([MRR], DATEADD('Calendar'[Date], -1, MONTH)))",
    ),
];

/// Serializes as a formula_name -> expression map in catalog order.
#[derive(Debug, Clone)]
pub struct DaxCatalog;

impl DaxCatalog {
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        DAX_FORMULAS
    }
}

impl Serialize for DaxCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DAX_FORMULAS.len()))?;
        for (name, expression) in DAX_FORMULAS {
            map.serialize_entry(name, expression)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerBiExport {
    pub dax: DaxCatalog,
    pub visuals: Vec<VisualSpec>,
}

pub fn powerbi_export(visuals: Vec<VisualSpec>) -> PowerBiExport {
    PowerBiExport {
        dax: DaxCatalog,
        visuals,
    }
}
