//! Request types for the mileage ledger API.

use serde::{Deserialize, Serialize};

use crate::models::{BasePayAdjustment, WorkEntry};

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Work entries to aggregate, in any order.
    pub entries: Vec<WorkEntry>,
    /// Base pay adjustments, routed to the year of their date.
    #[serde(default)]
    pub adjustments: Vec<BasePayAdjustment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustments_default_to_empty() {
        let json = r#"{"entries": [{"date": "2022-01-03", "pay": 50.0}]}"#;
        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entries.len(), 1);
        assert!(request.adjustments.is_empty());
    }

    #[test]
    fn test_entries_are_required() {
        let json = r#"{"adjustments": []}"#;
        let result: Result<SummaryRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
