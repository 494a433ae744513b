//! # Restock Data
//!
//! Shapes recent sales into the blob handed to the restock suggester, and
//! defines both sides of that boundary.
//!
//! ```text
//! sales log ──► last N transactions ──► flatten lines ──► JSON array
//!                                                             │
//!               [{itemName, quantitySold, saleDate}, ...] ◄───┘
//!                                                             │
//!                                         SuggestRestockInput ▼
//!                                         (opaque suggester)
//!                                         SuggestRestockOutput
//!               [{itemName, suggestedRestockQuantity}, ...] ◄─┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::SaleTransaction;

/// Item name used in the placeholder suggestion when no sales exist.
pub const NO_SALES_PLACEHOLDER: &str = "No sales data available";

/// One sale line as seen by the restock suggester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesDataPoint {
    pub item_name: String,
    pub quantity_sold: u32,
    /// Calendar date of the sale (UTC), serialized `YYYY-MM-DD`.
    #[ts(as = "String")]
    pub sale_date: NaiveDate,
}

/// Projects the line items of the last `window` transactions.
///
/// `sales` is in log order (oldest first); the result keeps that order.
pub fn recent_sales_data(sales: &[SaleTransaction], window: usize) -> Vec<SalesDataPoint> {
    let start = sales.len().saturating_sub(window);
    sales[start..]
        .iter()
        .flat_map(|sale| {
            let sale_date = sale.timestamp.date_naive();
            sale.items.iter().map(move |line| SalesDataPoint {
                item_name: line.name.clone(),
                quantity_sold: line.quantity,
                sale_date,
            })
        })
        .collect()
}

/// Serializes the projection of the last `window` transactions to JSON.
pub fn format_sales_data(sales: &[SaleTransaction], window: usize) -> CoreResult<String> {
    Ok(serde_json::to_string(&recent_sales_data(sales, window))?)
}

/// Input to the restock suggester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRestockInput {
    /// JSON array of [`SalesDataPoint`].
    pub recent_sales_data: String,
}

/// Output of the restock suggester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRestockOutput {
    /// JSON array of [`RestockSuggestion`].
    pub restock_suggestions: String,
}

impl SuggestRestockOutput {
    /// The fixed answer returned when there is no sales history.
    pub fn placeholder() -> Self {
        let placeholder = vec![RestockSuggestion {
            item_name: NO_SALES_PLACEHOLDER.to_string(),
            suggested_restock_quantity: SuggestedQuantity::Text("N/A".to_string()),
        }];
        SuggestRestockOutput {
            // A Vec of plain structs cannot fail to serialize.
            restock_suggestions: serde_json::to_string(&placeholder).unwrap_or_else(|_| {
                format!(
                    r#"[{{"itemName":"{}","suggestedRestockQuantity":"N/A"}}]"#,
                    NO_SALES_PLACEHOLDER
                )
            }),
        }
    }

    /// Returns true if the output is a JSON array, which is all the
    /// suggester contract promises.
    pub fn is_array(&self) -> bool {
        serde_json::from_str::<Vec<serde_json::Value>>(&self.restock_suggestions).is_ok()
    }

    /// Typed view of the suggestions, if every entry has the expected shape.
    pub fn suggestions(&self) -> CoreResult<Vec<RestockSuggestion>> {
        Ok(serde_json::from_str(&self.restock_suggestions)?)
    }
}

/// A single restock recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RestockSuggestion {
    pub item_name: String,
    pub suggested_restock_quantity: SuggestedQuantity,
}

/// Models answer with a number of units, or a note such as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum SuggestedQuantity {
    Units(u64),
    Approximate(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{ReceiptSettings, SaleLineItem};
    use chrono::{TimeZone, Utc};

    fn sale(n: u32, day: u32) -> SaleTransaction {
        SaleTransaction {
            id: format!("SALE{:04}", n),
            items: vec![SaleLineItem {
                item_id: "ITM004".to_string(),
                name: "White Sugar 1kg".to_string(),
                quantity: n,
                price_per_unit: Money::from_cents(28000),
                subtotal: Money::from_cents(28000).multiply_quantity(n),
            }],
            total_amount: Money::from_cents(28000).multiply_quantity(n),
            timestamp: Utc.with_ymd_and_hms(2026, 10, day, 23, 59, 0).unwrap(),
            receipt_settings_snapshot: ReceiptSettings::default(),
        }
    }

    #[test]
    fn test_projection_keeps_date_only() {
        let json = format_sales_data(&[sale(3, 18)], 20).unwrap();
        assert_eq!(
            json,
            r#"[{"itemName":"White Sugar 1kg","quantitySold":3,"saleDate":"2026-10-18"}]"#
        );
    }

    #[test]
    fn test_window_takes_most_recent() {
        let sales: Vec<_> = (1..=25).map(|n| sale(n, 1 + n % 28)).collect();
        let points = recent_sales_data(&sales, 20);

        assert_eq!(points.len(), 20);
        assert_eq!(points[0].quantity_sold, 6);
        assert_eq!(points[19].quantity_sold, 25);
    }

    #[test]
    fn test_empty_history_formats_as_empty_array() {
        assert_eq!(format_sales_data(&[], 20).unwrap(), "[]");
    }

    #[test]
    fn test_placeholder() {
        let output = SuggestRestockOutput::placeholder();
        assert_eq!(
            output.restock_suggestions,
            r#"[{"itemName":"No sales data available","suggestedRestockQuantity":"N/A"}]"#
        );
        assert!(output.is_array());

        let parsed = output.suggestions().unwrap();
        assert_eq!(parsed[0].item_name, NO_SALES_PLACEHOLDER);
    }

    #[test]
    fn test_parse_model_output() {
        let output = SuggestRestockOutput {
            restock_suggestions: r#"[{"itemName":"White Sugar 1kg","suggestedRestockQuantity":40},
                                     {"itemName":"Red Dhal 1kg","suggestedRestockQuantity":12.5}]"#
                .to_string(),
        };
        let parsed = output.suggestions().unwrap();
        assert_eq!(parsed[0].suggested_restock_quantity, SuggestedQuantity::Units(40));
        assert_eq!(
            parsed[1].suggested_restock_quantity,
            SuggestedQuantity::Approximate(12.5)
        );
    }

    #[test]
    fn test_non_array_output_detected() {
        let output = SuggestRestockOutput {
            restock_suggestions: "Restock sugar soon.".to_string(),
        };
        assert!(!output.is_array());
        assert!(output.suggestions().is_err());
    }
}
