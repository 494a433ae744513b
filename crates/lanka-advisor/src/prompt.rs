//! # Prompt Template
//!
//! The instruction sent to the model, with the sales data spliced in.

use lanka_core::SuggestRestockInput;

const SALES_DATA_SLOT: &str = "{recent_sales_data}";

/// Inventory-expert prompt. `{recent_sales_data}` is replaced verbatim.
pub const RESTOCK_PROMPT_TEMPLATE: &str = "You are an inventory management expert for a grocery store. \
Analyze the recent sales data and provide restocking suggestions.

Recent Sales Data:
{recent_sales_data}

Based on this data, suggest reasonable restocking levels for each item. \
Respond with a JSON array of objects, each containing the item name and suggested restock quantity. \
Use the keys \"itemName\" and \"suggestedRestockQuantity\". \
Make sure the response is parseable by JSON.parse.
";

/// Renders the prompt for `input`.
pub fn render_prompt(input: &SuggestRestockInput) -> String {
    RESTOCK_PROMPT_TEMPLATE.replace(SALES_DATA_SLOT, &input.recent_sales_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_data() {
        let input = SuggestRestockInput {
            recent_sales_data: r#"[{"itemName":"Red Dhal 1kg","quantitySold":4,"saleDate":"2026-10-18"}]"#
                .to_string(),
        };
        let prompt = render_prompt(&input);

        assert!(prompt.starts_with("You are an inventory management expert for a grocery store."));
        assert!(prompt.contains("Recent Sales Data:\n[{\"itemName\":\"Red Dhal 1kg\""));
        assert!(prompt.contains("parseable by JSON.parse"));
        assert!(!prompt.contains(SALES_DATA_SLOT));
    }
}
