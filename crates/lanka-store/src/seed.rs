//! # Seed Data
//!
//! The demo catalog and shop identity a fresh store starts with.
//!
//! ```text
//! ITM001  Keerisamba Rice 1kg              LKR  250.00  100  Groceries
//! ITM002  Red Dhal 1kg                     LKR  450.00   80  Groceries
//! ITM003  Anchor Full Cream Milk Powder    LKR  980.00   50  Dairy
//! ITM004  White Sugar 1kg                  LKR  280.00  120  Groceries
//! ITM005  Laojee Tea Leaves 200g           LKR  350.00   70  Beverages
//! ITM006  Sunlight Soap Bar                LKR   80.00  150  Household
//! ITM007  Coca-Cola 1.5L                   LKR  300.00   60  Beverages
//! ```

use lanka_core::{Item, Money, ReceiptSettings};

/// (name, price in rupees, stock, category)
const CATALOG: &[(&str, i64, u32, &str)] = &[
    ("Keerisamba Rice 1kg", 250, 100, "Groceries"),
    ("Red Dhal 1kg", 450, 80, "Groceries"),
    ("Anchor Full Cream Milk Powder 400g", 980, 50, "Dairy"),
    ("White Sugar 1kg", 280, 120, "Groceries"),
    ("Laojee Tea Leaves 200g", 350, 70, "Beverages"),
    ("Sunlight Soap Bar", 80, 150, "Household"),
    ("Coca-Cola 1.5L", 300, 60, "Beverages"),
];

/// Builds the seed catalog with ids ITM001 onward.
pub fn seed_items() -> Vec<Item> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, &(name, rupees, stock, category))| Item {
            id: format!("ITM{:03}", i + 1),
            name: name.to_string(),
            price: Money::from_major_minor(rupees, 0),
            stock,
            category: Some(category.to_string()),
        })
        .collect()
}

/// Shop identity with every receipt field switched on.
pub fn seed_receipt_settings() -> ReceiptSettings {
    ReceiptSettings {
        shop_name: Some("LankaPOS Grocery".to_string()),
        shop_address: Some("123 Galle Road, Colombo 3".to_string()),
        shop_contact: Some("011-2345678".to_string()),
        item_id: true,
        item_name: true,
        item_price: true,
        item_quantity: true,
        item_subtotal: true,
        item_category: true,
        discount: true,
        grand_total: true,
        timestamp: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_items() {
        let items = seed_items();
        assert_eq!(items.len(), 7);
        assert_eq!(items[2].id, "ITM003");
        assert_eq!(items[2].price.cents(), 98000);
        assert_eq!(items[5].stock, 150);
        assert!(items.iter().all(|i| i.category.is_some()));
    }

    #[test]
    fn test_seed_settings() {
        let settings = seed_receipt_settings();
        assert_eq!(settings.shop_contact.as_deref(), Some("011-2345678"));
        assert!(settings.item_category && settings.discount);
    }
}
