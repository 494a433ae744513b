//! # Receipt Rendering
//!
//! Renders a completed sale as fixed-width text, using the receipt settings
//! captured on the transaction rather than the current ones.
//!
//! ## Layout
//! ```text
//!             LankaPOS Grocery            ◄── shop_name
//!        123 Galle Road, Colombo 3        ◄── shop_address
//!               011-2345678               ◄── shop_contact
//! Sale ID: SALE0001
//! Date: 2026-10-19 09:15:02               ◄── timestamp
//! ----------------------------------------
//! Keerisamba Rice 1kg (ITM001)  LKR 500.00 ◄── item_name, item_id, item_subtotal
//!   2 x LKR 250.00                        ◄── item_quantity, item_price
//! ----------------------------------------
//!                       Total: LKR 500.00 ◄── grand_total
//! ```

use crate::types::{ReceiptField, SaleLineItem, SaleTransaction};
use crate::DEFAULT_CURRENCY_CODE;

/// Paper width and currency used when rendering.
#[derive(Debug, Clone)]
pub struct ReceiptLayout {
    /// Characters per line (thermal printers are typically 32, 42 or 48).
    pub width: usize,
    pub currency: String,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            width: 40,
            currency: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

/// Renders `sale` as a text receipt.
pub fn render_receipt(sale: &SaleTransaction, layout: &ReceiptLayout) -> String {
    let settings = &sale.receipt_settings_snapshot;
    let width = layout.width;
    let mut lines: Vec<String> = Vec::new();

    let identity = [
        (ReceiptField::ShopName, &settings.shop_name),
        (ReceiptField::ShopAddress, &settings.shop_address),
        (ReceiptField::ShopContact, &settings.shop_contact),
    ];
    for (field, value) in identity {
        if let (true, Some(text)) = (settings.is_visible(field), value.as_deref()) {
            lines.push(center(text.trim(), width));
        }
    }

    lines.push(format!("Sale ID: {}", sale.id));
    if settings.is_visible(ReceiptField::Timestamp) {
        lines.push(format!("Date: {}", sale.timestamp.format("%Y-%m-%d %H:%M:%S")));
    }

    let rule = "-".repeat(width);
    lines.push(rule.clone());
    for item in &sale.items {
        lines.extend(render_line_item(item, sale, layout));
    }
    lines.push(rule);

    if settings.is_visible(ReceiptField::GrandTotal) {
        let total = format!("Total: {}", sale.total_amount.format_with(&layout.currency));
        lines.push(format!("{:>width$}", total, width = width));
    }

    lines.join("\n")
}

fn render_line_item(item: &SaleLineItem, sale: &SaleTransaction, layout: &ReceiptLayout) -> Vec<String> {
    let settings = &sale.receipt_settings_snapshot;
    let mut out = Vec::with_capacity(2);

    let mut label = String::new();
    if settings.is_visible(ReceiptField::ItemName) {
        label.push_str(&item.name);
    }
    if settings.is_visible(ReceiptField::ItemId) {
        if !label.is_empty() {
            label.push(' ');
        }
        label.push_str(&format!("({})", item.item_id));
    }
    let subtotal = if settings.is_visible(ReceiptField::ItemSubtotal) {
        item.subtotal.format_with(&layout.currency)
    } else {
        String::new()
    };
    if !label.is_empty() || !subtotal.is_empty() {
        out.push(two_column(&label, &subtotal, layout.width));
    }

    let show_qty = settings.is_visible(ReceiptField::ItemQuantity);
    let show_price = settings.is_visible(ReceiptField::ItemPrice);
    if show_qty || show_price {
        let mut detail = String::from("  ");
        if show_qty {
            detail.push_str(&format!("{} x ", item.quantity));
        }
        if show_price {
            detail.push_str(&item.price_per_unit.format_with(&layout.currency));
        }
        out.push(detail.trim_end().to_string());
    }

    out
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn two_column(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    if right.is_empty() {
        return left.to_string();
    }
    if used + 1 > width {
        return format!("{} {}", left, right);
    }
    format!("{}{}{}", left, " ".repeat(width - used), right)
}
