//! # Settings Repository
//!
//! The receipt settings singleton and the low-stock threshold.
//!
//! Updates are partial: only fields present in the update change. Sales
//! already in the log keep the snapshot they were recorded with.

use lanka_core::{ReceiptSettings, ReceiptSettingsUpdate};
use tracing::info;

use crate::error::StoreResult;
use crate::store::Store;

/// Repository for store-wide settings.
#[derive(Debug, Clone, Copy)]
pub struct SettingsRepository<'a> {
    store: &'a Store,
}

impl<'a> SettingsRepository<'a> {
    /// Creates a new SettingsRepository.
    pub fn new(store: &'a Store) -> Self {
        SettingsRepository { store }
    }

    /// Current receipt settings.
    pub fn get(&self) -> StoreResult<ReceiptSettings> {
        Ok(self.store.lock()?.receipt_settings.clone())
    }

    /// Merges `update` into the current settings and returns the result.
    pub fn update(&self, update: ReceiptSettingsUpdate) -> StoreResult<ReceiptSettings> {
        if update.is_empty() {
            return self.get();
        }

        let mut data = self.store.lock()?;
        update.apply_to(&mut data.receipt_settings);

        info!(shop_name = ?data.receipt_settings.shop_name, "Receipt settings updated");
        Ok(data.receipt_settings.clone())
    }

    /// Stock level at or below which sales raise a "running low" alert.
    pub fn low_stock_threshold(&self) -> StoreResult<u32> {
        Ok(self.store.lock()?.low_stock_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreConfig;

    #[test]
    fn test_partial_update_touches_only_given_fields() {
        let store = Store::new(StoreConfig::default());
        let before = store.settings().get().unwrap();

        let after = store
            .settings()
            .update(ReceiptSettingsUpdate {
                shop_name: Some("NewName".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(after.shop_name.as_deref(), Some("NewName"));
        assert_eq!(after.shop_address, before.shop_address);
        assert_eq!(after.shop_contact, before.shop_contact);
        assert_eq!(after.item_id, before.item_id);
        assert_eq!(after.grand_total, before.grand_total);
        assert_eq!(store.settings().get().unwrap(), after);
    }

    #[test]
    fn test_toggle_flag() {
        let store = Store::new(StoreConfig::default());
        let after = store
            .settings()
            .update(ReceiptSettingsUpdate {
                timestamp: Some(false),
                ..Default::default()
            })
            .unwrap();

        assert!(!after.timestamp);
        assert!(after.item_name);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let store = Store::new(StoreConfig::default());
        let before = store.settings().get().unwrap();
        let after = store.settings().update(ReceiptSettingsUpdate::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_threshold_from_config() {
        let store = Store::new(StoreConfig::default());
        assert_eq!(store.settings().low_stock_threshold().unwrap(), 10);

        let store = Store::new(StoreConfig::default().low_stock_threshold(0));
        assert_eq!(store.settings().low_stock_threshold().unwrap(), 0);
    }
}
