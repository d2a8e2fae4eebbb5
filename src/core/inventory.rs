use crate::core::validate_quantity;
use crate::errors::AppResult;
use crate::models::inventory::InventoryEntry;
use crate::models::lookups::{Lookups, require_known};
use crate::store::{Sheet, TabularStore};
use chrono::NaiveDate;

/// Record material received into stock.
pub fn receive(
    store: &mut impl TabularStore,
    lookups: &Lookups,
    date: NaiveDate,
    material: &str,
    qty: f64,
) -> AppResult<InventoryEntry> {
    let material = require_known("material", material, &lookups.receivable_materials())?;
    let qty = validate_quantity("quantity", qty)?;

    let entry = InventoryEntry::inward(&date.format("%Y-%m-%d").to_string(), &material, qty);
    store.append_row(Sheet::Inventory, &entry.to_record())?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::ledger::load_ledger;
    use crate::core::settings::load_lookups;
    use crate::core::test_support::memory_store;
    use crate::errors::AppError;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn received_stock_shows_in_ledger() {
        let mut store = memory_store();
        let lookups = load_lookups(&mut store, &Config::default()).unwrap();

        receive(&mut store, &lookups, day(), "Cable", 250.0).unwrap();
        receive(&mut store, &lookups, day(), "Cable", 50.0).unwrap();
        receive(&mut store, &lookups, day(), "3 Phase Box", 6.0).unwrap();

        let ledger = load_ledger(&mut store).unwrap();
        assert_eq!(ledger.get("Cable"), 300.0);
        assert_eq!(ledger.get("3 Phase Box"), 6.0);
    }

    #[test]
    fn unknown_material_and_negative_qty_are_rejected() {
        let mut store = memory_store();
        let lookups = load_lookups(&mut store, &Config::default()).unwrap();

        assert!(matches!(
            receive(&mut store, &lookups, day(), "Copper", 1.0),
            Err(AppError::UnknownLookup { .. })
        ));
        assert!(matches!(
            receive(&mut store, &lookups, day(), "Lugs", -5.0),
            Err(AppError::InvalidQuantity(_))
        ));
    }
}
