//! Business logic behind the commands. Functions take any `TabularStore`
//! so they run the same against SQLite, the cache or a test store.

pub mod alerts;
pub mod backup;
pub mod consolidate;
pub mod dashboard;
pub mod install;
pub mod inventory;
pub mod ledger;
pub mod log;
pub mod records;
pub mod roster;
pub mod settings;
pub mod survey;
pub mod workspace;

use crate::errors::{AppError, AppResult};

/// Quantities entered by a user must be finite and non-negative.
pub fn validate_quantity(label: &str, qty: f64) -> AppResult<f64> {
    if !qty.is_finite() || qty < 0.0 {
        return Err(AppError::InvalidQuantity(format!(
            "{label} must be a non-negative number, got {qty}"
        )));
    }
    Ok(qty)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::initialize::init_db;
    use crate::db::pool::DbPool;
    use crate::store::SqliteStore;

    /// Fresh in-memory store with every sheet created.
    pub fn memory_store() -> SqliteStore {
        let pool = DbPool::in_memory().expect("in-memory sqlite");
        init_db(&pool.conn).expect("migrations");
        SqliteStore::new(pool)
    }
}
