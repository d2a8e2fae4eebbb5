use crate::errors::{AppError, AppResult};
use crate::models::worker::Worker;
use crate::store::{Sheet, TabularStore};

pub fn load_workers(store: &mut impl TabularStore) -> AppResult<Vec<Worker>> {
    Ok(store
        .fetch(Sheet::Workers)?
        .iter()
        .map(Worker::from_record)
        .collect())
}

/// Add a worker to the roster. Names are unique ignoring case and
/// surrounding spaces; a duplicate writes nothing.
pub fn add_worker(store: &mut impl TabularStore, name: &str) -> AppResult<Worker> {
    let worker = Worker::new(name);
    if worker.name.is_empty() {
        return Err(AppError::EmptyField("worker name"));
    }

    let existing = load_workers(store)?;
    if existing
        .iter()
        .any(|w| w.name.to_lowercase() == worker.name.to_lowercase())
    {
        return Err(AppError::DuplicateWorker(worker.name));
    }

    store.append_row(Sheet::Workers, &worker.to_record())?;
    Ok(worker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::memory_store;

    #[test]
    fn duplicate_is_rejected_without_write() {
        let mut store = memory_store();
        add_worker(&mut store, "Ravi Kumar").unwrap();

        let err = add_worker(&mut store, " ravi kumar ").unwrap_err();

        assert!(matches!(err, AppError::DuplicateWorker(_)));
        assert_eq!(load_workers(&mut store).unwrap().len(), 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = memory_store();
        assert!(matches!(
            add_worker(&mut store, "   "),
            Err(AppError::EmptyField(_))
        ));
    }

    #[test]
    fn new_worker_is_unsynced() {
        let mut store = memory_store();
        let w = add_worker(&mut store, "Asha").unwrap();
        assert!(!w.synced);
        assert_eq!(load_workers(&mut store).unwrap()[0].name, "Asha");
    }
}
