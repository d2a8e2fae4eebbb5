//! Lookup lists (sites, meter types, materials, workers) feeding every form.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::lookups::{Lookups, unique_non_empty};
use crate::store::{Record, Sheet, TabularStore};

/// Which lookup column of the Settings sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Site,
    MeterType,
    Material,
}

impl LookupKind {
    pub fn column(&self) -> &'static str {
        match self {
            LookupKind::Site => "site_list",
            LookupKind::MeterType => "meter_type_list",
            LookupKind::Material => "material_master",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LookupKind::Site => "site",
            LookupKind::MeterType => "meter type",
            LookupKind::Material => "material",
        }
    }
}

/// Read the lookup lists. A list with no values falls back to the
/// configured defaults, an empty roster to the fallback worker.
pub fn load_lookups(store: &mut impl TabularStore, cfg: &Config) -> AppResult<Lookups> {
    let settings = store.fetch(Sheet::Settings)?;
    let workers = store.fetch(Sheet::Workers)?;

    let column = |kind: LookupKind, fallback: &[String]| {
        let values = unique_non_empty(settings.iter().map(|r| r.get(kind.column())));
        if values.is_empty() {
            fallback.to_vec()
        } else {
            values
        }
    };

    let mut roster = unique_non_empty(workers.iter().map(|r| r.get("name")));
    if roster.is_empty() {
        roster.push(cfg.fallback_worker.clone());
    }

    Ok(Lookups {
        sites: column(LookupKind::Site, &cfg.fallback_sites),
        meter_types: column(LookupKind::MeterType, &cfg.fallback_meter_types),
        materials: column(LookupKind::Material, &cfg.fallback_materials),
        workers: roster,
    })
}

/// Append one value to a lookup list. Values already present are skipped.
pub fn add_lookup(store: &mut impl TabularStore, kind: LookupKind, value: &str) -> AppResult<bool> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::EmptyField(kind.label()));
    }

    let existing = store.fetch(Sheet::Settings)?;
    if existing.iter().any(|r| r.get(kind.column()).trim() == v) {
        return Ok(false);
    }

    store.append_row(Sheet::Settings, &Record::new().with(kind.column(), v))?;
    Ok(true)
}
