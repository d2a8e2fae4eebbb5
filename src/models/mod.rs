//! Typed views over sheet rows.

pub mod geo;
pub mod inventory;
pub mod lookups;
pub mod survey;
pub mod work_log;
pub mod worker;

/// Fresh client-side row identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn sync_cell(synced: bool) -> &'static str {
    if synced { "TRUE" } else { "FALSE" }
}

pub(crate) fn parse_sync(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case("true")
}

/// Optional text cell: blank means absent.
pub(crate) fn optional_cell(cell: &str) -> Option<String> {
    let t = cell.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}
