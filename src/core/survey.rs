//! Survey logging, the asset-code join into work logs, and the chat share
//! link built from a survey entry.

use crate::errors::{AppError, AppResult};
use crate::models::survey::SurveyLog;
use crate::models::work_log::WorkLog;
use crate::store::{Sheet, TabularStore};

pub fn load_surveys(store: &mut impl TabularStore) -> AppResult<Vec<SurveyLog>> {
    Ok(store
        .fetch(Sheet::SurveyLogs)?
        .iter()
        .map(SurveyLog::from_record)
        .collect())
}

pub fn add_survey(store: &mut impl TabularStore, entry: &SurveyLog) -> AppResult<()> {
    if entry.asset_name.is_empty() {
        return Err(AppError::EmptyField("asset name"));
    }
    if entry.asset_code.is_empty() {
        return Err(AppError::EmptyField("asset code"));
    }
    if entry.gps.is_none() {
        return Err(AppError::InvalidCoordinates(
            "a survey entry needs a GPS fix".into(),
        ));
    }
    store.append_row(Sheet::SurveyLogs, &entry.to_record())
}

pub fn find_survey(store: &mut impl TabularStore, id: &str) -> AppResult<SurveyLog> {
    store
        .find_by_id(Sheet::SurveyLogs, id.trim())?
        .first()
        .map(SurveyLog::from_record)
        .ok_or_else(|| AppError::RowNotFound {
            table: Sheet::SurveyLogs.label().to_string(),
            id: id.to_string(),
        })
}

/// Latest survey entry for an asset code, matched case-insensitively.
pub fn survey_for_asset<'a>(surveys: &'a [SurveyLog], code: &str) -> Option<&'a SurveyLog> {
    surveys.iter().rev().find(|s| s.matches_code(code))
}

/// Give work logs without a GPS fix the surveyed position of their asset.
/// Returns how many rows were filled. Nothing is written back.
pub fn fill_gps_from_surveys(logs: &mut [WorkLog], surveys: &[SurveyLog]) -> usize {
    let mut filled = 0;
    for log in logs.iter_mut().filter(|l| l.gps.is_none()) {
        let Some(code) = log.asset_code() else {
            continue;
        };
        if let Some(p) = survey_for_asset(surveys, &code).and_then(|s| s.gps) {
            log.gps = Some(p);
            filled += 1;
        }
    }
    filled
}

/// Percent-encode for a URL query value (RFC 3986 unreserved set kept).
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Plain-text message describing a survey entry.
pub fn share_message(entry: &SurveyLog) -> String {
    let mut lines = vec![
        format!("Asset: {}", entry.asset_name),
        format!("Code: {}", entry.asset_code),
        format!("Date: {}", entry.date),
    ];
    if let Some(st) = &entry.switch_type {
        lines.push(format!("Switch: {}", st));
    }
    if let Some(l) = &entry.lineman {
        lines.push(format!("Lineman: {}", l));
    }
    match &entry.gps {
        Some(p) => lines.push(format!("Location: {}", p.map_link())),
        None => lines.push("Location: not recorded".to_string()),
    }
    lines.join("\n")
}

/// Chat share link carrying the message as its text payload.
pub fn share_link(entry: &SurveyLog) -> String {
    format!(
        "https://wa.me/?text={}",
        encode_component(&share_message(entry))
    )
}
