use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::survey::{add_survey, find_survey, load_surveys, share_link};
use crate::core::workspace::Workspace;
use crate::errors::{AppError, AppResult};
use crate::export::export_survey_report;
use crate::models::geo::GeoPoint;
use crate::models::survey::SurveyLog;
use crate::ui::messages::{info, success};
use crate::utils::date::date_or_today;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Survey {
        name,
        code,
        lat,
        lon,
        switch_type,
        lineman,
        date,
        report,
        force,
        share,
    } = cmd
    {
        let mut ws = Workspace::open(cfg)?;

        if let Some(file) = report {
            let surveys = load_surveys(&mut ws.store)?;
            export_survey_report(&surveys, &expand_tilde(file), *force)?;
            ws.audit("export", file, &format!("Survey report, {} entries", surveys.len()));
            return Ok(());
        }

        if let Some(id) = share {
            let entry = find_survey(&mut ws.store, id)?;
            info(format!("Share link for {} ({}):", entry.asset_name, entry.asset_code));
            println!("{}", share_link(&entry));
            return Ok(());
        }

        let name = name.as_deref().ok_or(AppError::EmptyField("name"))?;
        let code = code.as_deref().ok_or(AppError::EmptyField("code"))?;
        let date = date_or_today(date.as_ref())?;

        let entry = SurveyLog::new(
            &date.format("%Y-%m-%d").to_string(),
            name,
            code,
            GeoPoint::from_flags(*lat, *lon)?,
            switch_type.clone(),
            lineman.clone(),
        );
        add_survey(&mut ws.store, &entry)?;

        ws.audit(
            "survey",
            &entry.asset_code,
            &format!("{} surveyed on {}", entry.asset_name, entry.date),
        );
        success(format!(
            "Survey saved for {} ({}), id {}",
            entry.asset_name, entry.asset_code, entry.id
        ));
    }

    Ok(())
}
