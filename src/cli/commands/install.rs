use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::install::{InstallRequest, describe, submit};
use crate::core::settings::load_lookups;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::models::geo::GeoPoint;
use crate::ui::messages::{info, success};
use crate::utils::date::date_or_today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Install {
        date,
        meter_type,
        site,
        dtr_code,
        worker,
        cable,
        lugs,
        lat,
        lon,
    } = cmd
    {
        let req = InstallRequest {
            date: date_or_today(date.as_ref())?,
            meter_type: meter_type.clone(),
            site: site.clone(),
            dtr_code: dtr_code.clone(),
            worker: worker.clone(),
            cable: *cable,
            lugs: *lugs,
            gps: GeoPoint::from_flags(*lat, *lon)?,
        };

        let mut ws = Workspace::open(cfg)?;
        let lookups = load_lookups(&mut ws.store, &ws.cfg)?;
        let rows = submit(&mut ws.store, &lookups, &req)?;

        let receipt = describe(&rows);
        ws.audit(
            "install",
            &req.dtr_code,
            &format!("{} by {} at {}: {}", req.date, req.worker, req.site, receipt),
        );

        success(format!(
            "Installation logged for {} ({} rows): {}",
            req.dtr_code.trim(),
            rows.len(),
            receipt
        ));
        if let Some(first) = rows.first() {
            info(format!("Event id: {}", first.event_id));
        }
    }

    Ok(())
}
