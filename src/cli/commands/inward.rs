use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inventory::receive;
use crate::core::settings::load_lookups;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::date_or_today;
use crate::utils::formatting::format_quantity;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inward {
        material,
        qty,
        date,
    } = cmd
    {
        let date = date_or_today(date.as_ref())?;

        let mut ws = Workspace::open(cfg)?;
        let lookups = load_lookups(&mut ws.store, &ws.cfg)?;
        let entry = receive(&mut ws.store, &lookups, date, material, *qty)?;

        let msg = format!("{} × {} received on {}", format_quantity(entry.qty), entry.material, entry.date);
        ws.audit("inward", &entry.material, &msg);
        success(msg);
    }

    Ok(())
}
