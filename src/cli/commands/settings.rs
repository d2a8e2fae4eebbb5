use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{LookupKind, add_lookup, load_lookups};
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        site,
        meter_type,
        material,
    } = cmd
    {
        let mut ws = Workspace::open(cfg)?;

        let additions = [
            (LookupKind::Site, site),
            (LookupKind::MeterType, meter_type),
            (LookupKind::Material, material),
        ];
        let mut added_any = false;

        for (kind, value) in additions {
            let Some(v) = value else { continue };
            added_any = true;
            if add_lookup(&mut ws.store, kind, v)? {
                ws.audit("settings", kind.column(), &format!("Added {} '{}'", kind.label(), v.trim()));
                success(format!("Added {} '{}'.", kind.label(), v.trim()));
            } else {
                info(format!("{} '{}' is already listed.", kind.label(), v.trim()));
            }
        }

        if *print || !added_any {
            let l = load_lookups(&mut ws.store, &ws.cfg)?;
            header("Lookup lists");
            println!("Sites:       {}", l.sites.join(", "));
            println!("Meter types: {}", l.meter_types.join(", "));
            println!("Materials:   {}", l.materials.join(", "));
            println!("Workers:     {}", l.workers.join(", "));
        }
    }

    Ok(())
}
