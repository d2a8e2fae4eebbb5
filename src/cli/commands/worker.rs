use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::{add_worker, load_workers};
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worker { add, list } = cmd {
        let mut ws = Workspace::open(cfg)?;

        if let Some(name) = add {
            let w = add_worker(&mut ws.store, name)?;
            ws.audit("worker", &w.name, "Worker added to roster");
            success(format!("Worker '{}' added.", w.name));
        }

        if *list || add.is_none() {
            let workers = load_workers(&mut ws.store)?;
            if workers.is_empty() {
                info(format!(
                    "Roster is empty; forms fall back to '{}'.",
                    ws.cfg.fallback_worker
                ));
                return Ok(());
            }

            let mut t = Table::with_headers(&["worker", "synced"]);
            for w in workers {
                let synced = if w.synced {
                    "yes".to_string()
                } else {
                    format!("{GREY}no{RESET}")
                };
                t.add_row(vec![w.name, synced]);
            }
            print!("{}", t.render());
        }
    }

    Ok(())
}
