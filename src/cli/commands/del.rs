use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::consolidate::{GroupKey, delete_group};
use crate::core::records::delete_records;
use crate::core::workspace::Workspace;
use crate::errors::{AppError, AppResult};
use crate::store::Sheet;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        table,
        ids,
        group,
        date,
        dtr,
        worker,
        yes,
    } = cmd
    {
        let group = match (*group, date, dtr, worker) {
            (true, Some(d), Some(c), Some(w)) => Some(GroupKey::new(d, c, w)),
            (true, ..) => return Err(AppError::EmptyField("--date, --dtr and --worker")),
            _ => None,
        };

        if group.is_some() && *table != Sheet::WorkLogs {
            return Err(AppError::Config(
                "--group is only valid for work-logs".into(),
            ));
        }
        if group.is_none() && ids.is_empty() {
            return Err(AppError::EmptyField("id"));
        }

        let prompt = match &group {
            Some(key) => format!(
                "Delete every {} row of installation '{}'? This action is irreversible.",
                table.label(),
                key
            ),
            None => format!(
                "Delete {} row(s) from {}? This action is irreversible.",
                ids.len(),
                table.label()
            ),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut ws = Workspace::open(cfg)?;
        let report = match &group {
            Some(key) => delete_group(&mut ws.store, key)?,
            None => delete_records(&mut ws.store, *table, ids)?,
        };

        for id in &report.missing {
            warning(format!("No row with id '{}' in {}", id, table.label()));
        }

        if !report.deleted.is_empty() {
            ws.audit(
                "del",
                table.label(),
                &format!("Deleted {}", report.deleted.join(", ")),
            );
        }
        success(format!(
            "{} row(s) deleted from {}.",
            report.deleted.len(),
            table.label()
        ));
    }

    Ok(())
}
