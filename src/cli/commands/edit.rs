use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::{edit_record, parse_assignments};
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { table, id, set } = cmd {
        let changes = parse_assignments(set)?;

        let mut ws = Workspace::open(cfg)?;
        let row = edit_record(&mut ws.store, *table, id.trim(), &changes)?;

        let summary = changes
            .iter()
            .map(|(c, v)| format!("{c}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        ws.audit("edit", &format!("{} {}", table.label(), id.trim()), &summary);

        success(format!("{} row '{}' updated.", table.label(), id.trim()));

        let mut t = Table::with_headers(&["column", "value"]);
        for (c, v) in row.iter() {
            t.add_row(vec![c.to_string(), colorize_optional(v)]);
        }
        print!("{}", t.render());
    }

    Ok(())
}
