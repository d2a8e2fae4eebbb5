use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::export::export_sheet;
use crate::utils::path::expand_tilde_string;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let file = expand_tilde_string(file);
        let mut ws = Workspace::open(cfg)?;
        let n = export_sheet(
            &mut ws.store,
            *table,
            *format,
            &file,
            range.as_deref(),
            *force,
        )?;

        if n > 0 {
            ws.audit(
                "export",
                &file,
                &format!("{} {} rows as {}", n, table.label(), format.as_str()),
            );
        }
    }

    Ok(())
}
