use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::create_backup;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let dest = expand_tilde(file);

        if dest.exists()
            && !ask_confirmation(&format!("The file '{}' already exists. Overwrite?", dest.display()))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        let written = create_backup(&cfg.database, &dest, *compress)?;
        let ws = Workspace::open(cfg)?;

        let target = written.to_string_lossy();
        ws.audit(
            "backup",
            &target,
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
        success(format!("Backup created: {}", target));
    }

    Ok(())
}
