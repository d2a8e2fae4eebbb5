use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::load_summary;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{CYAN, RESET, color_for_stock};
use crate::utils::date::today;
use crate::utils::formatting::{bold, format_quantity};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Dashboard) {
        let mut ws = Workspace::open(cfg)?;
        let today = today().format("%Y-%m-%d").to_string();
        let s = load_summary(&mut ws.store, &ws.cfg, &today)?;

        header("Site dashboard");

        let tickers: Vec<String> = s
            .tickers
            .iter()
            .map(|t| {
                format!(
                    "{}: {}{}{}",
                    bold(&t.label),
                    color_for_stock(t.quantity),
                    format_quantity(t.quantity),
                    RESET
                )
            })
            .collect();
        println!("{}\n", tickers.join("   "));

        println!(
            "{CYAN}• Installations:{RESET} {} total, {} today ({})",
            s.installations_total, s.installations_today, today
        );
        println!(
            "{CYAN}• Inward:{RESET} {} entries, {} units received\n",
            s.inward_entries,
            format_quantity(s.inward_quantity)
        );

        if !s.per_worker.is_empty() {
            let mut t = Table::with_headers(&["worker", "installations"]);
            for (w, n) in &s.per_worker {
                t.add_row(vec![w.clone(), n.to_string()]);
            }
            print!("{}", t.render());
            println!();
        }

        if s.alerts.is_empty() {
            success("No low-stock alerts.");
        }
        for a in &s.alerts {
            warning(a);
        }
    }

    Ok(())
}
