use crate::cli::parser::{Commands, StockSort};
use crate::config::Config;
use crate::core::alerts::low_stock_alerts;
use crate::core::ledger::load_ledger;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, color_for_stock};
use crate::utils::formatting::format_quantity;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stock { sort, filter } = cmd {
        let mut ws = Workspace::open(cfg)?;
        let ledger = load_ledger(&mut ws.store)?;

        if ledger.is_empty() {
            info("No stock movements recorded yet.");
            return Ok(());
        }

        let mut lines = match sort {
            StockSort::Qty => ledger.sorted_by_quantity(),
            StockSort::Name => ledger.sorted_by_name(),
        };
        let bucket = filter.as_deref().map(str::trim).filter(|f| !f.is_empty());
        if let Some(f) = bucket {
            lines.retain(|l| l.material.contains(f));
        }

        header("Stock on hand");
        let mut t = Table::with_headers(&["material", "quantity"]);
        for l in &lines {
            t.add_row(vec![
                l.material.clone(),
                format!("{}{}{}", color_for_stock(l.quantity), format_quantity(l.quantity), RESET),
            ]);
        }
        print!("{}", t.render());
        if let Some(f) = bucket {
            let total: f64 = ledger.matching(f).iter().map(|l| l.quantity).sum();
            println!("Total for '{}': {}", f, format_quantity(total));
        }
        println!();

        let alerts = low_stock_alerts(&ledger, &ws.cfg.low_stock);
        if alerts.is_empty() {
            success("All materials above their thresholds.");
        }
        for a in alerts {
            warning(a);
        }
    }

    Ok(())
}
