use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::consolidate::consolidate;
use crate::core::records::{RecordFilter, fetch_filtered};
use crate::core::survey::{fill_gps_from_surveys, load_surveys};
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::models::work_log::WorkLog;
use crate::store::{Record, Sheet, TabularStore};
use crate::ui::messages::{info, warning};
use crate::utils::colors::{CYAN, GREY, RESET, colorize_optional};
use crate::utils::formatting::format_quantity;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        table,
        worker,
        material,
        site,
        search,
        grouped,
    } = cmd
    {
        let filter = RecordFilter {
            workers: worker.clone(),
            materials: material.clone(),
            sites: site.clone(),
            search: search.clone(),
        };

        if *table != Sheet::WorkLogs
            && (!filter.workers.is_empty() || !filter.materials.is_empty() || !filter.sites.is_empty())
        {
            warning("--worker, --material and --site only apply to work-logs; using --search only.");
        }

        let mut ws = Workspace::open(cfg)?;
        let records = fetch_filtered(&mut ws.store, *table, &filter)?;

        if records.is_empty() {
            info(format!("No {} rows found.", table.label()));
            return Ok(());
        }

        match table {
            Sheet::WorkLogs => {
                let mut logs: Vec<WorkLog> = records.iter().map(WorkLog::from_record).collect();
                let surveys = load_surveys(&mut ws.store)?;
                let borrowed = fill_gps_from_surveys(&mut logs, &surveys);

                let shown = if *grouped {
                    print_groups(&logs)
                } else {
                    print_work_logs(&logs);
                    records.len()
                };
                if borrowed > 0 {
                    println!("{GREY}{borrowed} position(s) taken from the survey log{RESET}");
                }
                if *grouped {
                    println!("{CYAN}{shown} installation(s) from {} row(s){RESET}", records.len());
                } else {
                    println!("{CYAN}{shown} row(s){RESET}");
                }
            }
            other => {
                if *grouped {
                    warning("--grouped only applies to work-logs.");
                }
                let headers = ws.store.columns(*other)?;
                print_records(&headers, &records);
                println!("{CYAN}{} row(s){RESET}", records.len());
            }
        }
    }

    Ok(())
}

fn print_work_logs(logs: &[WorkLog]) {
    let mut t = Table::with_headers(&[
        "id", "date", "dtr_code", "site", "worker", "meter_type", "material", "qty", "gps",
    ]);
    for l in logs {
        t.add_row(vec![
            l.id.clone(),
            l.date.clone(),
            colorize_optional(&l.dtr_code),
            l.site.clone(),
            l.worker.clone(),
            l.meter_type.clone(),
            l.material.clone(),
            format_quantity(l.qty),
            colorize_optional(&l.gps.map(|p| p.to_string()).unwrap_or_default()),
        ]);
    }
    print!("{}", t.render());
}

/// Returns the number of groups printed.
fn print_groups(logs: &[WorkLog]) -> usize {
    let groups = consolidate(logs);
    let mut t = Table::with_headers(&["date", "dtr_code", "worker", "site", "materials", "total", "rows"]);
    for g in &groups {
        t.add_row(vec![
            g.key.date.clone(),
            g.key.dtr_code.clone(),
            g.key.worker.clone(),
            g.site.clone(),
            g.materials.clone(),
            format_quantity(g.total_qty),
            g.ids.len().to_string(),
        ]);
    }
    print!("{}", t.render());
    groups.len()
}

fn print_records(headers: &[String], records: &[Record]) {
    let mut t = Table::with_headers(headers);
    for r in records {
        t.add_row(headers.iter().map(|h| colorize_optional(r.get(h))).collect());
    }
    print!("{}", t.render());
}
