use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::{init_db, open_db};
use crate::db::migrate::applied_count;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let pool = if *migrate {
            let pool = DbPool::new(&cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let before = applied_count(&pool.conn)?;
            init_db(&pool.conn)?;
            let applied = applied_count(&pool.conn)? - before;
            if applied > 0 {
                println!("{}✔ Migration completed: {} migration(s) applied.{}\n", GREEN, applied, RESET);
            } else {
                println!("{}✔ Database already up to date.{}\n", GREEN, RESET);
            }
            pool
        } else {
            open_db(&cfg.database)?
        };

        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
