#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ssv() -> Command {
    cargo_bin_cmd!("sitesupervisor")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitesupervisor.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh database with every sheet created
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    ssv()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// One installation of a 1 Phase meter at DTR-1 on 2025-09-01.
pub fn install(db_path: &str, dtr: &str, cable: &str, lugs: &str) {
    ssv()
        .args([
            "--db",
            db_path,
            "install",
            "--date",
            "2025-09-01",
            "--meter-type",
            "1 Phase",
            "--site",
            "Default Site",
            "--dtr",
            dtr,
            "--worker",
            "General",
            "--cable",
            cable,
            "--lugs",
            lugs,
        ])
        .assert()
        .success();
}

pub fn count_rows(db_path: &str, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
        .expect("count")
}

/// Ids of a table in insertion order.
pub fn ids_of(db_path: &str, table: &str) -> Vec<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare(&format!("SELECT id FROM {table} ORDER BY rowid"))
        .expect("prepare");
    stmt.query_map([], |r| r.get::<_, String>(0))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect()
}
