use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count_rows, ids_of, init_db, install, ssv};

#[test]
fn test_duplicate_worker_is_rejected() {
    let db_path = init_db("worker_duplicate");

    ssv()
        .args(["--db", &db_path, "worker", "--add", "Ravi"])
        .assert()
        .success()
        .stdout(contains("Worker 'Ravi' added."));

    ssv()
        .args(["--db", &db_path, "worker", "--add", " ravi "])
        .assert()
        .failure()
        .stderr(contains("Worker already exists: ravi"));

    assert_eq!(count_rows(&db_path, "workers"), 1);

    ssv()
        .args(["--db", &db_path, "worker", "--list"])
        .assert()
        .success()
        .stdout(contains("Ravi"));
}

#[test]
fn test_del_asks_for_confirmation() {
    let db_path = init_db("del_confirm");
    ssv()
        .args(["--db", &db_path, "inward", "--material", "Lugs", "--qty", "40"])
        .assert()
        .success();
    let id = ids_of(&db_path, "inventory").remove(0);

    ssv()
        .args(["--db", &db_path, "del", "inventory", "--id", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(count_rows(&db_path, "inventory"), 1);

    ssv()
        .args(["--db", &db_path, "del", "inventory", "--id", &id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("1 row(s) deleted from Inventory."));
    assert_eq!(count_rows(&db_path, "inventory"), 0);
}

#[test]
fn test_del_reports_missing_ids() {
    let db_path = init_db("del_missing");
    install(&db_path, "DTR-1", "5", "0");
    let ids = ids_of(&db_path, "work_logs");

    ssv()
        .args([
            "--db", &db_path, "del", "work-logs", "--id", &ids[1], "--id", "no-such-id", "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("No row with id 'no-such-id'"))
        .stdout(contains("1 row(s) deleted"));

    assert_eq!(ids_of(&db_path, "work_logs"), vec![ids[0].clone()]);
}

#[test]
fn test_grouped_list_and_group_delete() {
    let db_path = init_db("del_group");
    install(&db_path, "DTR-1", "10", "4");
    install(&db_path, "DTR-2", "0", "0");

    ssv()
        .args(["--db", &db_path, "list", "work-logs", "--grouped"])
        .assert()
        .success()
        .stdout(contains("1 Phase Box x1, Cable x10, Lugs x4"))
        .stdout(contains("2 installation(s) from 4 row(s)"));

    ssv()
        .args([
            "--db",
            &db_path,
            "del",
            "work-logs",
            "--group",
            "--date",
            "2025-09-01",
            "--dtr",
            "DTR-1",
            "--worker",
            "General",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("3 row(s) deleted"));

    assert_eq!(count_rows(&db_path, "work_logs"), 1);
}

#[test]
fn test_group_delete_keeps_lookalike_installation() {
    let db_path = init_db("del_group_pipe");
    install(&db_path, "A|B", "10", "0");
    install(&db_path, "A", "0", "0");

    ssv()
        .args(["--db", &db_path, "list", "work-logs", "--grouped"])
        .assert()
        .success()
        .stdout(contains("2 installation(s) from 3 row(s)"));

    ssv()
        .args([
            "--db",
            &db_path,
            "del",
            "work-logs",
            "--group",
            "--date",
            "2025-09-01",
            "--dtr",
            "A|B",
            "--worker",
            "General",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("2 row(s) deleted"));

    assert_eq!(count_rows(&db_path, "work_logs"), 1);
}

#[test]
fn test_group_needs_all_three_fields() {
    let db_path = init_db("del_group_partial");
    install(&db_path, "DTR-1", "0", "0");

    ssv()
        .args([
            "--db", &db_path, "del", "work-logs", "--group", "--date", "2025-09-01", "--yes",
        ])
        .assert()
        .failure();

    assert_eq!(count_rows(&db_path, "work_logs"), 1);
}

#[test]
fn test_list_filters() {
    let db_path = init_db("list_filters");
    install(&db_path, "DTR-1", "10", "0");
    install(&db_path, "TX-9", "0", "2");

    ssv()
        .args(["--db", &db_path, "list", "work-logs", "--material", "Lugs"])
        .assert()
        .success()
        .stdout(contains("TX-9"))
        .stdout(contains("DTR-1").not())
        .stdout(contains("1 row(s)"));

    ssv()
        .args(["--db", &db_path, "list", "work-logs", "--search", "dtr"])
        .assert()
        .success()
        .stdout(contains("TX-9").not())
        .stdout(contains("2 row(s)"));
}

#[test]
fn test_edit_round_trip() {
    let db_path = init_db("edit_round_trip");
    install(&db_path, "DTR-1", "10", "0");
    let cable_id = ids_of(&db_path, "work_logs").remove(1);

    ssv()
        .args([
            "--db", &db_path, "edit", "work-logs", "--id", &cable_id, "--set", "qty=12",
        ])
        .assert()
        .success()
        .stdout(contains("updated"))
        .stdout(contains("12"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let (material, qty, synced): (String, f64, String) = conn
        .query_row(
            "SELECT material, qty, synced FROM work_logs WHERE id = ?1",
            [&cable_id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();
    assert_eq!(material, "Cable");
    assert_eq!(qty, 12.0);
    assert_eq!(synced, "FALSE");
}

#[test]
fn test_edit_errors() {
    let db_path = init_db("edit_errors");
    install(&db_path, "DTR-1", "0", "0");
    let id = ids_of(&db_path, "work_logs").remove(0);

    ssv()
        .args(["--db", &db_path, "edit", "work-logs", "--id", "missing", "--set", "qty=1"])
        .assert()
        .failure()
        .stderr(contains("No row with id 'missing'"));

    ssv()
        .args(["--db", &db_path, "edit", "work-logs", "--id", &id, "--set", "colour=red"])
        .assert()
        .failure()
        .stderr(contains("Unknown column 'colour'"));

    ssv()
        .args(["--db", &db_path, "edit", "work-logs", "--id", &id, "--set", "id=x"])
        .assert()
        .failure()
        .stderr(contains("cannot be edited"));
}

#[test]
fn test_settings_extend_lookups() {
    let db_path = init_db("settings_lookups");

    ssv()
        .args(["--db", &db_path, "settings", "--site", "North Feeder"])
        .assert()
        .success()
        .stdout(contains("Added site 'North Feeder'."));

    ssv()
        .args(["--db", &db_path, "settings", "--print"])
        .assert()
        .success()
        .stdout(contains("Sites:       North Feeder"))
        .stdout(contains("Meter types: 1 Phase, 3 Phase"));
}
