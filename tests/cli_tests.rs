use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{missing_config, pk, setup_test_events};

fn add(events: &str, config: &str, params: &[&str]) -> assert_cmd::assert::Assert {
    let mut args = vec!["--events", events, "--config", config, "add"];
    args.extend_from_slice(params);
    args.extend_from_slice(&["--name", "Anna Petrova"]);
    pk().args(&args).assert()
}

#[test]
fn test_add_then_list() {
    let events = setup_test_events("cli_add_then_list");
    let config = missing_config("cli_add_then_list");

    add(&events, &config, &["кайт=\"core 13.5\"", "from=10:00", "to=12:00"])
        .success()
        .stdout(contains("Сохранено: Anna Petrova | [core 13.5] | 10:00 → 12:00"));

    add(&events, &config, &["to=18:00", "кайт=Rebel", "from=16:00"]).success();

    pk()
        .args(["--events", &events, "--config", &config, "list"])
        .assert()
        .success()
        .stdout(contains("core 13.5"))
        .stdout(contains("Rebel").and(contains("16:00 → 18:00")));

    let content = fs::read_to_string(&events).unwrap();
    let first: Vec<&str> = content.lines().next().unwrap().split('\t').collect();
    assert_eq!(first.len(), 7);
    assert_eq!(first[1], "local");
    assert_eq!(first[2], "0");
    assert_eq!(first[3], "Anna Petrova");
}

#[test]
fn test_add_missing_keys_fails_and_names_them() {
    let events = setup_test_events("cli_add_missing");
    let config = missing_config("cli_add_missing");

    add(&events, &config, &["from=10:00", "to=12:00"])
        .failure()
        .stderr(contains("Не хватает: кайт"))
        .stderr(contains("from,").not());

    assert!(!std::path::Path::new(&events).exists());
}

#[test]
fn test_list_without_log() {
    let events = setup_test_events("cli_list_empty");
    let config = missing_config("cli_list_empty");

    pk()
        .args(["--events", &events, "--config", &config, "list"])
        .assert()
        .success()
        .stdout(contains("Пока нет записей."));
}

#[test]
fn test_list_bad_count_uses_default() {
    let events = setup_test_events("cli_list_bad_count");
    let config = missing_config("cli_list_bad_count");

    for i in 1..=12 {
        let kite = format!("кайт=k{i}");
        add(&events, &config, &[&kite, "from=1", "to=2"]).success();
    }

    let run = |count: Option<&str>| {
        let mut args = vec!["--events", events.as_str(), "--config", config.as_str(), "list"];
        args.extend(count);
        let out = pk().args(&args).output().expect("run list");
        assert!(out.status.success());
        String::from_utf8_lossy(&out.stdout).to_string()
    };

    let default = run(None);
    let bad = run(Some("abc"));
    let rows = |s: &str| s.lines().filter(|l| l.contains(" → ")).count();

    assert_eq!(rows(&default), 10);
    assert_eq!(rows(&bad), 10);
    assert_eq!(rows(&run(Some("3"))), 3);
    assert!(!default.contains("[k2]"));
    assert!(default.contains("[k12]"));
}

#[test]
fn test_init_test_mode_creates_log_only() {
    let events = setup_test_events("cli_init");
    let config = missing_config("cli_init");

    pk()
        .args(["--events", &events, "--config", &config, "--test", "init"])
        .assert()
        .success();

    assert!(std::path::Path::new(&events).exists());
    assert!(!std::path::Path::new(&config).exists());
}

#[test]
fn test_init_writes_config_and_config_print_reads_it() {
    let events = setup_test_events("cli_init_config");
    let config = missing_config("cli_init_config");

    pk()
        .args(["--events", &events, "--config", &config, "init"])
        .assert()
        .success();
    assert!(std::path::Path::new(&config).exists());

    pk()
        .args(["--config", &config, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("list_max: 50"))
        .stdout(contains(events.as_str()));

    fs::remove_file(&config).ok();
}

#[test]
fn test_serve_without_token_fails_fast() {
    let events = setup_test_events("cli_serve_no_token");
    let config = missing_config("cli_serve_no_token");

    pk()
        .env_remove("BOT_PearlKiteBot")
        .env_remove("BOT_TOKEN")
        .args(["--events", &events, "--config", &config, "serve"])
        .assert()
        .failure()
        .stderr(contains("BOT_PearlKiteBot"));

    assert!(!std::path::Path::new(&events).exists());
}
