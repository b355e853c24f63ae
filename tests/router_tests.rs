mod common;
use common::populate;
use pearlkite::bot::router::{BotCommand, Router, split_command};
use pearlkite::bot::types::{Message, Update};
use pearlkite::core::events::EventLog;
use pearlkite::core::list::ListLimits;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn router() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let log = EventLog::new(dir.path().join("dbs").join("events"));
    (dir, Router::new(log, ListLimits::default()))
}

fn text_message(text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 7,
        "chat": { "id": -100200, "type": "group" },
        "from": { "id": 42, "is_bot": false, "first_name": "Anna", "last_name": "Petrova", "username": "anna_p" },
        "date": 1750000000,
        "text": text,
    }))
    .unwrap()
}

fn reply(router: &Router, text: &str) -> Option<String> {
    router.handle(&text_message(text)).unwrap()
}

#[test]
fn test_split_command_parts() {
    let line = split_command("/list@PearlKiteBot  5 ").unwrap();
    assert_eq!(line.name, "list");
    assert_eq!(line.target, Some("PearlKiteBot"));
    assert_eq!(line.args, "5");

    let line = split_command("/ иду_кататься кайт=x").unwrap();
    assert_eq!(line.name, "иду_кататься");
    assert_eq!(line.args, "кайт=x");

    assert!(split_command("hello /list").is_none());
    assert!(split_command("/").is_none());
}

#[test]
fn test_command_names() {
    assert_eq!(BotCommand::from_name("go_kite"), Some(BotCommand::Register));
    assert_eq!(BotCommand::from_name("idu_katatsya"), Some(BotCommand::Register));
    assert_eq!(BotCommand::from_name("ИДУ_КАТАТЬСЯ"), Some(BotCommand::Register));
    assert_eq!(BotCommand::from_name("LIST"), Some(BotCommand::List));
    assert_eq!(BotCommand::from_name("start"), Some(BotCommand::Help));
    assert_eq!(BotCommand::from_name("help"), Some(BotCommand::Help));
    assert_eq!(BotCommand::from_name("weather"), None);
}

#[test]
fn test_register_appends_and_confirms() {
    let (_dir, router) = router();

    let text = reply(&router, "/go_kite кайт=\"core 13.5\" from=10:00 to=12:00").unwrap();
    assert!(text.starts_with("Сохранено: Anna Petrova | [core 13.5] | 10:00 → 12:00"));
    assert!(text.contains(&router.log().path().display().to_string()));

    let content = fs::read_to_string(router.log().path()).unwrap();
    let fields: Vec<&str> = content.trim_end().split('\t').collect();
    assert_eq!(fields[1..], ["-100200", "42", "Anna Petrova", "core 13.5", "10:00", "12:00"]);
}

#[test]
fn test_register_missing_kite_names_only_kite() {
    let (_dir, router) = router();

    let text = reply(&router, "/go_kite from=10:00 to=12:00").unwrap();
    assert!(text.starts_with("Формат:"));
    assert!(text.ends_with("Не хватает: кайт"));
    assert!(!router.log().path().exists());
}

#[test]
fn test_register_without_arguments_names_all_keys() {
    let (_dir, router) = router();
    let text = reply(&router, "/go_kite").unwrap();
    assert!(text.ends_with("Не хватает: кайт, from, to"));
}

#[test]
fn test_cyrillic_alias_with_space_after_slash() {
    let (_dir, router) = router();

    let text = reply(&router, "/ иду_кататься кайт=Rebel from=9 to=11").unwrap();
    assert!(text.starts_with("Сохранено: Anna Petrova | [Rebel] | 9 → 11"));
}

#[test]
fn test_register_from_caption() {
    let (_dir, router) = router();
    let msg: Message = serde_json::from_value(json!({
        "message_id": 8,
        "chat": { "id": 5 },
        "from": { "id": 9, "username": "rider" },
        "caption": "/idu_katatsya кайт='Dice 10' from=14:00 to=16:00",
    }))
    .unwrap();

    let text = router.handle(&msg).unwrap().unwrap();
    assert!(text.starts_with("Сохранено: @rider | [Dice 10] | 14:00 → 16:00"));
}

#[test]
fn test_list_empty_log() {
    let (_dir, router) = router();
    assert_eq!(reply(&router, "/list").unwrap(), "Пока нет записей.");
}

#[test]
fn test_list_numbered_oldest_first() {
    let (_dir, router) = router();
    populate(router.log(), 3);

    let text = reply(&router, "/list").unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Последние записи:");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1. "));
    assert!(lines[1].ends_with(" | Anna Petrova | [kite-1] | 10:00 → 12:00"));
    assert!(lines[3].starts_with("3. "));
    assert!(lines[3].contains("[kite-3]"));
}

#[test]
fn test_list_count_argument_and_clamping() {
    let (_dir, router) = router();
    populate(router.log(), 60);

    let count = |text: &str| reply(&router, text).unwrap().lines().count() - 1;

    assert_eq!(count("/list"), 10);
    assert_eq!(count("/list abc"), 10);
    assert_eq!(count("/list 3"), 3);
    assert_eq!(count("/list 0"), 1);
    assert_eq!(count("/list -4"), 1);
    assert_eq!(count("/list 500"), 50);
    assert_eq!(count("/list 99999999999999999999"), 50);
    assert_eq!(count("/list -99999999999999999999"), 1);

    let last = reply(&router, "/list 2").unwrap();
    assert!(last.lines().nth(2).unwrap().contains("[kite-60]"));
}

#[test]
fn test_help_and_start() {
    let (_dir, router) = router();
    let help = reply(&router, "/start").unwrap();
    assert!(help.starts_with("Команды:"));
    assert!(help.contains("/list [N]"));
    assert_eq!(reply(&router, "/help").unwrap(), help);
}

#[test]
fn test_plain_text_is_echoed() {
    let (_dir, router) = router();
    assert_eq!(reply(&router, "ветер 15 узлов").as_deref(), Some("ветер 15 узлов"));
}

#[test]
fn test_unknown_command_and_foreign_bot_are_ignored() {
    let (_dir, router) = router();
    assert_eq!(reply(&router, "/weather"), None);

    let router = router.with_bot_username(Some("PearlKiteBot".into()));
    assert_eq!(reply(&router, "/list@OtherBot"), None);
    assert_eq!(
        reply(&router, "/list@pearlkitebot").as_deref(),
        Some("Пока нет записей.")
    );
}

#[test]
fn test_effective_message_prefers_message_then_channel_post() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 100,
        "channel_post": { "message_id": 1, "chat": { "id": -1 }, "text": "/list" },
    }))
    .unwrap();
    assert_eq!(update.effective_message().unwrap().chat.id, -1);

    let update: Update = serde_json::from_value(json!({ "update_id": 101 })).unwrap();
    assert!(update.effective_message().is_none());
}

#[test]
fn test_message_without_sender_records_empty_identity() {
    let (_dir, router) = router();
    let msg: Message = serde_json::from_value(json!({
        "message_id": 3,
        "chat": { "id": -55 },
        "text": "/go_kite кайт=x from=1 to=2",
    }))
    .unwrap();

    let text = router.handle(&msg).unwrap().unwrap();
    assert!(text.starts_with("Сохранено:  | [x] | 1 → 2"));

    let rec = router.log().tail(1).unwrap().remove(0);
    assert_eq!(rec.chat_id, "-55");
    assert_eq!(rec.user_id, "");
    assert_eq!(rec.name, "");
}

#[tokio::test]
async fn test_drain_waits_for_pending_handlers() {
    use pearlkite::bot::runner::drain;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    let done = Arc::new(AtomicUsize::new(0));
    let mut in_flight = tokio::task::JoinSet::new();
    for i in 0..4u64 {
        let done = Arc::clone(&done);
        in_flight.spawn(async move {
            tokio::time::sleep(Duration::from_millis(20 * i)).await;
            done.fetch_add(1, Ordering::SeqCst);
        });
    }

    assert_eq!(drain(&mut in_flight).await, 4);
    assert_eq!(done.load(Ordering::SeqCst), 4);
    assert!(in_flight.is_empty());
}
