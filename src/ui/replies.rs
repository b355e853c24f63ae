//! User-facing texts shared by the bot and the CLI.

use crate::models::param_key::ParamKey;
use crate::models::record::EventRecord;
use std::path::Path;

/// Static usage text for `/start` and `/help`.
pub fn help_text() -> String {
    [
        "Команды:",
        "/go_kite кайт=\"core 13.5\" from=10:00 to=12:00 — добавить запись (имя из профиля)",
        "/иду_кататься кайт=\"core 13.5\" from=10:00 to=12:00 — то же (русская форма)",
        "/list [N] — показать последние N (по умолчанию 10)",
    ]
    .join("\n")
}

/// Usage reminder naming the keys a registration lacked.
pub fn usage_text(missing: &[ParamKey]) -> String {
    let names: Vec<&str> = missing.iter().map(ParamKey::as_str).collect();
    format!(
        "Формат:\n\
         /go_kite кайт=\"core 13.5\" from=10:00 to=12:00\n\
         Можно в кавычках: /go_kite кайт=\"core 13.51\" from=\"11:01\" to=\"12:00\"\n\
         Не хватает: {}",
        names.join(", ")
    )
}

/// Confirmation echoed after a successful registration.
pub fn saved_text(record: &EventRecord, log_path: &Path) -> String {
    format!(
        "Сохранено: {} | [{}] | {} → {}\n→ {}",
        record.name,
        record.kite,
        record.from,
        record.to,
        log_path.display()
    )
}

pub const NO_RECORDS: &str = "Пока нет записей.";

pub const INTERNAL_ERROR: &str = "Не удалось выполнить команду, попробуйте позже.";

/// Numbered listing of records, oldest first.
pub fn list_text(records: &[EventRecord]) -> String {
    if records.is_empty() {
        return NO_RECORDS.to_string();
    }

    let items: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}", i + 1, r.summary()))
        .collect();

    format!("Последние записи:\n{}", items.join("\n"))
}
