//! Terminal output helpers for the CLI commands.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tag(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

/// A listing row for the terminal: the reporter name is highlighted.
pub fn listing_row(index: usize, record: &crate::models::record::EventRecord) -> String {
    format!(
        "{:>3}. {} | {} | [{}] | {} → {}",
        index,
        Colour::Fixed(245).paint(record.timestamp.as_str()),
        Colour::Cyan.bold().paint(record.name.as_str()),
        record.kite,
        record.from,
        record.to
    )
}
