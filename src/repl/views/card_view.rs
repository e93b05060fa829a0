//! # Card Layout
//!
//! Lays out rendered cards as plain text lines. Styling is applied by the
//! renderer so the layout stays testable without a terminal.

use crate::repl::models::card::MAP_LINK_LABEL;
use crate::repl::models::Card;

/// Indentation of the lines below a card title
const DETAIL_INDENT: &str = "    ";

/// Position marker shown before a card title, used by `open <n>`
pub fn position_marker(position: usize) -> String {
    format!("[{position}]")
}

/// Title line of a card at a 1-based position
pub fn title_line(position: usize, card: &Card) -> String {
    format!("{} {}", position_marker(position), card.title)
}

/// Every line below the title, indented
pub fn detail_lines(card: &Card) -> Vec<String> {
    let mut lines: Vec<String> = card
        .detail_lines()
        .iter()
        .map(|line| format!("{DETAIL_INDENT}{line}"))
        .collect();

    if !card.flag.is_empty() {
        lines.push(format!("{DETAIL_INDENT}Flag: {} ({})", card.flag_alt, card.flag));
    }
    if !card.map_link.is_empty() {
        lines.push(format!("{DETAIL_INDENT}{MAP_LINK_LABEL}: {}", card.map_link));
    }
    lines
}

/// One-line summary used in compact mode
pub fn compact_line(position: usize, card: &Card) -> String {
    format!(
        "{} | {} | {}",
        title_line(position, card),
        card.capital,
        card.population
    )
}
