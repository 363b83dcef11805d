//! Arcboard CLI UI primitives.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Terminal palette
pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51);
    pub const MAGENTA: Color = Color::Color256(201);
    pub const VIOLET: Color = Color::Color256(135);
    pub const NEON_GREEN: Color = Color::Color256(82);
    pub const DIM: Color = Color::Color256(240);
}

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}"; // ◆
    pub const DIAMOND_OUTLINE: &str = "\u{25C7}"; // ◇
    pub const TARGET_FILLED: &str = "\u{25C9}"; // ◉
    pub const TRIANGLE: &str = "\u{25B8}"; // ▸
    pub const PROGRESS_FILLED: &str = "\u{25B0}"; // ▰
    pub const PROGRESS_EMPTY: &str = "\u{25B1}"; // ▱
    pub const DOT: &str = "\u{00B7}"; // ·
}

const BOX_WIDTH: usize = 55;
const BAR_SLOTS: usize = 8;

/// Print compact version header
pub fn print_compact_header(version: &str) {
    println!(
        "  {} {} {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        style("arcboard").fg(colors::CYAN).bold(),
        style(version).dim()
    );
}

pub fn success(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::TARGET_FILLED).fg(colors::NEON_GREEN),
        msg
    );
}

pub fn error(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::MAGENTA),
        style(msg).fg(colors::MAGENTA)
    );
}

pub fn info(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CYAN),
        msg
    );
}

pub fn dim(msg: &str) {
    println!("  {}", style(msg).fg(colors::DIM));
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .tick_chars("\u{25CE}\u{25C9}\u{25CE}\u{25C9}") // ◎◉◎◉
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(spinner_style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(150));
    pb
}

pub fn divider() {
    println!();
    let line = "\u{254C}".repeat(BOX_WIDTH - 2); // ╌
    println!("  {}", style(line).fg(colors::DIM));
    println!();
}

pub fn box_header(title: &str) {
    let title_padded = format!(" {} ", title);
    let dashes = BOX_WIDTH.saturating_sub(title_padded.chars().count() + 4);

    println!(
        "  {}{}{}{}",
        style("\u{256D}\u{2500}").fg(colors::CYAN), // ╭─
        style(title_padded).fg(colors::CYAN).bold(),
        style("\u{2500}".repeat(dashes)).fg(colors::CYAN),
        style("\u{256E}").fg(colors::CYAN) // ╮
    );
}

pub fn box_line(content: &str) {
    let padding = (BOX_WIDTH - 2).saturating_sub(content.chars().count());
    println!(
        "  {} {}{}{}",
        style("\u{2502}").fg(colors::CYAN), // │
        content,
        " ".repeat(padding),
        style("\u{2502}").fg(colors::CYAN)
    );
}

pub fn box_footer() {
    println!(
        "  {}{}{}",
        style("\u{2570}").fg(colors::CYAN), // ╰
        style("\u{2500}".repeat(BOX_WIDTH - 2)).fg(colors::CYAN),
        style("\u{256F}").fg(colors::CYAN) // ╯
    );
}

/// Fixed-width bar showing `part` of `total` as filled slots.
pub fn ratio_bar(part: usize, total: usize) -> String {
    let filled = ((part * BAR_SLOTS) / total.max(1)).min(BAR_SLOTS);
    format!(
        "{}{}",
        symbols::PROGRESS_FILLED.repeat(filled),
        symbols::PROGRESS_EMPTY.repeat(BAR_SLOTS - filled)
    )
}

/// Print template summary line
pub fn template_line(id: &str, name: &str, category: &str, required: usize, total: usize) {
    println!(
        "  {}   {:8} {:22} {:6} {} params   {}",
        style(symbols::TRIANGLE).fg(colors::CYAN),
        style(id).bold(),
        name,
        style(category).dim(),
        total,
        style(ratio_bar(required, total)).fg(colors::VIOLET)
    );
}

/// Print one parameter of a template
pub fn param_line(name: &str, kind: &str, required: bool, description: &str) {
    let marker = if required {
        style(symbols::DIAMOND).fg(colors::MAGENTA)
    } else {
        style(symbols::DOT).fg(colors::DIM)
    };
    println!(
        "        {} {:14} {:8} {}",
        marker,
        style(name).fg(colors::CYAN),
        style(kind).dim(),
        style(description).dim()
    );
}

pub fn timing(label: &str, duration_ms: u128) {
    println!(
        "  {} {} in {}ms",
        style(symbols::DIAMOND_OUTLINE).fg(colors::CYAN),
        label,
        duration_ms
    );
}

/// Print "Nope" error header (for check failures)
pub fn nope_header() {
    println!();
    println!(
        "  {} {}",
        style(symbols::DIAMOND).fg(colors::MAGENTA).bold(),
        style("Nope.").fg(colors::MAGENTA).bold()
    );
    println!();
}

/// Print "Looking good" success for check
pub fn looking_good() {
    println!(
        "  {} {}",
        style(symbols::TARGET_FILLED).fg(colors::NEON_GREEN),
        style("Looking good.").bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_bar_is_fixed_width() {
        for (part, total) in [(0, 7), (2, 7), (7, 7), (3, 0)] {
            assert_eq!(ratio_bar(part, total).chars().count(), BAR_SLOTS);
        }
    }

    #[test]
    fn ratio_bar_fills_proportionally() {
        assert_eq!(ratio_bar(0, 5), symbols::PROGRESS_EMPTY.repeat(8));
        assert_eq!(ratio_bar(5, 5), symbols::PROGRESS_FILLED.repeat(8));
        assert!(ratio_bar(1, 2).starts_with(&symbols::PROGRESS_FILLED.repeat(4)));
    }
}
