//! Terminal colour helpers.
//!
//! Respects the `NO_COLOR` env-var and the `--no-color` CLI flag. Every helper
//! returns a `String` so callers can `writeln!(out, "{}", accent("…"))`.

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

// ── Global color toggle ─────────────────────────────────────────────────────

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Call once at startup (after CLI parsing) to disable colour globally.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
    colored::control::set_override(false);
}

/// Initialise the colour system.  Checks `NO_COLOR` env-var and optional
/// `--no-color` flag.
pub fn init_color(no_color_flag: bool) {
    if no_color_flag
        || std::env::var("NO_COLOR")
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    {
        disable_color();
    }
}

fn is_color() -> bool {
    !COLOR_DISABLED.load(Ordering::Relaxed)
}

// ── Palette ─────────────────────────────────────────────────────────────────

pub mod palette {
    pub const ACCENT: (u8, u8, u8) = (0x2D, 0x8C, 0xFF);
    pub const INFO: (u8, u8, u8) = (0x5B, 0xB4, 0xFF);
    pub const SUCCESS: (u8, u8, u8) = (0x2F, 0xBF, 0x71);
    pub const WARN: (u8, u8, u8) = (0xFF, 0xB0, 0x20);
    pub const ERROR: (u8, u8, u8) = (0xE2, 0x3D, 0x2D);
    pub const MUTED: (u8, u8, u8) = (0x8B, 0x7F, 0x77);
}

fn apply(text: &str, rgb: (u8, u8, u8)) -> String {
    if is_color() {
        text.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        text.to_string()
    }
}

fn apply_bold(text: &str, rgb: (u8, u8, u8)) -> String {
    if is_color() {
        text.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        text.to_string()
    }
}

/// Primary accent (headings, the question text).
pub fn accent(text: &str) -> String {
    apply(text, palette::ACCENT)
}

/// Informational values (names, counts).
pub fn info(text: &str) -> String {
    apply(text, palette::INFO)
}

pub fn success(text: &str) -> String {
    apply(text, palette::SUCCESS)
}

pub fn warn(text: &str) -> String {
    apply(text, palette::WARN)
}

pub fn error(text: &str) -> String {
    apply(text, palette::ERROR)
}

/// De-emphasis / metadata.
pub fn muted(text: &str) -> String {
    apply(text, palette::MUTED)
}

/// Bold heading in accent colour.
pub fn heading(text: &str) -> String {
    apply_bold(text, palette::ACCENT)
}

pub fn bold(text: &str) -> String {
    if is_color() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

// ── Composite icons ─────────────────────────────────────────────────────────

/// Green ✓
pub fn icon_ok(label: &str) -> String {
    format!("{} {}", success("✓"), label)
}

/// Red ✗
pub fn icon_fail(label: &str) -> String {
    format!("{} {}", error("✗"), label)
}

/// Yellow ⚠
pub fn icon_warn(label: &str) -> String {
    format!("{} {}", warn("⚠"), label)
}

/// Muted bullet
pub fn icon_muted(label: &str) -> String {
    format!("{} {}", muted("·"), muted(label))
}

/// Format "  Label : value" with the label dimmed and the value highlighted.
pub fn label_value(label: &str, value: &str) -> String {
    format!("  {} : {}", muted(label), info(value))
}

// ── Box drawing ─────────────────────────────────────────────────────────────

/// A three-line box around `title`, sized by display width.
pub fn header_box(title: &str) -> String {
    use unicode_width::UnicodeWidthStr;

    let display_w = UnicodeWidthStr::width(title);
    let inner = (display_w + 4).max(42);
    let pad = inner - display_w;
    let left = pad / 2;
    let right = pad - left;
    [
        accent(&format!("┌{}┐", "─".repeat(inner))),
        accent(&format!(
            "│{}{}{}│",
            " ".repeat(left),
            title,
            " ".repeat(right)
        )),
        accent(&format!("└{}┘", "─".repeat(inner))),
    ]
    .join("\n")
}
