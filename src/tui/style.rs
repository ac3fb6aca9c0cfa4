//! Styled text primitives.
//!
//! Everything the views draw is a plain `String` with SGR escape sequences
//! embedded. Each styled span carries its own reset, so spans can be
//! concatenated freely, and all layout math goes through [`visible_len`] so
//! styling never shifts alignment.

use crate::tui::colors::Theme;

const ESC: char = '\x1b';
const RESET: &str = "\x1b[0m";

/// Partial-cell glyphs, index = eighths filled.
pub const BLOCKS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
/// Spark ramp, lowest to highest.
pub const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
pub const FULL: char = '█';
pub const EMPTY: char = '░';
pub const RULE: char = '═';

/// Wrap `text` in an SGR sequence. Returns it untouched when no style is asked for.
pub fn ansi(text: &str, color: Option<u8>, bold: bool, dim: bool) -> String {
    let mut codes: Vec<String> = Vec::new();
    if bold {
        codes.push("1".into());
    }
    if dim {
        codes.push("2".into());
    }
    if let Some(c) = color {
        codes.push(format!("38;5;{c}"));
    }
    if codes.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{}m{text}{RESET}", codes.join(";"))
}

pub fn fg(text: &str, color: u8) -> String {
    ansi(text, Some(color), false, false)
}

pub fn bold(text: &str) -> String {
    ansi(text, None, true, false)
}

/// Consume one `ESC [ params m` sequence from `chars`, positioned just
/// after the escape character, and return its parameters.
///
/// Anything that is not a complete SGR sequence is left unconsumed.
fn take_sgr(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    let mut ahead = chars.clone();
    if ahead.next() != Some('[') {
        return None;
    }
    let mut params = String::new();
    loop {
        match ahead.next() {
            Some(c) if c.is_ascii_digit() || c == ';' => params.push(c),
            Some('m') => {
                *chars = ahead;
                return Some(params);
            },
            _ => return None,
        }
    }
}

/// Number of characters in `text` once escape sequences are removed.
pub fn visible_len(text: &str) -> usize {
    let mut count = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC && take_sgr(&mut chars).is_some() {
            continue;
        }
        count += 1;
    }
    count
}

/// `text` with every escape sequence removed.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC && take_sgr(&mut chars).is_some() {
            continue;
        }
        out.push(c);
    }
    out
}

/// Truncate plain text to `width` characters, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Left-justify plain text in a field of `width` characters.
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Cut a styled line at `width` visible characters, keeping escapes intact.
pub fn clip_visible(text: &str, width: usize) -> String {
    if visible_len(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut seen = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC {
            if let Some(params) = take_sgr(&mut chars) {
                out.push_str(&format!("\x1b[{params}m"));
                continue;
            }
        }
        if seen == width {
            break;
        }
        out.push(c);
        seen += 1;
    }
    out.push_str(RESET);
    out
}

/// Proportional bar of exactly `width` cells with eighth-cell resolution.
pub fn progress_bar(done: usize, total: usize, width: usize, theme: &Theme) -> String {
    if total == 0 {
        return fg(&EMPTY.to_string().repeat(width), theme.muted);
    }

    let ratio = (done as f64 / total as f64).clamp(0.0, 1.0);
    let exact = ratio * width as f64;
    let full = (exact.floor() as usize).min(width);
    let partial = ((exact - full as f64) * 8.0).floor() as usize;

    let mut filled = FULL.to_string().repeat(full);
    let mut filled_cells = full;
    if full < width && partial > 0 {
        filled.push(BLOCKS[partial.min(8)]);
        filled_cells += 1;
    }
    let rest = EMPTY.to_string().repeat(width - filled_cells);

    let mut out = String::new();
    if !filled.is_empty() {
        out.push_str(&fg(&filled, theme.progress));
    }
    if !rest.is_empty() {
        out.push_str(&fg(&rest, theme.muted));
    }
    out
}

/// Single ramp glyph for `count` relative to `max`.
pub fn spark_glyph(count: usize, max: usize) -> char {
    if max == 0 || count == 0 {
        return SPARK[0];
    }
    let level = (count.min(max) * (SPARK.len() - 1)) / max;
    SPARK[level]
}

/// Whole-cell bar of `width` cells for `count` relative to `max`.
pub fn spark_bar(count: usize, max: usize, width: usize, theme: &Theme) -> String {
    let cells = if max == 0 { 0 } else { (count.min(max) * width) / max };
    let bar = format!(
        "{}{}",
        FULL.to_string().repeat(cells),
        EMPTY.to_string().repeat(width - cells)
    );
    fg(&bar, theme.progress)
}

/// `  TITLE ═════` spanning `width` columns minus a small margin.
pub fn section_header(title: &str, width: usize, theme: &Theme) -> String {
    let rule_len = width.saturating_sub(title.chars().count() + 4);
    format!(
        "  {} {}",
        bold(title),
        fg(&RULE.to_string().repeat(rule_len), theme.muted)
    )
}
