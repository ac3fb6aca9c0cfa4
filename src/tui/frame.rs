//! Box framing for rendered views.

use crate::tui::colors::Theme;
use crate::tui::style::{clip_visible, fg, truncate, visible_len};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Rule cells kept between the corner and a title or footer.
const LABEL_MARGIN: usize = 2;

/// Horizontal rule of `inner` cells with `label` embedded, or a plain rule.
///
/// `leading` places the label after the left margin (titles); otherwise it
/// is placed before the right margin (footers).
fn rule(inner: usize, label: Option<&str>, leading: bool) -> String {
    let h = |n: usize| HORIZONTAL.to_string().repeat(n);
    let label = match label.filter(|l| !l.is_empty()) {
        // Label plus its padding spaces must fit beside the margin.
        Some(l) if inner >= LABEL_MARGIN + 3 => l,
        _ => return h(inner),
    };

    let text = format!(" {} ", truncate(label, inner - LABEL_MARGIN - 2));
    let fill = inner - LABEL_MARGIN - text.chars().count();
    if leading {
        format!("{}{text}{}", h(LABEL_MARGIN), h(fill))
    } else {
        format!("{}{text}{}", h(fill), h(LABEL_MARGIN))
    }
}

/// Wrap `lines` in a border `width` columns wide.
///
/// Every returned line, borders included, has a visible width of exactly
/// `width` (minimum 2). Over-long content is clipped.
pub fn frame(
    lines: &[String],
    width: usize,
    title: Option<&str>,
    footer: Option<&str>,
    theme: &Theme,
) -> Vec<String> {
    let inner = width.max(2) - 2;
    let border = |s: &str| fg(s, theme.border);
    let side = border(&VERTICAL.to_string());

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(border(&format!("{TOP_LEFT}{}{TOP_RIGHT}", rule(inner, title, true))));

    for line in lines {
        let line = clip_visible(line, inner);
        let padding = inner - visible_len(&line);
        out.push(format!("{side}{line}{}{side}", " ".repeat(padding)));
    }

    out.push(border(&format!("{BOTTOM_LEFT}{}{BOTTOM_RIGHT}", rule(inner, footer, false))));
    out
}
