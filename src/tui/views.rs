//! View renderers.
//!
//! Each renderer is a pure function of the model, the navigation state and
//! the terminal size, returning the content lines of one screen. Framing is
//! applied by the caller. Lookups that miss degrade to a placeholder line or
//! glyph instead of failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::feature::Feature;
use crate::fields::Status;
use crate::model::Model;
use crate::tui::colors::Theme;
use crate::tui::nav::NavState;
use crate::tui::style::*;

const EPIC_NAME_WIDTH: usize = 12;
const EPIC_BAR_WIDTH: usize = 16;
const MAX_BAR_WIDTH: usize = 50;
const SPARK_WIDTH: usize = 14;
const RECENT_DAYS: usize = 5;
const RECENT_IDS: usize = 3;
const NEXT_UP: usize = 3;
const HINT_IDS: usize = 2;
const LABEL_WIDTH: usize = 12;

fn paint(text: &str, color: Option<u8>) -> String {
    ansi(text, color, false, false)
}

fn cursor(selected: bool, theme: &Theme) -> String {
    if selected {
        ansi("▸", Some(theme.epic), true, false)
    } else {
        " ".to_string()
    }
}

fn status_glyph(status: Status, theme: &Theme) -> String {
    paint(&theme.status_symbol(status).to_string(), theme.status_color(status))
}

fn labelled(label: &str, value: &str) -> String {
    format!("  {label:<LABEL_WIDTH$}  {value}")
}

/// Parse a creation key as a calendar date, if it looks like one.
fn parse_created(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `Jan 02` for parseable dates, otherwise the last five characters.
pub fn format_date(raw: &str) -> String {
    match parse_created(raw) {
        Some(date) => date.format("%b %d").to_string(),
        None => {
            let chars: Vec<char> = raw.chars().collect();
            chars[chars.len().saturating_sub(5)..].iter().collect()
        },
    }
}

/// Greedy word wrap into indented lines no wider than `width` where possible.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::from("  ");
    for word in text.split_whitespace() {
        let len = line.chars().count();
        if len > 2 && len + word.chars().count() + 1 > width {
            lines.push(line.trim_end().to_string());
            line = String::from("  ");
        }
        line.push_str(word);
        line.push(' ');
    }
    if !line.trim().is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Drop everything up to the last `-` of a dependency id.
fn short_dep(id: &str) -> &str {
    id.rsplit('-').next().unwrap_or(id)
}

fn status_summary(model: &Model, theme: &Theme) -> String {
    let counts = [
        (Status::Done, model.done(), "done"),
        (Status::InProgress, model.active(), "active"),
        (Status::Pending, model.pending(), "pending"),
        (Status::Abandoned, model.count_status(Status::Abandoned), "abandoned"),
        (Status::Superseded, model.count_status(Status::Superseded), "superseded"),
    ];
    let parts: Vec<String> = counts
        .iter()
        .filter(|(_, n, _)| *n > 0)
        .map(|&(status, n, label)| {
            paint(
                &format!("{} {n} {label}", theme.status_symbol(status)),
                theme.status_color(status),
            )
        })
        .collect();
    format!("  {}", parts.join("   "))
}

fn epic_row(model: &Model, index: usize, state: &NavState, theme: &Theme) -> String {
    let epic = &model.epics()[index];
    let bar = progress_bar(epic.done(), epic.total(), EPIC_BAR_WIDTH, theme);
    let pct = if epic.total() > 0 {
        format!("{:3.0}%", epic.percent())
    } else {
        "  -".to_string()
    };
    let name = pad(&truncate(&epic.name, EPIC_NAME_WIDTH), EPIC_NAME_WIDTH);
    let count = format!("{:>5}", format!("{}/{}", epic.done(), epic.total()));

    let mut hint = String::new();
    if epic.active() > 0 {
        hint.push_str(&paint(
            &format!("  ◉ {} active", epic.active()),
            theme.status_color(Status::InProgress),
        ));
    }
    if epic.pending() > 0 {
        hint.push_str(&paint(
            &format!("  ○ {} pending", epic.pending()),
            theme.status_color(Status::Pending),
        ));
    }

    format!(
        " {}{}  {bar}  {count} {pct}{hint}",
        cursor(index == state.epic_index, theme),
        fg(&name, theme.epic)
    )
}

fn recent_rows(model: &Model, theme: &Theme) -> Vec<String> {
    let recent = model.recent_activity(RECENT_DAYS);
    let busiest = recent.iter().map(|(_, ids)| ids.len()).max().unwrap_or(1);

    recent
        .iter()
        .map(|(date, ids)| {
            let n = ids.len();
            let mut preview = ids.iter().take(RECENT_IDS).cloned().collect::<Vec<_>>().join(", ");
            if n > RECENT_IDS {
                preview.push_str(&format!("... (+{})", n - RECENT_IDS));
            }
            format!(
                "  {}  {} {}  {}",
                pad(&format_date(date), 6),
                fg(&spark_glyph(n, busiest).to_string(), theme.progress),
                spark_bar(n, busiest, SPARK_WIDTH, theme),
                fg(&preview, theme.muted)
            )
        })
        .collect()
}

fn next_up_row(model: &Model, feature: &Feature, theme: &Theme) -> String {
    let color = theme.status_color(feature.status);
    let id = pad(&truncate(&feature.id, 18), 18);
    let title = pad(&truncate(&feature.title, 35), 35);
    let unlocks = model.unlocks(&feature.id);
    let hint = if unlocks.is_empty() {
        String::new()
    } else {
        let shown: Vec<&str> = unlocks.iter().take(HINT_IDS).copied().collect();
        fg(&format!("→ unlocks: {}", shown.join(", ")), theme.dep)
    };
    format!(
        "  {} {}  {title}  {hint}",
        status_glyph(feature.status, theme),
        paint(&id, color)
    )
}

/// Overview: overall progress, epics, recent activity and what's next.
pub fn dashboard(model: &Model, state: &NavState, width: usize, _height: usize, theme: &Theme) -> Vec<String> {
    let inner = width.saturating_sub(4);
    let mut lines = vec![String::new(), section_header("PROGRESS", inner, theme), String::new()];

    let bar_width = inner.saturating_sub(20).min(MAX_BAR_WIDTH);
    lines.push(format!(
        "  {}  {}/{}  {:.1}%",
        progress_bar(model.done(), model.total(), bar_width, theme),
        model.done(),
        model.total(),
        model.tally().percent()
    ));
    lines.push(status_summary(model, theme));

    lines.extend([String::new(), section_header("EPICS", inner, theme), String::new()]);
    for index in 0..model.epics().len() {
        lines.push(epic_row(model, index, state, theme));
    }

    lines.extend([String::new(), section_header("RECENT", inner, theme), String::new()]);
    lines.extend(recent_rows(model, theme));

    lines.extend([String::new(), section_header("NEXT UP", inner, theme), String::new()]);
    let upcoming = model.upcoming();
    for feature in upcoming.iter().take(NEXT_UP) {
        lines.push(next_up_row(model, feature, theme));
    }
    if upcoming.is_empty() {
        lines.push(format!("  {}", fg("All complete! Nothing left to do.", theme.progress)));
    }

    lines.push(String::new());
    lines
}

/// Drill-down into the selected epic.
pub fn epic(model: &Model, state: &NavState, width: usize, _height: usize, theme: &Theme) -> Vec<String> {
    let name = state.selected_epic.as_deref().unwrap_or_default();
    let Some(epic) = model.epic(name) else {
        return vec![format!("  Epic '{name}' not found")];
    };

    let inner = width.saturating_sub(4);
    let bar_width = inner.saturating_sub(30).min(MAX_BAR_WIDTH);
    let mut lines = vec![
        String::new(),
        format!(
            "  {}  {}/{} completed  {:.0}%",
            progress_bar(epic.done(), epic.total(), bar_width, theme),
            epic.done(),
            epic.total(),
            epic.percent()
        ),
        String::new(),
        section_header("FEATURES", inner, theme),
        String::new(),
    ];

    for (i, feature) in model.epic_features_by_id(epic).into_iter().enumerate() {
        let deps = if feature.depends_on.is_empty() {
            String::new()
        } else {
            let short: Vec<&str> = feature.depends_on.iter().take(HINT_IDS).map(|d| short_dep(d)).collect();
            fg(&format!("← {}", short.join(", ")), theme.dep)
        };
        lines.push(format!(
            " {}{} {}  {}  {deps}",
            cursor(i == state.feature_index, theme),
            status_glyph(feature.status, theme),
            pad(&truncate(&feature.id, 14), 14),
            truncate(&feature.title, 45)
        ));
    }

    lines.push(String::new());
    lines
}

/// Everything known about the selected feature.
pub fn feature(model: &Model, state: &NavState, width: usize, _height: usize, theme: &Theme) -> Vec<String> {
    let id = state.selected_feature.as_deref().unwrap_or_default();
    let Some(feature) = model.feature(id) else {
        return vec![format!("  Feature '{id}' not found")];
    };

    let inner = width.saturating_sub(4);
    let mut lines = vec![
        String::new(),
        format!("  {}", bold(&feature.title)),
        format!(
            "  {}",
            paint(
                &format!("{} {}", theme.status_symbol(feature.status), feature.status.label()),
                theme.status_color(feature.status)
            )
        ),
    ];

    if let Some(description) = &feature.description {
        lines.extend([String::new(), section_header("DESCRIPTION", inner, theme), String::new()]);
        lines.extend(wrap_words(description, inner));
    }

    lines.extend([String::new(), section_header("METADATA", inner, theme), String::new()]);
    if let Some(epic) = &feature.epic {
        lines.push(labelled("Epic", &fg(epic, theme.epic)));
    }
    if let Some(priority) = feature.priority {
        lines.push(labelled("Priority", &format!("{} ({})", priority.rank(), priority.label())));
    }
    if let Some(created) = &feature.created_at {
        lines.push(labelled("Created", created));
    }
    if let Some(spec) = &feature.spec_file {
        lines.push(labelled("Spec", &fg(spec, theme.muted)));
    }
    if let Some(origin) = &feature.discovered_from {
        lines.push(labelled("Found in", origin));
    }

    lines.extend([String::new(), section_header("DEPENDENCIES", inner, theme), String::new()]);
    let blocked_by = if feature.depends_on.is_empty() {
        "(none)".to_string()
    } else {
        feature
            .depends_on
            .iter()
            .map(|dep| match model.feature(dep) {
                Some(d) => format!("{dep} {}", status_glyph(d.status, theme)),
                None => format!("{dep} ?"),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(labelled("Blocked by:", &blocked_by));

    let unlocks = model.unlocks(&feature.id);
    let unlocks = if unlocks.is_empty() { "(none)".to_string() } else { unlocks.join(", ") };
    lines.push(labelled("Unlocks:", &unlocks));

    if !feature.steps.is_empty() {
        lines.extend([String::new(), section_header("STEPS", inner, theme), String::new()]);
        for (i, step) in feature.steps.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, truncate(step, inner.saturating_sub(6))));
        }
    }

    if let Some(notes) = &feature.notes {
        lines.extend([String::new(), section_header("NOTES", inner, theme), String::new()]);
        lines.extend(wrap_words(notes, inner));
    }

    lines.push(String::new());
    lines
}

/// Static key and symbol reference.
pub fn help(width: usize, _height: usize, theme: &Theme) -> Vec<String> {
    let inner = width.saturating_sub(4);
    let key = |k: &str| bold(k);
    let legend = |status: Status, label: &str| format!("{}  {}", status_glyph(status, theme), pad(label, 12));

    let mut lines = vec![String::new(), section_header("NAVIGATION", inner, theme), String::new()];
    lines.extend([
        format!("  {} / {}      Move selection down", key("j"), key("↓")),
        format!("  {} / {}      Move selection up", key("k"), key("↑")),
        format!("  {} / {}  View epic details", key("e"), key("Enter")),
        format!("  {}          View feature details (from epic view)", key("f")),
        format!("  {} / {}    Go back", key("b"), key("Esc")),
        format!("  {} / {}      Toggle this help", key("h"), key("?")),
        format!("  {}          Quit (back to dashboard from nested views)", key("q")),
    ]);

    lines.extend([String::new(), section_header("STATUS SYMBOLS", inner, theme), String::new()]);
    lines.extend([
        format!("  {}{}", legend(Status::Done, "done"), legend(Status::InProgress, "in progress")),
        format!("  {}{}", legend(Status::Pending, "pending"), legend(Status::Abandoned, "abandoned")),
        format!("  {}", legend(Status::Superseded, "superseded")),
    ]);

    lines.extend([String::new(), section_header("USAGE", inner, theme), String::new()]);
    lines.extend([
        format!("  {}                   View features.json in current directory", key("fv")),
        format!("  {}     View specific file", key("fv path/to/file")),
        format!("  {}            Show CLI help", key("fv --help")),
    ]);

    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::tui::enums::View;

    fn plain(lines: &[String]) -> String {
        lines.iter().map(|l| strip_ansi(l)).collect::<Vec<_>>().join("\n")
    }

    fn rich_model() -> Model {
        let mut a = Feature::new("core-parser", Status::Done);
        a.epic = Some("core".into());
        a.created_at = Some("2024-03-01".into());
        let mut b = Feature::new("core-eval", Status::InProgress);
        b.epic = Some("core".into());
        b.title = "Evaluate expressions".into();
        b.depends_on = vec!["core-parser".into(), "ghost-dep".into()];
        b.priority = Some(Priority::High);
        b.created_at = Some("2024-03-02T10:00:00".into());
        b.description = Some("Walk the tree and produce values for every node kind we support today".into());
        b.steps = vec!["Literals".into(), "Operators".into()];
        let mut c = Feature::new("ui-repl", Status::Pending);
        c.epic = Some("ui".into());
        c.depends_on = vec!["core-eval".into()];
        c.created_at = Some("2024-03-02T10:00:00".into());
        Model::from_features(vec![a, b, c])
    }

    #[test]
    fn test_single_done_feature_dashboard() {
        let model = Model::from_features(vec![Feature::new("a", Status::Done)]);
        let text = plain(&dashboard(&model, &NavState::new(), 80, 24, &Theme::default()));
        assert!(text.contains("1/1  100.0%"), "{text}");
        assert!(text.contains("All complete"));
        assert!(text.contains("✓ 1 done"));
    }

    #[test]
    fn test_dashboard_sections() {
        let model = rich_model();
        let text = plain(&dashboard(&model, &NavState::new(), 100, 40, &Theme::default()));
        assert!(text.contains("PROGRESS"));
        assert!(text.contains("EPICS"));
        assert!(text.contains(" ▸core"));
        assert!(text.contains("Mar 02"));
        assert!(text.contains("core-eval, ui-repl"));
        assert!(text.contains("→ unlocks: ui-repl"));
        assert!(!text.contains("All complete"));
    }

    #[test]
    fn test_dashboard_recent_overflow_suffix() {
        let features = (0..5).map(|i| {
            let mut f = Feature::new(&format!("f{i}"), Status::Pending);
            f.created_at = Some("2024-01-01".into());
            f
        });
        let model = Model::from_features(features);
        let text = plain(&dashboard(&model, &NavState::new(), 100, 40, &Theme::default()));
        assert!(text.contains("f0, f1, f2... (+2)"));
    }

    #[test]
    fn test_epic_view_rows() {
        let model = rich_model();
        let state = NavState {
            view: View::Epic,
            selected_epic: Some("core".into()),
            feature_index: 1,
            ..NavState::default()
        };
        let text = plain(&epic(&model, &state, 100, 40, &Theme::default()));
        assert!(text.contains("1/2 completed  50%"));
        // sorted by id: core-eval, core-parser
        assert!(text.contains("  ◉ core-eval       Evaluate expressions  ← parser, dep"));
        assert!(text.contains(" ▸✓ core-parser"));
    }

    #[test]
    fn test_missing_selections_render_placeholder() {
        let model = rich_model();
        let theme = Theme::default();
        let state = NavState {
            selected_epic: Some("nope".into()),
            selected_feature: Some("nada".into()),
            ..NavState::default()
        };
        assert_eq!(epic(&model, &state, 80, 24, &theme), vec!["  Epic 'nope' not found".to_string()]);
        assert_eq!(feature(&model, &state, 80, 24, &theme), vec!["  Feature 'nada' not found".to_string()]);
    }

    #[test]
    fn test_feature_view_details() {
        let model = rich_model();
        let state = NavState {
            view: View::Feature,
            selected_epic: Some("core".into()),
            selected_feature: Some("core-eval".into()),
            ..NavState::default()
        };
        let lines = feature(&model, &state, 40, 24, &Theme::default());
        let text = plain(&lines);
        assert!(text.contains("◉ in_progress"));
        assert!(text.contains("Priority      1 (high)"));
        assert!(text.contains("core-parser ✓, ghost-dep ?"));
        assert!(text.contains("Unlocks:      ui-repl"));
        assert!(text.contains("1. Literals"));
        assert!(text.contains("  Walk the tree and produce values"));
        assert!(lines.iter().all(|l| !l.starts_with("  Walk") || visible_len(l) <= 36));
    }

    #[test]
    fn test_feature_view_is_idempotent() {
        let model = rich_model();
        let state = NavState {
            view: View::Feature,
            selected_epic: Some("core".into()),
            selected_feature: Some("core-eval".into()),
            ..NavState::default()
        };
        let theme = Theme::default();
        assert_eq!(feature(&model, &state, 80, 24, &theme), feature(&model, &state, 80, 24, &theme));
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap_words("one two three four five", 12);
        assert_eq!(lines, vec!["  one two", "  three", "  four five"]);
        assert!(wrap_words("   ", 12).is_empty());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05"), "Jan 05");
        assert_eq!(format_date("2024-12-31T23:59:59Z"), "Dec 31");
        assert_eq!(format_date("2024-02-03T08:00:00.123"), "Feb 03");
        assert_eq!(format_date("sometime-later"), "later");
        assert_eq!(format_date("x"), "x");
    }

    #[test]
    fn test_help_lists_legend() {
        let text = plain(&help(80, 24, &Theme::default()));
        assert!(text.contains("NAVIGATION"));
        assert!(text.contains("↷  superseded"));
        assert!(text.contains("fv --help"));
    }

    #[test]
    fn test_feature_view_notes_and_origin() {
        let mut f = Feature::new("core-gc", Status::Pending);
        f.discovered_from = Some("review-7".into());
        f.notes = Some("Collector pauses spike when the heap grows past the young generation limit".into());
        let model = Model::from_features(vec![f]);
        let state = NavState {
            view: View::Feature,
            selected_feature: Some("core-gc".into()),
            ..NavState::default()
        };

        let lines: Vec<String> = feature(&model, &state, 34, 24, &Theme::default())
            .iter()
            .map(|l| strip_ansi(l))
            .collect();
        assert!(lines.contains(&"  Found in      review-7".to_string()));

        let notes_at = lines.iter().position(|l| l.starts_with("  NOTES")).unwrap();
        let notes: Vec<&String> = lines[notes_at + 2..].iter().take_while(|l| !l.is_empty()).collect();
        assert!(notes.len() > 1, "{notes:?}");
        assert_eq!(notes[0].as_str(), "  Collector pauses spike when");
        assert!(notes.iter().all(|l| l.chars().count() <= 30));
        let joined: Vec<&str> = notes.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(joined.join(" "), "Collector pauses spike when the heap grows past the young generation limit");
    }
}
