use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

/// Render a line-numbered unified diff of `old` -> `new`
pub fn render_unified_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let old_lines = old.lines().count().max(1);
    let new_lines = new.lines().count().max(1);
    let width = old_lines.max(new_lines).to_string().len();

    let mut out = String::new();

    let header_a = format!("--- a/{}", path);
    let header_b = format!("+++ b/{}", path);
    out.push_str(&color_line(&header_a, ChangeTag::Equal, supports_color, LineStyle::Header));
    out.push('\n');
    out.push_str(&color_line(&header_b, ChangeTag::Equal, supports_color, LineStyle::Header));
    out.push('\n');

    for change in diff.iter_all_changes() {
        let (old_no, new_no, sign) = match change.tag() {
            ChangeTag::Delete => (change.old_index().map(|i| i + 1), None, "-"),
            ChangeTag::Insert => (None, change.new_index().map(|i| i + 1), "+"),
            ChangeTag::Equal => (
                change.old_index().map(|i| i + 1),
                change.new_index().map(|i| i + 1),
                " ",
            ),
        };

        let old_col = old_no
            .map(|n| format!("{:>width$}", n, width = width))
            .unwrap_or_else(|| " ".repeat(width));
        let new_col = new_no
            .map(|n| format!("{:>width$}", n, width = width))
            .unwrap_or_else(|| " ".repeat(width));

        let value = change.value().trim_end_matches('\n');
        let line = format!("{old_col} {new_col} {sign} {value}");
        out.push_str(&color_line(&line, change.tag(), supports_color, LineStyle::Body));
        out.push('\n');
    }

    out
}

/// Diff for arbitrary bytes; binary content gets a one-line summary
pub fn render_content_diff(path: &str, old: &[u8], new: &[u8], supports_color: bool) -> String {
    match (std::str::from_utf8(old), std::str::from_utf8(new)) {
        (Ok(old), Ok(new)) => render_unified_diff(path, old, new, supports_color),
        _ => format!(
            "Binary file {} differs ({} -> {} bytes)\n",
            path,
            old.len(),
            new.len()
        ),
    }
}

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Header,
    Body,
}

fn color_line(s: &str, tag: ChangeTag, supports_color: bool, style: LineStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    match style {
        LineStyle::Header => format!("{}", s.cyan()),
        LineStyle::Body => match tag {
            ChangeTag::Delete => format!("{}", s.red()),
            ChangeTag::Insert => format!("{}", s.green()),
            ChangeTag::Equal => format!("{}", s.dark_grey()),
        },
    }
}
