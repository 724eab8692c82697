use std::io;

use is_terminal::IsTerminal;

/// Whether colored output should be written to stdout
pub fn stdout_supports_color() -> bool {
    supports_color_impl(|key| std::env::var(key).ok(), io::stdout().is_terminal())
}

/// Whether colored output should be written to stderr (log lines)
pub fn stderr_supports_color() -> bool {
    supports_color_impl(|key| std::env::var(key).ok(), io::stderr().is_terminal())
}

fn supports_color_impl(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    let term_is_dumb = get_env("TERM")
        .map(|t| t.eq_ignore_ascii_case("dumb"))
        .unwrap_or(false);
    let no_color = get_env("NO_COLOR").is_some();
    is_tty && !term_is_dumb && !no_color
}
