use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").expect("valid regex"));

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Turns untrusted upstream text into markup safe for `inner_html`.
/// Escaping must run first so only our own `<strong>` tags are live.
pub fn render(raw: &str) -> String {
    let escaped = escape_html(raw);
    BOLD.replace_all(&escaped, "<strong>$1</strong>").into_owned()
}
