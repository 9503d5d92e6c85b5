/// Neutralizes markup in free-text input: trims surrounding whitespace,
/// drops `<` and `>` outright, then escapes the remaining entity-significant
/// characters. Removal runs before escaping, so literal angle brackets never
/// survive even in escaped form.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '<' | '>' => {}
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
