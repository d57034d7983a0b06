/// Kebab-case a user-supplied package name.
///
/// Lowercases ASCII uppercase, inserts a dash at lower/digit-to-upper
/// boundaries, and collapses whitespace and underscore runs into a single
/// dash. Every other character passes through untouched so that invalid
/// input stays invalid instead of being silently laundered into a name
/// the user never typed. Already-valid `vendor/package` names come back
/// unchanged.
pub(crate) fn kebab_name(value: &str) -> String {
    let mut out = String::new();
    let mut pending_separator = false;

    for ch in value.trim().chars() {
        if ch.is_whitespace() || ch == '_' {
            pending_separator = true;
            continue;
        }

        if pending_separator {
            if !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
        }

        if ch.is_ascii_uppercase() {
            let after_word_char = out
                .chars()
                .last()
                .is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            if after_word_char {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
