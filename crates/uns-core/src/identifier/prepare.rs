//! Text preprocessing ahead of URL parsing.

const DEFAULT_SCHEME_PREFIX: &str = "https://";
const ACCEPTED_SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Expands `~` to `/` and prepends `https://` when no http(s) scheme is present.
pub(super) fn prepare_text(raw: &str) -> String {
    let expanded = raw.replace('~', "/");
    if has_http_scheme(&expanded) {
        expanded
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{expanded}")
    }
}

fn has_http_scheme(text: &str) -> bool {
    ACCEPTED_SCHEME_PREFIXES.iter().any(|prefix| {
        text.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
