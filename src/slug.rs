/// Turns an arbitrary record name into a lowercase, filesystem-safe file
/// stem. ASCII alphanumerics, `-` and `_` pass through; every other run of
/// characters collapses into a single `-`, with no leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_gap = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            if pending_gap && !slug.is_empty() {
                slug.push('-');
            }
            pending_gap = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_gap = true;
        }
    }
    slug
}
