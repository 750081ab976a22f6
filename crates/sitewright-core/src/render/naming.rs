//! Stable file and component naming for generated sources.

/// Normalize a page or section name into a slug: lowercased, whitespace
/// runs collapsed to a single hyphen.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// PascalCase a name, splitting on whitespace, hyphens, and underscores
/// (`contact_form` becomes `ContactForm`).
pub fn pascal(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Component name for the `index`-th section (1-based) of a page,
/// e.g. `component_name("Home", "hero", 1)` is `HomeHero1`.
pub fn component_name(page: &str, kind: &str, index: usize) -> String {
    let kind = if kind.trim().is_empty() { "Section" } else { kind };
    format!("{}{}{index}", pascal(page), pascal(kind))
}
