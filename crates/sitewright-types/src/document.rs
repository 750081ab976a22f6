//! Website artifact documents: sitemap, brand guide, marketing content.
//!
//! All three documents are lenient, arbitrarily nested JSON. The newtypes
//! here wrap a raw [`serde_json::Value`] and expose default-tolerant
//! accessors -- a missing or mistyped key never fails, it resolves to a
//! canonical default. The only shape assumption anywhere is "top-level
//! value is an object", and even that is handled by the fallback
//! constructors rather than enforced.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Fixed filename for the persisted sitemap document.
pub const SITEMAP_FILE: &str = "sitemap.json";

/// Fixed filename for the persisted brand guide document.
pub const BRAND_GUIDE_FILE: &str = "brand-guide.json";

/// One section of a page: a type tag (e.g. "hero") and free-text
/// description of what belongs in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

/// Page-to-sections structural document for a website.
///
/// Keys are page names, values are ordered arrays of section objects.
/// Some model outputs instead carry a top-level `pages` array or a
/// `sitemap_summary.pages` array; [`SitemapDoc::pages`] resolves all
/// three shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SitemapDoc(pub Value);

impl SitemapDoc {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The default sitemap used when generation or extraction fails.
    pub fn fallback(business_name: &str) -> Self {
        Self(json!({
            "Home": [
                {"type": "hero", "description": format!("Welcome to {business_name}")},
                {"type": "features", "description": "Highlight key features or services"}
            ],
            "About": [
                {"type": "content", "description": "About the company"}
            ],
            "Contact": [
                {"type": "contact_form", "description": "Contact form and information"}
            ]
        }))
    }

    /// Resolve the list of page names.
    ///
    /// Resolution order: a top-level `pages` string array, then
    /// `sitemap_summary.pages`, then the document's own object keys.
    /// Returns an empty list when none of those yield pages; the caller
    /// decides what to substitute.
    pub fn pages(&self) -> Vec<String> {
        if let Some(pages) = string_array(self.0.get("pages")) {
            return pages;
        }
        if let Some(pages) = string_array(self.0.pointer("/sitemap_summary/pages")) {
            return pages;
        }
        match self.0.as_object() {
            Some(map) => map.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Sections for one page, leniently parsed.
    ///
    /// A missing page, non-array value, or malformed section entry yields
    /// an empty list / empty-string fields rather than an error.
    pub fn sections(&self, page: &str) -> Vec<SectionDescriptor> {
        let Some(items) = self.0.get(page).and_then(Value::as_array) else {
            return Vec::new();
        };
        items
            .iter()
            .map(|item| SectionDescriptor {
                kind: item
                    .get("type")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                description: item
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Colors / typography / component-styling document for a website brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleGuideDoc(pub Value);

impl StyleGuideDoc {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The default brand guide used when generation or extraction fails.
    pub fn fallback() -> Self {
        Self(json!({
            "colors": {
                "primary": "#3B82F6",
                "secondary": "#10B981",
                "accent": "#F59E0B",
                "background": "#FFFFFF",
                "text": "#1F2937"
            },
            "typography": {
                "headings": "Playfair Display, serif",
                "body": "Inter, sans-serif"
            },
            "ui_style": "Modern and clean",
            "components": {
                "buttons": {
                    "primary": {
                        "background": "#3B82F6",
                        "text": "#FFFFFF",
                        "border_radius": "0.375rem"
                    },
                    "secondary": {
                        "background": "transparent",
                        "text": "#3B82F6",
                        "border": "1px solid #3B82F6",
                        "border_radius": "0.375rem"
                    }
                },
                "cards": {
                    "background": "#FFFFFF",
                    "border_radius": "0.5rem",
                    "shadow": "0 4px 6px -1px rgba(0, 0, 0, 0.1)"
                },
                "forms": {
                    "input_border": "1px solid #D1D5DB",
                    "input_border_radius": "0.375rem",
                    "input_padding": "0.5rem 0.75rem"
                }
            }
        }))
    }

    /// Look up a named color role, falling back to the canonical default
    /// for that role when the guide does not define it.
    pub fn color(&self, role: &str) -> String {
        if let Some(hex) = self
            .0
            .pointer(&format!("/colors/{role}"))
            .and_then(Value::as_str)
        {
            return hex.to_string();
        }
        default_color(role).to_string()
    }

    /// All defined color roles in document order, for CSS emission.
    pub fn colors(&self) -> Vec<(String, String)> {
        match self.0.get("colors").and_then(Value::as_object) {
            Some(map) => map
                .iter()
                .filter_map(|(role, v)| v.as_str().map(|hex| (role.clone(), hex.to_string())))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn heading_font(&self) -> String {
        self.0
            .pointer("/typography/headings")
            .and_then(Value::as_str)
            .unwrap_or("Playfair Display, serif")
            .to_string()
    }

    pub fn body_font(&self) -> String {
        self.0
            .pointer("/typography/body")
            .and_then(Value::as_str)
            .unwrap_or("Inter, sans-serif")
            .to_string()
    }

    pub fn ui_style(&self) -> String {
        self.0
            .get("ui_style")
            .and_then(Value::as_str)
            .unwrap_or("Modern and clean")
            .to_string()
    }

    /// Overlay user color preferences onto the guide.
    ///
    /// Only roles already present under `colors` are overwritten; a
    /// preference for a role the guide never defined is ignored.
    pub fn apply_preferences(&mut self, preferences: &[(String, String)]) {
        let Some(colors) = self
            .0
            .get_mut("colors")
            .and_then(Value::as_object_mut)
        else {
            return;
        };
        for (role, hex) in preferences {
            if colors.contains_key(role) {
                colors.insert(role.clone(), Value::String(hex.clone()));
            }
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Marketing copy for the generated website: an about paragraph plus a
/// list of content items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDoc(pub Value);

impl ContentDoc {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The default content used when generation or extraction fails.
    pub fn fallback() -> Self {
        Self(json!({
            "about": "Welcome to our website. We provide high-quality services to meet your needs.",
            "sections": {"content": ["Item 1", "Item 2", "Item 3"]}
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// One source file of the generated output tree, written verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the output directory (e.g. `app/page.tsx`).
    pub path: String,
    pub body: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }
}

/// Canonical default hex value for a color role.
fn default_color(role: &str) -> &'static str {
    match role {
        "primary" => "#3B82F6",
        "secondary" => "#10B981",
        "accent" => "#F59E0B",
        "background" => "#FFFFFF",
        "text" => "#1F2937",
        _ => "#000000",
    }
}

fn string_array(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    let pages: Vec<String> = items
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    if pages.is_empty() { None } else { Some(pages) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_sitemap_shape() {
        let doc = SitemapDoc::fallback("Acme Bakery");
        let pages = doc.pages();
        assert_eq!(pages, vec!["Home", "About", "Contact"]);
        let home = doc.sections("Home");
        assert_eq!(home.len(), 2);
        assert_eq!(home[0].kind, "hero");
        assert!(home[0].description.contains("Acme Bakery"));
    }

    #[test]
    fn test_pages_prefers_top_level_pages_array() {
        let doc = SitemapDoc::new(json!({
            "pages": ["Home", "Menu"],
            "Home": []
        }));
        assert_eq!(doc.pages(), vec!["Home", "Menu"]);
    }

    #[test]
    fn test_pages_reads_sitemap_summary() {
        let doc = SitemapDoc::new(json!({
            "sitemap_summary": {"pages": ["Home", "Contact"]}
        }));
        assert_eq!(doc.pages(), vec!["Home", "Contact"]);
    }

    #[test]
    fn test_pages_falls_back_to_object_keys() {
        let doc = SitemapDoc::new(json!({"Home": [], "About": []}));
        let mut pages = doc.pages();
        pages.sort();
        assert_eq!(pages, vec!["About", "Home"]);
    }

    #[test]
    fn test_pages_empty_for_non_object() {
        let doc = SitemapDoc::new(json!([1, 2, 3]));
        assert!(doc.pages().is_empty());
    }

    #[test]
    fn test_sections_tolerates_malformed_entries() {
        let doc = SitemapDoc::new(json!({
            "Home": [
                {"type": "hero", "description": "Welcome"},
                {"description": "no type tag"},
                "not even an object"
            ]
        }));
        let sections = doc.sections("Home");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].kind, "hero");
        assert_eq!(sections[1].kind, "");
        assert_eq!(sections[1].description, "no type tag");
        assert_eq!(sections[2].kind, "");
    }

    #[test]
    fn test_sections_missing_page_is_empty() {
        let doc = SitemapDoc::fallback("Acme");
        assert!(doc.sections("Pricing").is_empty());
    }

    #[test]
    fn test_style_guide_color_lookup_and_default() {
        let guide = StyleGuideDoc::new(json!({"colors": {"primary": "#112233"}}));
        assert_eq!(guide.color("primary"), "#112233");
        assert_eq!(guide.color("background"), "#FFFFFF");
    }

    #[test]
    fn test_style_guide_fonts_default_when_absent() {
        let guide = StyleGuideDoc::new(json!({}));
        assert_eq!(guide.heading_font(), "Playfair Display, serif");
        assert_eq!(guide.body_font(), "Inter, sans-serif");
        assert_eq!(guide.ui_style(), "Modern and clean");
    }

    #[test]
    fn test_apply_preferences_only_touches_existing_roles() {
        let mut guide = StyleGuideDoc::fallback();
        guide.apply_preferences(&[
            ("primary".to_string(), "#000000".to_string()),
            ("neon".to_string(), "#FF00FF".to_string()),
        ]);
        assert_eq!(guide.color("primary"), "#000000");
        assert!(guide.as_value().pointer("/colors/neon").is_none());
        // siblings untouched
        assert_eq!(guide.color("secondary"), "#10B981");
    }

    #[test]
    fn test_apply_preferences_no_colors_key_is_noop() {
        let mut guide = StyleGuideDoc::new(json!({"ui_style": "minimal"}));
        guide.apply_preferences(&[("primary".to_string(), "#000".to_string())]);
        assert!(guide.as_value().get("colors").is_none());
    }

    #[test]
    fn test_colors_iteration_skips_non_strings() {
        let guide = StyleGuideDoc::new(json!({
            "colors": {"primary": "#111111", "weights": [1, 2]}
        }));
        let colors = guide.colors();
        assert_eq!(colors, vec![("primary".to_string(), "#111111".to_string())]);
    }

    #[test]
    fn test_content_fallback() {
        let content = ContentDoc::fallback();
        assert!(
            content.as_value()["about"]
                .as_str()
                .unwrap()
                .contains("Welcome")
        );
    }

    #[test]
    fn test_section_descriptor_serde_rename() {
        let json = r#"{"type": "hero", "description": "Welcome"}"#;
        let section: SectionDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(section.kind, "hero");
        let back = serde_json::to_value(&section).unwrap();
        assert_eq!(back["type"], "hero");
    }
}
