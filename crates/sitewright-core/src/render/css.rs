//! Global stylesheet emission.

use sitewright_types::document::StyleGuideDoc;

/// Render `globals.css`: Tailwind directives, a `:root` custom property
/// per brand guide color, and base-layer font families from the guide.
pub fn globals_css(guide: &StyleGuideDoc) -> String {
    let mut css = String::from(
        "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n@layer base {\n  :root {\n",
    );
    for (role, hex) in guide.colors() {
        css.push_str(&format!("    --{role}: {hex};\n"));
    }
    css.push_str("  }\n\n");
    css.push_str(&format!(
        "  h1, h2, h3, h4, h5, h6 {{\n    font-family: {};\n  }}\n\n",
        guide.heading_font()
    ));
    css.push_str(&format!(
        "  body {{\n    font-family: {};\n  }}\n}}\n",
        guide.body_font()
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_globals_css_custom_properties() {
        let guide = StyleGuideDoc::fallback();
        let css = globals_css(&guide);
        assert!(css.starts_with("@tailwind base;"));
        assert!(css.contains("--primary: #3B82F6;"));
        assert!(css.contains("--background: #FFFFFF;"));
        assert!(css.contains("font-family: Playfair Display, serif;"));
        assert!(css.contains("font-family: Inter, sans-serif;"));
    }

    #[test]
    fn test_globals_css_empty_guide_uses_font_defaults() {
        let guide = StyleGuideDoc::new(json!({}));
        let css = globals_css(&guide);
        assert!(!css.contains("--primary"));
        assert!(css.contains("font-family: Playfair Display, serif;"));
    }
}
