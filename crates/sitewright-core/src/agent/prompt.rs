//! Prompt construction for the three agents.
//!
//! Prompt content is configuration, not core logic -- these functions
//! only embed the business inputs and any prior artifact into fixed
//! natural-language templates.

use serde_json::{Map, Value};

use sitewright_types::brief::SiteBrief;
use sitewright_types::document::StyleGuideDoc;

pub const SITEMAP_SYSTEM_PROMPT: &str =
    "You are a website architecture expert who creates detailed sitemaps for businesses.";

pub const BRAND_SYSTEM_PROMPT: &str =
    "You are a brand design expert who creates detailed style guides for businesses.";

pub const SECTION_SYSTEM_PROMPT: &str = "You are an expert React and Next.js developer. \
Generate clean, modern TypeScript code compatible with Shadcn UI.";

pub const CONTENT_SYSTEM_PROMPT: &str = "You are a marketing copywriter who creates \
compelling website content. Return only valid JSON.";

/// Prompt for the sitemap generation call.
pub fn sitemap_prompt(brief: &SiteBrief) -> String {
    let mut prompt = format!(
        "You are a website architect tasked with creating a sitemap for {}.\n\
         Business description: {}\n\n\
         Create a sitemap for a website that would best represent this business.\n\
         The sitemap should include:\n\
         1. A list of pages (e.g., Home, About, Services, Contact)\n\
         2. For each page, a list of sections that should appear on that page\n\
         3. For each section, a brief description of what content should be in that section\n\n\
         Output the sitemap as a JSON object where:\n\
         - Keys are page names\n\
         - Values are arrays of section objects, each with a \"type\" and \"description\"",
        brief.name, brief.description
    );

    if let Some(layout) = &brief.layout_prompt {
        prompt.push_str(&format!("\n\nAdditional layout requirements: {layout}"));
    }
    prompt
}

/// Prompt for the brand guide generation call.
pub fn brand_prompt(brief: &SiteBrief) -> String {
    let mut prompt = format!(
        "You are a brand designer tasked with creating a style guide for {}.\n\
         Business description: {}\n\n\
         Create a comprehensive brand guide that would best represent this business.\n\
         The brand guide should include:\n\
         1. A color palette (primary, secondary, accent, background, text colors)\n\
         2. Typography choices (heading and body fonts)\n\
         3. UI style preferences (modern, classic, minimalist, etc.)\n\
         4. Component styling recommendations\n\n\
         Output the brand guide as a JSON object where the keys include:\n\
         - \"colors\": an object with color hex values for primary, secondary, accent, background, and text\n\
         - \"typography\": an object with font families for headings and body\n\
         - \"ui_style\": a string describing the overall UI style\n\
         - \"components\": an object with styling recommendations for buttons, cards, forms, etc.",
        brief.name, brief.description
    );

    if !brief.color_preferences.is_empty() {
        let prefs: Map<String, Value> = brief
            .color_preferences
            .iter()
            .map(|(role, hex)| (role.clone(), Value::String(hex.clone())))
            .collect();
        prompt.push_str(&format!(
            "\n\nColor preferences: {}",
            Value::Object(prefs)
        ));
    }

    if brief.logo.is_some() {
        prompt.push_str(
            "\n\nNote: A logo has been provided. Please ensure the color palette complements the logo.",
        );
    }
    prompt
}

/// Prompt for one section's component generation call.
pub fn section_prompt(description: &str, guide: &StyleGuideDoc) -> String {
    let colors: Map<String, Value> = guide
        .colors()
        .into_iter()
        .map(|(role, hex)| (role, Value::String(hex)))
        .collect();

    format!(
        "Generate a complete React component in TypeScript for a website section described as: {description}.\n\n\
         Include import statements for React and define the component with props (e.g., title and description).\n\
         Use Tailwind CSS classes for styling, incorporating these colors: {colors}.\n\
         Use these fonts: headings: {headings}, body: {body}.\n\
         Ensure the component is compatible with Next.js and Shadcn UI.\n\n\
         Return only the code for the component without explanations or markdown.",
        colors = Value::Object(colors),
        headings = guide.heading_font(),
        body = guide.body_font(),
    )
}

/// Prompt for the marketing content generation call.
pub fn content_prompt(description: &str) -> String {
    format!(
        "Generate unique content for a website based on this description: {description}.\n\n\
         Return a JSON object with the following structure:\n\
         {{\n\
         \x20   \"about\": \"A paragraph about the business...\",\n\
         \x20   \"sections\": {{\n\
         \x20       \"content\": [\"Content item 1\", \"Content item 2\", \"Content item 3\"]\n\
         \x20   }}\n\
         }}\n\n\
         Tailor the content to be appropriate for the type of business or website."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> SiteBrief {
        SiteBrief::new("Acme Bakery", "Fresh bread daily")
    }

    #[test]
    fn test_sitemap_prompt_embeds_business_inputs() {
        let prompt = sitemap_prompt(&brief());
        assert!(prompt.contains("Acme Bakery"));
        assert!(prompt.contains("Fresh bread daily"));
        assert!(!prompt.contains("Additional layout requirements"));
    }

    #[test]
    fn test_sitemap_prompt_appends_layout_requirements() {
        let mut brief = brief();
        brief.layout_prompt = Some("single-page layout".to_string());
        let prompt = sitemap_prompt(&brief);
        assert!(prompt.contains("Additional layout requirements: single-page layout"));
    }

    #[test]
    fn test_brand_prompt_embeds_color_preferences() {
        let mut brief = brief();
        brief.color_preferences = vec![("primary".to_string(), "#112233".to_string())];
        let prompt = brand_prompt(&brief);
        assert!(prompt.contains("Color preferences:"));
        assert!(prompt.contains("\"primary\":\"#112233\""));
    }

    #[test]
    fn test_brand_prompt_mentions_logo_only_when_present() {
        assert!(!brand_prompt(&brief()).contains("A logo has been provided"));

        let mut with_logo = brief();
        with_logo.logo = Some("aGVsbG8=".to_string());
        assert!(brand_prompt(&with_logo).contains("A logo has been provided"));
    }

    #[test]
    fn test_section_prompt_embeds_guide_colors_and_fonts() {
        let guide = StyleGuideDoc::fallback();
        let prompt = section_prompt("Hero banner with a call to action", &guide);
        assert!(prompt.contains("Hero banner with a call to action"));
        assert!(prompt.contains("#3B82F6"));
        assert!(prompt.contains("headings: Playfair Display, serif"));
        assert!(prompt.contains("without explanations or markdown"));
    }

    #[test]
    fn test_content_prompt_shape() {
        let prompt = content_prompt("Fresh bread daily");
        assert!(prompt.contains("Fresh bread daily"));
        assert!(prompt.contains("\"about\""));
        assert!(prompt.contains("\"sections\""));
    }
}
