//! Page wrapper assembly.
//!
//! A page file is the concatenation of import statements (one per section
//! component used) with a fixed `'use client'` wrapper styled from the
//! brand guide's colors and heading font.

use sitewright_types::document::StyleGuideDoc;

use super::naming::{pascal, slug};

/// Output-tree path for a page file. The home page lands at the app
/// root; every other page gets its own slug directory.
pub fn page_path(page_name: &str) -> String {
    if slug(page_name) == "home" {
        "app/page.tsx".to_string()
    } else {
        format!("app/{}/page.tsx", slug(page_name))
    }
}

/// Import line for a section component, relative to the page file.
pub fn component_import(component: &str, page_name: &str) -> String {
    let prefix = if slug(page_name) == "home" { "./" } else { "../" };
    format!("import {component} from '{prefix}components/{component}';")
}

/// Assemble the full page file from import lines and section JSX lines.
///
/// Import lines are uniqued (first occurrence wins); section JSX is kept
/// in order.
pub fn page_component(
    page_name: &str,
    guide: &StyleGuideDoc,
    imports: &[String],
    section_jsx: &[String],
) -> String {
    let mut seen = std::collections::HashSet::new();
    let imports: Vec<&String> = imports.iter().filter(|line| seen.insert(*line)).collect();

    let mut page = String::from("'use client';\n\nimport React from 'react';\n");
    for import in imports {
        page.push_str(import);
        page.push('\n');
    }

    page.push_str(&format!(
        "\nexport default function {}Page() {{\n",
        pascal(page_name)
    ));
    page.push_str(&format!(
        "  return (\n    <div className=\"min-h-screen\" style={{{{ backgroundColor: '{}' }}}}>\n",
        guide.color("background")
    ));
    page.push_str("      <div className=\"container mx-auto px-4 py-8\">\n");
    page.push_str(&format!(
        "        <h1 className=\"text-4xl font-bold mb-8\" style={{{{ color: '{}', fontFamily: '{}' }}}}>{}</h1>\n",
        guide.color("primary"),
        guide.heading_font(),
        page_name
    ));
    for jsx in section_jsx {
        page.push_str(jsx);
        page.push('\n');
    }
    page.push_str("      </div>\n    </div>\n  );\n}\n");
    page
}
