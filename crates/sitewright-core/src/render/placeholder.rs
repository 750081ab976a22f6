//! Default placeholder component.
//!
//! Substituted for any section whose generation or template lookup yields
//! empty content -- a section is never left empty.

/// Render the fixed placeholder TSX component, parameterized only by the
/// component name, a title, and the original section description.
pub fn placeholder_component(name: &str, title: &str, description: &str) -> String {
    let title = js_string(title);
    let description = js_string(description);
    format!(
        r#"import React from 'react';

interface {name}Props {{
  title?: string;
  description?: string;
}}

const {name}: React.FC<{name}Props> = ({{
  title = "{title}",
  description = "{description}",
}}) => {{
  return (
    <section className="py-12 bg-background">
      <div className="container mx-auto px-4">
        <h2 className="text-3xl font-bold text-primary mb-6">{{title}}</h2>
        <p className="text-lg leading-relaxed">{{description}}</p>
      </div>
    </section>
  );
}};

export default {name};
"#
    )
}

/// Escape a value for embedding in a double-quoted JS string literal.
fn js_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
