// ABOUTME: Per-category HTML markup builders for synthesized templates
// ABOUTME: Markup depends only on the descriptor and the resolved variant facets

use krds_types::ComponentDescriptor;

use crate::variant::VariantFacets;

/// Everything a markup builder may look at
#[derive(Debug, Clone, Copy)]
pub struct MarkupContext<'a> {
    pub descriptor: &'a ComponentDescriptor,
    pub variant: Option<&'a str>,
    pub facets: VariantFacets<'a>,
    /// Boolean attribute fragment, e.g. `" disabled"`
    pub attributes: &'static str,
}

impl MarkupContext<'_> {
    fn class(&self) -> &str {
        &self.descriptor.class_name
    }

    /// Base class plus size and state facets
    fn classes(&self) -> String {
        self.facets.class_list(self.class())
    }

    fn id(&self) -> String {
        escape(&self.descriptor.id)
    }

    fn label(&self) -> String {
        escape(&humanize(&self.descriptor.id))
    }
}

/// Minimal text/attribute escaping for descriptor-derived strings
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `text-input` -> `Text input`
fn humanize(id: &str) -> String {
    let words = id.replace(['-', '_'], " ");
    let mut chars = words.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn button(ctx: &MarkupContext<'_>) -> String {
    format!(
        "<button type=\"button\" class=\"{classes}\"{attrs}>\n  {label}\n</button>\n",
        classes = ctx.classes(),
        attrs = ctx.attributes,
        label = ctx.label(),
    )
}

pub fn link(ctx: &MarkupContext<'_>) -> String {
    let disabled = if ctx.facets.state == Some("disabled") {
        " aria-disabled=\"true\""
    } else {
        ""
    };
    format!(
        "<a href=\"#\" class=\"{classes}\"{disabled}>{label}</a>\n",
        classes = ctx.classes(),
        label = ctx.label(),
    )
}

/// Labeled `fieldset` wrapping either a textarea or a single-line input
pub fn fieldset(ctx: &MarkupContext<'_>) -> String {
    let id = ctx.id();
    let label = ctx.label();
    let control = if ctx.descriptor.id.contains("textarea") {
        format!(
            "<textarea id=\"{id}\" class=\"{classes}\" rows=\"4\"{attrs}></textarea>",
            classes = ctx.classes(),
            attrs = ctx.attributes,
        )
    } else {
        format!(
            "<input type=\"text\" id=\"{id}\" class=\"{classes}\"{attrs}>",
            classes = ctx.classes(),
            attrs = ctx.attributes,
        )
    };

    let mut html = String::from("<fieldset class=\"krds-form-group\">\n");
    html.push_str(&format!("  <legend class=\"sr-only\">{label}</legend>\n"));
    html.push_str(&format!(
        "  <label for=\"{id}\" class=\"form-label\">{label}</label>\n"
    ));
    html.push_str(&format!("  {control}\n"));
    if ctx.facets.state == Some("error") {
        html.push_str(&format!(
            "  <p class=\"form-hint error\" id=\"{id}-hint\">Check the value</p>\n"
        ));
    }
    html.push_str("</fieldset>\n");
    html
}

/// Checkbox or radio control with its label
pub fn choice(ctx: &MarkupContext<'_>, input_type: &str) -> String {
    let id = ctx.id();
    format!(
        "<div class=\"{classes}\">\n  \
         <input type=\"{input_type}\" id=\"{id}\"{attrs}>\n  \
         <label for=\"{id}\">{label}</label>\n\
         </div>\n",
        classes = ctx.classes(),
        attrs = ctx.attributes,
        label = ctx.label(),
    )
}

/// Input without a dedicated structure
pub fn control(ctx: &MarkupContext<'_>) -> String {
    format!(
        "<input type=\"text\" id=\"{id}\" class=\"{classes}\" aria-label=\"{label}\"{attrs}>\n",
        id = ctx.id(),
        classes = ctx.classes(),
        label = ctx.label(),
        attrs = ctx.attributes,
    )
}

/// Horizontal unless the variant asks for vertical
pub fn navigation(ctx: &MarkupContext<'_>) -> String {
    let orientation = if ctx.variant.is_some_and(|v| v.contains("vertical")) {
        "vertical"
    } else {
        "horizontal"
    };

    let mut html = format!(
        "<nav class=\"{class} {orientation}\" aria-label=\"{label}\">\n  <ul>\n",
        class = ctx.class(),
        label = ctx.label(),
    );
    for (index, item) in ["Home", "Services", "Contact"].iter().enumerate() {
        let current = if index == 0 { " aria-current=\"page\"" } else { "" };
        html.push_str(&format!("    <li><a href=\"#\"{current}>{item}</a></li>\n"));
    }
    html.push_str("  </ul>\n</nav>\n");
    html
}

pub fn breadcrumb(ctx: &MarkupContext<'_>) -> String {
    format!(
        "<nav aria-label=\"Breadcrumb\">\n  \
         <ol class=\"{class}\">\n    \
         <li><a href=\"#\">Home</a></li>\n    \
         <li><a href=\"#\">Section</a></li>\n    \
         <li aria-current=\"page\">Current page</li>\n  \
         </ol>\n\
         </nav>\n",
        class = ctx.class(),
    )
}

pub const DEFAULT_ALERT_TYPE: &str = "info";

pub fn alert(ctx: &MarkupContext<'_>) -> String {
    let kind = ctx.facets.kind.unwrap_or(DEFAULT_ALERT_TYPE);
    format!(
        "<div class=\"{class} {kind}\" role=\"alert\">\n  \
         <strong class=\"{class}-title\">{title}</strong>\n  \
         <p class=\"{class}-message\">{label} message</p>\n\
         </div>\n",
        class = ctx.class(),
        title = humanize(kind),
        label = ctx.label(),
    )
}

pub fn card(ctx: &MarkupContext<'_>) -> String {
    format!(
        "<div class=\"{classes}\">\n  \
         <div class=\"{class}-header\">\n    <h3>{label} title</h3>\n  </div>\n  \
         <div class=\"{class}-body\">\n    <p>{label} content</p>\n  </div>\n  \
         <div class=\"{class}-footer\">\n    <a href=\"#\">More</a>\n  </div>\n\
         </div>\n",
        classes = ctx.classes(),
        class = ctx.class(),
        label = ctx.label(),
    )
}

pub const DEFAULT_MODAL_SIZE: &str = "medium";

pub fn modal(ctx: &MarkupContext<'_>) -> String {
    let size = ctx.facets.size.unwrap_or(DEFAULT_MODAL_SIZE);
    format!(
        "<div class=\"{class}-overlay\">\n  \
         <div class=\"{class} {size}\" role=\"dialog\" aria-modal=\"true\" aria-labelledby=\"{id}-title\">\n    \
         <div class=\"{class}-header\">\n      <h2 id=\"{id}-title\">{label}</h2>\n    </div>\n    \
         <div class=\"{class}-body\">\n      <p>{label} content</p>\n    </div>\n    \
         <div class=\"{class}-footer\">\n      \
         <button type=\"button\" class=\"krds-btn\">Close</button>\n    \
         </div>\n  \
         </div>\n\
         </div>\n",
        class = ctx.class(),
        id = ctx.id(),
        label = ctx.label(),
    )
}

pub fn table(ctx: &MarkupContext<'_>) -> String {
    let mut html = format!("<table class=\"{class}\">\n", class = ctx.class());
    html.push_str("  <thead>\n    <tr>\n      <th scope=\"col\">Name</th>\n      <th scope=\"col\">Value</th>\n    </tr>\n  </thead>\n");
    html.push_str("  <tbody>\n");
    for row in 1..=2 {
        html.push_str(&format!(
            "    <tr>\n      <td>Item {row}</td>\n      <td>Value {row}</td>\n    </tr>\n"
        ));
    }
    html.push_str("  </tbody>\n</table>\n");
    html
}

/// Universal fallback markup
pub fn generic(ctx: &MarkupContext<'_>) -> String {
    format!(
        "<div class=\"{class}\">\n  {label}\n</div>\n",
        class = ctx.class(),
        label = ctx.label(),
    )
}
