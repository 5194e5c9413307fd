// ABOUTME: Design token catalog and the artifacts derived from it
// ABOUTME: Name grammar, theme filtering, CSS variables, utility classes, Style Dictionary trees

pub mod catalog;
pub mod css;
pub mod grammar;
pub mod style_dictionary;
pub mod theme;
pub mod utilities;

pub use catalog::{CatalogError, TokenCatalog, TokenEntry};
pub use css::{
    CssRule, StylesheetOptions, css_var_name, emit_stylesheet, emit_stylesheet_with,
    emit_variables, render_rules, var_ref,
};
pub use grammar::{ThemeScope, TokenName, TokenNameError, describe, parse};
pub use style_dictionary::{to_json, to_tree};
pub use theme::{is_scoped_to, is_theme_neutral, is_visible};
pub use utilities::emit_utility_rules;
