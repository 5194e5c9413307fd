// ABOUTME: Theme visibility rules for token names
// ABOUTME: Literal -light- / -dark- substring checks decide which tokens a theme sees

use krds_types::Theme;

const LIGHT_MARKER: &str = "-light-";
const DARK_MARKER: &str = "-dark-";

fn marker(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => LIGHT_MARKER,
        Theme::Dark => DARK_MARKER,
    }
}

/// Whether `token_name` is visible when generating for `theme`.
///
/// Names carrying neither marker are theme-neutral and visible everywhere.
/// Each theme checks its own marker first, so a name carrying both markers
/// is visible under both themes.
pub fn is_visible(token_name: &str, theme: Theme) -> bool {
    match theme {
        Theme::Dark => {
            if token_name.contains(DARK_MARKER) {
                true
            } else {
                !token_name.contains(LIGHT_MARKER)
            }
        }
        Theme::Light => {
            if token_name.contains(LIGHT_MARKER) {
                true
            } else {
                !token_name.contains(DARK_MARKER)
            }
        }
    }
}

/// Whether the name carries the marker of `theme`
pub fn is_scoped_to(token_name: &str, theme: Theme) -> bool {
    token_name.contains(marker(theme))
}

/// Whether the name carries neither theme marker
pub fn is_theme_neutral(token_name: &str) -> bool {
    !token_name.contains(LIGHT_MARKER) && !token_name.contains(DARK_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_tokens_are_visible_everywhere() {
        for name in [
            "krds-spacing-4",
            "krds-typography-font-size-body-medium",
            "krds-high-contrast-color-text-basic",
            "krds-color-text-dark",
        ] {
            assert!(is_visible(name, Theme::Light), "{name}");
            assert!(is_visible(name, Theme::Dark), "{name}");
            assert!(is_theme_neutral(name), "{name}");
        }
    }

    #[test]
    fn test_scoped_tokens_are_visible_only_under_their_theme() {
        let dark = "krds-dark-color-text-basic";
        assert!(is_visible(dark, Theme::Dark));
        assert!(!is_visible(dark, Theme::Light));
        assert!(is_scoped_to(dark, Theme::Dark));

        let light = "krds-light-color-text-basic";
        assert!(is_visible(light, Theme::Light));
        assert!(!is_visible(light, Theme::Dark));
        assert!(!is_scoped_to(light, Theme::Dark));
    }

    #[test]
    fn test_name_with_both_markers_is_visible_under_both() {
        let name = "krds-light-color-dark-mode-preview";
        assert!(is_visible(name, Theme::Light));
        assert!(is_visible(name, Theme::Dark));
        assert!(!is_theme_neutral(name));
    }
}
