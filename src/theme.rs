//! Dark stylesheet and the poster gradient pool.

use gtk::gdk;
use gtk::CssProvider;

/// Poster styling tokens. Records carry one of these as an opaque string;
/// each maps to a gradient class in [`APP_CSS`].
pub const POSTER_THEMES: [&str; 8] = [
    "poster-indigo",
    "poster-sky",
    "poster-rose",
    "poster-fuchsia",
    "poster-amber",
    "poster-ocean",
    "poster-crimson",
    "poster-emerald",
];

pub const APP_CSS: &str = r#"
window {
    background-color: #0a0a0a;
    color: #e5e5e5;
}

.navbar {
    border-bottom: 1px solid #262626;
}

.brand-badge {
    background-image: linear-gradient(90deg, #c026d3, #4f46e5);
    color: #ffffff;
    border-radius: 8px;
    padding: 2px 8px;
    font-size: 11px;
    font-weight: 700;
}

.pill {
    background-color: rgba(23, 23, 23, 0.6);
    color: #e5e5e5;
    border: 1px solid #404040;
    border-radius: 999px;
    padding: 4px 14px;
}

.pill:hover {
    border-color: #737373;
}

button.accent {
    background-image: linear-gradient(90deg, #d946ef, #6366f1);
    color: #ffffff;
    border-radius: 10px;
    font-weight: 600;
}

.hero-title {
    font-size: 46px;
    font-weight: 800;
}

.hero-subtitle {
    color: #d4d4d4;
}

.chip {
    background-color: rgba(255, 255, 255, 0.05);
    color: #a3a3a3;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 8px;
    padding: 2px 8px;
    font-size: 12px;
}

.section-title {
    font-size: 20px;
    font-weight: 700;
}

.badge {
    background-color: #171717;
    color: #d4d4d4;
    border: 1px solid #262626;
    border-radius: 6px;
    padding: 2px 8px;
    font-size: 12px;
}

.rating {
    color: #fbbf24;
    font-weight: 600;
}

.muted {
    color: #a3a3a3;
}

.status {
    color: #a3a3a3;
    font-size: 12px;
}

.card {
    background-color: #171717;
    border: 1px solid #262626;
    border-radius: 16px;
    padding: 8px;
}

.card:hover {
    border-color: #525252;
}

.poster {
    border-radius: 12px;
}

.poster-title {
    color: rgba(255, 255, 255, 0.92);
    font-weight: 600;
    text-shadow: 0 1px 2px rgba(0, 0, 0, 0.6);
}

.poster-indigo {
    background-image: linear-gradient(135deg, #6366f1, #a855f7, #ec4899);
}

.poster-sky {
    background-image: linear-gradient(135deg, #0ea5e9, #06b6d4, #10b981);
}

.poster-rose {
    background-image: linear-gradient(135deg, #f43f5e, #f97316, #eab308);
}

.poster-fuchsia {
    background-image: linear-gradient(135deg, #d946ef, #8b5cf6, #6366f1);
}

.poster-amber {
    background-image: linear-gradient(135deg, #f59e0b, #84cc16, #10b981);
}

.poster-ocean {
    background-image: linear-gradient(135deg, #2563eb, #14b8a6, #10b981);
}

.poster-crimson {
    background-image: linear-gradient(135deg, #ef4444, #ec4899, #a855f7);
}

.poster-emerald {
    background-image: linear-gradient(135deg, #10b981, #14b8a6, #06b6d4);
}

.empty-state {
    color: #a3a3a3;
    font-size: 16px;
}

.backdrop {
    background-color: rgba(0, 0, 0, 0.7);
}

.detail-panel {
    background-color: #0a0a0a;
    border: 1px solid #262626;
    border-radius: 16px;
}

.cast-slot {
    background-color: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    padding: 8px;
}

.save-button {
    background-color: #171717;
    color: #ffffff;
    border: 1px solid #262626;
    border-radius: 10px;
}

.save-button:hover {
    border-color: #525252;
}

.save-button.saved {
    background-color: #ec4899;
    background-image: none;
    border-color: #ec4899;
}

.footer {
    border-top: 1px solid #262626;
}

.footer-heading {
    color: #ffffff;
    font-weight: 600;
}
"#;

/// Install the embedded stylesheet for the default display.
pub fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(APP_CSS);
    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_token_has_a_css_class() {
        for name in POSTER_THEMES {
            assert!(
                APP_CSS.contains(&format!(".{} {{", name)),
                "missing css class for {name}"
            );
        }
    }

    #[test]
    fn theme_tokens_are_distinct() {
        let mut names: Vec<&str> = POSTER_THEMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), POSTER_THEMES.len());
    }
}
