use super::store::Theme;

/// Named colors for one theme. Every component takes its colors from here,
/// either directly or through the CSS variables from [`Palette::css_vars`].
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page_bg: &'static str,
    pub surface: &'static str,
    pub surface_alt: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub highlight: &'static str,
    pub chip_active_bg: &'static str,
    pub chip_active_text: &'static str,
    pub chip_idle_bg: &'static str,
    pub chip_idle_text: &'static str,
    pub input_bg: &'static str,
    pub nav_scrolled_bg: &'static str,
    pub glow: &'static str,
}

pub const DARK: Palette = Palette {
    page_bg: "#000000",
    surface: "#0a0a0a",
    surface_alt: "#141414",
    border: "#1e1e1e",
    text: "#f3f4f6",
    text_muted: "#9ca3af",
    heading: "#f3f4f6",
    accent: "#ff9d26",
    accent_hover: "#e67e00",
    highlight: "#ffcc26",
    chip_active_bg: "#ffbe4d",
    chip_active_text: "#111827",
    chip_idle_bg: "#141414",
    chip_idle_text: "#d1d5db",
    input_bg: "#141414",
    nav_scrolled_bg: "rgba(10, 10, 10, 0.9)",
    glow: "0 0 5px #ff9d26, 0 0 20px #ff9d26",
};

pub const LIGHT: Palette = Palette {
    page_bg: "#ffffff",
    surface: "#f3f4f6",
    surface_alt: "#ffffff",
    border: "#d1d5db",
    text: "#111827",
    text_muted: "#4b5563",
    heading: "#1f2937",
    accent: "#ff9d26",
    accent_hover: "#e67e00",
    highlight: "#e6b300",
    chip_active_bg: "#ff9d26",
    chip_active_text: "#ffffff",
    chip_idle_bg: "#e5e7eb",
    chip_idle_text: "#374151",
    input_bg: "#ffffff",
    nav_scrolled_bg: "rgba(255, 255, 255, 0.9)",
    glow: "0 0 4px rgba(255, 157, 38, 0.6)",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Inline style declaring the palette as CSS custom properties.
    pub fn css_vars(&self) -> String {
        [
            ("--page-bg", self.page_bg),
            ("--surface", self.surface),
            ("--surface-alt", self.surface_alt),
            ("--border", self.border),
            ("--text", self.text),
            ("--text-muted", self.text_muted),
            ("--heading", self.heading),
            ("--accent", self.accent),
            ("--accent-hover", self.accent_hover),
            ("--highlight", self.highlight),
            ("--chip-active-bg", self.chip_active_bg),
            ("--chip-active-text", self.chip_active_text),
            ("--chip-idle-bg", self.chip_idle_bg),
            ("--chip-idle-text", self.chip_idle_text),
            ("--input-bg", self.input_bg),
            ("--nav-scrolled-bg", self.nav_scrolled_bg),
            ("--glow", self.glow),
        ]
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_is_shared_between_themes() {
        assert_eq!(DARK.accent, LIGHT.accent);
    }

    #[test]
    fn css_vars_lists_every_token() {
        let vars = Palette::for_theme(Theme::Dark).css_vars();
        assert!(vars.starts_with("--page-bg: #000000;"));
        assert!(vars.contains("--accent: #ff9d26;"));
        assert_eq!(vars.matches(';').count(), 17);
    }

    #[test]
    fn light_and_dark_differ_on_background() {
        assert_ne!(
            Palette::for_theme(Theme::Light).page_bg,
            Palette::for_theme(Theme::Dark).page_bg
        );
    }
}
