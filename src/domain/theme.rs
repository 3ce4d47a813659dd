// Theme - Light/dark presentation flag

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than "dark" reads as the default light theme.
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle: the theme you would switch to.
    pub fn glyph(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn toggle_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }
}
