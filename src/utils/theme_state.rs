use std::fmt::{ Display, Formatter };
use serde::{ Deserialize, Serialize };

/// Site color theme. Serialized with the labels stored in the `theme` cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "white")]
    Light,
    #[serde(rename = "black")]
    #[default]
    Dark,
}

/// The four CSS custom properties published on `:root`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub color: &'static str,
    pub bg: &'static str,
    pub gray: &'static str,
    pub light_gray: &'static str,
}

const LIGHT: Palette = Palette {
    color: "#111",
    bg: "#fdfdfd",
    gray: "#7f7f7f",
    light_gray: "#f0f0f0",
};

const DARK: Palette = Palette {
    color: "#fdfdfd",
    bg: "#111",
    gray: "#666",
    light_gray: "#333",
};

impl Theme {
    /// Decides the theme from the `theme` configuration value.
    /// Only `"white"` selects `Light`; absent or unrecognised values fall back to `Dark`.
    pub fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("white") => Theme::Light,
            Some(other) => {
                if other != "black" {
                    log::debug!("Unknown theme '{}', defaulting to black", other);
                }
                Theme::Dark
            }
            None => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "white",
            Theme::Dark => "black",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Global stylesheet body binding the palette to `:root`.
    pub fn root_css(self) -> String {
        let p = self.palette();
        format!(
            ":root {{ --color: {} !important; --bg: {} !important; --gray: {} !important; --light-gray: {} !important; }}",
            p.color,
            p.bg,
            p.gray,
            p.light_gray
        )
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
