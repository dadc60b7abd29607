//! Built-in color themes
//!
//! Each theme is a coordinated paper/passage/centreline palette tuned for
//! printed cave maps: a very light background, a subtle passage tint, and a
//! contrasting survey color. Applying a theme overwrites exactly the three
//! color fields of the settings and records the theme id.

use crate::settings::Settings;

/// A named color palette for the generated map
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub bg_color: &'static str,
    pub fg_color: &'static str,
    pub survey_color: &'static str,
    pub description: &'static str,
}

/// The built-in theme table, in presentation order
pub const THEMES: &[Theme] = &[
    Theme {
        id: "natural_earth",
        name: "Prírodná Zem",
        bg_color: "#fdfcf9",
        fg_color: "#f7f4eb",
        survey_color: "#4a3728",
        description: "Veľmi svetlý prírodný papier s hnedým polygónom.",
    },
    Theme {
        id: "pastel_brown",
        name: "Pastelová Hnedá",
        bg_color: "#fcfaf9",
        fg_color: "#f5f0ed",
        survey_color: "#5d4037",
        description: "Jemný krémový papier pre vápencové jaskyne.",
    },
    Theme {
        id: "pastel_gray",
        name: "Pastelová Sivá",
        bg_color: "#fafafa",
        fg_color: "#f2f2f2",
        survey_color: "#212121",
        description: "Neutrálny svetlosivý vzhľad pre technickú dokumentáciu.",
    },
    Theme {
        id: "pastel_green",
        name: "Pastelová Zelená",
        bg_color: "#f9fbf7",
        fg_color: "#f1f6eb",
        survey_color: "#2e7d32",
        description: "Svieži svetlozelený nádych pre krasové oblasti.",
    },
    Theme {
        id: "hc_brown",
        name: "HC Hnedá",
        bg_color: "#fdfbfb",
        fg_color: "#f4ecea",
        survey_color: "#3e2723",
        description: "Vysoký kontrast tmavej hnedej na takmer bielom papieri.",
    },
    Theme {
        id: "hc_gray",
        name: "HC Sivá",
        bg_color: "#f8f9fa",
        fg_color: "#e9ecef",
        survey_color: "#000000",
        description: "Čistý biely papier s antracitovými prvkami.",
    },
    Theme {
        id: "heatmap",
        name: "HC Heatmap",
        bg_color: "#fffcfc",
        fg_color: "#fbe9e7",
        survey_color: "#d84315",
        description: "Svetlý papier s výrazným oranžovo-červeným polygónom.",
    },
    Theme {
        id: "blueprint_light",
        name: "Technický Blankyt",
        bg_color: "#f7faff",
        fg_color: "#e3f2fd",
        survey_color: "#0d47a1",
        description: "Jemne modrastý papier pre technicky ladené mapy.",
    },
];

impl Theme {
    /// Look up a theme by id
    pub fn find(id: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|t| t.id == id)
    }

    /// Copy this theme's palette into the settings
    pub fn apply(&self, settings: &mut Settings) {
        settings.map_bg_color = self.bg_color.to_string();
        settings.map_fg_color = self.fg_color.to_string();
        settings.survey_color = self.survey_color.to_string();
        settings.color_scheme = self.id.to_string();
    }
}
