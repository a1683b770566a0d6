use serde::{Deserialize, Serialize};

/// Named theme presets with fixed palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    Northwell,
    Dark,
    Minimal,
    Highcontrast,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 4] = [
        ThemePreset::Northwell,
        ThemePreset::Dark,
        ThemePreset::Minimal,
        ThemePreset::Highcontrast,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ThemePreset::Northwell => "Northwell Blue",
            ThemePreset::Dark => "Dark Mode",
            ThemePreset::Minimal => "Minimal",
            ThemePreset::Highcontrast => "High Contrast",
        }
    }

    /// The full fixed theme for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Northwell => Theme {
                preset: ThemePreset::Northwell,
                primary_color: "#003087".to_string(),
                accent_color: "#00A3E0".to_string(),
                background_color: "#F5F7FA".to_string(),
                surface_color: "#FFFFFF".to_string(),
                text_color: "#1A1A2E".to_string(),
                muted_color: "#6B7280".to_string(),
                font_family: "'IBM Plex Sans', sans-serif".to_string(),
                heading_family: "'Playfair Display', serif".to_string(),
            },
            ThemePreset::Dark => Theme {
                preset: ThemePreset::Dark,
                primary_color: "#00A3E0".to_string(),
                accent_color: "#38BDF8".to_string(),
                background_color: "#0F172A".to_string(),
                surface_color: "#1E293B".to_string(),
                text_color: "#E2E8F0".to_string(),
                muted_color: "#94A3B8".to_string(),
                font_family: "'IBM Plex Sans', sans-serif".to_string(),
                heading_family: "'Playfair Display', serif".to_string(),
            },
            ThemePreset::Minimal => Theme {
                preset: ThemePreset::Minimal,
                primary_color: "#18181B".to_string(),
                accent_color: "#52525B".to_string(),
                background_color: "#FAFAFA".to_string(),
                surface_color: "#FFFFFF".to_string(),
                text_color: "#09090B".to_string(),
                muted_color: "#A1A1AA".to_string(),
                font_family: "'IBM Plex Sans', sans-serif".to_string(),
                heading_family: "'IBM Plex Sans', sans-serif".to_string(),
            },
            ThemePreset::Highcontrast => Theme {
                preset: ThemePreset::Highcontrast,
                primary_color: "#000000".to_string(),
                accent_color: "#FFDD00".to_string(),
                background_color: "#FFFFFF".to_string(),
                surface_color: "#F0F0F0".to_string(),
                text_color: "#000000".to_string(),
                muted_color: "#333333".to_string(),
                font_family: "'IBM Plex Sans', sans-serif".to_string(),
                heading_family: "'Playfair Display', serif".to_string(),
            },
        }
    }
}

/// Theme attached to a document (exactly one, never absent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub preset: ThemePreset,
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub surface_color: String,
    pub text_color: String,
    pub muted_color: String,
    pub font_family: String,
    pub heading_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        ThemePreset::Northwell.theme()
    }
}
