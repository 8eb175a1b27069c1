use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "desktop_gui.settings";

const MIN_CARD_WIDTH: f32 = 180.0;
const MAX_CARD_WIDTH: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    Dark,
    Light,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Dark => "Dark",
            ThemePreset::Light => "Light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreset::Dark => ThemePreset::Light,
            ThemePreset::Light => ThemePreset::Dark,
        }
    }
}

/// Window preferences kept in eframe storage. Cart state is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedDesktopSettings {
    pub theme: ThemePreset,
    pub card_width: f32,
}

impl Default for PersistedDesktopSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreset::Light,
            card_width: 240.0,
        }
    }
}

impl PersistedDesktopSettings {
    pub fn sanitized(self) -> Self {
        let card_width = if self.card_width.is_finite() {
            self.card_width.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
        } else {
            Self::default().card_width
        };
        Self {
            theme: self.theme,
            card_width,
        }
    }

    pub fn from_storage_text(text: &str) -> Option<Self> {
        serde_json::from_str::<Self>(text).ok().map(Self::sanitized)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CardPalette {
    pub accent: egui::Color32,
    pub accent_text: egui::Color32,
    pub danger: egui::Color32,
    pub price: egui::Color32,
    pub muted: egui::Color32,
}

pub fn card_palette(theme: ThemePreset) -> CardPalette {
    match theme {
        ThemePreset::Dark => CardPalette {
            accent: egui::Color32::from_rgb(255, 159, 28),
            accent_text: egui::Color32::from_rgb(24, 24, 27),
            danger: egui::Color32::from_rgb(220, 68, 68),
            price: egui::Color32::from_rgb(134, 239, 172),
            muted: egui::Color32::from_rgb(161, 161, 170),
        },
        ThemePreset::Light => CardPalette {
            accent: egui::Color32::from_rgb(251, 100, 27),
            accent_text: egui::Color32::WHITE,
            danger: egui::Color32::from_rgb(200, 40, 40),
            price: egui::Color32::from_rgb(22, 101, 52),
            muted: egui::Color32::from_rgb(100, 100, 110),
        },
    }
}

pub fn visuals_for_theme(theme: ThemePreset) -> egui::Visuals {
    let mut visuals = match theme {
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_rgb(30, 31, 34);
            v.window_fill = egui::Color32::from_rgb(30, 31, 34);
            v.faint_bg_color = egui::Color32::from_rgb(43, 45, 49);
            v
        }
        ThemePreset::Light => egui::Visuals::light(),
    };

    let radius = egui::CornerRadius::same(8);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;
    visuals
}
