//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; natively they come from defaults or
//! a JSON file passed on the command line.

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Segments used to tessellate a full circle or ellipse
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }

    /// Whether to render the cloud layer
    pub fn clouds_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }

    /// Whether to render the tree layer
    pub fn trees_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Frame rate the loop is limited to
    pub target_fps: u32,
    /// Draw mountains, clouds and trees behind the level
    pub show_scenery: bool,

    // === Accessibility ===
    /// Reduced motion (no squash while turning)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            target_fps: TARGET_FPS,
            show_scenery: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.target_fps = settings.target_fps.max(1);
        Ok(settings)
    }

    /// Effective cloud layer (respects show_scenery and quality)
    pub fn clouds(&self) -> bool {
        self.show_scenery && self.quality.clouds_enabled()
    }

    /// Effective tree layer (respects show_scenery and quality)
    pub fn trees(&self) -> bool {
        self.show_scenery && self.quality.trees_enabled()
    }

    /// Seconds per frame at the target rate
    pub fn frame_interval(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "purin_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.quality, QualityPreset::Medium);
        assert_eq!(s.target_fps, 60);
        assert!(s.show_scenery);
        assert!(!s.reduced_motion);
        assert!(s.clouds() && s.trees());
    }

    #[test]
    fn test_low_preset_keeps_mountains_only() {
        let s = Settings::from_preset(QualityPreset::Low);
        assert!(!s.clouds());
        assert!(!s.trees());
        assert!(s.quality.circle_segments() < QualityPreset::High.circle_segments());
    }

    #[test]
    fn test_from_json_partial() {
        let s = Settings::from_json(r#"{"quality":"High","reduced_motion":true}"#).unwrap();
        assert_eq!(s.quality, QualityPreset::High);
        assert!(s.reduced_motion);
        assert_eq!(s.target_fps, 60);
    }

    #[test]
    fn test_from_json_zero_fps_is_clamped() {
        let s = Settings::from_json(r#"{"target_fps":0}"#).unwrap();
        assert_eq!(s.target_fps, 1);
        assert_eq!(s.frame_interval(), 1.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Settings::from_json("not json").is_err());
        assert!(Settings::from_json(r#"{"quality":"Ultra"}"#).is_err());
    }

    #[test]
    fn test_roundtrip_json() {
        let s = Settings {
            show_scenery: false,
            ..Settings::from_preset(QualityPreset::Low)
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_quality_names() {
        assert_eq!(QualityPreset::from_str("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }
}
