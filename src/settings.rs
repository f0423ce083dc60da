//! Game settings
//!
//! Loaded from a JSON file by the native host. Missing fields take defaults;
//! a missing or broken file falls back to defaults entirely.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Physics;

/// Grid size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Grid size (rows, cols) for this preset
    pub fn grid(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (6, 5),
            Difficulty::Normal => (DEFAULT_ROWS, DEFAULT_COLS),
            Difficulty::Hard => (16, 12),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Maze ===
    pub rows: usize,
    pub cols: usize,
    /// Fixed maze seed; `None` draws a fresh one each run
    pub seed: Option<u64>,
    /// Grid preset; when set it overrides `rows`/`cols`
    pub difficulty: Option<Difficulty>,

    // === Physics ===
    pub accel_factor: f32,
    /// Per-tick velocity multiplier (0..=1)
    pub friction: f32,
    pub ball_radius_ratio: f32,
    pub goal_radius_ratio: f32,
    /// Share of the viewport the maze may fill (0..=1)
    pub viewport_fill: f32,

    // === Loop ===
    pub tick_rate_hz: f32,

    // === Headless host ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Give up after this many ticks (`None` = run until the goal)
    pub max_ticks: Option<u64>,
    /// Print every n-th frame
    pub print_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            difficulty: None,

            accel_factor: ACCEL_FACTOR,
            friction: FRICTION,
            ball_radius_ratio: BALL_RADIUS_RATIO,
            goal_radius_ratio: GOAL_RADIUS_RATIO,
            viewport_fill: VIEWPORT_FILL,

            tick_rate_hz: TICK_RATE_HZ,

            viewport_width: 1080.0,
            viewport_height: 1920.0,
            max_ticks: Some(60 * 120),
            print_every: 60,
        }
    }
}

impl Settings {
    /// Physics tuning for the simulation
    pub fn physics(&self) -> Physics {
        Physics {
            accel_factor: self.accel_factor,
            friction: self.friction,
            ball_radius_ratio: self.ball_radius_ratio,
            goal_radius_ratio: self.goal_radius_ratio,
            viewport_fill: self.viewport_fill,
        }
    }

    /// Replace out-of-range values with something playable
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if let Some(preset) = self.difficulty {
            (self.rows, self.cols) = preset.grid();
            log::info!("Difficulty {}: {}x{} grid", preset.as_str(), self.rows, self.cols);
        }
        self.rows = self.rows.max(1);
        self.cols = self.cols.max(1);

        if !self.accel_factor.is_finite() {
            self.accel_factor = defaults.accel_factor;
        }
        if !(0.0..=1.0).contains(&self.friction) {
            log::warn!("friction {} out of range, using {}", self.friction, defaults.friction);
            self.friction = defaults.friction;
        }
        if !(self.ball_radius_ratio > 0.0 && self.ball_radius_ratio <= 0.5) {
            self.ball_radius_ratio = defaults.ball_radius_ratio;
        }
        if !(self.goal_radius_ratio.is_finite() && self.goal_radius_ratio > 0.0) {
            self.goal_radius_ratio = defaults.goal_radius_ratio;
        }
        if !(self.viewport_fill > 0.0 && self.viewport_fill <= 1.0) {
            self.viewport_fill = defaults.viewport_fill;
        }
        if !self.tick_rate_hz.is_finite() {
            self.tick_rate_hz = defaults.tick_rate_hz;
        } else if !(MIN_TICK_RATE_HZ..=MAX_TICK_RATE_HZ).contains(&self.tick_rate_hz) {
            let clamped = self.tick_rate_hz.clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ);
            log::warn!("tick rate {} out of range, using {}", self.tick_rate_hz, clamped);
            self.tick_rate_hz = clamped;
        }
        self.print_every = self.print_every.max(1);
        self
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.validated()),
            Err(e) => {
                log::warn!("Invalid settings JSON: {}", e);
                None
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!((settings.rows, settings.cols), (10, 8));
        assert_eq!(settings.physics(), Physics::default());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let settings = Settings::from_json(r#"{ "rows": 4, "seed": 99 }"#).unwrap();
        assert_eq!(settings.rows, 4);
        assert_eq!(settings.cols, DEFAULT_COLS);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.friction, FRICTION);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            difficulty: Some(Difficulty::Hard),
            ..Settings::default()
        }
        .validated();
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), Some(settings));
    }

    #[test]
    fn test_broken_json_rejected() {
        assert_eq!(Settings::from_json("{ rows: "), None);
    }

    #[test]
    fn test_validation_repairs_values() {
        let settings = Settings {
            rows: 0,
            cols: 0,
            friction: 1.5,
            viewport_fill: 0.0,
            tick_rate_hz: f32::NAN,
            ball_radius_ratio: 2.0,
            ..Settings::default()
        }
        .validated();
        assert_eq!((settings.rows, settings.cols), (1, 1));
        assert_eq!(settings.friction, FRICTION);
        assert_eq!(settings.viewport_fill, VIEWPORT_FILL);
        assert_eq!(settings.tick_rate_hz, TICK_RATE_HZ);
        assert_eq!(settings.ball_radius_ratio, BALL_RADIUS_RATIO);
    }

    #[test]
    fn test_tick_rate_clamped_to_range() {
        let slow = Settings::from_json(r#"{ "tick_rate_hz": 1e-30 }"#).unwrap();
        assert_eq!(slow.tick_rate_hz, MIN_TICK_RATE_HZ);
        let fast = Settings::from_json(r#"{ "tick_rate_hz": 5000.0 }"#).unwrap();
        assert_eq!(fast.tick_rate_hz, MAX_TICK_RATE_HZ);
        let negative = Settings::from_json(r#"{ "tick_rate_hz": -3.0 }"#).unwrap();
        assert_eq!(negative.tick_rate_hz, MIN_TICK_RATE_HZ);
    }

    #[test]
    fn test_difficulty_sets_grid() {
        let settings = Settings::from_json(r#"{ "difficulty": "Hard", "rows": 3 }"#).unwrap();
        assert_eq!((settings.rows, settings.cols), Difficulty::Hard.grid());

        let easy = Settings::from_json(r#"{ "difficulty": "Easy" }"#).unwrap();
        assert_eq!((easy.rows, easy.cols), (6, 5));

        let plain = Settings::from_json(r#"{ "rows": 3, "cols": 4 }"#).unwrap();
        assert_eq!(plain.difficulty, None);
        assert_eq!((plain.rows, plain.cols), (3, 4));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load("/nonexistent/tilt-maze/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("tilt-maze-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(5),
            difficulty: Some(Difficulty::Easy),
            ..Settings::default()
        }
        .validated();
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_difficulty_names() {
        for preset in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(Difficulty::from_str("MEDIUM"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}
