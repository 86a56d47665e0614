use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Public engine styling configuration.
///
/// This type is serializable so host applications can persist/load chart
/// styling without inventing their own ad-hoc format. Missing fields fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_arch_seat_radius")]
    pub arch_seat_radius: f64,
    #[serde(default = "default_westminster_seat_radius")]
    pub westminster_seat_radius: f64,
    /// Fill of seats that belong to a party other than the highlighted one.
    #[serde(default = "default_inactive_seat_fill")]
    pub inactive_seat_fill: String,
    #[serde(default = "default_inactive_seat_opacity")]
    pub inactive_seat_opacity: f64,
    #[serde(default = "default_background_fill")]
    pub background_fill: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_majority_line_behavior")]
    pub majority_line: MajorityLineBehavior,
    #[serde(default = "default_aisle_fill")]
    pub aisle_fill: String,
    #[serde(default = "default_header_color")]
    pub header_color: String,
}

/// Stroke styling of the arch majority line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorityLineBehavior {
    pub color: String,
    pub stroke_width: f64,
    pub dash: f64,
    pub gap: f64,
    pub opacity: f64,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            arch_seat_radius: default_arch_seat_radius(),
            westminster_seat_radius: default_westminster_seat_radius(),
            inactive_seat_fill: default_inactive_seat_fill(),
            inactive_seat_opacity: default_inactive_seat_opacity(),
            background_fill: default_background_fill(),
            text_color: default_text_color(),
            majority_line: default_majority_line_behavior(),
            aisle_fill: default_aisle_fill(),
            header_color: default_header_color(),
        }
    }
}

impl ChartEngineConfig {
    /// Parses a config from JSON; absent fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize engine config: {e}")))
    }

    #[must_use]
    pub fn with_seat_radii(mut self, arch: f64, westminster: f64) -> Self {
        self.arch_seat_radius = arch;
        self.westminster_seat_radius = westminster;
        self
    }

    #[must_use]
    pub fn with_inactive_seat_style(mut self, fill: impl Into<String>, opacity: f64) -> Self {
        self.inactive_seat_fill = fill.into();
        self.inactive_seat_opacity = opacity;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, radius) in [
            ("arch_seat_radius", self.arch_seat_radius),
            ("westminster_seat_radius", self.westminster_seat_radius),
            ("majority_line.stroke_width", self.majority_line.stroke_width),
            ("majority_line.dash", self.majority_line.dash),
        ] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.majority_line.gap.is_finite() || self.majority_line.gap < 0.0 {
            return Err(ChartError::InvalidData(
                "majority_line.gap must be finite and >= 0".to_owned(),
            ));
        }
        for (name, opacity) in [
            ("inactive_seat_opacity", self.inactive_seat_opacity),
            ("majority_line.opacity", self.majority_line.opacity),
        ] {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and in [0, 1]"
                )));
            }
        }
        for (name, token) in [
            ("inactive_seat_fill", &self.inactive_seat_fill),
            ("background_fill", &self.background_fill),
            ("text_color", &self.text_color),
            ("majority_line.color", &self.majority_line.color),
            ("aisle_fill", &self.aisle_fill),
            ("header_color", &self.header_color),
        ] {
            if token.trim().is_empty() {
                return Err(ChartError::InvalidData(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

fn default_arch_seat_radius() -> f64 {
    8.4
}

fn default_westminster_seat_radius() -> f64 {
    7.8
}

fn default_inactive_seat_fill() -> String {
    "#cbd5e1".to_owned()
}

fn default_inactive_seat_opacity() -> f64 {
    0.55
}

fn default_background_fill() -> String {
    "#ffffff".to_owned()
}

fn default_text_color() -> String {
    "#0f172a".to_owned()
}

fn default_majority_line_behavior() -> MajorityLineBehavior {
    MajorityLineBehavior {
        color: "#0f172a".to_owned(),
        stroke_width: 3.0,
        dash: 8.0,
        gap: 6.0,
        opacity: 0.7,
    }
}

fn default_aisle_fill() -> String {
    "#e2e8f0".to_owned()
}

fn default_header_color() -> String {
    "#334155".to_owned()
}
