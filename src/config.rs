use serde::Deserialize;
use thiserror::Error;

/// Tuning for scroll-driven section tracking and anchor navigation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// `is_scrolled` flips once the page offset is strictly above this.
    pub scrolled_threshold_px: f64,
    /// Height of the fixed nav bar, subtracted from anchor scroll targets.
    pub header_offset_px: f64,
    /// Highest a section's top edge may sit above the viewport and still count as active.
    pub window_top_px: f64,
    /// Lowest a section's top edge may sit, as a fraction of viewport height.
    pub window_bottom_ratio: f64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
            header_offset_px: 80.0,
            window_top_px: -200.0,
            window_bottom_ratio: 0.5,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SyncConfigError {
    #[error("`{field}` must be a finite, non-negative number (got {value})")]
    NotNonNegative { field: &'static str, value: f64 },
    #[error("`window_top_px` must be finite and <= 0 (got {0})")]
    WindowTop(f64),
    #[error("`window_bottom_ratio` must be in (0, 1] (got {0})")]
    WindowBottom(f64),
}

impl SyncConfig {
    pub fn validate(&self) -> Result<(), SyncConfigError> {
        for (field, value) in [
            ("scrolled_threshold_px", self.scrolled_threshold_px),
            ("header_offset_px", self.header_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SyncConfigError::NotNonNegative { field, value });
            }
        }
        if !self.window_top_px.is_finite() || self.window_top_px > 0.0 {
            return Err(SyncConfigError::WindowTop(self.window_top_px));
        }
        if !(self.window_bottom_ratio > 0.0 && self.window_bottom_ratio <= 1.0) {
            return Err(SyncConfigError::WindowBottom(self.window_bottom_ratio));
        }
        Ok(())
    }

    /// Bottom edge of the activation window for a viewport of the given height.
    pub fn window_bottom(&self, viewport_height: f64) -> f64 {
        viewport_height * self.window_bottom_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SyncConfig::default().validate(), Ok(()));
        assert_eq!(SyncConfig::default().window_bottom(800.0), 400.0);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg: SyncConfig = serde_json::from_str(r#"{ "header_offset_px": 64.0 }"#).unwrap();
        assert_eq!(cfg.header_offset_px, 64.0);
        assert_eq!(cfg.scrolled_threshold_px, 50.0);
        assert_eq!(cfg.window_top_px, -200.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cfg = SyncConfig { header_offset_px: -1.0, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(SyncConfigError::NotNonNegative { field: "header_offset_px", value: -1.0 })
        );
        let cfg = SyncConfig { window_top_px: 10.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(SyncConfigError::WindowTop(10.0)));
        let cfg = SyncConfig { window_bottom_ratio: 1.5, ..Default::default() };
        assert_eq!(cfg.validate(), Err(SyncConfigError::WindowBottom(1.5)));
        let cfg = SyncConfig { window_bottom_ratio: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
