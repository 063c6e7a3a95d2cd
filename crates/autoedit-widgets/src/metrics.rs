#![forbid(unsafe_code)]

//! Display density conversions and label measurement.

use unicode_width::UnicodeWidthStr;

/// Pixel density of the target surface.
///
/// `density` scales density-independent pixels (dip); `scaled_density` also
/// includes the user's font scale and converts scaled pixels (sp).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub density: f32,
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DisplayMetrics {
    /// Metrics with equal dip and sp scale.
    #[must_use]
    pub const fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }

    /// Set the font-scaled density.
    #[must_use]
    pub const fn with_scaled_density(mut self, scaled_density: f32) -> Self {
        self.scaled_density = scaled_density;
        self
    }

    /// Convert dip to whole pixels, rounding half up.
    #[must_use]
    pub fn dip_to_px(&self, dip: f64) -> i32 {
        (dip * f64::from(self.density) + 0.5) as i32
    }

    /// Convert sp to whole pixels, rounding half up.
    #[must_use]
    pub fn sp_to_px(&self, sp: f32) -> i32 {
        (sp * self.scaled_density + 0.5) as i32
    }
}

/// Measures the rendered width of a label.
pub trait TextMeasure {
    /// Width in pixels of `text` drawn at `size` pixels.
    fn measure(&self, text: &str, size: f32) -> f32;
}

/// Fixed-advance measurement based on Unicode display width.
///
/// Each display column advances `size * advance_ratio` pixels, so wide
/// (CJK) glyphs count double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance_ratio: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, size: f32) -> f32 {
        text.width() as f32 * size * self.advance_ratio
    }
}

impl<F: Fn(&str, f32) -> f32> TextMeasure for F {
    fn measure(&self, text: &str, size: f32) -> f32 {
        self(text, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dip_rounding() {
        let m = DisplayMetrics::new(2.0);
        assert_eq!(m.dip_to_px(0.5), 1);
        assert_eq!(m.dip_to_px(1.0), 2);
        let m = DisplayMetrics::new(1.5);
        // 0.5 * 1.5 + 0.5 = 1.25
        assert_eq!(m.dip_to_px(0.5), 1);
        assert_eq!(m.dip_to_px(1.0), 2);
        assert_eq!(DisplayMetrics::new(0.75).dip_to_px(0.5), 0);
    }

    #[test]
    fn sp_uses_scaled_density() {
        let m = DisplayMetrics::new(2.0).with_scaled_density(2.5);
        assert_eq!(m.sp_to_px(14.0), 35);
        assert_eq!(m.dip_to_px(14.0), 28);
    }

    #[test]
    fn monospace_counts_display_columns() {
        let measure = MonospaceMeasure { advance_ratio: 0.5 };
        assert_eq!(measure.measure("abcd", 10.0), 20.0);
        // Two wide glyphs occupy four columns.
        assert_eq!(measure.measure("日本", 10.0), 20.0);
        assert_eq!(measure.measure("", 10.0), 0.0);
    }

    #[test]
    fn closure_measure() {
        let fixed = |_: &str, _: f32| -> f32 { 42.0 };
        assert_eq!(fixed.measure("anything", 1.0), 42.0);
    }
}
