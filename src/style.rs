//! Visual styling for the histogram widget and its slider.

use egui::{Color32, Vec2};

/// Colors and geometry for [`crate::RangeHistogram`].
///
/// Defaults reproduce the indigo-on-gray look the widget shipped with; every
/// field is public so callers can restyle freely or derive values from the
/// current [`egui::Visuals`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramStyle {
    /// Width of one bucket bar, in points.
    pub bar_width: f32,
    /// Horizontal gap between neighboring bars.
    pub bar_gap: f32,
    /// Height of the bar area.
    pub bar_height: f32,
    /// Full-sample bars, and the track outside the selected span.
    pub neutral_color: Color32,
    /// Filtered-subset bars, active boundary labels, and the selected track
    /// span while a filter is applied.
    pub accent_color: Color32,
    /// The selected track span when the full range is selected.
    pub accent_idle_color: Color32,
    /// Backdrop behind the focused bucket.
    pub focus_color: Color32,
    /// Boundary labels at rest, and the single-value readout.
    pub label_color: Color32,
    /// Slider thumb fill.
    pub thumb_color: Color32,
    /// Thickness of the slider track.
    pub track_height: f32,
    /// Size of one triangular slider thumb.
    pub thumb_size: Vec2,
    /// Font size of the boundary labels.
    pub label_size: f32,
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            bar_width: 4.0,
            bar_gap: 2.0,
            bar_height: 30.0,
            neutral_color: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            accent_color: Color32::from_rgb(0x63, 0x66, 0xF1),
            accent_idle_color: Color32::from_rgb(0xA5, 0xB4, 0xFB),
            focus_color: Color32::from_rgb(0xE0, 0xE7, 0xFF),
            label_color: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            thumb_color: Color32::from_rgb(0x81, 0x8C, 0xF8),
            track_height: 3.0,
            thumb_size: Vec2::new(10.0, 7.0),
            label_size: 12.0,
        }
    }
}

impl HistogramStyle {
    /// Horizontal pitch of one bucket: bar plus gap.
    pub fn bar_pitch(&self) -> f32 {
        self.bar_width + self.bar_gap
    }

    /// Width the bar row occupies for `buckets` buckets.
    pub fn bars_width(&self, buckets: usize) -> f32 {
        buckets as f32 * self.bar_pitch()
    }
}
