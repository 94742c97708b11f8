//! The composed histogram widget: distribution bars, overlay bars, range
//! slider and boundary labels.
//!
//! The widget is stateless; the caller owns the selection and both samples
//! and passes them in every frame. Filtering itself happens caller-side,
//! which keeps the widget usable for cross-filtered tables where each
//! column's subset depends on every other column's selection.

use egui::{pos2, vec2, Rect, Response, RichText, Sense, Ui, Vec2, Widget};

use crate::data::format::{default_long_format, default_short_format};
use crate::data::model::{DistributedModel, HistogramModel};
use crate::style::HistogramStyle;
use crate::widgets::range_slider::RangeSlider;

/// An interactive histogram of a numeric sample with a dual-thumb slider for
/// selecting a value range.
///
/// Three inputs drive it: the full sample (which fixes the buckets and the
/// bar heights), the filtered subset (drawn as an overlay in the accent
/// color over the same buckets), and the current selection. When the user
/// moves the slider the selection is written back through the `&mut` borrow
/// and the returned [`Response`] reports
/// [`changed`](egui::Response::changed) on every frame the positions move;
/// callers that only care about the completed gesture can check
/// [`drag_stopped`](egui::Response::drag_stopped) instead. Dragging both
/// thumbs to the extremes clears the selection to `None` rather than pinning
/// it to the sample extent.
///
/// Degenerate samples degrade instead of failing: an empty sample draws
/// nothing, and a sample whose values are all equal draws a single text
/// readout of that value.
///
/// ```no_run
/// # egui::__run_test_ui(|ui| {
/// # let sample: Vec<f64> = (0..100).map(|i| (i % 13) as f64).collect();
/// # let visible = sample.clone();
/// let mut selection: Option<(f64, f64)> = None;
/// let response = ui.add(
///     rangehist::RangeHistogram::new(&sample, &visible, &mut selection).max_width(300.0),
/// );
/// if response.changed() {
///     // re-filter `visible` from `selection` before the next frame
/// }
/// # });
/// ```
pub struct RangeHistogram<'a> {
    original: &'a [f64],
    filtered: &'a [f64],
    selection: &'a mut Option<(f64, f64)>,
    focused_value: Option<f64>,
    max_width: Option<f32>,
    style: HistogramStyle,
    short_format: Option<Box<dyn Fn(f64) -> String + 'a>>,
    long_format: Option<Box<dyn Fn(f64) -> String + 'a>>,
}

impl<'a> RangeHistogram<'a> {
    /// Histogram of `original` with `filtered` overlaid, editing `selection`
    /// in place.
    pub fn new(
        original: &'a [f64],
        filtered: &'a [f64],
        selection: &'a mut Option<(f64, f64)>,
    ) -> Self {
        Self {
            original,
            filtered,
            selection,
            focused_value: None,
            max_width: None,
            style: HistogramStyle::default(),
            short_format: None,
            long_format: None,
        }
    }

    /// Highlight the bucket containing `value`, e.g. for the table row under
    /// the pointer. Values outside every bucket highlight nothing.
    pub fn focused_value(mut self, value: f64) -> Self {
        self.focused_value = Some(value);
        self
    }

    /// Horizontal space the bars may use, in points. More width means more
    /// buckets; without a hint the partition targets
    /// [`crate::DEFAULT_BUCKET_TARGET`] buckets.
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn style(mut self, style: HistogramStyle) -> Self {
        self.style = style;
        self
    }

    /// Formatter for the two boundary labels under the slider.
    pub fn short_format(mut self, format: impl Fn(f64) -> String + 'a) -> Self {
        self.short_format = Some(Box::new(format));
        self
    }

    /// Formatter for the single-value readout shown when the whole sample
    /// is one repeated value.
    pub fn long_format(mut self, format: impl Fn(f64) -> String + 'a) -> Self {
        self.long_format = Some(Box::new(format));
        self
    }
}

impl Widget for RangeHistogram<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let RangeHistogram {
            original,
            filtered,
            selection,
            focused_value,
            max_width,
            style,
            short_format,
            long_format,
        } = self;

        let model =
            HistogramModel::compute(original, filtered, *selection, focused_value, max_width);

        match model {
            HistogramModel::Empty => {
                let (_, response) = ui.allocate_exact_size(Vec2::ZERO, Sense::hover());
                response
            }
            HistogramModel::SingleValue(value) => {
                let text = match &long_format {
                    Some(format) => format(value),
                    None => default_long_format(value),
                };
                ui.label(RichText::new(text).color(style.label_color))
            }
            HistogramModel::Distributed(model) => {
                let fmt_short = |v: f64| match &short_format {
                    Some(format) => format(v),
                    None => default_short_format(v),
                };
                show_distributed(ui, &model, selection, &style, &fmt_short)
            }
        }
    }
}

fn show_distributed(
    ui: &mut Ui,
    model: &DistributedModel,
    selection: &mut Option<(f64, f64)>,
    style: &HistogramStyle,
    fmt_short: &dyn Fn(f64) -> String,
) -> Response {
    let n = model.buckets.len();
    let row_width = style.bars_width(n);
    let mut positions = model.range_positions;
    let mut changed = false;

    let inner = ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 4.0;
        let mut response: Option<Response> = None;

        // A lone bucket carries no range information, so the bars and the
        // slider are suppressed and only the boundary labels remain.
        if n > 1 {
            let (bar_rect, bar_response) =
                ui.allocate_exact_size(vec2(row_width, style.bar_height), Sense::hover());
            if ui.is_rect_visible(bar_rect) {
                paint_bars(ui, bar_rect, model, style);
            }

            let fill = if model.is_filtered {
                style.accent_color
            } else {
                style.accent_idle_color
            };
            let slider_response = ui.add(
                RangeSlider::new(&mut positions, 0.0, 100.0)
                    .step(model.step_size)
                    .width(row_width)
                    .track_height(style.track_height)
                    .thumb_size(style.thumb_size)
                    .neutral_color(style.neutral_color)
                    .fill_color(fill)
                    .thumb_color(style.thumb_color),
            );
            if slider_response.changed() {
                changed = true;
            }
            response = Some(bar_response.union(slider_response));
        }

        let label_response = show_labels(ui, model, positions, style, fmt_short, n, row_width);
        match response {
            Some(r) => r.union(label_response),
            None => label_response,
        }
    });

    let mut response = inner.inner;
    if changed {
        *selection = model.selection_from_positions(positions);
        response.mark_changed();
    }
    response
}

fn paint_bars(ui: &Ui, rect: Rect, model: &DistributedModel, style: &HistogramStyle) {
    let painter = ui.painter();
    for (i, bucket) in model.buckets.iter().enumerate() {
        let left = rect.left() + i as f32 * style.bar_pitch();

        if model.focused_bucket == Some(i) {
            let focus_rect = Rect::from_min_max(
                pos2(left - 1.0, rect.top() - 3.0),
                pos2(left + style.bar_width + 1.0, rect.bottom()),
            );
            painter.rect_filled(focus_rect, egui::CornerRadius::same(2), style.focus_color);
        }

        let full = bar_px(model.y_scale.map(bucket.count as f64), style);
        if full > 0.0 {
            let bar = Rect::from_min_max(
                pos2(left, rect.bottom() - full),
                pos2(left + style.bar_width, rect.bottom()),
            );
            painter.rect_filled(bar, egui::CornerRadius::same(1), style.neutral_color);
        }

        let overlay = bar_px(model.y_scale.map(model.filtered_counts[i] as f64), style);
        if overlay > 0.0 {
            let bar = Rect::from_min_max(
                pos2(left, rect.bottom() - overlay),
                pos2(left + style.bar_width, rect.bottom()),
            );
            painter.rect_filled(bar, egui::CornerRadius::same(1), style.accent_color);
        }
    }
}

fn bar_px(percent: f64, style: &HistogramStyle) -> f32 {
    (percent / 100.0) as f32 * style.bar_height
}

fn show_labels(
    ui: &mut Ui,
    model: &DistributedModel,
    positions: [f64; 2],
    style: &HistogramStyle,
    fmt_short: &dyn Fn(f64) -> String,
    buckets: usize,
    row_width: f32,
) -> Response {
    let font = egui::FontId::proportional(style.label_size);
    let left_color = if positions[0] != 0.0 {
        style.accent_color
    } else {
        style.label_color
    };
    let right_color = if positions[1] != 100.0 {
        style.accent_color
    } else {
        style.label_color
    };
    let left_galley = ui.painter().layout_no_wrap(
        fmt_short(model.x_scale.invert(positions[0])),
        font.clone(),
        left_color,
    );
    let right_galley = ui.painter().layout_no_wrap(
        fmt_short(model.x_scale.invert(positions[1])),
        font,
        right_color,
    );

    let natural = left_galley.size().x + right_galley.size().x + 8.0;
    let width = if buckets > 1 {
        row_width.max(natural)
    } else {
        natural
    };
    let height = left_galley.size().y.max(right_galley.size().y);
    let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let right_x = rect.right() - right_galley.size().x;
        painter.galley(rect.left_top(), left_galley, left_color);
        painter.galley(pos2(right_x, rect.top()), right_galley, right_color);
    }
    response
}
