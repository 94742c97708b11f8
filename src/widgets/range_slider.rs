//! Dual-thumb range slider.
//!
//! Generic over any `[min, max]` interval; the histogram drives it with
//! percentages but nothing in here knows about buckets. Both thumbs drag
//! independently and cannot cross, and the filled span between them can be
//! dragged as a whole, carrying the selection width along unchanged.

use egui::{pos2, vec2, Color32, CursorIcon, Rangef, Rect, Response, Sense, Ui, Vec2, Widget};

use crate::data::scale::LinearScale;

/// Vertical gap between the track and the thumbs hanging below it.
const THUMB_GAP: f32 = 2.0;

/// Extra points around a thumb that still count as hitting it.
const THUMB_HIT_PAD: f32 = 4.0;

/// Snap `value` onto the step grid anchored at `min`, clamped to
/// `[min, max]`. A step of zero disables snapping but still clamps.
///
/// ```
/// use rangehist::snap_to_step;
///
/// assert_eq!(snap_to_step(47.0, 0.0, 100.0, 10.0), 50.0);
/// assert_eq!(snap_to_step(104.0, 0.0, 100.0, 10.0), 100.0);
/// assert_eq!(snap_to_step(47.3, 0.0, 100.0, 0.0), 47.3);
/// ```
pub fn snap_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let v = if step > 0.0 {
        min + ((value - min) / step).round() * step
    } else {
        value
    };
    v.clamp(min, max)
}

/// Shift both values by `delta`, snapping the lower one to the step grid and
/// keeping the span width intact. The span never leaves `[min, max]`; at the
/// edges the outer value lands exactly on the bound.
pub fn translate_span(values: [f64; 2], delta: f64, min: f64, max: f64, step: f64) -> [f64; 2] {
    let span = (values[1] - values[0]).abs();
    let mut lo = snap_to_step(values[0] + delta, min, max, step);
    if lo + span > max {
        lo = max - span;
    }
    if lo < min {
        lo = min;
    }
    [lo, lo + span]
}

/// Clamp a new `value` for the thumb at `index` so the pair stays ordered:
/// the lower thumb stops at the upper one and the upper thumb stops at the
/// lower one, at worst collapsing the span to zero width.
///
/// ```
/// use rangehist::clamp_thumb;
///
/// assert_eq!(clamp_thumb([20.0, 60.0], 0, 45.0), 45.0);
/// assert_eq!(clamp_thumb([20.0, 60.0], 0, 75.0), 60.0);
/// assert_eq!(clamp_thumb([20.0, 60.0], 1, 5.0), 20.0);
/// ```
pub fn clamp_thumb(values: [f64; 2], index: usize, value: f64) -> f64 {
    if index == 0 {
        value.min(values[1])
    } else {
        value.max(values[0])
    }
}

/// State of an in-progress span drag, keyed by the widget id.
#[derive(Clone, Copy)]
struct SpanDrag {
    origin: [f64; 2],
    pointer_x: f32,
}

/// A horizontal slider with two thumbs bounding a selected span.
///
/// ```no_run
/// # egui::__run_test_ui(|ui| {
/// let mut positions = [25.0, 75.0];
/// let response = ui.add(
///     rangehist::RangeSlider::new(&mut positions, 0.0, 100.0)
///         .step(5.0)
///         .width(180.0),
/// );
/// if response.changed() {
///     // positions moved this frame
/// }
/// # });
/// ```
pub struct RangeSlider<'a> {
    values: &'a mut [f64; 2],
    min: f64,
    max: f64,
    step: f64,
    width: Option<f32>,
    track_height: f32,
    thumb_size: Vec2,
    neutral_color: Option<Color32>,
    fill_color: Option<Color32>,
    thumb_color: Option<Color32>,
    draggable_track: bool,
}

impl<'a> RangeSlider<'a> {
    /// Slider over `[min, max]` editing `values` in place. `values[0]` is
    /// the lower thumb and must not exceed `values[1]`.
    pub fn new(values: &'a mut [f64; 2], min: f64, max: f64) -> Self {
        Self {
            values,
            min,
            max,
            step: 0.0,
            width: None,
            track_height: 3.0,
            thumb_size: vec2(10.0, 7.0),
            neutral_color: None,
            fill_color: None,
            thumb_color: None,
            draggable_track: true,
        }
    }

    /// Snap thumb positions onto multiples of `step` from `min`. Zero
    /// disables snapping.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Exact widget width. Defaults to the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height;
        self
    }

    pub fn thumb_size(mut self, size: Vec2) -> Self {
        self.thumb_size = size;
        self
    }

    /// Track color outside the selected span.
    pub fn neutral_color(mut self, color: Color32) -> Self {
        self.neutral_color = Some(color);
        self
    }

    /// Track color of the selected span.
    pub fn fill_color(mut self, color: Color32) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn thumb_color(mut self, color: Color32) -> Self {
        self.thumb_color = Some(color);
        self
    }

    /// Whether dragging the filled span moves both thumbs together. On by
    /// default.
    pub fn draggable_track(mut self, on: bool) -> Self {
        self.draggable_track = on;
        self
    }
}

impl Widget for RangeSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let RangeSlider {
            values,
            min,
            max,
            step,
            width,
            track_height,
            thumb_size,
            neutral_color,
            fill_color,
            thumb_color,
            draggable_track,
        } = self;

        let width = width.unwrap_or_else(|| ui.available_width());
        let height = track_height + THUMB_GAP + thumb_size.y;
        let (rect, mut response) =
            ui.allocate_exact_size(vec2(width, height), Sense::hover());

        let neutral = neutral_color.unwrap_or(ui.visuals().widgets.inactive.bg_fill);
        let fill = fill_color.unwrap_or(ui.visuals().selection.bg_fill);
        let thumb = thumb_color.unwrap_or(ui.visuals().widgets.active.bg_fill);

        let half_thumb = thumb_size.x * 0.5;
        // Thumb centers travel inside this span so the triangles never spill
        // past the allocated rect.
        let lane = Rangef::new(rect.left() + half_thumb, rect.right() - half_thumb);
        let track_rect =
            Rect::from_min_max(rect.left_top(), pos2(rect.right(), rect.top() + track_height));

        if !(max > min) || lane.span() <= 0.0 {
            if ui.is_rect_visible(rect) {
                ui.painter()
                    .rect_filled(track_rect, egui::CornerRadius::same(1), neutral);
            }
            return response;
        }

        let px = LinearScale::new((min, max), (lane.min as f64, lane.max as f64));
        let thumb_center_y = track_rect.bottom() + THUMB_GAP + thumb_size.y * 0.5;
        let id = response.id;
        let mut changed = false;
        let mut thumb_dragged = [false; 2];

        // ── Span drag: move both thumbs, preserving the width ────────────

        let pre = *values;
        if draggable_track {
            let span_x = Rangef::new(
                (px.map(pre[0]) as f32 + half_thumb).clamp(lane.min, lane.max),
                (px.map(pre[1]) as f32 - half_thumb).clamp(lane.min, lane.max),
            );
            if span_x.span() > 0.0 {
                let span_rect = Rect::from_x_y_ranges(
                    span_x,
                    Rangef::new(rect.top(), track_rect.bottom() + THUMB_GAP),
                );
                let state_id = id.with("span");
                let span_response = ui
                    .interact(span_rect, state_id, Sense::drag())
                    .on_hover_cursor(CursorIcon::Grab);
                if span_response.drag_started() {
                    if let Some(pointer) = span_response.interact_pointer_pos() {
                        ui.data_mut(|d| {
                            d.insert_temp(
                                state_id,
                                SpanDrag {
                                    origin: pre,
                                    pointer_x: pointer.x,
                                },
                            )
                        });
                    }
                }
                if span_response.dragged() {
                    let start = ui.data(|d| d.get_temp::<SpanDrag>(state_id));
                    if let (Some(start), Some(pointer)) =
                        (start, span_response.interact_pointer_pos())
                    {
                        let per_point = (max - min) / lane.span() as f64;
                        let delta = (pointer.x - start.pointer_x) as f64 * per_point;
                        let moved = translate_span(start.origin, delta, min, max, step);
                        if moved != *values {
                            *values = moved;
                            changed = true;
                        }
                    }
                }
                if span_response.drag_stopped() {
                    ui.data_mut(|d| d.remove::<SpanDrag>(state_id));
                }
                response = response.union(span_response);
            }
        }

        // ── Thumb drags: absolute, snapped, non-crossing ─────────────────

        let grab_id = id.with("grab");
        for i in 0..2 {
            let cx = (px.map(pre[i]) as f32).clamp(lane.min, lane.max);
            let hit_rect = Rect::from_center_size(
                pos2(cx, thumb_center_y),
                thumb_size + Vec2::splat(THUMB_HIT_PAD),
            );
            let thumb_response = ui
                .interact(hit_rect, id.with(i), Sense::drag())
                .on_hover_cursor(CursorIcon::ResizeHorizontal);
            if thumb_response.drag_started() {
                // Stacked thumbs share one hit area; the pointer side at
                // grab time decides which of the two the gesture moves.
                let target = if pre[0] == pre[1] {
                    let left_of_stack = thumb_response
                        .interact_pointer_pos()
                        .map_or(false, |p| px.invert(p.x as f64) < pre[0]);
                    usize::from(!left_of_stack)
                } else {
                    i
                };
                ui.data_mut(|d| d.insert_temp(grab_id, target));
            }
            if thumb_response.dragged() {
                let target = ui.data(|d| d.get_temp::<usize>(grab_id)).unwrap_or(i);
                thumb_dragged[target] = true;
                if let Some(pointer) = thumb_response.interact_pointer_pos() {
                    let snapped = snap_to_step(px.invert(pointer.x as f64), min, max, step);
                    let v = clamp_thumb(*values, target, snapped);
                    if v != values[target] {
                        values[target] = v;
                        changed = true;
                    }
                }
            }
            if thumb_response.drag_stopped() {
                ui.data_mut(|d| d.remove::<usize>(grab_id));
            }
            response = response.union(thumb_response);
        }

        // ── Painting, with the values as updated this frame ──────────────

        if ui.is_rect_visible(rect) {
            let x0 = (px.map(values[0]) as f32).clamp(lane.min, lane.max);
            let x1 = (px.map(values[1]) as f32).clamp(lane.min, lane.max);
            let painter = ui.painter();
            painter.rect_filled(track_rect, egui::CornerRadius::same(1), neutral);
            if x1 > x0 {
                let span_rect = Rect::from_x_y_ranges(Rangef::new(x0, x1), track_rect.y_range());
                painter.rect_filled(span_rect, egui::CornerRadius::same(1), fill);
            }
            for i in 0..2 {
                let cx = (px.map(values[i]) as f32).clamp(lane.min, lane.max);
                let top = track_rect.bottom() + THUMB_GAP;
                let points = vec![
                    pos2(cx, top),
                    pos2(cx + half_thumb, top + thumb_size.y),
                    pos2(cx - half_thumb, top + thumb_size.y),
                ];
                let stroke = if thumb_dragged[i] {
                    ui.visuals().widgets.active.fg_stroke
                } else {
                    egui::Stroke::NONE
                };
                painter.add(egui::Shape::convex_polygon(points, thumb, stroke));
            }
        }

        if changed {
            response.mark_changed();
        }
        response
    }
}
