use egui::{pos2, vec2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Response};
use rangehist::RangeSlider;

// Helper: lay the slider out for one frame, feeding the given pointer
// events, and return its response. egui resolves pointer hits against the
// previous frame's rects, so every gesture needs a plain layout frame first.
fn slider_frame(ctx: &egui::Context, values: &mut [f64; 2], events: Vec<Event>) -> Response {
    let input = RawInput {
        events,
        ..Default::default()
    };
    let mut out = None;
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            out = Some(ui.add(RangeSlider::new(values, 0.0, 100.0).width(300.0)));
        });
    });
    out.unwrap()
}

// Helper: primary button press/release at a position
fn press(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::default(),
    }
}

fn release(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::default(),
    }
}

// Helper: screen x of a slider value; thumb centers travel half the default
// 10 pt thumb width inside the widget rect
fn value_x(rect: Rect, value: f64) -> f32 {
    let lane_min = rect.left() + 5.0;
    let lane_max = rect.right() - 5.0;
    lane_min + (value / 100.0) as f32 * (lane_max - lane_min)
}

#[test]
fn dragging_the_filled_span_translates_and_reports_the_gesture() {
    let ctx = egui::Context::default();
    let mut values = [25.0, 75.0];

    let rect = slider_frame(&ctx, &mut values, vec![]).rect;
    // mid-span, on the track row
    let grab = pos2(value_x(rect, 50.0), rect.top() + 2.0);

    let response = slider_frame(&ctx, &mut values, vec![press(grab)]);
    assert!(response.dragged(), "pressing the filled span starts a drag");

    let dest = grab + vec2(29.0, 0.0);
    let response = slider_frame(&ctx, &mut values, vec![Event::PointerMoved(dest)]);
    assert!(response.changed(), "moving the span rewrites the values");
    assert!(
        values[0] > 25.0 && values[1] > 75.0,
        "both values follow the pointer, got {values:?}"
    );
    assert!(
        (values[1] - values[0] - 50.0).abs() < 1e-9,
        "the span width survives the translation, got {values:?}"
    );

    let response = slider_frame(&ctx, &mut values, vec![release(dest)]);
    assert!(
        response.drag_stopped(),
        "releasing a span drag reports drag_stopped just like a thumb drag"
    );
}

#[test]
fn overdragged_thumb_stops_at_its_partner() {
    let ctx = egui::Context::default();
    let mut values = [20.0, 60.0];

    let rect = slider_frame(&ctx, &mut values, vec![]).rect;
    // default geometry: thumb centers sit 3.5 pt above the rect bottom
    let thumb_y = rect.bottom() - 3.5;
    let grab = pos2(value_x(rect, 20.0), thumb_y);

    let response = slider_frame(&ctx, &mut values, vec![press(grab)]);
    assert!(response.dragged(), "pressing a thumb starts a drag");

    // Drag the lower thumb far past the right edge of the widget.
    let dest = pos2(rect.right() + 50.0, thumb_y);
    slider_frame(&ctx, &mut values, vec![Event::PointerMoved(dest)]);
    assert_eq!(
        values,
        [60.0, 60.0],
        "the lower thumb stops at the upper one instead of crossing it"
    );

    let response = slider_frame(&ctx, &mut values, vec![release(dest)]);
    assert!(response.drag_stopped());
}
