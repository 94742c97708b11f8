use rangehist::{
    clamp_thumb, default_long_format, default_short_format, snap_to_step, translate_span,
    HistogramStyle, RangeHistogram,
};

#[test]
fn style_defaults_match_the_shipped_look() {
    let style = HistogramStyle::default();
    assert_eq!(style.bar_width, 4.0);
    assert_eq!(style.bar_gap, 2.0);
    assert_eq!(style.bar_height, 30.0);
    assert_eq!(style.track_height, 3.0);
    assert_eq!(style.thumb_size, egui::Vec2::new(10.0, 7.0));
    assert_eq!(style.neutral_color, egui::Color32::from_rgb(0xE5, 0xE7, 0xEB));
    assert_eq!(style.accent_color, egui::Color32::from_rgb(0x63, 0x66, 0xF1));
}

#[test]
fn bar_geometry_helpers_add_up() {
    let style = HistogramStyle::default();
    assert_eq!(style.bar_pitch(), 6.0);
    assert_eq!(style.bars_width(27), 162.0);
    assert_eq!(style.bars_width(0), 0.0);
}

#[test]
fn snapping_rounds_to_the_nearest_step() {
    assert_eq!(snap_to_step(47.0, 0.0, 100.0, 10.0), 50.0);
    assert_eq!(snap_to_step(44.9, 0.0, 100.0, 10.0), 40.0);
    assert_eq!(snap_to_step(45.0, 0.0, 100.0, 10.0), 50.0, "half rounds up");
}

#[test]
fn snapping_clamps_to_the_interval() {
    assert_eq!(snap_to_step(104.0, 0.0, 100.0, 10.0), 100.0);
    assert_eq!(snap_to_step(-3.0, 0.0, 100.0, 10.0), 0.0);
}

#[test]
fn snapping_honors_a_nonzero_anchor() {
    // grid anchored at the interval start, not at zero
    assert_eq!(snap_to_step(7.0, 1.0, 13.0, 3.0), 7.0);
    assert_eq!(snap_to_step(8.0, 1.0, 13.0, 3.0), 7.0);
    assert_eq!(snap_to_step(9.0, 1.0, 13.0, 3.0), 10.0);
}

#[test]
fn zero_step_disables_snapping_but_still_clamps() {
    assert_eq!(snap_to_step(47.3, 0.0, 100.0, 0.0), 47.3);
    assert_eq!(snap_to_step(147.3, 0.0, 100.0, 0.0), 100.0);
}

#[test]
fn span_translation_preserves_the_width() {
    let moved = translate_span([20.0, 40.0], 15.0, 0.0, 100.0, 10.0);
    assert_eq!(moved, [40.0, 60.0]);
}

#[test]
fn span_translation_clamps_at_the_edges() {
    let right = translate_span([80.0, 95.0], 20.0, 0.0, 100.0, 10.0);
    assert_eq!(right, [85.0, 100.0], "outer value lands exactly on the bound");

    let left = translate_span([5.0, 25.0], -30.0, 0.0, 100.0, 10.0);
    assert_eq!(left, [0.0, 20.0]);
}

#[test]
fn thumb_clamping_keeps_the_pair_ordered() {
    // an overshooting thumb lands exactly on its partner
    assert_eq!(clamp_thumb([20.0, 60.0], 0, 75.0), 60.0);
    assert_eq!(clamp_thumb([20.0, 60.0], 1, 5.0), 20.0);
    // in-order targets pass through untouched
    assert_eq!(clamp_thumb([20.0, 60.0], 0, 59.0), 59.0);
    assert_eq!(clamp_thumb([20.0, 60.0], 1, 99.0), 99.0);
    // meeting the partner exactly is allowed
    assert_eq!(clamp_thumb([20.0, 60.0], 0, 60.0), 60.0);
}

#[test]
fn snapped_overdrag_collapses_onto_the_partner_value() {
    // a thumb dragged far past its partner snaps, clamps, and stops there
    let snapped = snap_to_step(130.0, 0.0, 100.0, 10.0);
    assert_eq!(clamp_thumb([20.0, 60.0], 0, snapped), 60.0);
}

#[test]
fn short_format_is_compact() {
    assert_eq!(default_short_format(0.0), "0");
    assert_eq!(default_short_format(-0.0), "0");
    assert_eq!(default_short_format(42.0), "42");
    assert_eq!(default_short_format(2.5), "2.5");
    assert_eq!(default_short_format(3.14159), "3.14");
    assert_eq!(default_short_format(-1.204), "-1.2");
}

#[test]
fn short_format_switches_to_scientific_for_extremes() {
    assert_eq!(default_short_format(2_500_000.0), "2.50e6");
    assert_eq!(default_short_format(0.00002), "2.00e-5");
}

#[test]
fn long_format_keeps_more_precision() {
    assert_eq!(default_long_format(3.141592), "3.1416");
    assert_eq!(default_long_format(7.0), "7");
}

#[test]
fn builder_setters_chain_without_touching_the_selection() {
    let sample = [1.0, 2.0, 3.0];
    let visible = [2.0];
    let mut selection = Some((1.5, 2.5));
    let _widget = RangeHistogram::new(&sample, &visible, &mut selection)
        .focused_value(2.0)
        .max_width(300.0)
        .style(HistogramStyle::default())
        .short_format(|v| format!("{v:.1}"))
        .long_format(|v| format!("{v:.3}"));
    drop(_widget);
    assert_eq!(selection, Some((1.5, 2.5)));
}
