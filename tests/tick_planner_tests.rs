use plotter::core::{
    DEFAULT_X_TICK_DIVISOR, DEFAULT_Y_TICK_DIVISOR, MAX_TICKS_PER_AXIS, TickKind, TickPlan,
    plan_ticks,
};
use proptest::prelude::*;

fn decade_of(span: f64) -> f64 {
    10_f64.powf(span.log10().floor())
}

#[test]
fn default_viewport_on_default_plot_area() {
    // 300 px plot, span 20: x tolerance 5, y tolerance 7.5; both land on 5.
    let x = plan_ticks(20.0, 300.0, DEFAULT_X_TICK_DIVISOR).expect("x plan");
    let y = plan_ticks(20.0, 300.0, DEFAULT_Y_TICK_DIVISOR).expect("y plan");
    assert_eq!((x.major_step(), x.minor_subdivisions()), (5.0, 3));
    assert_eq!((y.major_step(), y.minor_subdivisions()), (5.0, 3));

    let ticks = x.ticks(-10.0, 10.0).expect("ticks");
    assert_eq!(ticks.len(), 17);
    assert_eq!(ticks.first().map(|tick| tick.index), Some(-8));
    assert_eq!(ticks.last().map(|tick| tick.index), Some(8));

    let majors: Vec<f64> = ticks
        .iter()
        .filter(|tick| tick.is_major())
        .map(|tick| tick.value)
        .collect();
    assert_eq!(majors, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
}

#[test]
fn ladder_minor_counts_follow_step_multiplier() {
    // Tolerance 1 forces step >= span; sweep spans across one decade.
    let cases = [
        (1.0, 1.0, 4),
        (1.5, 2.0, 3),
        (2.2, 2.5, 4),
        (4.0, 5.0, 3),
        (7.0, 10.0, 4),
    ];
    for (span, step, minor) in cases {
        let plan = plan_ticks(span, 1.0000001, 1.0).expect("plan");
        assert_eq!(plan.major_step(), step, "span {span}");
        assert_eq!(plan.minor_subdivisions(), minor, "span {span}");
    }
}

#[test]
fn minor_ticks_split_major_interval_evenly() {
    let plan = TickPlan::new(2.0, 3).expect("plan");
    let ticks = plan.ticks(0.0, 2.0).expect("ticks");
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    let kinds: Vec<TickKind> = ticks.iter().map(|tick| tick.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TickKind::Major,
            TickKind::Minor,
            TickKind::Minor,
            TickKind::Minor,
            TickKind::Major
        ]
    );
}

#[test]
fn negative_range_marks_majors_by_index() {
    let plan = TickPlan::new(1.0, 4).expect("plan");
    let ticks = plan.ticks(-1.3, -0.9).expect("ticks");
    let indices: Vec<i64> = ticks.iter().map(|tick| tick.index).collect();
    assert_eq!(indices, vec![-6, -5]);
    assert!(ticks[1].is_major());
    assert!(!ticks[0].is_major());
}

#[test]
fn empty_range_between_ticks_yields_nothing() {
    let plan = TickPlan::new(1.0, 4).expect("plan");
    assert!(plan.ticks(0.01, 0.1).expect("ticks").is_empty());
}

#[test]
fn runaway_tick_count_is_rejected() {
    let plan = TickPlan::new(1e-6, 4).expect("plan");
    assert!(plan.ticks(0.0, 1.0).is_err());
}

#[test]
fn invalid_plans_are_rejected() {
    assert!(TickPlan::new(0.0, 4).is_err());
    assert!(TickPlan::new(1.0, 0).is_err());
    assert!(plan_ticks(f64::NAN, 300.0, 60.0).is_err());
    assert!(plan_ticks(10.0, 0.0, 60.0).is_err());
    assert!(plan_ticks(10.0, 300.0, -1.0).is_err());
}

proptest! {
    #[test]
    fn planned_step_respects_tolerance_or_falls_back(
        span in 1e-6f64..1e6,
        plot_px in 50.0f64..4_000.0,
        divisor in prop_oneof![Just(DEFAULT_X_TICK_DIVISOR), Just(DEFAULT_Y_TICK_DIVISOR)],
    ) {
        let plan = plan_ticks(span, plot_px, divisor).expect("plan");
        let tolerance = plot_px / divisor;
        let fallback = 10.0 * decade_of(span);
        prop_assert!(
            span / plan.major_step() < tolerance
                || (plan.major_step() - fallback).abs() <= fallback * 1e-12
        );
        prop_assert!(plan.minor_subdivisions() == 3 || plan.minor_subdivisions() == 4);
    }

    #[test]
    fn generated_ticks_are_ascending_and_inside_view(
        view_min in -1_000.0f64..1_000.0,
        span in 1e-3f64..1e6,
        plot_px in 50.0f64..4_000.0,
    ) {
        let view_max = view_min + span;
        let plan = plan_ticks(span, plot_px, DEFAULT_X_TICK_DIVISOR).expect("plan");
        let ticks = plan.ticks(view_min, view_max).expect("ticks");
        prop_assert!(ticks.len() <= MAX_TICKS_PER_AXIS);

        let slack = 1e-9 * (span + view_min.abs() + view_max.abs());
        for tick in &ticks {
            prop_assert!(tick.value >= view_min - slack);
            prop_assert!(tick.value <= view_max + slack);
        }
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].value < pair[1].value);
            prop_assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }
}
