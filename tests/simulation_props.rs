//! Property tests for the simulation.
//!
//! Random scenes are stepped through the public tick pipeline and checked
//! against the invariants that must hold after every tick.

use bouncing_shapes::layout::{TextBounds, center_label};
use bouncing_shapes::sim::{
    Aabb, Color, CollisionState, Shape, SimEvent, SimState, TickInput, integrate, resolve_collisions, tick,
};
use glam::Vec2;
use proptest::prelude::*;

/// Finite coordinates in a sane range
fn finite_f32(min: i32, max: i32) -> impl Strategy<Value = f32> + Clone {
    (min * 100..max * 100).prop_map(|v| v as f32 * 0.01)
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let pos = (finite_f32(0, 600), finite_f32(0, 400)).prop_map(|(x, y)| Vec2::new(x, y));
    let vel = (finite_f32(-15, 15), finite_f32(-15, 15)).prop_map(|(x, y)| Vec2::new(x, y));
    prop_oneof![
        (pos.clone(), vel.clone(), finite_f32(5, 120), finite_f32(5, 120))
            .prop_map(|(pos, vel, w, h)| Shape::rectangle("R", pos, vel, Color::WHITE, Vec2::new(w, h))),
        (pos, vel, finite_f32(3, 60)).prop_map(|(pos, vel, r)| Shape::circle("C", pos, vel, Color::WHITE, r)),
    ]
}

fn in_bounds(shape: &Shape, canvas: Vec2) -> bool {
    let extent = shape.geometry.extent();
    let max = (canvas - extent).max(Vec2::ZERO) + Vec2::splat(1e-3);
    shape.pos.x >= 0.0 && shape.pos.y >= 0.0 && shape.pos.x <= max.x && shape.pos.y <= max.y
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn integrator_keeps_shapes_on_canvas(
        mut shape in shape_strategy(),
        width in 200u32..1000,
        height in 200u32..1000,
        steps in 1usize..200,
    ) {
        let canvas = Vec2::new(width as f32, height as f32);
        for _ in 0..steps {
            integrate(&mut shape, canvas);
            prop_assert!(in_bounds(&shape, canvas), "{:?} escaped {:?}", shape.pos, canvas);
        }
    }

    #[test]
    fn integrator_preserves_speed(mut shape in shape_strategy(), steps in 1usize..100) {
        let canvas = Vec2::new(800.0, 600.0);
        let speed = shape.vel.abs();
        for _ in 0..steps {
            integrate(&mut shape, canvas);
        }
        prop_assert_eq!(shape.vel.abs(), speed);
    }

    #[test]
    fn collision_flags_match_highlight(
        shapes in prop::collection::vec(shape_strategy(), 0..8),
        ticks in 1usize..120,
    ) {
        let mut state = SimState::new(800, 600, shapes);
        let input = TickInput::default();
        for _ in 0..ticks {
            tick(&mut state, &input);
            prop_assert_eq!(state.shapes.len(), state.collisions.len());
            for (shape, flags) in state.shapes.iter().zip(&state.collisions) {
                if flags.in_collision {
                    prop_assert_eq!(shape.fill, Color::RED);
                } else {
                    prop_assert_eq!(shape.fill, shape.color);
                }
            }
        }
    }

    #[test]
    fn collision_start_flags_both_shapes(shapes in prop::collection::vec(shape_strategy(), 2..8)) {
        let mut shapes = shapes;
        let mut states: Vec<CollisionState> = shapes.iter().map(|s| CollisionState::new(s.vel)).collect();
        let events = resolve_collisions(&mut shapes, &mut states);
        for event in events {
            if let SimEvent::CollisionStarted { a, b } = event {
                prop_assert!(a < b);
                prop_assert!(states[a].in_collision && states[b].in_collision);
                prop_assert!(shapes[a].bounds().intersects(&shapes[b].bounds()));
                prop_assert!(shapes[b].bounds().intersects(&shapes[a].bounds()));
            }
        }
    }

    #[test]
    fn label_layout_is_pure(
        x in finite_f32(-500, 500),
        y in finite_f32(-500, 500),
        w in finite_f32(1, 300),
        h in finite_f32(1, 300),
        left in finite_f32(0, 5),
        top in finite_f32(0, 20),
        tw in finite_f32(0, 200),
        th in finite_f32(0, 40),
    ) {
        let shape = Aabb::new(Vec2::new(x, y), Vec2::new(w, h));
        let text = TextBounds { left, top, width: tw, height: th };
        let origin = center_label(shape, text);
        prop_assert_eq!(origin, center_label(shape, text));

        let ink_center = origin + Vec2::new(left + tw / 2.0, top + th / 2.0);
        prop_assert!((ink_center - shape.center()).length() < 1e-2);
    }
}

/// Two shapes sliding vertically past each other overlap for many ticks
/// but are only kicked once.
#[test]
fn single_impulse_per_overlap_episode() {
    let shapes = vec![
        Shape::rectangle("A", Vec2::new(100.0, 100.0), Vec2::new(0.0, 1.0), Color::WHITE, Vec2::splat(20.0)),
        Shape::rectangle("B", Vec2::new(110.0, 100.0), Vec2::new(0.0, 2.0), Color::WHITE, Vec2::splat(20.0)),
    ];
    let mut state = SimState::new(1000, 1000, shapes);
    let input = TickInput::default();

    let events = tick(&mut state, &input);
    assert_eq!(events, vec![SimEvent::CollisionStarted { a: 0, b: 1 }]);
    assert!((state.shapes[0].vel.y + 1.3).abs() < 1e-5);
    assert!((state.shapes[1].vel.y + 2.6).abs() < 1e-5);

    let mut ended_at = None;
    for n in 2..=40 {
        let events = tick(&mut state, &input);
        assert!(
            !events.iter().any(|e| matches!(e, SimEvent::CollisionStarted { .. })),
            "second impulse at tick {n}"
        );
        if !events.is_empty() {
            ended_at = Some(n);
            break;
        }
        assert!((state.shapes[0].vel.y + 1.3).abs() < 1e-5);
        assert_eq!(state.shapes[0].fill, Color::RED);
    }

    assert_eq!(ended_at, Some(18));
    assert_eq!(state.shapes[0].vel, Vec2::new(0.0, -1.0));
    assert_eq!(state.shapes[1].vel, Vec2::new(0.0, -2.0));
    assert_eq!(state.shapes[0].fill, Color::WHITE);
    assert!(!state.collisions[0].in_collision);
    assert!(!state.collisions[1].in_collision);
}
