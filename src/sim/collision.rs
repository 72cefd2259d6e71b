//! Collision detection and response between shapes
//!
//! Collisions are edge-triggered. A shape entering a collision gets its
//! velocity captured and then multiplied by [`IMPULSE_FACTOR`]; while the
//! overlap lasts nothing else happens; once it overlaps nothing the shape
//! leaves with the negation of the captured velocity and its base color.

use super::bounds::Aabb;
use super::state::{CollisionState, Shape, SimEvent};
use crate::consts::{HIGHLIGHT_COLOR, IMPULSE_FACTOR};

/// Update velocities, colors and collision flags for every shape.
///
/// `shapes` and `states` are indexed together. Pairs are visited in index
/// order against the boxes as they stand after this tick's motion.
pub fn resolve_collisions(shapes: &mut [Shape], states: &mut [CollisionState]) -> Vec<SimEvent> {
    assert_eq!(
        shapes.len(),
        states.len(),
        "every shape needs exactly one collision state"
    );

    let boxes: Vec<Aabb> = shapes.iter().map(Shape::bounds).collect();
    let mut colliding = vec![false; shapes.len()];
    let mut impulsed = vec![false; shapes.len()];
    let mut events = Vec::new();

    for (i, j) in overlapping_pairs(&boxes) {
        colliding[i] = true;
        colliding[j] = true;

        if states[i].in_collision && states[j].in_collision {
            continue;
        }

        for k in [i, j] {
            enter_collision(&mut shapes[k], &mut states[k], !impulsed[k]);
            impulsed[k] = true;
        }
        events.push(SimEvent::CollisionStarted { a: i, b: j });
    }

    for (k, (shape, state)) in shapes.iter_mut().zip(states.iter_mut()).enumerate() {
        if state.in_collision && !colliding[k] {
            exit_collision(shape, state);
            events.push(SimEvent::CollisionEnded { shape: k });
        }
    }

    events
}

/// All index pairs `(i, j)` with `i < j` whose boxes overlap
pub fn overlapping_pairs(boxes: &[Aabb]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            if boxes[i].intersects(&boxes[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Rising edge for one participant.
///
/// The velocity is captured only on the first entry of an episode, before
/// the impulse touches it.
fn enter_collision(shape: &mut Shape, state: &mut CollisionState, apply_impulse: bool) {
    if !state.in_collision {
        state.saved_velocity = shape.vel;
        state.in_collision = true;
    }
    if apply_impulse {
        shape.vel *= IMPULSE_FACTOR;
    }
    shape.fill = HIGHLIGHT_COLOR;
}

/// Falling edge: bounce away from the captured heading
fn exit_collision(shape: &mut Shape, state: &mut CollisionState) {
    shape.vel = -state.saved_velocity;
    shape.fill = shape.color;
    state.in_collision = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;
    use glam::Vec2;

    const EPS: f32 = 1e-5;

    fn rect(name: &str, x: f32, y: f32, vel: Vec2) -> Shape {
        Shape::rectangle(name, Vec2::new(x, y), vel, Color::rgb(0, 128, 255), Vec2::splat(20.0))
    }

    fn states_for(shapes: &[Shape]) -> Vec<CollisionState> {
        shapes.iter().map(|s| CollisionState::new(s.vel)).collect()
    }

    #[test]
    fn test_rising_edge_impulses_both() {
        let mut shapes = vec![
            rect("A", 0.0, 0.0, Vec2::new(2.0, 1.0)),
            rect("B", 10.0, 10.0, Vec2::new(-1.0, 0.0)),
        ];
        let mut states = states_for(&shapes);

        let events = resolve_collisions(&mut shapes, &mut states);
        assert_eq!(events, vec![SimEvent::CollisionStarted { a: 0, b: 1 }]);

        assert!((shapes[0].vel - Vec2::new(-2.6, -1.3)).length() < EPS);
        assert!((shapes[1].vel - Vec2::new(1.3, 0.0)).length() < EPS);
        assert_eq!(states[0].saved_velocity, Vec2::new(2.0, 1.0));
        assert_eq!(states[1].saved_velocity, Vec2::new(-1.0, 0.0));
        assert!(states[0].in_collision && states[1].in_collision);
        assert_eq!(shapes[0].fill, HIGHLIGHT_COLOR);
        assert_eq!(shapes[1].fill, HIGHLIGHT_COLOR);
    }

    #[test]
    fn test_steady_overlap_is_left_alone() {
        let mut shapes = vec![
            rect("A", 0.0, 0.0, Vec2::new(2.0, 1.0)),
            rect("B", 10.0, 10.0, Vec2::new(-1.0, 0.0)),
        ];
        let mut states = states_for(&shapes);
        resolve_collisions(&mut shapes, &mut states);
        let after_first = (shapes[0].vel, shapes[1].vel);

        for _ in 0..4 {
            let events = resolve_collisions(&mut shapes, &mut states);
            assert!(events.is_empty());
        }
        assert_eq!((shapes[0].vel, shapes[1].vel), after_first);
        assert_eq!(states[0].saved_velocity, Vec2::new(2.0, 1.0));
        assert_eq!(shapes[0].fill, HIGHLIGHT_COLOR);
    }

    #[test]
    fn test_falling_edge_restores_negated_velocity_and_color() {
        let mut shapes = vec![
            rect("A", 0.0, 0.0, Vec2::new(2.0, 1.0)),
            rect("B", 10.0, 10.0, Vec2::new(-1.0, 0.0)),
        ];
        let mut states = states_for(&shapes);
        resolve_collisions(&mut shapes, &mut states);

        shapes[1].pos = Vec2::new(300.0, 300.0);
        let events = resolve_collisions(&mut shapes, &mut states);
        assert_eq!(
            events,
            vec![
                SimEvent::CollisionEnded { shape: 0 },
                SimEvent::CollisionEnded { shape: 1 }
            ]
        );
        assert_eq!(shapes[0].vel, Vec2::new(-2.0, -1.0));
        assert_eq!(shapes[1].vel, Vec2::new(1.0, 0.0));
        assert_eq!(shapes[0].fill, shapes[0].color);
        assert_eq!(shapes[1].fill, shapes[1].color);
        assert!(!states[0].in_collision && !states[1].in_collision);
    }

    #[test]
    fn test_bystander_is_untouched() {
        let mut shapes = vec![
            rect("A", 0.0, 0.0, Vec2::new(2.0, 1.0)),
            rect("B", 10.0, 10.0, Vec2::new(-1.0, 0.0)),
            rect("C", 200.0, 200.0, Vec2::new(3.0, 3.0)),
        ];
        let mut states = states_for(&shapes);
        resolve_collisions(&mut shapes, &mut states);
        assert_eq!(shapes[2].vel, Vec2::new(3.0, 3.0));
        assert_eq!(shapes[2].fill, shapes[2].color);
        assert!(!states[2].in_collision);
    }

    #[test]
    fn test_three_way_entry_impulses_each_shape_once() {
        let mut shapes = vec![
            rect("A", 10.0, 10.0, Vec2::new(1.0, 0.0)),
            rect("B", 0.0, 0.0, Vec2::new(0.0, 1.0)),
            rect("C", 20.0, 20.0, Vec2::new(-1.0, -1.0)),
        ];
        let mut states = states_for(&shapes);
        let events = resolve_collisions(&mut shapes, &mut states);

        assert_eq!(
            events,
            vec![
                SimEvent::CollisionStarted { a: 0, b: 1 },
                SimEvent::CollisionStarted { a: 0, b: 2 }
            ]
        );
        assert!((shapes[0].vel - Vec2::new(-1.3, 0.0)).length() < EPS);
        assert!((shapes[1].vel - Vec2::new(0.0, -1.3)).length() < EPS);
        assert!((shapes[2].vel - Vec2::new(1.3, 1.3)).length() < EPS);
        assert_eq!(states[0].saved_velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_newcomer_joins_running_collision() {
        let mut shapes = vec![
            rect("A", 0.0, 0.0, Vec2::new(1.0, 0.0)),
            rect("B", 10.0, 0.0, Vec2::new(-1.0, 0.0)),
            rect("C", 500.0, 500.0, Vec2::new(0.0, 2.0)),
        ];
        let mut states = states_for(&shapes);
        resolve_collisions(&mut shapes, &mut states);
        let saved_a = states[0].saved_velocity;

        shapes[2].pos = Vec2::new(5.0, 15.0);
        let events = resolve_collisions(&mut shapes, &mut states);
        assert!(events.contains(&SimEvent::CollisionStarted { a: 0, b: 2 }));
        // A keeps the velocity it had when its episode began
        assert_eq!(states[0].saved_velocity, saved_a);
        assert_eq!(states[2].saved_velocity, Vec2::new(0.0, 2.0));
        assert!((shapes[2].vel - Vec2::new(0.0, -2.6)).length() < EPS);
    }

    #[test]
    fn test_touching_shapes_do_not_collide() {
        let mut shapes = vec![
            rect("A", 0.0, 0.0, Vec2::new(1.0, 0.0)),
            rect("B", 20.0, 0.0, Vec2::new(-1.0, 0.0)),
        ];
        let mut states = states_for(&shapes);
        assert!(resolve_collisions(&mut shapes, &mut states).is_empty());
        assert_eq!(shapes[0].vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "collision state")]
    fn test_mismatched_lengths_panic() {
        let mut shapes = vec![rect("A", 0.0, 0.0, Vec2::ZERO)];
        let mut states = Vec::new();
        resolve_collisions(&mut shapes, &mut states);
    }
}
