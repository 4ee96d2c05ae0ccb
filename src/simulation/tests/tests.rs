use super::*;
use crate::domain::presets::PRESET_VELOCITIES;

fn sim_with(config: WorldConfig) -> SimulationCore {
    SimulationCore::with_seed(config, 42).expect("config should be valid")
}

fn default_sim() -> SimulationCore {
    sim_with(WorldConfig::default())
}

fn assert_stats_consistent(stats: &Statistics) {
    assert_eq!(stats.active_count() + stats.inert_count(), stats.current_count());
}

/// Records draw calls instead of painting
#[derive(Default)]
struct RecordingRenderer {
    clears: usize,
    circles: Vec<DrawCircle>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
    }

    fn draw(&mut self, circle: &DrawCircle) {
        self.circles.push(*circle);
    }
}

#[test]
fn rejects_invalid_config_at_construction() {
    let config = WorldConfig {
        max_bodies: 0,
        ..WorldConfig::default()
    };
    assert!(matches!(
        SimulationCore::with_seed(config, 1),
        Err(ConfigError::ZeroCapacity)
    ));
}

#[test]
fn spawn_respects_capacity() {
    let mut sim = sim_with(WorldConfig {
        max_bodies: 1,
        ..WorldConfig::default()
    });

    assert!(sim.spawn());
    assert_eq!(sim.total_spawned(), 1);
    assert!(!sim.spawn());
    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.total_spawned(), 1);
}

#[test]
fn spawn_is_a_no_op_with_autospawn_off() {
    let mut sim = default_sim();
    sim.set_autospawn(false);
    assert!(!sim.spawn());
    assert_eq!(sim.body_count(), 0);
    assert_eq!(sim.total_spawned(), 0);
}

#[test]
fn spawned_bodies_are_inside_the_world_with_preset_velocity() {
    let mut sim = sim_with(WorldConfig {
        max_bodies: 500,
        ..WorldConfig::default()
    });
    for _ in 0..300 {
        sim.spawn();
    }

    let config = sim.config().clone();
    for body in sim.bodies() {
        let r = body.radius();
        assert_eq!(r, config.default_radius);
        assert!(body.x - r >= 0.0 && body.x + r <= config.world_size);
        assert!(body.y - r >= 0.0 && body.y + r <= config.world_size);
        assert!(PRESET_VELOCITIES.contains(&body.velocity()));
    }
}

#[test]
fn gravity_spawns_start_in_the_upper_half() {
    let mut sim = sim_with(WorldConfig {
        gravity_enabled: true,
        max_bodies: 500,
        ..WorldConfig::default()
    });
    for _ in 0..300 {
        sim.spawn();
    }

    let half = sim.config().center();
    for body in sim.bodies() {
        assert!(body.y - body.radius() >= 0.0);
        assert!(body.y <= half, "y = {}", body.y);
    }
}

#[test]
fn autoclear_removes_the_single_inert_body() {
    let mut sim = default_sim();
    sim.bodies_mut().push(Body::new(100.0, 100.0, 0.0, 0.0, 10.0));

    assert_eq!(sim.autoclear(), 1);
    assert_eq!(sim.body_count(), 0);
    assert_eq!(sim.removed_count(), 1);
}

#[test]
fn autoclear_inspects_adjacent_inert_bodies() {
    let mut sim = default_sim();
    let bodies = sim.bodies_mut();
    bodies.push(Body::new(100.0, 100.0, 0.0, 0.0, 10.0));
    bodies.push(Body::new(120.0, 100.0, 0.0, 0.0, 10.0));
    bodies.push(Body::new(140.0, 100.0, 1.0, 0.0, 10.0));
    bodies.push(Body::new(160.0, 100.0, 0.0, 0.0, 10.0));
    bodies.push(Body::new(180.0, 100.0, 0.0, 0.0, 10.0));

    assert_eq!(sim.autoclear(), 4);
    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.bodies()[0].x, 140.0);
    assert_eq!(sim.removed_count(), 4);
}

#[test]
fn autoclear_trims_oldest_down_to_capacity() {
    let mut sim = sim_with(WorldConfig {
        max_bodies: 3,
        ..WorldConfig::default()
    });
    for i in 0..5 {
        sim.bodies_mut().push(Body::new(50.0 + i as f32 * 30.0, 100.0, 1.0, 1.0, 10.0));
    }

    assert_eq!(sim.autoclear(), 2);
    let xs: Vec<f32> = sim.bodies().iter().map(|b| b.x).collect();
    assert_eq!(xs, vec![110.0, 140.0, 170.0]);
    assert_eq!(sim.removed_count(), 2);
}

#[test]
fn autoclear_disabled_keeps_everything() {
    let mut sim = default_sim();
    sim.set_autoclear(false);
    sim.bodies_mut().push(Body::new(100.0, 100.0, 0.0, 0.0, 10.0));

    assert_eq!(sim.autoclear(), 0);
    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.removed_count(), 0);
}

#[test]
fn autoclear_is_idempotent_on_a_healthy_population() {
    let mut sim = default_sim();
    for _ in 0..10 {
        sim.spawn();
    }
    let before = sim.bodies().to_vec();
    let stats_before = sim.recompute_statistics();

    assert_eq!(sim.autoclear(), 0);
    assert_eq!(sim.autoclear(), 0);
    assert_eq!(sim.bodies(), before.as_slice());
    assert_eq!(sim.recompute_statistics(), stats_before);
}

#[test]
fn spawn_ring_ignores_capacity_and_autospawn() {
    let mut sim = sim_with(WorldConfig {
        max_bodies: 1,
        ..WorldConfig::default()
    });
    sim.set_autospawn(false);
    sim.spawn_ring();

    assert_eq!(sim.body_count(), 16);
    assert_eq!(sim.total_spawned(), 16);
    let c = sim.config().center();
    for (body, preset) in sim.bodies().iter().zip(PRESET_VELOCITIES.iter()) {
        assert_eq!((body.x, body.y), (c, c));
        assert_eq!(body.velocity(), *preset);
    }
}

#[test]
fn spawn_tick_spawns_before_clearing() {
    let mut sim = sim_with(WorldConfig {
        max_bodies: 2,
        ..WorldConfig::default()
    });
    sim.bodies_mut().push(Body::new(100.0, 100.0, 0.0, 0.0, 10.0));
    sim.bodies_mut().push(Body::new(200.0, 100.0, 1.0, 0.0, 10.0));

    // At capacity: the spawn is refused even though autoclear then frees a slot
    sim.spawn_tick();
    assert_eq!(sim.total_spawned(), 0);
    assert_eq!(sim.body_count(), 1);

    sim.spawn_tick();
    assert_eq!(sim.total_spawned(), 1);
    assert_eq!(sim.body_count(), 2);
}

#[test]
fn center_keeps_velocities_and_uses_the_box() {
    let mut sim = default_sim();
    sim.spawn_ring();
    let velocities: Vec<(f32, f32)> = sim.bodies().iter().map(|b| b.velocity()).collect();

    sim.set_all_positions(PositionPolicy::Center);
    let c = sim.config().center();
    for (body, v) in sim.bodies().iter().zip(velocities) {
        assert!(body.x >= c - 50.0 && body.x <= c + 50.0);
        assert!(body.y >= c - 50.0 && body.y <= c + 50.0);
        assert_eq!(body.velocity(), v);
    }
}

#[test]
fn scatter_covers_the_legal_region() {
    let mut sim = default_sim();
    for _ in 0..4 {
        sim.spawn_ring();
    }
    sim.set_all_positions(PositionPolicy::Scatter);

    let config = sim.config().clone();
    let c = config.center();
    let mut outside_center_box = 0;
    for body in sim.bodies() {
        assert!(body.x - body.radius() >= 0.0 && body.x + body.radius() <= config.world_size);
        assert!(body.y - body.radius() >= 0.0 && body.y + body.radius() <= config.world_size);
        if (body.x - c).abs() > 50.0 || (body.y - c).abs() > 50.0 {
            outside_center_box += 1;
        }
    }
    assert!(outside_center_box > 0);
}

#[test]
fn statistics_balance_for_every_state() {
    let mut sim = default_sim();

    let empty = sim.recompute_statistics();
    assert_stats_consistent(&empty);
    assert_eq!(empty.current_count(), 0);
    assert_eq!(empty.max_bodies(), 100);

    sim.spawn_ring();
    sim.bodies_mut()[3].dx = 0.0;
    sim.bodies_mut()[3].dy = 0.0;
    let mixed = sim.recompute_statistics();
    assert_stats_consistent(&mixed);
    assert_eq!(mixed.current_count(), 16);
    assert_eq!(mixed.inert_count(), 1);
    assert_eq!(mixed.active_count(), 15);

    sim.autoclear();
    let after = sim.recompute_statistics();
    assert_stats_consistent(&after);
    assert_eq!(after.removed_count(), 1);
    assert_eq!(after.total_spawned(), 16);
    assert_eq!(sim.last_statistics(), after);
}

#[test]
fn statistics_serialize_camel_case() {
    let mut sim = default_sim();
    sim.spawn_ring();
    let json = sim.recompute_statistics().to_json();
    assert!(json.contains("\"totalSpawned\":16"));
    assert!(json.contains("\"currentCount\":16"));
    assert!(json.contains("\"maxBodies\":100"));
}

#[test]
fn frame_clears_then_steps_and_draws_every_body() {
    let mut sim = default_sim();
    sim.spawn_ring();
    sim.bodies_mut().push(Body::new(300.0, 300.0, 0.0, 0.0, 10.0));
    let before: Vec<Body> = sim.bodies().to_vec();

    let mut renderer = RecordingRenderer::default();
    sim.frame_with(&mut renderer);

    assert_eq!(renderer.clears, 1);
    assert_eq!(renderer.circles.len(), 17);
    assert_eq!(sim.frame(), 1);
    for ((circle, old), new) in renderer.circles.iter().zip(&before).zip(sim.bodies()) {
        assert_eq!((circle.x, circle.y), (new.x, new.y));
        assert_eq!(new.x, old.x + new.dx);
        assert_eq!(circle.radius, 10.0);
        assert_eq!(circle.stroke, "#FFFFFF");
        assert_eq!(circle.stroke_width, 2.0);
    }
    assert_eq!(renderer.circles[0].fill, "#BBBBBB");
    assert_eq!(renderer.circles[16].fill, "#DD8888");
}

#[test]
fn toggles_flip_config_and_report_labels() {
    let mut sim = default_sim();
    assert_eq!(sim.toggle_gravity(), "Gravity: ON");
    assert!(sim.config().gravity_enabled);
    assert_eq!(sim.toggle_gravity(), "Gravity: OFF");
    assert_eq!(sim.toggle_autospawn(), "Autospawn: OFF");
    assert_eq!(sim.toggle_autoclear(), "Autoclear: OFF");
    assert_eq!(sim.set_autoclear(true), "Autoclear: ON");
}

#[test]
fn set_max_bodies_rejects_zero() {
    let mut sim = default_sim();
    assert!(matches!(sim.set_max_bodies(0), Err(ConfigError::ZeroCapacity)));
    assert_eq!(sim.config().max_bodies, 100);
    assert!(sim.set_max_bodies(7).is_ok());
    assert_eq!(sim.recompute_statistics().max_bodies(), 7);
}

#[test]
fn clear_counts_removals() {
    let mut sim = default_sim();
    sim.spawn_ring();
    sim.clear();
    assert_eq!(sim.body_count(), 0);
    assert_eq!(sim.removed_count(), 16);
    assert_eq!(sim.total_spawned(), 16);
}

#[test]
fn drawable_buffer_is_packed_per_body() {
    let mut sim = default_sim();
    sim.bodies_mut().push(Body::new(10.0, 20.0, 1.0, 0.0, 10.0));
    sim.bodies_mut().push(Body::new(30.0, 40.0, 0.0, 0.0, 10.0));

    assert_eq!(sim.extract_drawables(), 2);
    assert_eq!(sim.drawables().len(), 2 * DRAWABLE_STRIDE);
    assert_eq!(sim.drawables(), &[10.0, 20.0, 10.0, 0.0, 30.0, 40.0, 10.0, 1.0]);

    sim.clear();
    assert_eq!(sim.extract_drawables(), 0);
    assert!(sim.drawables().is_empty());
}

#[test]
fn counters_never_decrease_over_a_long_run() {
    let mut sim = sim_with(WorldConfig {
        gravity_enabled: true,
        max_bodies: 20,
        ..WorldConfig::default()
    });

    let mut last = sim.recompute_statistics();
    for frame in 0..6000 {
        sim.advance();
        if frame % 60 == 0 {
            sim.spawn_tick();
        }
        if frame % 6 == 0 {
            let stats = sim.recompute_statistics();
            assert_stats_consistent(&stats);
            assert!(stats.total_spawned() >= last.total_spawned());
            assert!(stats.removed_count() >= last.removed_count());
            assert!(stats.current_count() <= 20);
            last = stats;
        }
    }
    assert!(last.total_spawned() > 0);
}
