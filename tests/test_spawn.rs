use fresh_catch::entities::*;
use fresh_catch::spawn::*;
use fresh_catch::GameConfig;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn no_spawn_until_interval_elapsed() {
    let c = GameConfig::default();
    let mut rng = seeded_rng();
    let mut s = SpawnController::new(1000, 0);
    assert!(s.maybe_spawn(500, &c, &mut rng).is_none());
    // Exactly one interval is not enough; it must be exceeded
    assert!(s.maybe_spawn(1000, &c, &mut rng).is_none());
    assert!(s.maybe_spawn(1001, &c, &mut rng).is_some());
    assert_eq!(s.last_spawn_ms, 1001);
    assert!(s.maybe_spawn(1500, &c, &mut rng).is_none());
}

#[test]
fn clock_going_backwards_never_spawns() {
    let c = GameConfig::default();
    let mut rng = seeded_rng();
    let mut s = SpawnController::new(1000, 5000);
    assert!(s.maybe_spawn(10, &c, &mut rng).is_none());
    assert_eq!(s.last_spawn_ms, 5000);
}

#[test]
fn spawned_items_start_above_field_within_bounds() {
    let c = GameConfig::default();
    let mut rng = seeded_rng();
    for _ in 0..1_000 {
        let item = spawn_item(&c, &mut rng);
        assert_eq!(item.y, -c.item_size);
        assert_eq!(item.width, c.item_size);
        assert_eq!(item.height, c.item_size);
        assert!(item.x >= 0.0 && item.x <= c.field_width - c.item_size);
    }
}

#[test]
fn freshness_follows_probability() {
    let mut rng = seeded_rng();

    let all_fresh = GameConfig { fresh_probability: 1.0, ..GameConfig::default() };
    assert!((0..200).all(|_| spawn_item(&all_fresh, &mut rng).is_fresh()));

    let all_spoiled = GameConfig { fresh_probability: 0.0, ..GameConfig::default() };
    assert!((0..200).all(|_| !spawn_item(&all_spoiled, &mut rng).is_fresh()));

    let c = GameConfig::default();
    let fresh = (0..10_000).filter(|_| spawn_item(&c, &mut rng).is_fresh()).count();
    assert!((6_500..7_500).contains(&fresh), "fresh count {}", fresh);
}

#[test]
fn every_kind_gets_spawned() {
    let c = GameConfig::default();
    let mut rng = seeded_rng();
    let kinds: Vec<ProduceKind> = (0..500).map(|_| spawn_item(&c, &mut rng).kind).collect();
    for kind in ProduceKind::ALL {
        assert!(kinds.contains(&kind), "{:?} never spawned", kind);
    }
}

#[test]
fn spawn_rate_is_independent_of_tick_granularity() {
    let c = GameConfig::default();
    let duration: u64 = 10_000;
    let expected = duration / c.spawn_interval_ms;

    for step in [1u64, 7, 16, 33, 50, 100] {
        let mut rng = seeded_rng();
        let mut s = SpawnController::new(c.spawn_interval_ms, 0);
        let mut count = 0;
        let mut now = 0;
        while now + step <= duration {
            now += step;
            if s.maybe_spawn(now, &c, &mut rng).is_some() {
                count += 1;
            }
        }
        assert!(
            (expected - 2..=expected).contains(&count),
            "step {}ms spawned {}",
            step,
            count
        );
    }
}
