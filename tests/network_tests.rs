use crossed_lines::core::{points_cross, ScatterParams, MAX_SATURATION};
use crossed_lines::SegmentNetwork;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_point(rng: &mut StdRng, extent: f32) -> Vec2 {
    Vec2::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

#[test]
fn test_random_inserts_keep_saturation_bounded_and_consistent() {
    for seed in [7u64, 99, 2024] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut network = SegmentNetwork::new();

        for _ in 0..300 {
            let start = random_point(&mut rng, 30.0);
            let end = start + random_point(&mut rng, 15.0);
            network.try_insert(start, end);

            assert!(network.iter().all(|s| s.saturation() <= MAX_SATURATION));
        }

        assert!(
            network.accounting_mismatches().is_empty(),
            "Buchhaltung nach Seed {seed} inkonsistent"
        );
    }
}

#[test]
fn test_refused_candidates_never_mutate() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut network = SegmentNetwork::new();
    network.populate_random(
        &mut rng,
        400,
        Vec2::ZERO,
        &ScatterParams {
            half_extent: 40.0,
            ..ScatterParams::default()
        },
    );

    for _ in 0..200 {
        let start = random_point(&mut rng, 40.0);
        let end = start + random_point(&mut rng, 40.0);
        if network.can_admit(start, end) {
            continue;
        }
        let before = network.clone();
        assert!(network.try_insert(start, end).is_none());
        assert_eq!(network.segments(), before.segments());
    }
}

#[test]
fn test_crossing_predicate_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1000 {
        let a0 = random_point(&mut rng, 10.0);
        let a1 = random_point(&mut rng, 10.0);
        let b0 = random_point(&mut rng, 10.0);
        let b1 = random_point(&mut rng, 10.0);

        assert_eq!(points_cross(a0, a1, b0, b1), points_cross(b0, b1, a0, a1));
    }
}

#[test]
fn test_total_crossings_matches_pairwise_count() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut network = SegmentNetwork::new();
    network.populate_random(
        &mut rng,
        300,
        Vec2::new(100.0, -50.0),
        &ScatterParams {
            half_extent: 60.0,
            ..ScatterParams::default()
        },
    );

    let segments = network.segments();
    let mut pairs = 0;
    for (i, a) in segments.iter().enumerate() {
        for b in &segments[i + 1..] {
            if points_cross(a.start(), a.end(), b.start(), b.end()) {
                pairs += 1;
            }
        }
    }

    assert_eq!(network.total_crossings(), pairs);
}
