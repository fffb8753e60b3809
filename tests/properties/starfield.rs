//! Property tests for the starfield arena.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use folio::domain::services::{Starfield, StarfieldSettings};

fn settings() -> impl Strategy<Value = StarfieldSettings> {
    (0usize..80, 0u64..3_000, 1u64..1_000, 1u64..12_000, 1usize..120).prop_map(
        |(initial, window, interval, lifetime, capacity)| StarfieldSettings {
            initial,
            initial_window: Duration::from_millis(window),
            spawn_interval: Duration::from_millis(interval),
            lifetime: Duration::from_millis(lifetime),
            capacity,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the arena never exceeds capacity and holds only live stars
    /// inside the unit square.
    #[test]
    fn property_arena_is_bounded_and_live(
        settings in settings(),
        seed in any::<u64>(),
        steps in proptest::collection::vec(0u64..1_500, 1..40),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = Starfield::new(settings);
        let mut now = Duration::ZERO;
        field.start(now, &mut rng);

        for step in steps {
            now += Duration::from_millis(step);
            field.advance(now, &mut rng);

            prop_assert!(field.len() <= field.capacity());
            for star in field.stars() {
                prop_assert!(!star.is_expired(now));
                prop_assert!((0.0..1.0).contains(&star.x));
                prop_assert!((0.0..1.0).contains(&star.y));
                prop_assert!((1..=4).contains(&star.size));
                let b = star.brightness(now);
                prop_assert!((star.opacity - 1e-4..=0.8 + 1e-4).contains(&b));
            }
            if let Some(deadline) = field.next_deadline() {
                prop_assert!(deadline > now);
            }
        }

        field.stop();
        prop_assert!(field.is_empty());
        prop_assert_eq!(field.next_deadline(), None);
    }

    /// PROPERTY: the same seed gives the same sky.
    #[test]
    fn property_seed_is_reproducible(seed in any::<u64>(), at in 0u64..20_000) {
        let sky = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut field = Starfield::new(StarfieldSettings::default());
            field.start(Duration::ZERO, &mut rng);
            field.advance(Duration::from_millis(at), &mut rng);
            field.stars().to_vec()
        };
        prop_assert_eq!(sky(seed), sky(seed));
    }
}
