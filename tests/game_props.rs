use armada::{Fleet, Game, Position, ShotOutcome, BOARD_SIZE};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_fleet(seed: u64) -> Fleet {
    Fleet::random(&mut SmallRng::seed_from_u64(seed)).expect("random fleet")
}

fn any_shot() -> impl Strategy<Value = Position> {
    (-3..BOARD_SIZE + 3, -3..BOARD_SIZE + 3).prop_map(|(r, c)| Position::new(r, c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn counters_track_every_shot(seed in any::<u64>(), shots in prop::collection::vec(any_shot(), 0..150)) {
        let mut fleet = random_fleet(seed);
        let mut game = Game::new(&mut fleet);
        for pos in shots {
            let before = game.stats();
            let already = game.shots().contains(&pos);
            let outcome = game.fire(pos);
            let on_board = (0..BOARD_SIZE).contains(&pos.row())
                && (0..BOARD_SIZE).contains(&pos.column());
            match outcome {
                ShotOutcome::Invalid => prop_assert!(!on_board),
                ShotOutcome::Repeated => prop_assert!(on_board && already),
                _ => prop_assert!(on_board && !already),
            }
            let after = game.stats();
            if !on_board {
                prop_assert_eq!(after.invalid_shots, before.invalid_shots + 1);
                prop_assert_eq!(after.shots, before.shots);
                prop_assert_eq!(after.hits, before.hits);
                prop_assert_eq!(after.repeated_shots, before.repeated_shots);
            } else if already {
                prop_assert_eq!(after.repeated_shots, before.repeated_shots + 1);
                prop_assert_eq!(after.shots, before.shots);
                prop_assert_eq!(after.hits, before.hits);
                prop_assert_eq!(after.invalid_shots, before.invalid_shots);
                prop_assert_eq!(after.sunk_ships, before.sunk_ships);
            } else {
                prop_assert_eq!(after.shots, before.shots + 1);
            }
        }

        let stats = game.stats();
        let fleet = game.fleet();
        let struck: usize = fleet.ships().iter().map(|s| s.hit_count()).sum();
        prop_assert_eq!(stats.hits, struck);
        prop_assert_eq!(stats.sunk_ships + stats.remaining_ships, fleet.len());
        for (i, a) in game.shots().iter().enumerate() {
            prop_assert!(!game.shots()[i + 1..].contains(a));
        }
    }

    #[test]
    fn sweeping_the_board_sinks_everything(seed in any::<u64>()) {
        let mut fleet = random_fleet(seed);
        let total = fleet.len();
        let cells: usize = fleet.ships().iter().map(|s| s.size()).sum();
        let mut game = Game::new(&mut fleet);
        let mut sunk = 0;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if game.fire(Position::new(r, c)).sunk().is_some() {
                    sunk += 1;
                }
            }
        }
        prop_assert_eq!(sunk, total);
        prop_assert_eq!(game.hits(), cells);
        prop_assert_eq!(game.remaining_ships(), 0);
        prop_assert_eq!(game.shots().len(), (BOARD_SIZE * BOARD_SIZE) as usize);
    }
}
