//! Property tests over arbitrary seeds and input sequences

use proptest::prelude::*;

use stick_bridge::consts::*;
use stick_bridge::sim::{GameLoop, GameState, Platform};

fn allowed(from: GameState, to: GameState) -> bool {
    use GameState::*;
    from == to
        || matches!(
            (from, to),
            (Idle, Stretching)
                | (Stretching, Rotating)
                | (Rotating, Walking)
                | (Walking, Idle)
                | (Walking, Falling)
                | (Falling, Idle)
        )
}

proptest! {
    #[test]
    fn first_target_within_bounds(seed in any::<u64>()) {
        let game = GameLoop::new(seed);
        let current = *game.current_platform();
        let next = *game.next_platform();
        prop_assert_eq!(current, Platform::new(INITIAL_PLATFORM_X, INITIAL_PLATFORM_WIDTH));
        prop_assert!(next.x >= current.x + GAP_MIN);
        prop_assert!(next.x < current.x + GAP_MIN + GAP_RANGE);
        prop_assert!(next.width >= WIDTH_MIN);
        prop_assert!(next.width < WIDTH_MIN + WIDTH_RANGE);
    }

    #[test]
    fn transitions_follow_table(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<bool>(), 1..600),
    ) {
        let mut game = GameLoop::new(seed);
        for held in inputs {
            let before = game.state();
            game.advance(held);
            let after = game.state();
            prop_assert!(allowed(before, after), "{:?} -> {:?}", before, after);
            if before == GameState::Falling {
                prop_assert_eq!(after, GameState::Idle);
            }
        }
    }

    #[test]
    fn stick_stays_in_range(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<bool>(), 1..600),
    ) {
        let mut game = GameLoop::new(seed);
        for held in inputs {
            let angle = game.stick_angle();
            let was_rotating = game.state() == GameState::Rotating;
            let gliding = game.is_scrolling();
            game.advance(held);

            prop_assert!(game.stick_length() >= 0.0);
            prop_assert!(game.stick_angle() >= 0.0);
            prop_assert!(game.stick_angle() <= STICK_FLAT_ANGLE);
            // A glide finishing this tick resets the stick
            let reset = gliding && !game.is_scrolling();
            if was_rotating && !reset {
                prop_assert!(game.stick_angle() >= angle);
                if game.state() == GameState::Walking {
                    prop_assert_eq!(game.stick_angle(), STICK_FLAT_ANGLE);
                    prop_assert!(game.stick_rotated());
                }
            }
        }
    }

    #[test]
    fn landing_is_inclusive(width in 1i32..80, offset in 0i32..=80) {
        // Stick length is a multiple of the stretch speed, so pick an even end
        let mut game = GameLoop::new(1);
        let target = Platform::new(150, width);
        game.set_platforms(Platform::new(50, 40), target);
        let end = 150 + offset.min(width);
        prop_assume!((end - 90) % 2 == 0);

        game.advance(true);
        for _ in 0..(end - 90) / 2 {
            game.advance(true);
        }
        game.advance(false);
        prop_assert_eq!(game.stick_end_x(), end as f32);
        while matches!(game.state(), GameState::Rotating | GameState::Walking) {
            game.advance(false);
        }
        prop_assert_eq!(game.state(), GameState::Idle);
        prop_assert!(game.is_scrolling());
    }
}
