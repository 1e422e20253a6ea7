//! Many-level runs driven by the autopilot

use stick_bridge::consts::*;
use stick_bridge::sim::{Autopilot, GameLoop, GameState, Platform};

/// Tick until the next glide completes, returning the ticks spent
fn play_one_level(game: &mut GameLoop, pilot: &Autopilot) -> u32 {
    let mut ticks = 0;
    let mut was_gliding = game.is_scrolling();
    loop {
        let input = pilot.decide(game);
        game.advance(input.held);
        ticks += 1;
        assert_ne!(game.state(), GameState::Falling, "autopilot missed");
        if was_gliding && !game.is_scrolling() {
            return ticks;
        }
        was_gliding = game.is_scrolling();
        assert!(ticks < 2_000, "level never finished");
    }
}

#[test]
fn test_no_drift_over_many_crossings() {
    let mut game = GameLoop::new(2024);
    let pilot = Autopilot::default();

    for level in 0..1000 {
        let target = *game.next_platform();
        play_one_level(&mut game, &pilot);

        let current = *game.current_platform();
        assert_eq!(current.x, INITIAL_PLATFORM_X, "level {level}");
        assert_eq!(current.width, target.width, "level {level}");
        assert!(game.char_x() >= current.x as f32);
        assert!(game.char_x() <= current.right_edge() as f32);
        assert_eq!(game.bg_offset(), 0.0);
        assert_eq!(game.stick_length(), 0.0);
        assert_eq!(game.stick_angle(), 0.0);
    }
}

#[test]
fn test_generated_platforms_within_bounds() {
    let mut game = GameLoop::new(77);
    let pilot = Autopilot::new(0.25);

    for _ in 0..200 {
        let current = *game.current_platform();
        let next = *game.next_platform();
        assert!(next.x >= current.x + GAP_MIN);
        assert!(next.x < current.x + GAP_MIN + GAP_RANGE);
        assert!(next.width >= WIDTH_MIN && next.width < WIDTH_MIN + WIDTH_RANGE);
        assert!(next.x > current.right_edge(), "platforms overlap");
        play_one_level(&mut game, &pilot);
    }
}

#[test]
fn test_fall_then_recover() {
    let mut game = GameLoop::new(3);
    game.set_platforms(Platform::new(50, 40), Platform::new(150, 50));

    // Too short: 10 growth ticks reach 110
    game.advance(true);
    for _ in 0..10 {
        game.advance(true);
    }
    while game.state() != GameState::Falling {
        game.advance(false);
    }
    game.advance(false);
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(*game.current_platform(), Platform::new(50, 40));

    // The stick is left lying; stretching again extends it
    let before = game.stick_length();
    game.advance(true);
    game.advance(true);
    assert_eq!(game.stick_length(), before + 2.0);
}
