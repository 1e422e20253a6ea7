//! Frame composition: turns the query surface into draw calls

use glam::Vec2;

use super::canvas::{Canvas, colors};
use crate::sim::{GameLoop, GameState};

/// Draw one frame: background, platforms, stick, character
pub fn draw<R>(game: &GameLoop<R>, canvas: &mut impl Canvas) {
    let config = game.config();
    let offset = game.bg_offset();
    let ground = config.ground_y();

    canvas.fill(colors::BACKGROUND);

    for platform in game.platforms() {
        canvas.rect(
            Vec2::new(platform.x as f32 - offset, ground),
            Vec2::new(platform.width as f32, config.platform_height as f32),
            colors::PLATFORM,
        );
    }

    let stick = game.stick();
    match game.state() {
        GameState::Stretching => {
            // Upright, left edge on the platform corner
            let anchor = game.stick_anchor();
            canvas.rect(
                Vec2::new(anchor.x, anchor.y - stick.length),
                Vec2::new(config.stick_thickness, stick.length),
                colors::STICK,
            );
        }
        GameState::Rotating | GameState::Walking => {
            canvas.rotated_rect(&game.stick_pose(), colors::STICK);
        }
        GameState::Idle | GameState::Falling => {}
    }

    canvas.rect(
        Vec2::new(game.char_x() - offset, ground - config.char_height),
        Vec2::new(config.char_width, config.char_height),
        colors::CHARACTER,
    );
}
