//! Turns game state into draw calls
//!
//! The skyline is drawn once per level into its own texture, then patched
//! one story at a time as columns are hit. Everything else is redrawn every
//! frame from the sprite sheet.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::sprites::{self, facade};
use super::{Rect, Renderer, Target, Texture};
use crate::consts::*;
use crate::sim::{GameEvent, GameMode, GameState, Skyline};

/// Scene painter. Owns its own RNG so cosmetic flicker never perturbs the
/// simulation.
#[derive(Debug, Clone)]
pub struct Scene {
    rng: Pcg32,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x6d6f_6f6e),
        }
    }

    pub fn draw_background(&self, r: &mut impl Renderer) {
        r.draw_sprite(Texture::Sprites, sprites::BACKGROUND, sprites::BACKGROUND.at(0, 0));
    }

    /// Update offscreen surfaces for a simulation event
    pub fn apply_event(&self, r: &mut impl Renderer, state: &GameState, event: &GameEvent) {
        match *event {
            GameEvent::SkylineGenerated { .. } => self.build_skyline(r, &state.skyline),
            GameEvent::ColumnDemolished {
                column,
                stories_left,
            } => self.erase_story(r, column, stories_left),
            _ => {}
        }
    }

    /// Draw the whole skyline into its texture
    pub fn build_skyline(&self, r: &mut impl Renderer, skyline: &Skyline) {
        r.set_render_target(Target::Skyline);
        r.clear();
        for (column, &stories) in skyline.columns().iter().enumerate() {
            let tile = facade(skyline.style(column).unwrap_or(0));
            let x = column as i32 * STORY_WIDTH;
            for story in 0..stories as i32 {
                let y = HEIGHT - STORY_HEIGHT - story * STORY_HEIGHT;
                r.draw_sprite(Texture::Sprites, tile, tile.at(x, y));
            }
        }
        r.set_render_target(Target::Screen);
    }

    /// Punch out the story that was just knocked off `column`
    pub fn erase_story(&self, r: &mut impl Renderer, column: usize, stories_left: u32) {
        r.set_render_target(Target::Skyline);
        r.fill_rect(Rect::new(
            column as i32 * STORY_WIDTH,
            HEIGHT - STORY_HEIGHT * (stories_left as i32 + 1),
            STORY_WIDTH,
            STORY_HEIGHT,
        ));
        r.set_render_target(Target::Screen);
    }

    /// Draw the frame for the current mode
    pub fn draw(&mut self, r: &mut impl Renderer, state: &GameState) {
        match state.mode {
            GameMode::Start => self.draw_instructions(r),
            GameMode::Preplay | GameMode::Quit => {}
            GameMode::Play => {
                self.draw_hud(r, state);
                self.draw_plane(r, state);
                self.draw_bomb(r, state);
            }
            GameMode::Pause => {
                self.draw_hud(r, state);
                self.draw_plane(r, state);
                if state.prev_mode == Some(GameMode::Strike) {
                    self.draw_explosion(r, state);
                } else {
                    self.draw_bomb(r, state);
                }
                blit_at(r, sprites::PAUSED, sprites::PAUSED_AT);
            }
            GameMode::Strike => {
                self.draw_hud(r, state);
                self.draw_plane(r, state);
                self.draw_explosion(r, state);
            }
            GameMode::Lose => {
                self.draw_hud(r, state);
                let (dx, dy) = sprites::CRASH_OFFSET;
                blit_at(
                    r,
                    sprites::EXPLOSION,
                    (state.plane.pos.x + dx, state.plane.pos.y + dy),
                );
                blit_at(r, sprites::LOSE_BANNER, sprites::LOSE_AT);
            }
            GameMode::Win => {
                self.draw_hud(r, state);
                blit_at(r, sprites::WIN_BANNER, sprites::WIN_AT);
            }
        }
    }

    fn draw_instructions(&self, r: &mut impl Renderer) {
        blit_at(r, sprites::TITLE, sprites::TITLE_AT);
        blit_at(r, sprites::INSTRUCTIONS, sprites::INSTRUCTIONS_AT);
        blit_at(r, sprites::KEYS, sprites::KEYS_AT);
    }

    /// Moon, score and skyline: the backdrop of every in-game mode
    fn draw_hud(&mut self, r: &mut impl Renderer, state: &GameState) {
        self.draw_moon(r, state.mode == GameMode::Pause);
        draw_score(r, state.displayed_score);
        draw_buildings(r, state.rise, state.shake);
    }

    fn draw_moon(&mut self, r: &mut impl Renderer, paused: bool) {
        let moon = if paused || self.rng.random_ratio(1, 50) {
            sprites::MOON_DIM
        } else {
            sprites::MOON
        };
        blit_at(r, moon, sprites::MOON_AT);
    }

    fn draw_plane(&self, r: &mut impl Renderer, state: &GameState) {
        let sprite = if state.mode == GameMode::Pause {
            sprites::PLANE_PAUSED
        } else {
            sprites::PLANE
        };
        blit_at(r, sprite, (state.plane.pos.x, state.plane.pos.y));
    }

    fn draw_bomb(&self, r: &mut impl Renderer, state: &GameState) {
        if state.bomb.pos.y > 0 {
            blit_at(r, sprites::BOMB, (state.bomb.pos.x, state.bomb.pos.y));
        }
    }

    fn draw_explosion(&self, r: &mut impl Renderer, state: &GameState) {
        let (dx, dy) = sprites::EXPLOSION_OFFSET;
        blit_at(
            r,
            sprites::EXPLOSION,
            (state.bomb.pos.x + dx, state.bomb.pos.y + dy),
        );
    }
}

fn blit_at(r: &mut impl Renderer, sprite: Rect, (x, y): (i32, i32)) {
    r.draw_sprite(Texture::Sprites, sprite, sprite.at(x, y));
}

/// Label plus right-aligned digits; zero shows the label only
fn draw_score(r: &mut impl Renderer, score: u32) {
    let mut x = sprites::DIGITS_X;
    let mut n = score;
    while n > 0 {
        x += sprites::DIGIT.w;
        n /= 10;
    }

    blit_at(r, sprites::SCORE_LABEL, sprites::SCORE_AT);
    let mut n = score;
    while n > 0 {
        blit_at(r, sprites::digit(n % 10), (x, sprites::SCORE_AT.1));
        x -= sprites::DIGIT.w;
        n /= 10;
    }
}

/// Copy the skyline texture, shifted down by the rise and up by the shake
fn draw_buildings(r: &mut impl Renderer, rise: i32, shake: i32) {
    let visible = HEIGHT - rise;
    if visible <= 0 {
        return;
    }
    r.draw_sprite(
        Texture::Skyline,
        Rect::new(0, 0, WIDTH, visible),
        Rect::new(0, rise - shake, WIDTH, visible),
    );
}
