//! Fixed-step simulation tick and input dispatch
//!
//! [`tick`] runs exactly one mode action; [`handle_event`] applies input
//! drained after it. Together they form the game's transition table:
//!
//! | Mode    | Per tick                              | Leaves on                          |
//! |---------|---------------------------------------|------------------------------------|
//! | Start   | reset session on fresh entry          | game key -> Preplay, Esc -> Quit   |
//! | Preplay | build level                           | same tick -> Play                  |
//! | Play    | plane, bomb, crash and strike tests   | crash, strike, win, pause          |
//! | Pause   | nothing                               | pause -> previous mode             |
//! | Strike  | plane, explosion countdown            | countdown done -> Play             |
//! | Lose    | nothing                               | game key -> Start                  |
//! | Win     | nothing                               | game key -> next level             |

use super::collision::{check_for_crash, check_for_strike};
use super::state::{GameMode, GameState};
use crate::consts::*;

/// Logical keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// Pause toggle (`P`)
    Pause,
    /// Mute toggle (`S`)
    Mute,
    /// Modifier keys are swallowed
    Alt,
    /// Anything else: starts, continues, and drops bombs
    Char(char),
}

impl Key {
    /// Map a typed character onto a logical key
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'p' => Key::Pause,
            's' => Key::Mute,
            '\u{1b}' => Key::Escape,
            other => Key::Char(other),
        }
    }
}

/// Discrete input events from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    match state.mode {
        GameMode::Start => {
            if state.prev_mode != Some(GameMode::Start) {
                state.reset_session();
            }
        }

        GameMode::Preplay => {
            state.build_level();
            log::info!("Level {} begins (score {})", state.level, state.score);
            state.prev_mode = Some(GameMode::Preplay);
            state.set_mode(GameMode::Play);
        }

        GameMode::Play => {
            animate(state);
            if move_plane(state) {
                move_bomb(state);
            }
        }

        GameMode::Strike => {
            animate(state);
            if move_plane(state) {
                advance_explosion(state);
            }
        }

        GameMode::Lose | GameMode::Win => animate(state),

        GameMode::Pause | GameMode::Quit => {}
    }
}

/// Apply one input event
pub fn handle_event(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Quit => state.set_mode(GameMode::Quit),
        InputEvent::KeyDown(key) => handle_key(state, key),
    }
}

/// Apply one key press
pub fn handle_key(state: &mut GameState, key: Key) {
    if state.mode == GameMode::Quit {
        return;
    }

    match key {
        Key::Alt => {}
        Key::Escape => escape(state),
        Key::Mute => {
            state.muted = !state.muted;
            log::info!("Sound {}", if state.muted { "muted" } else { "on" });
        }
        Key::Pause => toggle_pause(state),
        Key::Char(_) => match state.mode {
            GameMode::Lose => {
                state.prev_mode = Some(GameMode::Lose);
                state.set_mode(GameMode::Start);
            }
            GameMode::Start => {
                state.prev_mode = Some(GameMode::Start);
                state.set_mode(GameMode::Preplay);
            }
            GameMode::Win => {
                state.prev_mode = Some(GameMode::Win);
                state.level += 1;
                state.set_mode(GameMode::Preplay);
            }
            _ => state.drop_requested = true,
        },
    }
}

/// Escape quits from the title screen and abandons the run anywhere else
fn escape(state: &mut GameState) {
    if state.mode == GameMode::Start {
        state.set_mode(GameMode::Quit);
    } else {
        state.set_mode(GameMode::Start);
    }
}

fn toggle_pause(state: &mut GameState) {
    match state.mode {
        GameMode::Pause => {
            let resume = state.prev_mode.unwrap_or(GameMode::Play);
            state.set_mode(resume);
        }
        mode if mode.is_airborne() => {
            state.prev_mode = Some(mode);
            state.set_mode(GameMode::Pause);
        }
        _ => {}
    }
}

fn animate(state: &mut GameState) {
    state.animate_rise();
    state.animate_score();
}

/// Advance the plane and run the crash test. Returns false on a crash.
fn move_plane(state: &mut GameState) -> bool {
    state.plane.advance_plane();
    !check_for_crash(state)
}

/// Release a requested bomb, or let a released one fall and test for a hit
fn move_bomb(state: &mut GameState) {
    if state.drop_requested && state.bomb.is_dormant() {
        let plane = state.plane;
        state.bomb.release_from(&plane);
    } else if !state.bomb.is_dormant() {
        state.bomb.fall();
        check_for_strike(state);
    }

    if state.bomb.below_screen() {
        state.bomb.make_dormant();
        state.drop_requested = false;
    }
}

/// Count down the explosion, shaking the city, then resume play
fn advance_explosion(state: &mut GameState) {
    state.countdown = state.countdown.saturating_sub(1);
    state.shake = (state.countdown % 3) as i32;
    if state.countdown == 0 {
        state.shake = 0;
        state.bomb.make_dormant();
        state.countdown = EXPLOSION_TICKS;
        state.drop_requested = false;
        state.set_mode(GameMode::Play);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Skyline;
    use crate::sim::state::GameEvent;

    fn press(state: &mut GameState) {
        handle_key(state, Key::Char(' '));
    }

    /// Title -> first level in play
    fn started(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state);
        press(&mut state);
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Play);
        state
    }

    #[test]
    fn test_start_to_play() {
        let mut state = GameState::new(12345);
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Start);
        assert_eq!(state.prev_mode, Some(GameMode::Start));

        press(&mut state);
        assert_eq!(state.mode, GameMode::Preplay);
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Play);
        assert_eq!(state.skyline.remaining(), COLUMNS);
        assert!(state.rise > 0);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::SkylineGenerated { level: 1 })
        );
    }

    #[test]
    fn test_escape_quits_from_title_only() {
        let mut state = started(1);
        handle_key(&mut state, Key::Escape);
        assert_eq!(state.mode, GameMode::Start);
        handle_key(&mut state, Key::Escape);
        assert_eq!(state.mode, GameMode::Quit);
        // Quit is terminal
        press(&mut state);
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Quit);
    }

    #[test]
    fn test_escape_resets_session() {
        let mut state = started(1);
        state.score = 120;
        state.level = 4;
        handle_key(&mut state, Key::Escape);
        tick(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, START_LEVEL);
    }

    #[test]
    fn test_quit_event() {
        let mut state = started(1);
        handle_event(&mut state, InputEvent::Quit);
        assert_eq!(state.mode, GameMode::Quit);
    }

    #[test]
    fn test_pause_restores_play() {
        let mut state = started(9);
        for _ in 0..5 {
            tick(&mut state);
        }
        let plane = state.plane;

        handle_key(&mut state, Key::Pause);
        assert_eq!(state.mode, GameMode::Pause);
        for _ in 0..20 {
            tick(&mut state);
        }
        assert_eq!(state.plane, plane);

        handle_key(&mut state, Key::Pause);
        assert_eq!(state.mode, GameMode::Play);
        assert_eq!(state.plane, plane);
        assert_eq!(state.skyline.remaining(), COLUMNS);
    }

    #[test]
    fn test_pause_during_strike_freezes_countdown() {
        let mut state = started(2);
        state.skyline = Skyline::from_stories([3; COLUMNS]);
        state.mode = GameMode::Strike;
        state.bomb.pos.y = 400;
        tick(&mut state);
        assert_eq!(state.countdown, EXPLOSION_TICKS - 1);
        let plane = state.plane;

        handle_key(&mut state, Key::Pause);
        assert_eq!(state.mode, GameMode::Pause);
        for _ in 0..30 {
            tick(&mut state);
        }
        assert_eq!(state.countdown, EXPLOSION_TICKS - 1);
        assert_eq!(state.plane, plane);

        handle_key(&mut state, Key::Pause);
        assert_eq!(state.mode, GameMode::Strike);
        tick(&mut state);
        assert_eq!(state.countdown, EXPLOSION_TICKS - 2);
    }

    #[test]
    fn test_escape_mid_run_resets_session() {
        for mode in [GameMode::Pause, GameMode::Strike, GameMode::Win] {
            let mut state = started(5);
            if mode == GameMode::Pause {
                handle_key(&mut state, Key::Pause);
            } else {
                state.set_mode(mode);
            }
            assert_eq!(state.mode, mode);
            state.score = 60;
            state.level = 3;

            handle_key(&mut state, Key::Escape);
            assert_eq!(state.mode, GameMode::Start, "escape from {}", mode.as_str());
            tick(&mut state);
            assert_eq!((state.score, state.level), (0, START_LEVEL), "escape from {}", mode.as_str());
            assert_eq!(state.mode, GameMode::Start);
        }
    }

    #[test]
    fn test_pause_ignored_outside_play() {
        let mut state = GameState::new(1);
        handle_key(&mut state, Key::Pause);
        assert_eq!(state.mode, GameMode::Start);
        state.mode = GameMode::Lose;
        handle_key(&mut state, Key::Pause);
        assert_eq!(state.mode, GameMode::Lose);
    }

    #[test]
    fn test_mute_toggle_is_modeless() {
        let mut state = started(1);
        handle_key(&mut state, Key::Mute);
        assert!(state.muted);
        assert_eq!(state.mode, GameMode::Play);
        handle_key(&mut state, Key::Mute);
        assert!(!state.muted);
    }

    #[test]
    fn test_alt_is_swallowed() {
        let mut state = GameState::new(1);
        tick(&mut state);
        handle_key(&mut state, Key::Alt);
        assert_eq!(state.mode, GameMode::Start);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_char('P'), Key::Pause);
        assert_eq!(Key::from_char('s'), Key::Mute);
        assert_eq!(Key::from_char('\u{1b}'), Key::Escape);
        assert_eq!(Key::from_char('x'), Key::Char('x'));
    }

    #[test]
    fn test_bomb_strike_then_back_to_play() {
        let mut state = started(2);
        state.skyline = Skyline::from_stories([3; COLUMNS]);
        state.rise = 0;
        state.plane.pos.x = 5 * STORY_WIDTH;

        press(&mut state);
        tick(&mut state);
        assert!(!state.bomb.is_dormant());
        assert_eq!(state.bomb.pos.x, 5 * STORY_WIDTH);

        let mut ticks = 0;
        while state.mode == GameMode::Play {
            tick(&mut state);
            ticks += 1;
            assert!(ticks < 100, "bomb never landed");
        }
        assert_eq!(state.mode, GameMode::Strike);
        assert_eq!(state.skyline.stories(5), Some(2));
        assert_eq!(state.score, SCORE_INCREMENT);

        for _ in 0..EXPLOSION_TICKS - 1 {
            tick(&mut state);
            assert_eq!(state.mode, GameMode::Strike);
        }
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Play);
        assert!(state.bomb.is_dormant());
        assert!(!state.drop_requested);
        assert_eq!(state.shake, 0);
        assert_eq!(state.countdown, EXPLOSION_TICKS);
    }

    #[test]
    fn test_shake_follows_countdown() {
        let mut state = started(2);
        state.skyline = Skyline::from_stories([1; COLUMNS]);
        state.mode = GameMode::Strike;
        state.bomb.pos.y = 400;
        tick(&mut state);
        assert_eq!(state.countdown, EXPLOSION_TICKS - 1);
        assert_eq!(state.shake, ((EXPLOSION_TICKS - 1) % 3) as i32);
    }

    #[test]
    fn test_missed_bomb_resets_quietly() {
        let mut state = started(2);
        // One column standing elsewhere so the level isn't won
        let mut stories = [0; COLUMNS];
        stories[30] = 1;
        state.skyline = Skyline::from_stories(stories);
        state.plane.pos.x = 40;
        press(&mut state);
        for _ in 0..60 {
            tick(&mut state);
        }
        assert_eq!(state.mode, GameMode::Play);
        assert!(state.bomb.is_dormant());
        assert!(!state.drop_requested);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_crash_on_exact_tick() {
        let mut state = started(3);
        state.skyline = Skyline::from_stories([10; COLUMNS]);
        let line = HEIGHT - 10 * STORY_HEIGHT - PLANE_CLEARANCE;
        state.plane.pos.y = line;
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Play);
        state.plane.pos.y = line + 1;
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Lose);
    }

    #[test]
    fn test_crash_beats_pending_strike() {
        let mut state = started(3);
        state.skyline = Skyline::from_stories([10; COLUMNS]);
        state.plane.pos.y = HEIGHT;
        state.bomb.pos = glam::IVec2::new(0, HEIGHT - 10);
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Lose);
        assert_eq!(state.skyline.total_stories(), 10 * COLUMNS as u32);
    }

    #[test]
    fn test_lose_returns_to_fresh_title() {
        let mut state = started(3);
        state.score = 80;
        state.mode = GameMode::Lose;
        press(&mut state);
        assert_eq!(state.mode, GameMode::Start);
        tick(&mut state);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_win_advances_level_and_keeps_score() {
        let mut state = started(4);
        let mut stories = [0; COLUMNS];
        stories[7] = 1;
        state.skyline = Skyline::from_stories(stories);
        state.bomb.pos = glam::IVec2::new(7 * STORY_WIDTH, HEIGHT - 40);
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Win);
        let score = state.score;

        press(&mut state);
        assert_eq!(state.mode, GameMode::Preplay);
        tick(&mut state);
        assert_eq!(state.mode, GameMode::Play);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, score);
        assert_eq!(state.rise, 0);
    }

    #[test]
    fn test_determinism() {
        let mut a = started(99999);
        let mut b = started(99999);
        for i in 0..500 {
            if i % 37 == 0 {
                press(&mut a);
                press(&mut b);
            }
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.mode, b.mode);
        assert_eq!(a.skyline, b.skyline);
        assert_eq!(a.plane, b.plane);
        assert_eq!(a.score, b.score);
    }
}
