//! Demo pilot that plays the game on its own
//!
//! Starts a run, drops a bomb whenever the plane is over the tallest
//! standing building and the bay is empty, and presses on after a win or a
//! crash.
//! After its tick budget it closes the game.

use super::InputSource;
use crate::sim::{GameMode, GameState, InputEvent, Key, Skyline};

/// Ticks to linger on title, win and lose screens
const LINGER_TICKS: u64 = 50;

#[derive(Debug, Clone)]
pub struct DemoPilot {
    polls: u64,
    limit: u64,
    lingered: u64,
}

impl DemoPilot {
    pub fn new(limit: u64) -> Self {
        Self {
            polls: 0,
            limit,
            lingered: 0,
        }
    }

    /// Plane is over a column as tall as any still standing
    fn over_target(state: &GameState) -> bool {
        let tallest = state.skyline.tallest();
        Skyline::column_at(state.plane.pos.x)
            .and_then(|column| state.skyline.stories(column))
            .is_some_and(|stories| stories > 0 && stories == tallest)
    }
}

impl InputSource for DemoPilot {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent> {
        self.polls += 1;
        if self.polls >= self.limit {
            return vec![InputEvent::Quit];
        }

        let press = InputEvent::KeyDown(Key::Char(' '));
        match state.mode {
            GameMode::Start | GameMode::Lose | GameMode::Win => {
                self.lingered += 1;
                if self.lingered >= LINGER_TICKS {
                    self.lingered = 0;
                    return vec![press];
                }
                Vec::new()
            }
            GameMode::Play => {
                self.lingered = 0;
                if state.bomb.is_dormant() && !state.drop_requested && Self::over_target(state) {
                    vec![press]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{handle_event, tick};

    #[test]
    fn test_pilot_starts_and_quits() {
        let mut state = GameState::new(1);
        let mut pilot = DemoPilot::new(LINGER_TICKS + 10);
        for _ in 0..LINGER_TICKS {
            tick(&mut state);
            for event in pilot.poll(&state) {
                handle_event(&mut state, event);
            }
        }
        assert_eq!(state.mode, GameMode::Preplay);

        let mut quit = false;
        for _ in 0..20 {
            tick(&mut state);
            let events = pilot.poll(&state);
            quit |= events.contains(&InputEvent::Quit);
        }
        assert!(quit);
    }

    #[test]
    fn test_pilot_drops_over_tallest_only() {
        let mut state = GameState::new(1);
        state.mode = GameMode::Play;
        let mut stories = [0; COLUMNS];
        stories[3] = 2;
        stories[9] = 5;
        stories[20] = 5;
        state.skyline = Skyline::from_stories(stories);
        let mut pilot = DemoPilot::new(u64::MAX);
        let drop = vec![InputEvent::KeyDown(Key::Char(' '))];

        // Empty lot
        state.plane.pos.x = 0;
        assert!(pilot.poll(&state).is_empty());
        // Standing, but not the tallest
        state.plane.pos.x = 3 * STORY_WIDTH;
        assert!(pilot.poll(&state).is_empty());
        // Either of the tied tallest columns
        state.plane.pos.x = 9 * STORY_WIDTH + 5;
        assert_eq!(pilot.poll(&state), drop);
        state.plane.pos.x = 20 * STORY_WIDTH;
        assert_eq!(pilot.poll(&state), drop);

        state.drop_requested = true;
        assert!(pilot.poll(&state).is_empty());
    }

    #[test]
    fn test_pilot_retargets_after_demolition() {
        let mut state = GameState::new(1);
        state.mode = GameMode::Play;
        let mut stories = [0; COLUMNS];
        stories[3] = 2;
        stories[9] = 3;
        state.skyline = Skyline::from_stories(stories);
        let mut pilot = DemoPilot::new(u64::MAX);

        state.plane.pos.x = 3 * STORY_WIDTH;
        assert!(pilot.poll(&state).is_empty());
        assert!(state.skyline.demolish(9).is_some());
        assert_eq!(pilot.poll(&state), vec![InputEvent::KeyDown(Key::Char(' '))]);
    }
}
