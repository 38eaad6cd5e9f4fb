//! Procedurally generated, destructible skyline
//!
//! The city is a fixed row of [`COLUMNS`] buildings, each a stack of stories.
//! Columns are addressed by index; pixel positions map onto them with
//! [`Skyline::column_at`], which rejects anything outside the row.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Result of knocking one story off a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demolition {
    pub column: usize,
    /// Stories left standing in the column afterwards
    pub stories_left: u32,
    /// True if this demolition emptied the column
    pub flattened: bool,
}

/// Row of buildings for one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skyline {
    stories: [u32; COLUMNS],
    /// Facade sprite variant per column
    styles: [u8; COLUMNS],
    /// Columns with at least one story standing
    remaining: usize,
}

impl Default for Skyline {
    fn default() -> Self {
        Self::empty()
    }
}

impl Skyline {
    /// A city with nothing left standing (shown before the first level)
    pub fn empty() -> Self {
        Self {
            stories: [0; COLUMNS],
            styles: [0; COLUMNS],
            remaining: 0,
        }
    }

    /// Build a fresh skyline for `level`.
    ///
    /// Every column gets `1 + (r3 - r6) + 2*level + 6` stories where `r3` is
    /// drawn from `0..3` and `r6` from `0..6`. Heights are clamped to at
    /// least one story so every column starts standing.
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        let mut stories = [0; COLUMNS];
        let mut styles = [0; COLUMNS];

        for (height, style) in stories.iter_mut().zip(styles.iter_mut()) {
            *style = rng.random_range(0..FACADE_STYLES);
            *height = Self::story_count(level, rng);
        }

        let skyline = Self {
            stories,
            styles,
            remaining: COLUMNS,
        };
        log::info!(
            "Level {} skyline: tallest={} total={}",
            level,
            skyline.tallest(),
            skyline.total_stories()
        );
        skyline
    }

    /// Draw one column height for `level`
    pub fn story_count<R: Rng + ?Sized>(level: u32, rng: &mut R) -> u32 {
        let bonus = rng.random_range(0..3_i64) - rng.random_range(0..6_i64);
        let height = 1 + bonus + 2 * i64::from(level) + 6;
        height.max(1) as u32
    }

    /// Build a skyline from explicit heights (level editors, tests)
    pub fn from_stories(stories: [u32; COLUMNS]) -> Self {
        let remaining = stories.iter().filter(|&&s| s > 0).count();
        Self {
            stories,
            styles: [0; COLUMNS],
            remaining,
        }
    }

    /// Map a pixel x coordinate to a column, if it lies over the city
    pub fn column_at(x: i32) -> Option<usize> {
        let column = x.div_euclid(STORY_WIDTH);
        usize::try_from(column).ok().filter(|&c| c < COLUMNS)
    }

    /// Story count of a column (None if out of range)
    pub fn stories(&self, column: usize) -> Option<u32> {
        self.stories.get(column).copied()
    }

    pub fn columns(&self) -> &[u32; COLUMNS] {
        &self.stories
    }

    pub fn style(&self, column: usize) -> Option<u8> {
        self.styles.get(column).copied()
    }

    /// Number of columns still standing
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns true once every column has been flattened
    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    pub fn tallest(&self) -> u32 {
        self.stories.iter().copied().max().unwrap_or(0)
    }

    pub fn total_stories(&self) -> u32 {
        self.stories.iter().sum()
    }

    /// Pixel row of the top of a column's roof
    pub fn roof_y(&self, column: usize) -> Option<i32> {
        self.stories(column)
            .map(|s| HEIGHT - s as i32 * STORY_HEIGHT)
    }

    /// Pixel row of the tallest roof in the city
    pub fn tallest_top(&self) -> i32 {
        HEIGHT - self.tallest() as i32 * STORY_HEIGHT
    }

    /// Starting offset for the rise-into-view animation.
    ///
    /// Only the first level rises; later levels appear in place.
    pub fn rise_offset(&self, level: u32) -> i32 {
        if level == START_LEVEL {
            HEIGHT - self.tallest_top()
        } else {
            0
        }
    }

    /// Knock the top story off a column.
    ///
    /// Returns None for out-of-range or already flattened columns; nothing
    /// else in the skyline changes.
    pub fn demolish(&mut self, column: usize) -> Option<Demolition> {
        let stories = self.stories.get_mut(column)?;
        if *stories == 0 {
            return None;
        }
        *stories -= 1;
        let flattened = *stories == 0;
        if flattened {
            self.remaining -= 1;
        }
        Some(Demolition {
            column,
            stories_left: *stories,
            flattened,
        })
    }
}
