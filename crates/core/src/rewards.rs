//! Reward table - per-color points and full-row multipliers

use std::collections::HashMap;

use dropblox_types::Color;

use crate::error::{Error, Result};

/// Immutable mapping of color to points and color to full-row multiplier
///
/// Points may be negative. Multipliers only apply to rows that are completely
/// filled with a single color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardTable {
    points: HashMap<Color, i64>,
    multipliers: HashMap<Color, i64>,
}

impl RewardTable {
    pub fn new(points: HashMap<Color, i64>, multipliers: HashMap<Color, i64>) -> Self {
        Self { points, multipliers }
    }

    /// Add (or replace) the reward entry for `color`
    ///
    /// ```
    /// use dropblox_core::RewardTable;
    /// use dropblox_types::Color;
    ///
    /// let rewards = RewardTable::default().with(Color::R, 8, 4).with(Color::B, 100, 0);
    /// assert_eq!(rewards.points(Color::R).unwrap(), 8);
    /// assert_eq!(rewards.multiplier(Color::B).unwrap(), 0);
    /// assert!(rewards.points(Color::Y).is_err());
    /// ```
    pub fn with(mut self, color: Color, points: i64, multiplier: i64) -> Self {
        self.points.insert(color, points);
        self.multipliers.insert(color, multiplier);
        self
    }

    pub fn points(&self, color: Color) -> Result<i64> {
        self.points
            .get(&color)
            .copied()
            .ok_or(Error::UnknownColor { color })
    }

    pub fn multiplier(&self, color: Color) -> Result<i64> {
        self.multipliers
            .get(&color)
            .copied()
            .ok_or(Error::UnknownColor { color })
    }

    /// Colors with a points entry, in palette order
    pub fn colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = self.points.keys().copied().collect();
        colors.sort();
        colors
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
