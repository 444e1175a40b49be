//! Leaping frogs.
//!
//! `n` green frogs sit left of a single empty stone, `n` brown frogs right
//! of it. Greens only move right, browns only move left, each by stepping
//! into the adjacent empty stone or jumping over one frog into it. The goal
//! is the mirror image: browns left, greens right.

use std::fmt;

use reach_kernel::space::{StateSpace, Transition};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stone {
    Empty,
    Green,
    Brown,
}

impl Stone {
    fn symbol(self) -> char {
        match self {
            Self::Empty => '_',
            Self::Green => 'G',
            Self::Brown => 'B',
        }
    }
}

/// A row of stones. Renders (and serializes) as e.g. `GG_BB`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stones(Vec<Stone>);

impl Stones {
    /// `frogs` greens, one empty stone, `frogs` browns.
    #[must_use]
    pub fn start(frogs: usize) -> Self {
        Self::lineup(frogs, Stone::Green, Stone::Brown)
    }

    /// `frogs` browns, one empty stone, `frogs` greens.
    #[must_use]
    pub fn finish(frogs: usize) -> Self {
        Self::lineup(frogs, Stone::Brown, Stone::Green)
    }

    fn lineup(frogs: usize, left: Stone, right: Stone) -> Self {
        let mut stones = vec![left; frogs];
        stones.push(Stone::Empty);
        stones.extend(std::iter::repeat(right).take(frogs));
        Self(stones)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Stone] {
        &self.0
    }

    fn empty_index(&self) -> Option<usize> {
        self.0.iter().position(|s| *s == Stone::Empty)
    }
}

impl From<Vec<Stone>> for Stones {
    fn from(stones: Vec<Stone>) -> Self {
        Self(stones)
    }
}

impl fmt::Display for Stones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stone in &self.0 {
            write!(f, "{}", stone.symbol())?;
        }
        Ok(())
    }
}

impl Serialize for Stones {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Move the frog on stone `from` onto the empty stone `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leap {
    pub from: usize,
    pub to: usize,
}

impl Transition<Stones> for Leap {
    fn apply(&self, state: &mut Stones) {
        state.0[self.to] = state.0[self.from];
        state.0[self.from] = Stone::Empty;
    }
}

/// Leaps that fill the empty stone, in order: green step, green jump,
/// brown step, brown jump.
#[must_use]
pub fn transitions(stones: &Stones) -> Vec<Leap> {
    let row = stones.as_slice();
    if row.len() < 2 {
        return Vec::new();
    }
    let Some(to) = stones.empty_index() else {
        return Vec::new();
    };
    let mut leaps = Vec::with_capacity(4);
    for from in [to.checked_sub(1), to.checked_sub(2)].into_iter().flatten() {
        if row[from] == Stone::Green {
            leaps.push(Leap { from, to });
        }
    }
    for from in [to + 1, to + 2] {
        if row.get(from) == Some(&Stone::Brown) {
            leaps.push(Leap { from, to });
        }
    }
    leaps
}

/// The puzzle for `frogs` frogs of each colour. No invariant is needed:
/// every leap keeps the row well formed.
#[must_use]
pub fn state_space(frogs: usize) -> StateSpace<Stones, Leap> {
    StateSpace::new(Stones::start(frogs), transitions)
}
