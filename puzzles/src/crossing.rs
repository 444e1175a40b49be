//! Goat, wolf and cabbage river crossing.
//!
//! Each actor is on the near shore, in the boat, or on the far shore. The
//! boat carries at most one actor, and nobody may be left with something
//! it eats while the other one is away in the boat.

use std::fmt;

use reach_kernel::space::{StateSpace, Transition};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Shore1,
    Travel,
    Shore2,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shore1 => "1",
            Self::Travel => "~",
            Self::Shore2 => "2",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Actor {
    Cabbage,
    Goat,
    Wolf,
}

impl Actor {
    pub const ALL: [Self; 3] = [Self::Cabbage, Self::Goat, Self::Wolf];

    fn index(self) -> usize {
        self as usize
    }
}

/// Positions of all three actors, indexed by [`Actor`].
///
/// Renders as cabbage, goat, wolf: `111` at the start, `1~1` with the goat
/// in the boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Actors([Position; 3]);

impl Actors {
    #[must_use]
    pub fn new(cabbage: Position, goat: Position, wolf: Position) -> Self {
        Self([cabbage, goat, wolf])
    }

    #[must_use]
    pub fn position(&self, actor: Actor) -> Position {
        self.0[actor.index()]
    }

    fn travelers(&self) -> usize {
        self.0.iter().filter(|p| **p == Position::Travel).count()
    }
}

impl fmt::Display for Actors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.0 {
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Put one actor somewhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub actor: Actor,
    pub to: Position,
}

impl Transition<Actors> for Move {
    fn apply(&self, state: &mut Actors) {
        state.0[self.actor.index()] = self.to;
    }
}

/// Moves available from `actors`, per actor in cabbage, goat, wolf order.
///
/// A shore actor may board; a traveling actor may land on either shore.
#[must_use]
pub fn transitions(actors: &Actors) -> Vec<Move> {
    let mut moves = Vec::new();
    for actor in Actor::ALL {
        match actors.position(actor) {
            Position::Shore1 | Position::Shore2 => moves.push(Move {
                actor,
                to: Position::Travel,
            }),
            Position::Travel => {
                moves.push(Move {
                    actor,
                    to: Position::Shore1,
                });
                moves.push(Move {
                    actor,
                    to: Position::Shore2,
                });
            }
        }
    }
    moves
}

/// At most one actor travels, and the goat is never left with the wolf or
/// the cabbage while the remaining actor is in the boat.
#[must_use]
pub fn is_valid(actors: &Actors) -> bool {
    let cabbage = actors.position(Actor::Cabbage);
    let goat = actors.position(Actor::Goat);
    let wolf = actors.position(Actor::Wolf);
    if actors.travelers() > 1 {
        return false;
    }
    if goat == wolf && cabbage == Position::Travel {
        return false;
    }
    !(goat == cabbage && wolf == Position::Travel)
}

/// Everybody on the far shore.
#[must_use]
pub fn is_goal(actors: &Actors) -> bool {
    actors.0.iter().all(|p| *p == Position::Shore2)
}

/// The puzzle: everybody starts on the near shore.
#[must_use]
pub fn state_space() -> StateSpace<Actors, Move> {
    StateSpace::new(Actors::default(), transitions).with_invariant(is_valid)
}
