//! Japanese river crossing.
//!
//! A mother, a father, two daughters, two sons, a policeman and a prisoner
//! must cross with a two-seat boat. Rules:
//!
//! - the boat carries at most two and needs a passenger to leave a shore;
//! - a child never travels alone or with another child or the prisoner;
//! - away from the policeman, the prisoner is never with a family member;
//! - the prisoner never travels without a companion;
//! - a daughter is never with the father unless the mother is there too,
//!   and a son never with the mother unless the father is there too.
//!
//! The prisoner rules are only enforced while the boat is traveling; the
//! parent rules always are.

use std::fmt;
use std::str::FromStr;

use reach_kernel::space::{StateSpace, Transition};
use serde::Serialize;

use crate::error::PuzzleError;

/// Where a person is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Place {
    #[default]
    Shore1,
    Onboard,
    Shore2,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shore1 => "sh1",
            Self::Onboard => "~~~",
            Self::Shore2 => "SH2",
        })
    }
}

/// Where the boat is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dock {
    #[default]
    Shore1,
    Travel,
    Shore2,
}

impl fmt::Display for Dock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shore1 => "sh1",
            Self::Travel => "trv",
            Self::Shore2 => "SH2",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Shore1,
    Shore2,
}

impl Side {
    fn dock(self) -> Dock {
        match self {
            Self::Shore1 => Dock::Shore1,
            Self::Shore2 => Dock::Shore2,
        }
    }

    fn place(self) -> Place {
        match self {
            Self::Shore1 => Place::Shore1,
            Self::Shore2 => Place::Shore2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Person {
    Mother,
    Father,
    Daughter1,
    Daughter2,
    Son1,
    Son2,
    Policeman,
    Prisoner,
}

impl Person {
    pub const ALL: [Self; 8] = [
        Self::Mother,
        Self::Father,
        Self::Daughter1,
        Self::Daughter2,
        Self::Son1,
        Self::Son2,
        Self::Policeman,
        Self::Prisoner,
    ];

    const CHILDREN: [Self; 4] = [Self::Daughter1, Self::Daughter2, Self::Son1, Self::Son2];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Daughter1 => "daughter1",
            Self::Daughter2 => "daughter2",
            Self::Son1 => "son1",
            Self::Son2 => "son2",
            Self::Policeman => "policeman",
            Self::Prisoner => "prisoner",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Boat {
    pub dock: Dock,
    pub capacity: u16,
    pub passengers: u16,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            dock: Dock::Shore1,
            capacity: 2,
            passengers: 0,
        }
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{},{}}}", self.dock, self.passengers, self.capacity)
    }
}

/// The boat plus everybody's place, indexed by [`Person`].
///
/// Renders as the boat followed by each person in [`Person::ALL`] order:
/// `{trv,2,2},{sh1},{sh1},{sh1},{sh1},{sh1},{sh1},{~~~},{~~~}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Family {
    pub boat: Boat,
    persons: [Place; 8],
}

impl Family {
    #[must_use]
    pub fn place(&self, person: Person) -> Place {
        self.persons[person.index()]
    }

    fn onboard(&self, person: Person) -> bool {
        self.place(person) == Place::Onboard
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.boat)?;
        for place in &self.persons {
            write!(f, ",{{{place}}}")?;
        }
        Ok(())
    }
}

/// One step of the crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Push off from the current shore.
    Depart,
    /// Land; everybody onboard steps onto that shore.
    Arrive(Side),
    Board(Person),
    Alight(Person, Side),
}

impl Transition<Family> for Action {
    fn apply(&self, state: &mut Family) {
        match *self {
            Self::Depart => state.boat.dock = Dock::Travel,
            Self::Arrive(side) => {
                state.boat.dock = side.dock();
                state.boat.passengers = 0;
                for place in &mut state.persons {
                    if *place == Place::Onboard {
                        *place = side.place();
                    }
                }
            }
            Self::Board(person) => {
                state.persons[person.index()] = Place::Onboard;
                state.boat.passengers += 1;
            }
            Self::Alight(person, side) => {
                state.persons[person.index()] = side.place();
                state.boat.passengers = state.boat.passengers.saturating_sub(1);
            }
        }
    }
}

/// Boat actions first, then boarding and alighting per person.
#[must_use]
pub fn transitions(state: &Family) -> Vec<Action> {
    let mut actions = Vec::new();
    let dock = state.boat.dock;
    match dock {
        Dock::Shore1 | Dock::Shore2 => {
            if state.boat.passengers > 0 {
                actions.push(Action::Depart);
            }
        }
        Dock::Travel => {
            actions.push(Action::Arrive(Side::Shore1));
            actions.push(Action::Arrive(Side::Shore2));
        }
    }
    for person in Person::ALL {
        match (state.place(person), dock) {
            (Place::Shore1, Dock::Shore1) | (Place::Shore2, Dock::Shore2) => {
                actions.push(Action::Board(person));
            }
            (Place::Onboard, Dock::Shore1) => actions.push(Action::Alight(person, Side::Shore1)),
            (Place::Onboard, Dock::Shore2) => actions.push(Action::Alight(person, Side::Shore2)),
            _ => {}
        }
    }
    actions
}

/// The first rule a state breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Overload,
    /// A child is traveling alone, or with another child or the prisoner.
    TravelsAlone(Person),
    PrisonerWithFamily,
    PrisonerUnescorted,
    /// `child` is with `parent` but not with the other parent.
    Unsupervised { child: Person, parent: Person },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overload => write!(f, "boat overload"),
            Self::TravelsAlone(child) => write!(f, "{child} travels alone"),
            Self::PrisonerWithFamily => write!(f, "prisoner with family"),
            Self::PrisonerUnescorted => write!(f, "prisoner on boat"),
            Self::Unsupervised { child, parent } => write!(f, "{child} with {parent}"),
        }
    }
}

/// Check every rule, returning the first one broken.
///
/// # Errors
///
/// Returns the [`Violation`] found.
pub fn check(state: &Family) -> Result<(), Violation> {
    if state.boat.passengers > state.boat.capacity {
        return Err(Violation::Overload);
    }
    if state.boat.dock == Dock::Travel {
        if let Some(child) = Person::CHILDREN.into_iter().find(|c| state.onboard(*c)) {
            let accompanied_badly = Person::CHILDREN
                .into_iter()
                .chain([Person::Prisoner])
                .any(|p| p != child && state.onboard(p));
            if state.boat.passengers == 1 || accompanied_badly {
                return Err(Violation::TravelsAlone(child));
            }
        }
        let prisoner = state.place(Person::Prisoner);
        if prisoner != state.place(Person::Policeman)
            && Person::ALL[..6].iter().any(|p| state.place(*p) == prisoner)
        {
            return Err(Violation::PrisonerWithFamily);
        }
        if prisoner == Place::Onboard && state.boat.passengers < 2 {
            return Err(Violation::PrisonerUnescorted);
        }
    }
    let supervision = [
        (Person::Daughter1, Person::Father, Person::Mother),
        (Person::Daughter2, Person::Father, Person::Mother),
        (Person::Son1, Person::Mother, Person::Father),
        (Person::Son2, Person::Mother, Person::Father),
    ];
    for (child, parent, other) in supervision {
        let at = state.place(child);
        if at == state.place(parent) && at != state.place(other) {
            return Err(Violation::Unsupervised { child, parent });
        }
    }
    Ok(())
}

/// Invariant form of [`check`]; rejections are traced to the `log` facade.
#[must_use]
pub fn is_valid(state: &Family) -> bool {
    match check(state) {
        Ok(()) => true,
        Err(violation) => {
            log::trace!("reject {state}: {violation}");
            false
        }
    }
}

/// Everybody on the far shore.
#[must_use]
pub fn is_goal(state: &Family) -> bool {
    state.persons.iter().all(|p| *p == Place::Shore2)
}

/// Cumulative cost: transitions taken, then noise made by bored children
/// left on the near shore. Ordered by depth first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Cost {
    pub depth: u64,
    pub noise: u64,
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth={} noise={}", self.depth, self.noise)
    }
}

/// Preference used to pick among solutions.
///
/// The noise models never advance `depth`, so ordering is by noise alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    /// Fewest transitions.
    #[default]
    Depth,
    /// Son 1 is the louder one: 2 per step on the near shore, son 2 adds 1.
    Noise1,
    /// Son 2 is the louder one: 2 per step on the near shore, son 1 adds 1.
    Noise2,
}

impl CostModel {
    pub const ALL: [Self; 3] = [Self::Depth, Self::Noise1, Self::Noise2];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Depth => "depth",
            Self::Noise1 => "noise1",
            Self::Noise2 => "noise2",
        }
    }

    /// Cost of reaching `state` from a parent with cost `parent`.
    #[must_use]
    pub fn next(self, state: &Family, parent: &Cost) -> Cost {
        match self {
            Self::Depth => Cost {
                depth: parent.depth + 1,
                noise: parent.noise,
            },
            Self::Noise1 => Self::noisy(state, parent, 2, 1),
            Self::Noise2 => Self::noisy(state, parent, 1, 2),
        }
    }

    fn noisy(state: &Family, parent: &Cost, son1: u64, son2: u64) -> Cost {
        let mut noise = parent.noise;
        if state.place(Person::Son1) == Place::Shore1 {
            noise += son1;
        }
        if state.place(Person::Son2) == Place::Shore1 {
            noise += son2;
        }
        Cost {
            depth: parent.depth,
            noise,
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostModel {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| PuzzleError::UnknownCostModel { name: s.to_string() })
    }
}

/// The puzzle under `model`. Everybody and the boat start on the near shore.
#[must_use]
pub fn state_space(model: CostModel) -> StateSpace<Family, Action, Cost> {
    StateSpace::with_cost(
        Family::default(),
        Cost::default(),
        transitions,
        move |state: &Family, parent: &Cost| model.next(state, parent),
    )
    .with_invariant(is_valid)
}
