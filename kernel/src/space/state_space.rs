//! The immutable state-space descriptor.

use std::fmt;

use super::transition::Transition;

type Generator<S, T> = dyn Fn(&S) -> Vec<T> + Send + Sync;
type Predicate<S> = dyn Fn(&S) -> bool + Send + Sync;
type CostFn<S, C> = dyn Fn(&S, &C) -> C + Send + Sync;

/// Immutable bundle of start state, transition generator, invariant predicate
/// and optional cost function.
///
/// Construction performs no search. The goal is not part of the descriptor;
/// it is supplied per query, so one space can answer many questions.
///
/// All collaborators are `Send + Sync`: a descriptor can be shared by
/// concurrent runs, each owning its own frontier and visited set.
///
/// ```
/// use reach_kernel::space::StateSpace;
///
/// // Count up by one or two, never landing on a multiple of 5.
/// let space = StateSpace::new(0u32, |n: &u32| vec![n + 1, n + 2].into_iter()
///         .map(|v| move |s: &mut u32| *s = v)
///         .collect::<Vec<_>>())
///     .with_invariant(|n: &u32| n % 5 != 0);
/// assert!(!space.is_cost_enabled());
/// assert!(!space.is_valid(&10));
/// ```
pub struct StateSpace<S, T, C = ()> {
    start: S,
    initial_cost: C,
    generator: Box<Generator<S, T>>,
    invariant: Box<Predicate<S>>,
    cost: Option<Box<CostFn<S, C>>>,
}

impl<S, T> StateSpace<S, T, ()> {
    /// Describe a space without costs. The invariant defaults to "always true".
    pub fn new<G>(start: S, generator: G) -> Self
    where
        G: Fn(&S) -> Vec<T> + Send + Sync + 'static,
    {
        Self {
            start,
            initial_cost: (),
            generator: Box::new(generator),
            invariant: Box::new(|_| true),
            cost: None,
        }
    }
}

impl<S, T, C> StateSpace<S, T, C> {
    /// Describe a cost-ordered space.
    ///
    /// Every query against this descriptor uses cheapest-first ordering;
    /// `cost(successor, parent_cost)` yields the successor's cumulative cost.
    pub fn with_cost<G, F>(start: S, initial_cost: C, generator: G, cost: F) -> Self
    where
        G: Fn(&S) -> Vec<T> + Send + Sync + 'static,
        F: Fn(&S, &C) -> C + Send + Sync + 'static,
    {
        Self {
            start,
            initial_cost,
            generator: Box::new(generator),
            invariant: Box::new(|_| true),
            cost: Some(Box::new(cost)),
        }
    }

    /// Replace the invariant predicate. States failing it are never explored.
    #[must_use]
    pub fn with_invariant<P>(mut self, invariant: P) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.invariant = Box::new(invariant);
        self
    }

    #[must_use]
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Cumulative cost of the start state (`()` for spaces without cost).
    #[must_use]
    pub fn initial_cost(&self) -> &C {
        &self.initial_cost
    }

    /// Whether queries on this descriptor are cost-ordered.
    #[must_use]
    pub fn is_cost_enabled(&self) -> bool {
        self.cost.is_some()
    }

    /// Enumerate the transitions applicable to `state`, in generator order.
    #[must_use]
    pub fn transitions(&self, state: &S) -> Vec<T> {
        (self.generator)(state)
    }

    /// Evaluate the invariant predicate.
    #[must_use]
    pub fn is_valid(&self, state: &S) -> bool {
        (self.invariant)(state)
    }

    /// Cumulative cost of `successor` reached from a parent with `parent_cost`.
    ///
    /// Without a cost function the parent's cost is carried over unchanged.
    #[must_use]
    pub fn cost_of(&self, successor: &S, parent_cost: &C) -> C
    where
        C: Clone,
    {
        match &self.cost {
            Some(cost) => cost(successor, parent_cost),
            None => parent_cost.clone(),
        }
    }

    /// All valid successors of `state`, paired with the transition producing each.
    pub fn successors<'a>(&'a self, state: &'a S) -> impl Iterator<Item = (T, S)> + 'a
    where
        S: Clone,
        T: Transition<S>,
    {
        self.transitions(state).into_iter().filter_map(move |t| {
            let next = super::transition::successor(state, &t);
            self.is_valid(&next).then_some((t, next))
        })
    }
}

impl<S: fmt::Debug, T, C: fmt::Debug> fmt::Debug for StateSpace<S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSpace")
            .field("start", &self.start)
            .field("initial_cost", &self.initial_cost)
            .field("cost_enabled", &self.cost.is_some())
            .finish_non_exhaustive()
    }
}
