use bimap::BiMap;
use serde::Serialize;
use crate::core::{Direction, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EtfOptions {
    /// Prune pushes onto dead positions and drop the unused goal/wall sort labels.
    pub optimize: bool,
}

/// What a state variable can hold at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateValue {
    Block,
    Free,
    Man,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Step(Direction),
    Finish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Move,
    Push,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub var: usize,
    pub from: StateValue,
    pub to: StateValue,
}

/// A guarded update; variables without a constraint are left unconstrained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub action: Action,
    pub constraints: Vec<Constraint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateSort {
    /// The legacy table also lists `goal` and `wall`, which no variable ever takes.
    pub legacy: bool,
}

#[derive(Clone, Debug)]
pub struct Lts {
    /// state variable index by grid position, and back
    pub variables: BiMap<Vec2, usize>,
    pub initial: Vec<StateValue>,
    pub transitions: Vec<Transition>,
    pub state_sort: StateSort,
    pub pruned_pushes: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LtsStats {
    pub variables: usize,
    pub moves: usize,
    pub pushes: usize,
    pub pruned_pushes: usize,
}
