use crate::core::{CellKind, Direction, Vec2, FIELD_PREFIX};
use crate::lts::{Action, Constraint, Lts, LtsStats, StateSort, StateValue, TransitionKind};

impl StateValue {
    pub fn label(&self) -> &'static str {
        match self {
            StateValue::Block => "block",
            StateValue::Free => "free",
            StateValue::Man => "man",
        }
    }

    /// Initial value of a used cell. Goals start free; walls are never used.
    pub fn initial_for(kind: CellKind) -> StateValue {
        match kind {
            CellKind::Block => StateValue::Block,
            CellKind::Free | CellKind::Goal => StateValue::Free,
            CellKind::Man => StateValue::Man,
            CellKind::Wall => unreachable!("walls never become state variables"),
        }
    }
}

impl StateSort {
    pub fn labels(&self) -> Vec<&'static str> {
        if self.legacy {
            vec!["block", "free", "goal", "man", "wall"]
        } else {
            vec!["block", "free", "man"]
        }
    }

    pub fn index_of(&self, value: StateValue) -> usize {
        match value {
            StateValue::Block => 0,
            StateValue::Free => 1,
            StateValue::Man if self.legacy => 3,
            StateValue::Man => 2,
        }
    }
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Step(Direction::Left),
        Action::Step(Direction::Up),
        Action::Step(Direction::Right),
        Action::Step(Direction::Down),
        Action::Finish,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Step(Direction::Left) => "l",
            Action::Step(Direction::Up) => "u",
            Action::Step(Direction::Right) => "r",
            Action::Step(Direction::Down) => "d",
            Action::Finish => "finish",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Action::Step(Direction::Left) => 0,
            Action::Step(Direction::Up) => 1,
            Action::Step(Direction::Right) => 2,
            Action::Step(Direction::Down) => 3,
            Action::Finish => 4,
        }
    }
}

impl Constraint {
    pub fn new(var: usize, from: StateValue, to: StateValue) -> Self {
        Constraint { var, from, to }
    }
}

pub fn variable_name(pos: &Vec2) -> String {
    format!("{}_{}_{}", FIELD_PREFIX, pos.i, pos.j)
}

impl Lts {
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Variable positions ordered by variable index, which is row-major.
    pub fn ordered_positions(&self) -> Vec<Vec2> {
        let mut positions: Vec<(usize, Vec2)> = self
            .variables
            .iter()
            .map(|(&pos, &index)| (index, pos))
            .collect();
        positions.sort_unstable();
        positions.into_iter().map(|(_, pos)| pos).collect()
    }

    pub fn position_of(&self, var: usize) -> Option<&Vec2> {
        self.variables.get_by_right(&var)
    }

    pub fn stats(&self) -> LtsStats {
        let count = |kind: TransitionKind| self.transitions.iter().filter(|t| t.kind == kind).count();
        LtsStats {
            variables: self.variable_count(),
            moves: count(TransitionKind::Move),
            pushes: count(TransitionKind::Push),
            pruned_pushes: self.pruned_pushes,
        }
    }
}
