use std::ops::Add;
use crate::core::{Cell, CellKind, Direction, Vec2};

impl CellKind {
    pub fn from_symbol(symbol: char) -> Option<CellKind> {
        match symbol {
            '$' => Some(CellKind::Block),
            ' ' => Some(CellKind::Free),
            '.' => Some(CellKind::Goal),
            '@' => Some(CellKind::Man),
            '#' => Some(CellKind::Wall),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            CellKind::Block => '$',
            CellKind::Free => ' ',
            CellKind::Goal => '.',
            CellKind::Man => '@',
            CellKind::Wall => '#',
        }
    }
}

impl Cell {
    pub fn new(kind: CellKind) -> Cell {
        Cell {
            kind,
            in_use: matches!(kind, CellKind::Goal | CellKind::Man),
        }
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    pub fn is_goal(&self) -> bool {
        self.kind == CellKind::Goal
    }
}

impl Direction {
    /// Fixed enumeration order, shared by moves, pushes and the action sort.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Right => Vec2 { i: 0, j: 1 },
            Direction::Down => Vec2 { i: 1, j: 0 },
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl Vec2 {
    pub fn new(i: usize, j: usize) -> Vec2 {
        Vec2 { i: i as i32, j: j as i32 }
    }

    pub fn step(self, dir: Direction) -> Vec2 {
        self + dir.delta()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}
