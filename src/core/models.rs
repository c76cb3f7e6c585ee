#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Block,
    Free,
    Goal,
    Man,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub in_use: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// The grid after parsing. Rows keep the length of their source line, so they may be jagged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) rows: Vec<Vec<Cell>>,
}
