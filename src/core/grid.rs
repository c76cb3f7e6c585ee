use crate::core::{Cell, CellKind, Grid, Vec2};

impl Grid {
    /// An empty grid holds a single empty row.
    pub fn new() -> Self {
        Grid { rows: vec![Vec::new()] }
    }

    /// Appends a cell to `row`, padding with empty rows so row indices stay dense.
    pub fn append_cell(&mut self, row: usize, cell: Cell) {
        while self.rows.len() <= row {
            self.rows.push(Vec::new());
        }
        self.rows[row].push(cell);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.len())
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && (pos.j as usize) < self.row_len(pos.i as usize)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn kind_at(&self, pos: &Vec2) -> Option<CellKind> {
        self.get(pos).map(|c| c.kind)
    }

    pub fn is_wall_at(&self, pos: &Vec2) -> bool {
        self.kind_at(pos) == Some(CellKind::Wall)
    }

    pub fn is_used_at(&self, pos: &Vec2) -> bool {
        self.get(pos).is_some_and(|c| c.in_use)
    }

    /// All positions, row-major.
    pub fn iter_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| (0..row.len()).map(move |j| Vec2::new(i, j)))
    }

    /// Positions of cells taking part in the state space, row-major.
    pub fn used_positions(&self) -> Vec<Vec2> {
        self.iter_positions().filter(|pos| self[pos].in_use).collect()
    }

    pub fn goal_positions(&self) -> Vec<Vec2> {
        self.iter_positions().filter(|pos| self[pos].is_goal()).collect()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Cell;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.rows[index.i as usize][index.j as usize]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.rows[index.i as usize][index.j as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn append_beyond_last_row_pads_with_empty_rows() {
        let mut grid = Grid::new();
        grid.append_cell(2, Cell::new(CellKind::Wall));

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.row_len(0), 0);
        assert_eq!(grid.row_len(1), 0);
        assert_eq!(grid.row_len(2), 1);
    }

    #[test]
    fn lookups_respect_each_row_length() {
        let mut grid = Grid::new();
        grid.append_cell(0, Cell::new(CellKind::Wall));
        grid.append_cell(0, Cell::new(CellKind::Free));
        grid.append_cell(1, Cell::new(CellKind::Man));

        assert!(grid.get(&Vec2 { i: 0, j: 1 }).is_some());
        assert!(grid.get(&Vec2 { i: 1, j: 1 }).is_none());
        assert!(grid.get(&Vec2 { i: -1, j: 0 }).is_none());
        assert!(grid.get(&Vec2 { i: 0, j: -1 }).is_none());
        assert!(grid.get(&Vec2 { i: 2, j: 0 }).is_none());
        assert_eq!(grid.cell_count(), 3);
    }
}
