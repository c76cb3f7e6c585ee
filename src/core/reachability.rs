use log::{debug, info};
use crate::core::{Direction, Grid, Vec2};

impl Grid {
    /// One row-major pass: a non-wall cell becomes used when any neighbour already is.
    /// Cells flipped earlier in the pass count for later cells.
    pub fn used_iteration(&mut self) -> bool {
        let mut changed = false;

        for i in 0..self.rows.len() {
            for j in 0..self.rows[i].len() {
                let cell = self.rows[i][j];
                if cell.in_use || cell.is_wall() {
                    continue;
                }

                let pos = Vec2::new(i, j);
                let has_used_neighbour = Direction::ALL
                    .iter()
                    .any(|&dir| self.is_used_at(&pos.step(dir)));

                if has_used_neighbour {
                    self.rows[i][j].in_use = true;
                    changed = true;
                }
            }
        }

        changed
    }

    /// Floods `in_use` out from goals and the man until nothing changes.
    /// Returns the number of passes, counting the final pass that changed nothing.
    pub fn mark_used(&mut self) -> usize {
        let mut passes = 1;
        while self.used_iteration() {
            debug!("reachability pass {} changed the used set", passes);
            passes += 1;
        }

        info!(
            "reachability reached a fixed point after {} passes: {} of {} cells in use",
            passes,
            self.used_positions().len(),
            self.cell_count()
        );
        passes
    }
}
