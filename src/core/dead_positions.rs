use crate::core::{CellKind, Direction, Grid, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadPosition {
    Corner,
    Alcove,
}

/// A block pushed onto a dead position can never be moved on to a goal.
/// Only depends on the layout: walls and goals, never on `in_use`.
pub fn dead_position(grid: &Grid, pos: Vec2) -> Option<DeadPosition> {
    if is_corner(grid, pos) {
        Some(DeadPosition::Corner)
    } else if is_alcove(grid, pos) {
        Some(DeadPosition::Alcove)
    } else {
        None
    }
}

pub fn is_dead(grid: &Grid, pos: Vec2) -> bool {
    dead_position(grid, pos).is_some()
}

fn can_hold_dead_block(grid: &Grid, pos: Vec2) -> bool {
    matches!(
        grid.kind_at(&pos),
        Some(CellKind::Free | CellKind::Block | CellKind::Man)
    )
}

/// a wall above or below, and a wall left or right
pub fn is_corner(grid: &Grid, pos: Vec2) -> bool {
    if !can_hold_dead_block(grid, pos) {
        return false;
    }

    let wall = |dir: Direction| grid.is_wall_at(&pos.step(dir));
    let vertical = wall(Direction::Up) || wall(Direction::Down);
    let horizontal = wall(Direction::Left) || wall(Direction::Right);
    vertical && horizontal
}

/// A pocket along a wall: walking either way along the wall reaches another wall
/// before any goal, with the flanking wall unbroken all the way.
pub fn is_alcove(grid: &Grid, pos: Vec2) -> bool {
    if !can_hold_dead_block(grid, pos) {
        return false;
    }

    Direction::ALL.iter().any(|&flank| {
        if !grid.is_wall_at(&pos.step(flank)) {
            return false;
        }
        let (forward, backward) = if flank.is_vertical() {
            (Direction::Right, Direction::Left)
        } else {
            (Direction::Down, Direction::Up)
        };
        is_half_alcove(grid, pos, flank, forward) && is_half_alcove(grid, pos, flank, backward)
    })
}

fn is_half_alcove(grid: &Grid, start: Vec2, flank: Direction, walk: Direction) -> bool {
    let mut pos = start;
    loop {
        match grid.kind_at(&pos) {
            None | Some(CellKind::Goal) => return false,
            Some(CellKind::Wall) => return true,
            Some(_) => {}
        }
        if !grid.is_wall_at(&pos.step(flank)) {
            return false;
        }
        pos = pos.step(walk);
    }
}
