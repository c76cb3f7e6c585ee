mod consts;
mod dead_positions;
mod error;
mod grid;
mod model_helpers;
mod models;
mod reachability;

pub use consts::*;
pub use dead_positions::{dead_position, is_alcove, is_corner, is_dead, DeadPosition};
pub use error::EtfError;
pub use models::{Cell, CellKind, Direction, Grid, Vec2};
