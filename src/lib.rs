//! Translates Sokoban screens into ETF labelled transition systems.
//!
//! A screen is parsed into a [`Grid`](core::Grid), the cells a man or block can ever
//! reach are flooded out from the goals and the man, and every move and push between
//! those cells becomes a guarded transition. A final `finish` self-loop is enabled once
//! every goal holds a block.

pub mod console_interface;
pub mod core;
pub mod lts;
#[cfg(test)]
mod test;

use crate::console_interface::parse_level_bytes;
use crate::core::{EtfError, Grid};
use crate::lts::{EtfOptions, Lts};

/// Parses `level`, brings its used set to a fixed point and builds the transition system.
pub fn translate_level(level: impl AsRef<[u8]>, options: &EtfOptions) -> Result<(Grid, Lts), EtfError> {
    let mut grid = parse_level_bytes(level.as_ref())?;
    grid.mark_used();
    let lts = Lts::from_grid(&grid, options);
    Ok((grid, lts))
}
