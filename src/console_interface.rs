use std::io::{self, Write};
use crossterm::style::{style, Color, PrintStyledContent, Stylize};
use crossterm::tty::IsTty;
use crossterm::queue;
use crate::core::{
    dead_position, Cell, CellKind, DeadPosition, EtfError, Grid, Vec2, ALCOVE_MARKER, CORNER_MARKER,
};

/// Builds a grid one character at a time. `\n` starts a new row and `\r` is skipped.
pub fn parse_level(s: &str) -> Result<Grid, EtfError> {
    let mut grid = Grid::new();
    let mut row = 0;

    for ch in s.chars() {
        match ch {
            '\n' => row += 1,
            '\r' => continue,
            _ => {
                let Some(kind) = CellKind::from_symbol(ch) else {
                    return Err(EtfError::InvalidSymbol {
                        symbol: ch,
                        row,
                        col: grid.row_len(row),
                    });
                };
                grid.append_cell(row, Cell::new(kind));
            }
        }
    }

    Ok(grid)
}

fn glyph(grid: &Grid, pos: Vec2, annotate: bool) -> char {
    let kind = grid[&pos].kind;
    if annotate && kind == CellKind::Free {
        match dead_position(grid, pos) {
            Some(DeadPosition::Corner) => return CORNER_MARKER,
            Some(DeadPosition::Alcove) => return ALCOVE_MARKER,
            None => {}
        }
    }
    kind.symbol()
}

/// Like [`parse_level`], for raw file contents. Bytes that are not valid UTF-8 are
/// reported as invalid symbols at their row and column.
pub fn parse_level_bytes(bytes: &[u8]) -> Result<Grid, EtfError> {
    let err = match std::str::from_utf8(bytes) {
        Ok(s) => return parse_level(s),
        Err(err) => err,
    };

    let valid = &bytes[..err.valid_up_to()];
    // every byte of the prefix is ASCII or part of a whole character
    let prefix = std::str::from_utf8(valid).unwrap_or_default();
    let grid = parse_level(prefix)?;
    let row = prefix.matches('\n').count();

    Err(EtfError::InvalidByte {
        byte: bytes[err.valid_up_to()],
        row,
        col: grid.row_len(row),
    })
}

/// The grid in its input symbols, one line per row. With `annotate`, dead free cells
/// are replaced by their corner or alcove marker.
pub fn render_grid_to_string(grid: &Grid, annotate: bool) -> String {
    let mut result = String::new();
    for (i, row) in grid.rows().iter().enumerate() {
        for j in 0..row.len() {
            result.push(glyph(grid, Vec2::new(i, j), annotate));
        }
        result.push('\n');
    }
    result
}

/// Writes the diagnostic rendering to stderr, colouring markers when stderr is a terminal.
pub fn write_diagnostic(grid: &Grid, annotate: bool) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    if !stderr.is_tty() {
        stderr.write_all(render_grid_to_string(grid, annotate).as_bytes())?;
        return stderr.flush();
    }

    for (i, row) in grid.rows().iter().enumerate() {
        for j in 0..row.len() {
            let ch = glyph(grid, Vec2::new(i, j), annotate);
            let color = match ch {
                CORNER_MARKER | ALCOVE_MARKER => Color::Red,
                '#' => Color::DarkGrey,
                '.' => Color::Yellow,
                '$' => Color::Cyan,
                '@' => Color::Green,
                _ => Color::Reset,
            };
            queue!(stderr, PrintStyledContent(style(ch).with(color)))?;
        }
        stderr.write_all(b"\n")?;
    }
    stderr.flush()
}
