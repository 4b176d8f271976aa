#![cfg(feature = "std")]

//! Text rendering of boards and fleet status for the console.

use std::fmt::Write;

use crate::{
    config::BOARD_SIZE,
    fleet::Fleet,
    position::Position,
};

const WATER: char = '.';

/// Draw a board with `marker` on every listed cell. Cells off the board are
/// ignored.
pub fn render_board<'a, I>(cells: I, marker: char) -> String
where
    I: IntoIterator<Item = &'a Position>,
{
    let size = BOARD_SIZE as usize;
    let mut map = vec![vec![WATER; size]; size];
    for pos in cells {
        if let (Ok(r), Ok(c)) = (usize::try_from(pos.row()), usize::try_from(pos.column())) {
            if r < size && c < size {
                map[r][c] = marker;
            }
        }
    }

    let border = "═".repeat(2 * size + 4);
    let mut out = String::new();
    let _ = writeln!(out, "    ╔{}╗", border);
    out.push_str("    ║   ");
    for c in 0..size {
        let _ = write!(out, " {}", c);
    }
    out.push_str(" ║\n");
    let _ = writeln!(out, "    ╠{}╣", border);
    for (r, row) in map.iter().enumerate() {
        let _ = write!(out, "    ║ {:2}", r);
        for ch in row {
            let _ = write!(out, " {}", ch);
        }
        out.push_str(" ║\n");
    }
    let _ = writeln!(out, "    ╚{}╝", border);
    out
}

/// Reveal every ship cell with `#`.
pub fn render_fleet(fleet: &Fleet) -> String {
    render_board(fleet.ships().iter().flat_map(|s| s.positions()), '#')
}

/// Show recorded shots with `X`.
pub fn render_shots(shots: &[Position]) -> String {
    render_board(shots, 'X')
}

/// Per-kind counts followed by the list of ships still afloat.
pub fn render_status(fleet: &Fleet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Fleet: {} ships", fleet.len());
    for entry in fleet.summary() {
        if entry.total == 0 {
            continue;
        }
        let _ = writeln!(
            out,
            "  {:<8} ({}): {} placed, {} afloat",
            entry.kind,
            entry.kind.size(),
            entry.total,
            entry.floating
        );
    }
    let floating = fleet.floating_ships();
    let _ = writeln!(out, "Afloat: {}", floating.len());
    for ship in floating {
        let _ = writeln!(out, "  {} hits {}/{}", ship, ship.hit_count(), ship.size());
    }
    out
}
