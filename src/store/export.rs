//! Tabular export of a verdict table.
//!
//! One row per stored position, in table order:
//!
//! ```text
//! BoardStr,Player,Winner,Hints
//! "0,1,0",-1,1,xxx
//! ```
//!
//! `Player` and `Winner` use the cell encoding (1 black, -1 white, 0 for a
//! drawn `Winner`). `Hints` has one code per cell; see [`Hint`].

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::solver::{Hint, TableEntry};

/// Column header of the export.
pub const HEADER: &str = "BoardStr,Player,Winner,Hints";

/// One exported position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRow {
    /// Serialized representative board.
    pub board_str: String,
    pub player: i8,
    pub winner: i8,
    pub hints: String,
}

impl ExportRow {
    /// Row for one table entry.
    #[must_use]
    pub fn from_entry(entry: &TableEntry) -> Self {
        let cells = entry.key.cells();
        let board_str = cells
            .iter()
            .map(|stone| stone.to_i8().to_string())
            .collect::<Vec<_>>()
            .join(",");
        let to_move = entry.key.to_move();

        Self {
            board_str,
            player: to_move.to_i8(),
            winner: entry.record.verdict.winner(to_move).to_i8(),
            hints: Hint::codes(&entry.record.hints(cells.len())),
        }
    }

    /// Write as one CSV line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "\"{}\",{},{},{}",
            self.board_str, self.player, self.winner, self.hints
        )
    }
}

/// Write the header and every row.
pub fn write_csv<'a, W, I>(out: &mut W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ExportRow>,
{
    writeln!(out, "{HEADER}")?;
    for row in rows {
        row.write_to(out)?;
    }
    out.flush()
}
