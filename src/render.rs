//! Fixed-width text drawing of the board.

use crate::game::{Board, Disk, LARGEST_DISK, MAX_DISKS, NeedleId};
use std::fmt::Write as _;
use strum::IntoEnumIterator;

/// Draws the board as three labeled columns.
///
/// A disk with identifier `d` appears as a bar with `(d - 1) / 2` fill
/// characters on each side of its centered identifier; empty slots show
/// the bare needle. Column width is derived from [`MAX_DISKS`] and the
/// width of the largest identifier, so the drawing stays aligned even
/// if the bound grows past two-digit disks.
pub fn draw(board: &Board, size: u32) -> String {
    let id_width = LARGEST_DISK.to_string().len();
    let column = 2 * MAX_DISKS as usize + id_width;

    let mut out = String::new();
    for level in (0..size as usize).rev() {
        for id in NeedleId::iter() {
            let cell = match board.needle(id).disks().get(level) {
                Some(disk) => bar(*disk, id_width),
                None => "|".to_string(),
            };
            let _ = write!(out, " {cell:^column$}");
        }
        out.push('\n');
    }
    for id in NeedleId::iter() {
        let _ = write!(out, " {:^column$}", id.number());
    }
    out.push('\n');
    out
}

fn bar(disk: Disk, id_width: usize) -> String {
    let side = "=".repeat(disk.half_width());
    format!("{side}{:^id_width$}{side}", disk.id())
}
