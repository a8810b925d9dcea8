//! Core puzzle state: disks, needles, the board and the session.

mod board;
mod disk;
pub mod invariants;
mod session;

pub use board::{Board, DiskLocation, Needle, NeedleId};
pub use disk::{Disk, LARGEST_DISK, MAX_DISKS, disk_set};
pub use session::{MOVE_LIMIT, Session, SessionOutcome};
