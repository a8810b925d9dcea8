//! Interactive Towers of Hanoi.
//!
//! The crate splits into a pure board model and the machinery around it:
//!
//! - **game**: disks, needles, the board and the per-session move
//!   counter, with first-class invariants over all of it. No I/O.
//! - **input**: the bounded-retry prompt over an injected line source.
//! - **render**: fixed-width text drawing of the board.
//! - **orchestrator**: the state machine that ties them into a playable
//!   session (choose a size, move disks, offer a replay).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod input;
pub mod orchestrator;
pub mod render;

pub use game::{
    Board, Disk, DiskLocation, LARGEST_DISK, MAX_DISKS, MOVE_LIMIT, Needle, NeedleId, Session,
    SessionOutcome, disk_set,
};
pub use input::{Halt, LineSource, Prompt, StdinSource, ask};
pub use orchestrator::{ExitReason, Orchestrator};
