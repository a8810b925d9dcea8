//! One play-through of the puzzle.

use super::board::{Board, NeedleId};
use super::disk::{Disk, MAX_DISKS};
use super::invariants::{InvariantSet, SessionInvariants};
use tracing::{debug, info, instrument};

/// Ceiling on moves per session, fixed at `2^MAX_DISKS` no matter the
/// chosen size. Generous for small puzzles, kept that way on purpose.
pub const MOVE_LIMIT: u32 = 1 << MAX_DISKS;

/// A single session: the board, the chosen size and the move count.
///
/// Sessions are created fresh for each play-through and thrown away
/// afterwards; nothing persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    size: u32,
    moves: u32,
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The whole tower reached the third needle.
    Won {
        /// Moves it took.
        moves: u32,
    },
    /// The move budget ran out first.
    LimitExceeded,
}

impl Session {
    /// Starts a session with `size` disks stacked on the first needle.
    #[instrument]
    pub fn new(size: u32) -> Self {
        info!(size, limit = MOVE_LIMIT, "starting session");
        Self {
            board: Board::new(size),
            size,
            moves: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The chosen puzzle size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Successful moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The fixed move ceiling for this session.
    pub fn move_limit(&self) -> u32 {
        MOVE_LIMIT
    }

    /// Applies a legal move and counts it.
    ///
    /// The caller has already validated the move with
    /// [`Board::can_place`]; see [`Board::move_top`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, source: NeedleId, dest: NeedleId) -> Disk {
        let disk = self.board.move_top(source, dest);
        self.moves += 1;
        debug!(%disk, moves = self.moves, "move counted");
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariant violated after move"
        );
        disk
    }

    /// The terminal state, if the session has reached one.
    ///
    /// A solving move wins even if it is the last one the budget
    /// allows; the limit is only checked on unsolved boards.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        if self.board.is_solved(self.size) {
            Some(SessionOutcome::Won { moves: self.moves })
        } else if self.moves >= MOVE_LIMIT {
            Some(SessionOutcome::LimitExceeded)
        } else {
            None
        }
    }
}
