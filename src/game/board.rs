//! The three needles and the disks stacked on them.

use super::disk::{Disk, MAX_DISKS, disk_set};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// One of the three needles, displayed to the player as 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum NeedleId {
    /// Leftmost needle; all disks start here.
    First,
    /// Middle needle.
    Second,
    /// Rightmost needle; the goal.
    Third,
}

impl NeedleId {
    /// Zero-based index.
    pub fn index(self) -> usize {
        match self {
            NeedleId::First => 0,
            NeedleId::Second => 1,
            NeedleId::Third => 2,
        }
    }

    /// One-based number as shown to the player.
    pub fn number(self) -> u32 {
        self.index() as u32 + 1
    }

    /// Parses a player-facing needle number (1 to 3).
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(NeedleId::First),
            2 => Some(NeedleId::Second),
            3 => Some(NeedleId::Third),
            _ => None,
        }
    }
}

impl std::fmt::Display for NeedleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// An ordered stack of disks; index 0 is the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Needle(Vec<Disk>);

impl Needle {
    /// The disk on top, if any.
    pub fn top(&self) -> Option<Disk> {
        self.0.last().copied()
    }

    /// Number of disks on the needle.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no disks are on the needle.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All disks, bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.0
    }
}

/// Where a disk currently sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskLocation {
    /// On top of the given needle, free to move.
    Top(NeedleId),
    /// On the given needle but underneath another disk.
    Buried(NeedleId),
    /// Not on the board at all; cannot happen for disks in the
    /// active puzzle's set.
    Absent,
}

/// The full puzzle position: three needles and their stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    needles: [Needle; 3],
}

impl Board {
    /// Sets up a puzzle of the given size: every disk on the first
    /// needle, largest at the bottom.
    ///
    /// Callers must keep `size` within `1..=MAX_DISKS`.
    #[instrument]
    pub fn new(size: u32) -> Self {
        debug_assert!(
            (1..=MAX_DISKS).contains(&size),
            "puzzle size out of range: {size}"
        );
        let mut first = Needle::default();
        for disk in disk_set(size).into_iter().rev() {
            first.0.push(disk);
        }
        Self {
            needles: [first, Needle::default(), Needle::default()],
        }
    }

    /// The needle with the given id.
    pub fn needle(&self, id: NeedleId) -> &Needle {
        &self.needles[id.index()]
    }

    /// The disk on top of the given needle, if any.
    pub fn top_disk(&self, id: NeedleId) -> Option<Disk> {
        self.needle(id).top()
    }

    /// Finds the disk on the board.
    ///
    /// A buried disk is reported separately from a missing one: the
    /// former just means "not movable right now" and the game loop
    /// re-prompts on it.
    pub fn locate(&self, disk: Disk) -> DiskLocation {
        for id in NeedleId::iter() {
            let needle = self.needle(id);
            if needle.top() == Some(disk) {
                return DiskLocation::Top(id);
            }
            if needle.0.contains(&disk) {
                return DiskLocation::Buried(id);
            }
        }
        DiskLocation::Absent
    }

    /// True if `disk` may be placed on `dest` right now: the needle is
    /// empty or its top disk is larger.
    pub fn can_place(&self, disk: Disk, dest: NeedleId) -> bool {
        match self.top_disk(dest) {
            None => true,
            Some(top) => disk.fits_on(top),
        }
    }

    /// Moves the top disk of `source` onto `dest` and returns it.
    ///
    /// Legality is the caller's job; calling this with an empty source
    /// or an illegal placement is a programming error.
    #[instrument(skip(self))]
    pub fn move_top(&mut self, source: NeedleId, dest: NeedleId) -> Disk {
        debug_assert_ne!(source, dest, "a disk cannot move onto its own needle");
        let disk = self.needles[source.index()]
            .0
            .pop()
            .expect("move_top called on an empty needle");
        debug_assert!(
            self.can_place(disk, dest),
            "move_top would cover a smaller disk"
        );
        self.needles[dest.index()].0.push(disk);
        debug!(%disk, %source, %dest, "moved disk");
        disk
    }

    /// True if the third needle holds the whole puzzle.
    pub fn is_solved(&self, size: u32) -> bool {
        self.needles[NeedleId::Third.index()].len() as u32 == size
    }

    /// Total number of disks on the board.
    pub fn disk_count(&self) -> usize {
        self.needles.iter().map(Needle::len).sum()
    }
}
