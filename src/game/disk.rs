//! Disks and the numbering scheme that encodes their size.

/// Largest puzzle the game supports.
pub const MAX_DISKS: u32 = 7;

/// Identifier of the largest disk in any puzzle.
pub const LARGEST_DISK: u32 = 2 * MAX_DISKS + 1;

/// A puzzle piece identified by an odd integer.
///
/// The identifier doubles as the size: a larger number is a larger
/// disk, so legality checks compare identifiers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(u32);

impl Disk {
    /// Creates a disk from its identifier.
    ///
    /// Returns `None` unless the identifier is odd and within the
    /// range any puzzle can use.
    pub fn new(id: u32) -> Option<Self> {
        (id % 2 == 1 && (3..=LARGEST_DISK).contains(&id)).then_some(Self(id))
    }

    /// The numeric identifier.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Printed half-width of the disk's bar in the drawing.
    pub fn half_width(self) -> usize {
        ((self.0 - 1) / 2) as usize
    }

    /// True if this disk may rest directly on `below`.
    pub fn fits_on(self, below: Disk) -> bool {
        self.0 < below.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The disks in play for a puzzle of the given size, smallest first.
///
/// A puzzle of size `n` uses the `n` largest odd identifiers up to
/// [`LARGEST_DISK`], so every puzzle ends with the same biggest disk.
pub fn disk_set(size: u32) -> Vec<Disk> {
    debug_assert!(
        (1..=MAX_DISKS).contains(&size),
        "puzzle size out of range: {size}"
    );
    (2 * (MAX_DISKS - size + 1) + 1..=LARGEST_DISK)
        .step_by(2)
        .map(Disk)
        .collect()
}
