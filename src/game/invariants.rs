//! First-class invariants over a running session.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are checked in debug builds and are testable on their own.

use super::board::NeedleId;
use super::disk::disk_set;
use super::session::Session;
use strum::IntoEnumIterator;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Within every needle, identifiers strictly decrease bottom to top.
#[derive(Debug, Clone, Copy)]
pub struct OrderedNeedles;

impl Invariant<Session> for OrderedNeedles {
    fn holds(state: &Session) -> bool {
        NeedleId::iter().all(|id| {
            state
                .board()
                .needle(id)
                .disks()
                .windows(2)
                .all(|pair| pair[0].id() > pair[1].id())
        })
    }

    fn description() -> &'static str {
        "every needle holds strictly decreasing disks, bottom to top"
    }
}

/// The board holds exactly the chosen puzzle's disk set, each disk on
/// exactly one needle.
#[derive(Debug, Clone, Copy)]
pub struct DiskConservation;

impl Invariant<Session> for DiskConservation {
    fn holds(state: &Session) -> bool {
        let mut seen: Vec<u32> = NeedleId::iter()
            .flat_map(|id| state.board().needle(id).disks().iter().map(|d| d.id()))
            .collect();
        seen.sort_unstable();
        let expected: Vec<u32> = disk_set(state.size()).iter().map(|d| d.id()).collect();
        seen == expected
    }

    fn description() -> &'static str {
        "the needles together hold exactly the puzzle's disk set"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (OrderedNeedles, DiskConservation);
