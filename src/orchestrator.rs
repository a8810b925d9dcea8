//! Session controller: prompts the player, validates moves and detects
//! the end of the game.

use crate::game::{
    Disk, DiskLocation, MAX_DISKS, NeedleId, Session, SessionOutcome, disk_set,
};
use crate::input::{Halt, LineSource, Prompt, ask};
use crate::render;
use std::io::{self, Write};
use tracing::{debug, info, instrument};

const SIZE_ATTEMPTS: usize = 3;
const DISK_ATTEMPTS: usize = 3;
const DESTINATION_ATTEMPTS: usize = 2;
// The replay question alone is unbounded, by design.
const REPLAY_ATTEMPTS: usize = usize::MAX;

/// How a whole run of sessions ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player declined a replay.
    Finished,
    /// Input closed at a prompt.
    Eof,
    /// A bounded prompt ran out of attempts.
    RetriesExhausted,
}

/// Drives puzzle sessions over a line source and an output sink.
///
/// Everything the player sees goes through `out`, and every answer
/// comes from `input`, so complete games can be scripted in tests.
pub struct Orchestrator<I, W> {
    input: I,
    out: W,
}

impl<I: LineSource, W: Write> Orchestrator<I, W> {
    /// Creates a controller over the given input and output.
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    /// Runs sessions until the player quits, input ends, or a bounded
    /// prompt fails hard.
    ///
    /// `preset_size` skips the opening size question for the first
    /// session only; replays always ask.
    pub fn run(&mut self, preset_size: Option<u32>) -> io::Result<ExitReason> {
        match self.run_inner(preset_size) {
            Ok(()) => Ok(ExitReason::Finished),
            Err(Halt::Eof) => Ok(ExitReason::Eof),
            Err(Halt::RetriesExhausted) => Ok(ExitReason::RetriesExhausted),
            Err(Halt::Io(err)) => Err(err),
        }
    }

    fn run_inner(&mut self, mut preset_size: Option<u32>) -> Result<(), Halt> {
        writeln!(self.out, "Towers of Hanoi")?;
        loop {
            let size = match preset_size.take() {
                Some(size) => size,
                None => self.choose_size()?,
            };
            let mut session = Session::new(size);
            writeln!(self.out, "{}", render::draw(session.board(), size))?;

            match self.play(&mut session)? {
                SessionOutcome::Won { moves } => {
                    let plural = if moves == 1 { "" } else { "s" };
                    writeln!(self.out, "You solved it in {moves} move{plural}!")?;
                }
                SessionOutcome::LimitExceeded => {
                    writeln!(
                        self.out,
                        "That makes {} moves and the tower still stands. The game is over.",
                        session.moves()
                    )?;
                }
            }

            if !self.offer_replay()? {
                info!("player declined a replay");
                return Ok(());
            }
        }
    }

    #[instrument(skip(self))]
    fn choose_size(&mut self) -> Result<u32, Halt> {
        let prompt = Prompt::new(
            format!("How many disks will you start with (1 to {MAX_DISKS})? "),
            SIZE_ATTEMPTS,
            format!("Pick a number between 1 and {MAX_DISKS}."),
            "That makes three. Come back when you know what you want.",
        );
        ask(&mut self.input, &mut self.out, &prompt, |line| {
            parse_number(line).filter(|n| (1..=MAX_DISKS).contains(n))
        })
    }

    fn play(&mut self, session: &mut Session) -> Result<SessionOutcome, Halt> {
        loop {
            let (disk, source) = self.select_disk(session)?;
            let dest = self.select_destination(disk, source)?;

            if !session.board().can_place(disk, dest) {
                // The only way can_place fails is a smaller disk on top.
                if let Some(resting) = session.board().top_disk(dest) {
                    debug!(%disk, %resting, "rejected an illegal placement");
                    writeln!(
                        self.out,
                        "Disk {disk} will not fit on top of disk {resting}. Try again."
                    )?;
                }
                continue;
            }

            session.apply(source, dest);
            writeln!(self.out, "{}", render::draw(session.board(), session.size()))?;

            if let Some(outcome) = session.outcome() {
                info!(?outcome, moves = session.moves(), "session over");
                return Ok(outcome);
            }
        }
    }

    /// Asks for a disk until the player names one that is free to move.
    ///
    /// Naming a disk outside the puzzle's set is malformed input and
    /// costs a bounded attempt; naming a buried disk just explains the
    /// problem and asks again, as often as it takes.
    #[instrument(skip(self, session))]
    fn select_disk(&mut self, session: &Session) -> Result<(Disk, NeedleId), Halt> {
        let choices = disk_set(session.size());
        let menu = disk_menu(&choices);
        let prompt = Prompt::new(
            format!("Which disk will you move ({menu})? "),
            DISK_ATTEMPTS,
            format!("There is no such disk here. Yours are {menu}."),
            "Three strikes. The needles will keep; goodbye.",
        );

        loop {
            let disk = ask(&mut self.input, &mut self.out, &prompt, |line| {
                parse_number(line)
                    .and_then(Disk::new)
                    .filter(|d| choices.contains(d))
            })?;

            match session.board().locate(disk) {
                DiskLocation::Top(source) => return Ok((disk, source)),
                DiskLocation::Buried(_) | DiskLocation::Absent => {
                    debug!(%disk, "picked a disk that is not movable");
                    writeln!(
                        self.out,
                        "Disk {disk} is buried. Only the top disk of a needle can move."
                    )?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn select_destination(&mut self, disk: Disk, source: NeedleId) -> Result<NeedleId, Halt> {
        let prompt = Prompt::new(
            format!("Which needle will disk {disk} go to? "),
            DESTINATION_ATTEMPTS,
            format!("Pick needle 1, 2 or 3, but not needle {source} where it already sits."),
            "Twice is enough. Find a quieter game.",
        );
        ask(&mut self.input, &mut self.out, &prompt, |line| {
            parse_number(line)
                .and_then(NeedleId::from_number)
                .filter(|dest| *dest != source)
        })
    }

    /// Empty input and anything starting with `n` decline; `y` accepts.
    #[instrument(skip(self))]
    fn offer_replay(&mut self) -> Result<bool, Halt> {
        let prompt = Prompt::new(
            "Play again (y/n)? ",
            REPLAY_ATTEMPTS,
            "Yes or no will do.",
            "So be it.",
        );
        ask(&mut self.input, &mut self.out, &prompt, |line| {
            match line.chars().next() {
                None => Some(false),
                Some('n' | 'N') => Some(false),
                Some('y' | 'Y') => Some(true),
                Some(_) => None,
            }
        })
    }
}

/// Parses a line of pure digits, rejecting signs and anything else.
fn parse_number(line: &str) -> Option<u32> {
    (!line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()))
        .then(|| line.parse().ok())
        .flatten()
}

fn disk_menu(choices: &[Disk]) -> String {
    match choices {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => {
            let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
            format!("{} or {last}", rest.join(", "))
        }
    }
}
