//! Scripted whole-session tests for the game loop state machine.

use hanoi::{ExitReason, LineSource, Orchestrator};
use std::collections::VecDeque;
use std::io;

struct Script(VecDeque<String>);

impl Script {
    fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(lines.into_iter().map(Into::into).collect())
    }
}

impl LineSource for Script {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.0.pop_front())
    }
}

fn run_game<I, S>(lines: I) -> (ExitReason, String)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run_game_with_size(None, lines)
}

fn run_game_with_size<I, S>(preset: Option<u32>, lines: I) -> (ExitReason, String)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out = Vec::new();
    let mut game = Orchestrator::new(Script::new(lines), &mut out);
    let reason = game.run(preset).unwrap();
    drop(game);
    (reason, String::from_utf8(out).unwrap())
}

#[test]
fn test_single_disk_win_in_one_move() {
    let (reason, out) = run_game(["1", "15", "3", "n"]);
    assert_eq!(reason, ExitReason::Finished);
    assert!(out.contains("in 1 move!"), "{out}");
}

#[test]
fn test_preset_size_skips_the_opening_question() {
    // Empty answer at the replay prompt also declines.
    let (reason, out) = run_game_with_size(Some(1), ["15", "3", ""]);
    assert_eq!(reason, ExitReason::Finished);
    assert!(out.contains("in 1 move!"), "{out}");
    // Had the size question run, "15" would have drawn its warning.
    assert!(!out.contains("Pick a number"), "{out}");
}

#[test]
fn test_illegal_placement_restarts_disk_selection() {
    // 15 onto 13 is refused, the board is untouched, and both the disk
    // and the destination are chosen afresh.
    let (reason, out) = run_game([
        "2", "13", "2", // 13 to needle 2
        "15", "2", // refused: 15 will not fit on 13
        "15", "3", "13", "3", "n",
    ]);
    assert_eq!(reason, ExitReason::Finished);
    assert!(out.contains("will not fit"), "{out}");
    assert!(out.contains("in 3 moves!"), "{out}");
}

#[test]
fn test_buried_disk_reprompts_without_spending_the_budget() {
    // Four buried picks in a row exceed the bounded budget of three,
    // which proves the buried path never consumes it.
    let (reason, out) = run_game([
        "2", "15", "15", "15", "15", // buried every time
        "13", "2", "15", "3", "13", "3", "n",
    ]);
    assert_eq!(reason, ExitReason::Finished);
    assert_eq!(out.matches("is buried").count(), 4, "{out}");
    assert!(out.contains("in 3 moves!"), "{out}");
}

#[test]
fn test_three_malformed_sizes_end_the_run() {
    let (reason, out) = run_game(["0", "8", "abc"]);
    assert_eq!(reason, ExitReason::RetriesExhausted);
    assert!(out.contains("That makes three."), "{out}");
}

#[test]
fn test_disks_outside_the_set_spend_the_bounded_budget() {
    // Size 1 plays with disk 15 only; even numbers are malformed input.
    let (reason, out) = run_game(["1", "2", "4", "6"]);
    assert_eq!(reason, ExitReason::RetriesExhausted);
    assert!(out.contains("Three strikes."), "{out}");
}

#[test]
fn test_destination_budget_is_two() {
    // The source needle is never a legal destination.
    let (reason, out) = run_game(["1", "15", "1", "4"]);
    assert_eq!(reason, ExitReason::RetriesExhausted);
    assert!(out.contains("Twice is enough."), "{out}");
}

#[test]
fn test_end_of_input_quits_cleanly() {
    let (reason, _) = run_game(Vec::<String>::new());
    assert_eq!(reason, ExitReason::Eof);

    let (reason, _) = run_game(["2", "13"]);
    assert_eq!(reason, ExitReason::Eof);
}

#[test]
fn test_replay_restarts_at_size_selection() {
    let (reason, out) = run_game(["1", "15", "3", "y", "1", "15", "3", "n"]);
    assert_eq!(reason, ExitReason::Finished);
    assert_eq!(out.matches("in 1 move!").count(), 2, "{out}");
}

#[test]
fn test_replay_keeps_asking_on_odd_answers() {
    let (reason, out) = run_game(["1", "15", "3", "maybe", "definitely", "n"]);
    assert_eq!(reason, ExitReason::Finished);
    assert_eq!(out.matches("Yes or no will do.").count(), 2, "{out}");
}

#[test]
fn test_move_limit_ends_the_session() {
    // Shuttle disk 13 back and forth without ever solving: 64 round
    // trips is exactly the 128-move ceiling.
    let mut lines: Vec<String> = vec!["2".into()];
    for _ in 0..64 {
        for answer in ["13", "2", "13", "1"] {
            lines.push(answer.into());
        }
    }
    lines.push("n".into());

    let (reason, out) = run_game(lines);
    assert_eq!(reason, ExitReason::Finished);
    assert!(out.contains("That makes 128 moves"), "{out}");
    assert!(out.contains("The game is over."), "{out}");
}
