//! Run group reordering
//!
//! Approximates the visual placement of RTL segments relative to
//! surrounding LTR text. Consecutive RTL and neutral runs form a group
//! whose run order is reversed as a whole; LTR runs stay in place and
//! bound the groups. The reversal is shallow: text inside each run is
//! left exactly as it arrived.

use crate::class::Direction;
use crate::runs::Run;

/// Reverse the run order inside every RTL/neutral group.
///
/// An LTR run flushes the group accumulated so far and follows it
/// unmodified; a group still open at the end of input is flushed last.
pub fn reorder_groups(runs: Vec<Run>) -> Vec<Run> {
    let mut ordered: Vec<Run> = Vec::with_capacity(runs.len());
    let mut group: Vec<Run> = Vec::new();

    for run in runs {
        if run.direction == Direction::Ltr {
            ordered.extend(group.drain(..).rev());
            ordered.push(run);
        } else {
            group.push(run);
        }
    }
    ordered.extend(group.drain(..).rev());

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(direction: Direction, text: &str) -> Run {
        Run {
            direction,
            text: text.to_string(),
        }
    }

    fn texts(runs: &[Run]) -> Vec<&str> {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_empty() {
        assert!(reorder_groups(Vec::new()).is_empty());
    }

    #[test]
    fn test_ltr_only_is_stable() {
        let runs = vec![run(Direction::Ltr, "ab"), run(Direction::Ltr, "cd")];
        assert_eq!(texts(&reorder_groups(runs)), vec!["ab", "cd"]);
    }

    #[test]
    fn test_whole_input_group_is_reversed() {
        let runs = vec![
            run(Direction::Neutral, "("),
            run(Direction::Rtl, "R"),
            run(Direction::Neutral, ")"),
        ];
        assert_eq!(texts(&reorder_groups(runs)), vec![")", "R", "("]);
    }

    #[test]
    fn test_ltr_bounds_groups() {
        let runs = vec![
            run(Direction::Ltr, "a"),
            run(Direction::Neutral, " "),
            run(Direction::Rtl, "R"),
            run(Direction::Neutral, ", "),
            run(Direction::Ltr, "b"),
            run(Direction::Rtl, "S"),
        ];
        // Middle group reverses between the LTR runs, trailing group flushes
        assert_eq!(
            texts(&reorder_groups(runs)),
            vec!["a", ", ", "R", " ", "b", "S"]
        );
    }

    #[test]
    fn test_trailing_group_flushes() {
        let runs = vec![
            run(Direction::Ltr, "a"),
            run(Direction::Rtl, "R"),
            run(Direction::Neutral, "!"),
        ];
        assert_eq!(texts(&reorder_groups(runs)), vec!["a", "!", "R"]);
    }

    #[test]
    fn test_reversal_is_shallow() {
        // Run text is never touched, only run order
        let runs = vec![run(Direction::Rtl, "RS"), run(Direction::Neutral, "12")];
        assert_eq!(texts(&reorder_groups(runs)), vec!["12", "RS"]);
    }
}
