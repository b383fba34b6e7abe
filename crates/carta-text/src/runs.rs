//! Run segmentation
//!
//! Splits a label into maximal substrings of uniform direction class.
//! Concatenating the runs in order always reproduces the input.

use crate::class::Direction;

/// A maximal same-direction substring of a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Direction class shared by every character in the run
    pub direction: Direction,
    /// Run text in original (logical) character order
    pub text: String,
}

/// Split text into maximal same-class runs.
///
/// A run boundary falls exactly where the direction class changes between
/// adjacent characters; the not-yet-started state acts as the sentinel, so
/// the first character always opens a run. Empty input yields no runs.
pub fn segment(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut direction: Option<Direction> = None;
    let mut buffer = String::new();

    for c in text.chars() {
        let class = Direction::of(c);
        if direction != Some(class) {
            if let Some(previous) = direction.replace(class) {
                runs.push(Run {
                    direction: previous,
                    text: std::mem::take(&mut buffer),
                });
            }
        }
        buffer.push(c);
    }

    if let Some(direction) = direction {
        runs.push(Run {
            direction,
            text: buffer,
        });
    }

    runs
}
