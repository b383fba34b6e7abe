//! Label text normalization for the Carta renderer
//!
//! The renderer draws label strings exactly as stored: no bidirectional
//! reordering, no contextual shaping. Mixed-direction labels (street names
//! with Arabic, Persian or Kurdish text next to Latin text and numbers)
//! therefore have to be rewritten into rendering-ready form first:
//!
//! 1. Classify every character as RTL, LTR or neutral
//! 2. Segment the label into maximal same-class runs
//! 3. Substitute Arabic presentation forms inside Arabic RTL runs
//! 4. Reverse each RTL run and mirror its brackets
//! 5. Reverse the run order of every RTL/neutral group
//! 6. Concatenate and run a closing bracket-mirror pass
//!
//! Everything here is pure string-to-string work: no I/O, no shared state,
//! output length equal to input length in characters.

mod class;
mod mirror;
mod reorder;
mod runs;
mod shaping;

pub use class::Direction;
pub use mirror::{mirror_brackets, mirrored};
pub use reorder::reorder_groups;
pub use runs::{Run, segment};
pub use shaping::{is_arabic, shape_text};

/// Normalize a label for a renderer without bidi or shaping support.
///
/// RTL runs come back shaped (where the script is Arabic) and reversed,
/// every RTL/neutral run group is reversed relative to the surrounding LTR
/// runs, and paired brackets are mirrored into their visual counterparts.
/// Text containing neither RTL nor bracket characters passes through
/// unchanged.
///
/// The closing mirror pass covers the whole assembled string, so brackets
/// flip even when they only border LTR text.
pub fn normalize(text: &str) -> String {
    let mut runs = segment(text);

    for run in &mut runs {
        if run.direction.is_rtl() {
            let shaped = shape_text(&run.text);
            let reversed: String = shaped.chars().rev().collect();
            run.text = mirror_brackets(&reversed);
        }
    }

    let ordered = reorder_groups(runs);

    let mut label = String::with_capacity(text.len());
    for run in &ordered {
        label.push_str(&run.text);
    }

    mirror_brackets(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_pure_ltr_unchanged() {
        assert_eq!(normalize("Main Street 42"), "Main Street 42");
    }

    #[test]
    fn test_hebrew_is_reversed_not_shaped() {
        assert_eq!(normalize("\u{05D0}\u{05D1}\u{05D2}"), "\u{05D2}\u{05D1}\u{05D0}");
    }

    #[test]
    fn test_character_count_is_preserved() {
        let inputs = ["", "abc", "(\u{0633}\u{0644}\u{0627}\u{0645})", "a\u{05D0}1"];
        for input in inputs {
            assert_eq!(
                normalize(input).chars().count(),
                input.chars().count()
            );
        }
    }
}
