//! Paired bracket mirroring
//!
//! When text is flipped into visual order an opening bracket must render
//! as its closing counterpart and vice versa. The table covers the four
//! ASCII bracket pairs that occur in label text.

/// Mirror counterpart of a bracket, or the character itself
pub fn mirrored(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        _ => c,
    }
}

/// Replace every bracket in `text` with its mirror counterpart
pub fn mirror_brackets(text: &str) -> String {
    text.chars().map(mirrored).collect()
}
