//! Arabic joining shaper

mod arabic;

pub use arabic::{Entry, Form, Joining, lookup, select_form};

/// Check if a character falls in the Arabic blocks the shaper handles
pub fn is_arabic(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'     // Arabic
        | '\u{0750}'..='\u{077F}'   // Arabic Supplement
        | '\u{08A0}'..='\u{08FF}'   // Arabic Extended-A
    )
}

/// Substitute contextual presentation forms into one run of text.
///
/// The run is shaped only if it contains at least one Arabic-block
/// character; RTL text in other scripts (Hebrew) comes back unchanged.
/// Within a shaped run, characters without a table entry pass through
/// as-is.
pub fn shape_text(text: &str) -> String {
    if !text.chars().any(is_arabic) {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut shaped = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        match lookup(c) {
            Some(entry) => shaped.push(entry.form(select_form(&chars, i, entry))),
            None => shaped.push(c),
        }
    }

    shaped
}
