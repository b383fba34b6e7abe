//! Arabic contextual forms
//!
//! Joining analysis and presentation-form selection for the Arabic-script
//! letters that appear in map labels (Arabic, Persian, Kurdish). Each
//! letter with cursive behavior maps to its Unicode Presentation Forms
//! (FB50-FDFF and FE70-FEFF) variants; everything else passes through the
//! shaper untouched.

/// How a letter participates in cursive joining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joining {
    /// Connects to both neighbors
    Dual,
    /// Connects to the preceding letter only, never extends a join forward
    Right,
}

/// Contextual form of a shaped letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// No connection on either side
    Isolated,
    /// Connected to the preceding letter only
    Final,
    /// Connected to the following letter only
    Initial,
    /// Connected on both sides
    Medial,
}

/// Shaping table entry for one base letter
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    base: char,
    joining: Joining,
    /// Presentation forms indexed isolated, final, initial, medial.
    /// Right-joining letters repeat the isolated form in the initial slot
    /// and the final form in the medial slot.
    forms: [char; 4],
}

impl Entry {
    /// Presentation form for the given context
    pub fn form(&self, form: Form) -> char {
        match form {
            Form::Isolated => self.forms[0],
            Form::Final => self.forms[1],
            Form::Initial => self.forms[2],
            Form::Medial => self.forms[3],
        }
    }

    /// True if the letter never joins toward its follower
    pub fn right_joining_only(&self) -> bool {
        self.joining == Joining::Right
    }
}

/// Contextual forms for every letter the shaper substitutes, sorted by
/// base code point for binary search.
#[rustfmt::skip]
static SHAPING_TABLE: &[Entry] = &[
    Entry { base: '\u{0622}', joining: Joining::Right, forms: ['\u{FE81}', '\u{FE82}', '\u{FE81}', '\u{FE82}'] }, // Alef with madda
    Entry { base: '\u{0623}', joining: Joining::Right, forms: ['\u{FE83}', '\u{FE84}', '\u{FE83}', '\u{FE84}'] }, // Alef with hamza above
    Entry { base: '\u{0624}', joining: Joining::Right, forms: ['\u{FE85}', '\u{FE86}', '\u{FE85}', '\u{FE86}'] }, // Waw with hamza
    Entry { base: '\u{0625}', joining: Joining::Right, forms: ['\u{FE87}', '\u{FE88}', '\u{FE87}', '\u{FE88}'] }, // Alef with hamza below
    Entry { base: '\u{0626}', joining: Joining::Dual,  forms: ['\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'] }, // Yeh with hamza
    Entry { base: '\u{0627}', joining: Joining::Right, forms: ['\u{FE8D}', '\u{FE8E}', '\u{FE8D}', '\u{FE8E}'] }, // Alef
    Entry { base: '\u{0628}', joining: Joining::Dual,  forms: ['\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'] }, // Beh
    Entry { base: '\u{0629}', joining: Joining::Right, forms: ['\u{FE93}', '\u{FE94}', '\u{FE93}', '\u{FE94}'] }, // Teh marbuta
    Entry { base: '\u{062A}', joining: Joining::Dual,  forms: ['\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'] }, // Teh
    Entry { base: '\u{062B}', joining: Joining::Dual,  forms: ['\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'] }, // Theh
    Entry { base: '\u{062C}', joining: Joining::Dual,  forms: ['\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'] }, // Jeem
    Entry { base: '\u{062D}', joining: Joining::Dual,  forms: ['\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'] }, // Hah
    Entry { base: '\u{062E}', joining: Joining::Dual,  forms: ['\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'] }, // Khah
    Entry { base: '\u{062F}', joining: Joining::Right, forms: ['\u{FEA9}', '\u{FEAA}', '\u{FEA9}', '\u{FEAA}'] }, // Dal
    Entry { base: '\u{0630}', joining: Joining::Right, forms: ['\u{FEAB}', '\u{FEAC}', '\u{FEAB}', '\u{FEAC}'] }, // Thal
    Entry { base: '\u{0631}', joining: Joining::Right, forms: ['\u{FEAD}', '\u{FEAE}', '\u{FEAD}', '\u{FEAE}'] }, // Reh
    Entry { base: '\u{0632}', joining: Joining::Right, forms: ['\u{FEAF}', '\u{FEB0}', '\u{FEAF}', '\u{FEB0}'] }, // Zain
    Entry { base: '\u{0633}', joining: Joining::Dual,  forms: ['\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'] }, // Seen
    Entry { base: '\u{0634}', joining: Joining::Dual,  forms: ['\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'] }, // Sheen
    Entry { base: '\u{0635}', joining: Joining::Dual,  forms: ['\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'] }, // Sad
    Entry { base: '\u{0636}', joining: Joining::Dual,  forms: ['\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'] }, // Dad
    Entry { base: '\u{0637}', joining: Joining::Dual,  forms: ['\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'] }, // Tah
    Entry { base: '\u{0638}', joining: Joining::Dual,  forms: ['\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'] }, // Zah
    Entry { base: '\u{0639}', joining: Joining::Dual,  forms: ['\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'] }, // Ain
    Entry { base: '\u{063A}', joining: Joining::Dual,  forms: ['\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'] }, // Ghain
    Entry { base: '\u{0641}', joining: Joining::Dual,  forms: ['\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'] }, // Feh
    Entry { base: '\u{0642}', joining: Joining::Dual,  forms: ['\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'] }, // Qaf
    Entry { base: '\u{0643}', joining: Joining::Dual,  forms: ['\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'] }, // Kaf
    Entry { base: '\u{0644}', joining: Joining::Dual,  forms: ['\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'] }, // Lam
    Entry { base: '\u{0645}', joining: Joining::Dual,  forms: ['\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'] }, // Meem
    Entry { base: '\u{0646}', joining: Joining::Dual,  forms: ['\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'] }, // Noon
    Entry { base: '\u{0647}', joining: Joining::Dual,  forms: ['\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'] }, // Heh
    Entry { base: '\u{0648}', joining: Joining::Right, forms: ['\u{FEED}', '\u{FEEE}', '\u{FEED}', '\u{FEEE}'] }, // Waw
    Entry { base: '\u{0649}', joining: Joining::Right, forms: ['\u{FEEF}', '\u{FEF0}', '\u{FEEF}', '\u{FEF0}'] }, // Alef maksura
    Entry { base: '\u{064A}', joining: Joining::Dual,  forms: ['\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'] }, // Yeh
    Entry { base: '\u{067E}', joining: Joining::Dual,  forms: ['\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'] }, // Peh
    Entry { base: '\u{0686}', joining: Joining::Dual,  forms: ['\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'] }, // Tcheh
    Entry { base: '\u{0698}', joining: Joining::Right, forms: ['\u{FB8A}', '\u{FB8B}', '\u{FB8A}', '\u{FB8B}'] }, // Jeh
    Entry { base: '\u{06A4}', joining: Joining::Dual,  forms: ['\u{FB6A}', '\u{FB6B}', '\u{FB6C}', '\u{FB6D}'] }, // Veh
    Entry { base: '\u{06A9}', joining: Joining::Dual,  forms: ['\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'] }, // Keheh
    Entry { base: '\u{06AF}', joining: Joining::Dual,  forms: ['\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'] }, // Gaf
    Entry { base: '\u{06C6}', joining: Joining::Right, forms: ['\u{FBD9}', '\u{FBDA}', '\u{FBD9}', '\u{FBDA}'] }, // Oe
    Entry { base: '\u{06CC}', joining: Joining::Dual,  forms: ['\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'] }, // Farsi yeh
];

/// Shaping table entry for a letter, if it has contextual forms.
///
/// Letters outside the table (hamza, digits, diacritics, Hebrew, Latin)
/// are never substituted and break joining chains on both sides.
pub fn lookup(c: char) -> Option<&'static Entry> {
    SHAPING_TABLE
        .binary_search_by_key(&c, |entry| entry.base)
        .ok()
        .map(|i| &SHAPING_TABLE[i])
}

/// Pick the contextual form for the letter at `index` of a run.
///
/// Only the immediate neighbors within the same run count: a join toward
/// the previous letter needs that letter in the table and not
/// right-joining-only, a join toward the next letter needs this letter to
/// extend forward and the next one to be in the table.
pub fn select_form(chars: &[char], index: usize, entry: &Entry) -> Form {
    let connects_prev = index > 0
        && lookup(chars[index - 1]).is_some_and(|prev| !prev.right_joining_only());
    let connects_next = index + 1 < chars.len()
        && !entry.right_joining_only()
        && lookup(chars[index + 1]).is_some();

    match (connects_prev, connects_next) {
        (true, true) => Form::Medial,
        (true, false) => Form::Final,
        (false, true) => Form::Initial,
        (false, false) => Form::Isolated,
    }
}
