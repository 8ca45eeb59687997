// Vasudeva Alphabet
// Source alphabet and the built-in glyph table

/// Number of letters in the source alphabet.
pub const LETTER_COUNT: usize = 26;

/// The built-in Vasudeva glyph table, in alphabet order.
///
/// Several glyphs are ordinary characters (`|`, `/`, `\`, and the uppercase
/// `L`, `M`, `N`, `W`, `Y`, `Z`). Reverse translation always reads those as
/// glyphs.
pub const VASUDEVA_GLYPHS: [(char, char); LETTER_COUNT] = [
    ('a', 'Δ'),
    ('b', '∇'),
    ('c', '○'),
    ('d', '□'),
    ('e', '|'),
    ('f', '—'),
    ('g', '/'),
    ('h', '\\'),
    ('i', '•'),
    ('j', '⊞'),
    ('k', '⊘'),
    ('l', 'L'),
    ('m', 'M'),
    ('n', 'N'),
    ('o', '⊗'),
    ('p', 'Π'),
    ('q', 'Ξ'),
    ('r', '⊸'),
    ('s', '∿'),
    ('t', '⊥'),
    ('u', '∪'),
    ('v', '∨'),
    ('w', 'W'),
    ('x', '✕'),
    ('y', 'Y'),
    ('z', 'Z'),
];

/// Display name of the built-in table
pub const VASUDEVA_NAME: &str = "Vasudeva";

/// Check whether `c` is one of the source letters (`a`..=`z`).
pub fn is_source_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Iterate the source letters in alphabet order.
pub fn source_letters() -> impl Iterator<Item = char> {
    'a'..='z'
}

/// Simple lowercase normalization of a single char.
///
/// Returns `None` when the lowercase form is more than one char (for
/// example `İ`), since no such sequence can be a key of the table.
pub fn simple_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    let first = lower.next()?;
    match lower.next() {
        None => Some(first),
        Some(_) => None,
    }
}
