use crate::charclasses;
use crate::insn::AtomKind;

/// \return whether the bracket interior \p class matches the byte \p c.
/// Respects \p negated.
///
/// The interior is interpreted left to right:
///   - `x-y`      → range, when `c` is not itself `-`
///   - `\d` etc.  → meta-class (uppercase inverts)
///   - `\x`       → escaped literal `x`
///   - `x`        → literal; a bare `-` only counts first or last
#[inline]
pub fn matches_class(class: &[u8], negated: bool, c: u8) -> bool {
    class_contains(class, c) != negated
}

fn class_contains(class: &[u8], c: u8) -> bool {
    let len = class.len();
    let mut i = 0;
    while i < len {
        if len - i >= 3 && class[i + 1] == b'-' && c != b'-' && class[i] <= c && c <= class[i + 2]
        {
            return true;
        }
        let b = class[i];
        if b == b'\\' && i + 1 < len {
            i += 1;
            let letter = class[i];
            match charclasses::matches_escape(letter, c) {
                Some(true) => return true,
                Some(false) => {}
                None if letter == c => return true,
                None => {}
            }
        } else if b == c {
            return c != b'-' || class[0] == b'-' || class[len - 1] == b'-';
        }
        i += 1;
    }
    false
}

/// \return whether a single-byte atom matches \p c.
/// \p text is the pattern text the atom's slices refer to.
#[inline]
pub fn match_one(kind: &AtomKind, text: &[u8], c: u8) -> bool {
    match *kind {
        AtomKind::Dot => true,
        AtomKind::Char(x) => x == c,
        AtomKind::CharClass(s) => matches_class(s.get(text), false, c),
        AtomKind::CharClassNegated(s) => matches_class(s.get(text), true, c),
        _ => false,
    }
}

/// Iterate the logical bytes of a literal run, resolving `\` escapes.
pub fn literal_bytes(seq: &[u8]) -> impl Iterator<Item = u8> + '_ {
    let mut i = 0;
    core::iter::from_fn(move || {
        let mut b = *seq.get(i)?;
        if b == b'\\' && i + 1 < seq.len() {
            i += 1;
            b = seq[i];
        }
        i += 1;
        Some(b)
    })
}

/// Compare the literal run \p seq against \p subject at \p pos.
/// \return the position after the run, or None on any mismatch.
#[inline]
pub fn match_sequence(seq: &[u8], subject: &[u8], pos: usize) -> Option<usize> {
    let mut pos = pos;
    for expected in literal_bytes(seq) {
        if *subject.get(pos)? != expected {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}
