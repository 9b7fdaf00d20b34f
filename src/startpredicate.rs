//! Support for quickly finding potential match locations.

use crate::insn::{AtomKind, CompiledPattern};
use crate::matchers::literal_bytes;

/// The peeled prefix start predicate.
/// This is a fast way of locating the first potential match.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartPredicate<'p> {
    /// May match anywhere, including at the end of the subject.
    Arbitrary,

    /// The pattern begins with `^`.
    /// Only the start of the subject is tried, from the atom after the anchor.
    StartAnchored,

    /// Every match begins with this byte.
    Byte([u8; 1]),

    /// The whole pattern is this literal byte sequence.
    ByteSeq(&'p [u8]),
}

/// Compute the start predicate for a compiled pattern.
/// Anything other than the anchor is only an acceleration: trying the matcher
/// at every offset must give the same answer.
pub fn predicate_for_pattern<'p>(re: &CompiledPattern<'p, '_>) -> StartPredicate<'p> {
    let atoms = re.atoms();
    let first = &atoms[0];
    if first.kind == AtomKind::Begin {
        return StartPredicate::StartAnchored;
    }
    if first.quantifier.is_some() || atoms.len() < 2 {
        return StartPredicate::Arbitrary;
    }
    // A failing first atom may still be rescued by an alternative, possibly
    // after closing a group.
    let next = &atoms[1];
    let rescued = atoms[1..]
        .iter()
        .find(|atom| !matches!(atom.kind, AtomKind::CaptureEnd(_)))
        .is_some_and(|atom| atom.is_or());
    if rescued {
        return StartPredicate::Arbitrary;
    }
    match first.kind {
        AtomKind::Char(c) => StartPredicate::Byte([c]),
        AtomKind::CharSequence(s) => {
            let seq = s.get(re.text());
            if next.is_empty() && !seq.contains(&b'\\') {
                StartPredicate::ByteSeq(seq)
            } else {
                match literal_bytes(seq).next() {
                    Some(c) => StartPredicate::Byte([c]),
                    None => StartPredicate::Arbitrary,
                }
            }
        }
        _ => StartPredicate::Arbitrary,
    }
}
