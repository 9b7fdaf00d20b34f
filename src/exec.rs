//! Execution engine bits: deciding where to run the matcher.

use crate::bytesearch::{ByteSearcher, EmptyString};
use crate::classicalbacktrack::MatchAttempter;
use crate::insn::CompiledPattern;
use crate::startpredicate::{predicate_for_pattern, StartPredicate};
use crate::types::{Capture, Range};
use log::trace;

/// \return the first match, trying each start position found by
/// \p prefix_search in turn.
fn next_match_with_prefix_search<PrefixSearch: ByteSearcher>(
    matcher: &mut MatchAttempter,
    subject: &[u8],
    prefix_search: &PrefixSearch,
) -> Option<Range> {
    let mut pos = 0;
    loop {
        // Find the next start location, or None if none.
        pos += prefix_search.find_in(&subject[pos..])?;
        matcher.reset_captures();
        if let Some(end) = matcher.try_at_pos(0, pos) {
            return Some(pos..end);
        }
        // The empty suffix is the last position worth trying.
        if pos >= subject.len() {
            return None;
        }
        pos += 1;
    }
}

/// Search \p subject for the first match of \p re.
///
/// A pattern starting with `^` is tried at offset 0 only. Anything else is
/// tried at every offset from 0 through `subject.len()` inclusive, stopping at
/// the first success. With \p optimize, offsets which cannot start a match
/// are skipped using a byte search.
///
/// Capture slots are reset before every attempt. After a failed search they
/// hold whatever the last attempt recorded.
pub fn search(
    re: &CompiledPattern,
    subject: &[u8],
    captures: &mut [Capture],
    optimize: bool,
) -> Option<Range> {
    let mut pred = predicate_for_pattern(re);
    if !optimize && pred != StartPredicate::StartAnchored {
        pred = StartPredicate::Arbitrary;
    }
    trace!("searching {} bytes with {:?}", subject.len(), pred);

    let mut matcher = MatchAttempter::new(re, subject, captures);
    match pred {
        StartPredicate::StartAnchored => {
            matcher.reset_captures();
            let end = matcher.try_at_pos(1, 0)?;
            Some(0..end)
        }
        StartPredicate::Arbitrary => {
            next_match_with_prefix_search(&mut matcher, subject, &EmptyString {})
        }
        StartPredicate::Byte(byte) => next_match_with_prefix_search(&mut matcher, subject, &byte),
        StartPredicate::ByteSeq(seq) => next_match_with_prefix_search(&mut matcher, subject, &seq),
    }
}
