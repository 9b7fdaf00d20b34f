use core::fmt;
use core::ops;

/// A group index is u8.
/// GroupId 0 corresponds to the first capture group.
pub type GroupId = u8;

/// The maximum number of capture groups supported.
pub const MAX_CAPTURE_GROUPS: usize = GroupId::MAX as usize;

/// The largest repetition count a quantifier may express.
/// `*`, `+` and `{n,}` all use this as their upper bound.
pub const REPEAT_MAX: u16 = 0x7FFF;

/// The longest pattern text that can be compiled, in bytes.
pub const MAX_PATTERN_LEN: usize = u16::MAX as usize;

/// The number of atoms reserved by the convenience entry points.
pub const DEFAULT_ATOM_CAPACITY: usize = 100;

/// An atom pointer.
pub type IP = usize;

/// Range is used to express the extent of a match, as indexes into the subject.
pub type Range = ops::Range<usize>;

/// A reference into the pattern text, as a start index and a length.
/// Atoms never copy pattern bytes; they resolve a Slice against the text they
/// were compiled from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    pub start: u16,
    pub len: u16,
}

impl Slice {
    #[inline]
    pub(crate) fn new(start: usize, len: usize) -> Slice {
        debug_assert!(start + len <= MAX_PATTERN_LEN);
        Slice {
            start: start as u16,
            len: len as u16,
        }
    }

    /// \return the bytes of \p text covered by this slice.
    #[inline]
    pub fn get<'p>(&self, text: &'p [u8]) -> &'p [u8] {
        let start = self.start as usize;
        &text[start..start + self.len as usize]
    }
}

/// A repetition range attached to an atom, inclusive on both ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Quantifier {
    pub min: u16,
    pub max: u16,
}

impl Quantifier {
    /// `*`
    pub const STAR: Quantifier = Quantifier {
        min: 0,
        max: REPEAT_MAX,
    };

    /// `+`
    pub const PLUS: Quantifier = Quantifier {
        min: 1,
        max: REPEAT_MAX,
    };

    /// `?`
    pub const OPTIONAL: Quantifier = Quantifier { min: 0, max: 1 };

    #[inline]
    pub fn contains(&self, count: u16) -> bool {
        self.min <= count && count <= self.max
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.max == REPEAT_MAX {
            write!(f, "{{{},}}", self.min)
        } else if self.min == self.max {
            write!(f, "{{{}}}", self.min)
        } else {
            write!(f, "{{{},{}}}", self.min, self.max)
        }
    }
}

/// Representation of a capture slot.
/// Slots are supplied by the caller and filled in while matching; only flat
/// start/end bookkeeping is tracked.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Capture {
    start: Option<usize>,
    end: Option<usize>,
}

impl Capture {
    /// The subject offset at which the group was entered, if it was.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// \return the `(start_offset, length)` pair, if the group was closed.
    #[inline]
    pub fn span(&self) -> Option<(usize, usize)> {
        self.as_range().map(|r| (r.start, r.end - r.start))
    }

    #[inline]
    pub fn as_range(&self) -> Option<Range> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Some(start..end),
            _ => None,
        }
    }

    pub(crate) fn enter(&mut self, pos: usize) {
        self.start = Some(pos);
        self.end = None;
    }

    pub(crate) fn exit(&mut self, pos: usize) {
        if self.start.is_some() {
            self.end = Some(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_bookkeeping() {
        let mut cap = Capture::default();
        assert_eq!(cap.span(), None);
        cap.exit(3);
        assert_eq!(cap.span(), None, "exit without enter records nothing");
        cap.enter(2);
        assert_eq!(cap.start(), Some(2));
        assert_eq!(cap.span(), None);
        cap.exit(5);
        assert_eq!(cap.span(), Some((2, 3)));
        assert_eq!(cap.as_range(), Some(2..5));
        cap.enter(7);
        assert_eq!(cap.as_range(), None);
    }

    #[test]
    fn quantifier_display() {
        assert_eq!(Quantifier::STAR.to_string(), "{0,}");
        assert_eq!(Quantifier { min: 3, max: 3 }.to_string(), "{3}");
        assert_eq!(Quantifier::OPTIONAL.to_string(), "{0,1}");
    }
}
