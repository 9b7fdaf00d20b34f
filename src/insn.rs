//! Compiled atoms for a pattern

use crate::types::{GroupId, Quantifier, Slice};
use core::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The list of atom kinds.
pub enum AtomKind {
    /// Match the start of the subject; emitted by '^'
    Begin,

    /// Match the end of the subject; emitted by '$'
    End,

    /// Match any single byte; emitted by '.'
    Dot,

    /// Match a single byte, possibly escaped in the pattern.
    Char(u8),

    /// Match a run of literal bytes. The slice may contain `\` escapes, which
    /// are resolved at match time.
    CharSequence(Slice),

    /// Match the next byte against a bracket interior or a `\d`-style escape.
    CharClass(Slice),

    /// Match the next byte against everything not in a bracket interior.
    CharClassNegated(Slice),

    /// Branch to the next atom if the previous one failed.
    Or,

    /// Enter a capture group.
    CaptureStart(GroupId),

    /// Exit a capture group.
    CaptureEnd(GroupId),

    /// The pattern is exhausted; every compiled pattern ends with exactly one.
    Empty,
}

impl AtomKind {
    /// \return whether a quantifier may be attached to this kind.
    #[inline]
    pub fn is_repeatable(&self) -> bool {
        matches!(
            self,
            AtomKind::Dot
                | AtomKind::Char(_)
                | AtomKind::CharSequence(_)
                | AtomKind::CharClass(_)
                | AtomKind::CharClassNegated(_)
        )
    }

    #[inline]
    pub fn is_capture_marker(&self) -> bool {
        matches!(self, AtomKind::CaptureStart(_) | AtomKind::CaptureEnd(_))
    }
}

/// One compiled unit of a pattern.
/// An atom without a quantifier matches exactly once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Atom {
    pub kind: AtomKind,
    pub quantifier: Option<Quantifier>,
}

impl Atom {
    /// The terminal atom, also usable to fill fresh atom buffers:
    /// `[Atom::EMPTY; 32]`.
    pub const EMPTY: Atom = Atom::new(AtomKind::Empty);

    #[inline]
    pub const fn new(kind: AtomKind) -> Atom {
        Atom {
            kind,
            quantifier: None,
        }
    }

    #[inline]
    pub fn is_or(&self) -> bool {
        self.kind == AtomKind::Or
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind == AtomKind::Empty
    }
}

impl Default for Atom {
    fn default() -> Self {
        Atom::EMPTY
    }
}

/// A pattern compiled into atoms.
/// Both the pattern text and the atom storage are owned by the caller; the
/// lifetimes keep this from outliving either of them.
#[derive(Debug, Copy, Clone)]
pub struct CompiledPattern<'p, 'a> {
    // The pattern text the atoms slice into, without delimiters.
    pub(crate) text: &'p [u8],

    // The atoms written by the compiler, including the trailing Empty.
    pub(crate) atoms: &'a [Atom],

    // Number of capture groups opened by the pattern.
    pub(crate) groups: usize,
}

impl<'p, 'a> CompiledPattern<'p, 'a> {
    /// The pattern text this was compiled from.
    #[inline]
    pub fn text(&self) -> &'p [u8] {
        self.text
    }

    /// The compiled atoms, terminated by exactly one `Empty` atom.
    #[inline]
    pub fn atoms(&self) -> &'a [Atom] {
        self.atoms
    }

    /// Number of atoms used, including the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the pattern compiled to nothing but the terminator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.len() <= 1
    }

    /// Number of capture groups in the pattern.
    #[inline]
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Writes \p bytes, escaping anything that isn't printable ASCII.
    fn write_bytes(f: &mut fmt::Formatter, bytes: &[u8]) -> fmt::Result {
        for &b in bytes {
            write!(f, "{}", core::ascii::escape_default(b))?;
        }
        Ok(())
    }

    fn fmt_atom(&self, f: &mut fmt::Formatter, atom: &Atom) -> fmt::Result {
        match atom.kind {
            AtomKind::Begin => f.write_str("Begin")?,
            AtomKind::End => f.write_str("End")?,
            AtomKind::Dot => f.write_str("Dot")?,
            AtomKind::Char(c) => {
                f.write_str("Char '")?;
                Self::write_bytes(f, &[c])?;
                f.write_str("'")?;
            }
            AtomKind::CharSequence(s) => {
                f.write_str("CharSequence \"")?;
                Self::write_bytes(f, s.get(self.text))?;
                f.write_str("\"")?;
            }
            AtomKind::CharClass(s) => {
                f.write_str("CharClass [")?;
                Self::write_bytes(f, s.get(self.text))?;
                f.write_str("]")?;
            }
            AtomKind::CharClassNegated(s) => {
                f.write_str("CharClassNegated [^")?;
                Self::write_bytes(f, s.get(self.text))?;
                f.write_str("]")?;
            }
            AtomKind::Or => f.write_str("Or")?,
            AtomKind::CaptureStart(id) => write!(f, "CaptureStart {}", id)?,
            AtomKind::CaptureEnd(id) => write!(f, "CaptureEnd {}", id)?,
            AtomKind::Empty => f.write_str("Empty")?,
        }
        if let Some(q) = atom.quantifier {
            write!(f, " {}", q)?;
        }
        Ok(())
    }
}

impl fmt::Display for CompiledPattern<'_, '_> {
    /// One atom per line, prefixed with its index.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (ip, atom) in self.atoms.iter().enumerate() {
            write!(f, "{:>3}: ", ip)?;
            self.fmt_atom(f, atom)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
