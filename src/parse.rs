//! Compiler from pattern text to atoms

use crate::charclasses;
use crate::insn::{Atom, AtomKind, CompiledPattern};
use crate::types::{GroupId, Quantifier, Slice, MAX_CAPTURE_GROUPS, MAX_PATTERN_LEN, REPEAT_MAX};
use log::{debug, trace};
use thiserror::Error;

/// Represents an error encountered while validating or compiling a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The atom buffer filled up before the pattern was exhausted.
    #[error("pattern does not fit in {capacity} atoms")]
    CompileOverflow { capacity: usize },

    #[error("pattern is {len} bytes long (max: {max})")]
    PatternTooLong { len: usize, max: usize },

    #[error("capture group count limit exceeded (max: {max})")]
    CaptureGroupLimit { max: usize },

    /// The pattern is not written as `/pattern/g`.
    #[error("pattern must be delimited as /pattern/g")]
    MissingDelimiters,

    #[error("unbalanced brackets in pattern")]
    UnbalancedBrackets,
}

/// Bytes which end a literal run.
#[inline]
fn is_meta(c: u8) -> bool {
    matches!(
        c,
        b'^' | b'$' | b'.' | b'*' | b'+' | b'?' | b'|' | b'(' | b')' | b'[' | b'{' | b'\\'
    )
}

/// Parse a run of decimal digits at \p pos.
/// \return the value and the position after the digits, or None if there are
/// no digits or the value exceeds REPEAT_MAX.
fn parse_decimal(text: &[u8], mut pos: usize) -> Option<(u16, usize)> {
    let start = pos;
    let mut value: u32 = 0;
    while let Some(&c) = text.get(pos) {
        if !c.is_ascii_digit() {
            break;
        }
        value = value * 10 + u32::from(c - b'0');
        if value > u32::from(REPEAT_MAX) {
            return None;
        }
        pos += 1;
    }
    if pos == start {
        None
    } else {
        Some((value as u16, pos))
    }
}

/// Try to parse `{min}`, `{min,}` or `{min,max}` where \p pos points at the
/// opening brace.
/// \return the quantifier and the position after the closing brace, or None
/// if the braces are malformed.
pub(crate) fn parse_bounds(text: &[u8], pos: usize) -> Option<(Quantifier, usize)> {
    debug_assert_eq!(text.get(pos), Some(&b'{'));
    let (min, mut pos) = parse_decimal(text, pos + 1)?;
    let mut max = min;
    if text.get(pos) == Some(&b',') {
        pos += 1;
        max = REPEAT_MAX;
        if let Some((n, next)) = parse_decimal(text, pos) {
            if min > n {
                return None;
            }
            max = n;
            pos = next;
        }
    }
    if text.get(pos) != Some(&b'}') {
        return None;
    }
    Some((Quantifier { min, max }, pos + 1))
}

/// \return whether a quantifier starts at \p pos.
fn quantifier_follows(text: &[u8], pos: usize) -> bool {
    match text.get(pos) {
        Some(b'*') | Some(b'+') | Some(b'?') => true,
        Some(b'{') => parse_bounds(text, pos).is_some(),
        _ => false,
    }
}

/// Represents the state used to compile a pattern.
struct Compiler<'p, 'a> {
    /// The pattern text.
    text: &'p [u8],

    /// Read position in the text.
    pos: usize,

    /// The caller's atom storage.
    atoms: &'a mut [Atom],

    /// Number of atoms written.
    len: usize,

    /// Number of capture groups opened.
    groups: usize,
}

impl<'p, 'a> Compiler<'p, 'a> {
    /// Peek at the byte \p offset past the read position.
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.get(self.pos + offset).copied()
    }

    /// Append an atom.
    fn emit(&mut self, kind: AtomKind) -> Result<(), Error> {
        let capacity = self.atoms.len();
        let slot = self
            .atoms
            .get_mut(self.len)
            .ok_or(Error::CompileOverflow { capacity })?;
        *slot = Atom::new(kind);
        self.len += 1;
        Ok(())
    }

    /// Attach \p q to the atom it modifies.
    /// That is the previous atom, unless that is a capture marker, in which
    /// case it is the atom before the marker.
    fn quantify(&mut self, q: Quantifier) {
        let target = match self.len {
            0 => None,
            n if self.atoms[n - 1].kind.is_capture_marker() => n.checked_sub(2),
            n => Some(n - 1),
        };
        match target {
            Some(ip) if self.atoms[ip].kind.is_repeatable() => {
                self.atoms[ip].quantifier = Some(q);
            }
            _ => debug!(
                "quantifier {} at offset {} has no repeatable target; ignored",
                q, self.pos
            ),
        }
    }

    fn consume_group_start(&mut self) -> Result<(), Error> {
        if self.groups >= MAX_CAPTURE_GROUPS {
            return Err(Error::CaptureGroupLimit {
                max: MAX_CAPTURE_GROUPS,
            });
        }
        let id = self.groups as GroupId;
        self.groups += 1;
        self.emit(AtomKind::CaptureStart(id))
    }

    fn consume_group_end(&mut self) -> Result<(), Error> {
        // Flat markers: close whichever group was opened last.
        let id = self.groups.saturating_sub(1) as GroupId;
        self.emit(AtomKind::CaptureEnd(id))
    }

    /// Consume `\` and what follows it.
    fn consume_escape(&mut self) -> Result<(), Error> {
        match self.peek_at(1) {
            None => {
                self.pos += 1;
                self.emit(AtomKind::Char(b'\\'))
            }
            Some(c) if charclasses::is_class_escape(c) => {
                let slice = Slice::new(self.pos, 2);
                self.pos += 2;
                self.emit(AtomKind::CharClass(slice))
            }
            Some(c) => {
                self.pos += 2;
                self.emit(AtomKind::Char(c))
            }
        }
    }

    /// Consume `[...]`. The interior is kept verbatim; escapes are resolved
    /// when matching.
    fn consume_bracket(&mut self) -> Result<(), Error> {
        let mut i = self.pos + 1;
        let negated = self.text.get(i) == Some(&b'^');
        if negated {
            i += 1;
        }
        let start = i;
        while i < self.text.len() && self.text[i] != b']' {
            i += if self.text[i] == b'\\' { 2 } else { 1 };
        }
        let end = i.min(self.text.len());
        let slice = Slice::new(start, end - start);
        self.pos = (end + 1).min(self.text.len());
        self.emit(if negated {
            AtomKind::CharClassNegated(slice)
        } else {
            AtomKind::CharClass(slice)
        })
    }

    /// Consume `{...}`: either a quantifier or a literal brace.
    fn consume_brace(&mut self) -> Result<(), Error> {
        match parse_bounds(self.text, self.pos) {
            Some((q, next)) => {
                self.quantify(q);
                self.pos = next;
                Ok(())
            }
            None => {
                debug!("malformed bounds at offset {}; treating '{{' as a literal", self.pos);
                self.pos += 1;
                self.emit(AtomKind::Char(b'{'))
            }
        }
    }

    /// Consume a run of plain bytes and escaped literals.
    /// The run stops before any meta byte, before a class escape, and before
    /// a byte that is about to be quantified.
    fn consume_literal_run(&mut self) -> Result<(), Error> {
        let text = self.text;
        let start = self.pos;
        let mut end = start;
        let mut count = 0;
        loop {
            let width = match text.get(end) {
                Some(&b'\\') => match text.get(end + 1) {
                    Some(&c) if !charclasses::is_class_escape(c) => 2,
                    _ => break,
                },
                Some(&c) if !is_meta(c) => 1,
                _ => break,
            };
            if quantifier_follows(text, end + width) {
                if count == 0 {
                    end += width;
                    count += 1;
                }
                break;
            }
            end += width;
            count += 1;
        }
        debug_assert!(count > 0, "literal run must make progress");
        self.pos = end;
        if count == 1 {
            let c = text[end - 1];
            self.emit(AtomKind::Char(c))
        } else {
            self.emit(AtomKind::CharSequence(Slice::new(start, end - start)))
        }
    }

    fn compile(mut self) -> Result<CompiledPattern<'p, 'a>, Error> {
        while let Some(c) = self.peek_at(0) {
            match c {
                b'^' => {
                    self.pos += 1;
                    self.emit(AtomKind::Begin)?
                }
                b'$' => {
                    self.pos += 1;
                    self.emit(AtomKind::End)?
                }
                b'.' => {
                    self.pos += 1;
                    self.emit(AtomKind::Dot)?
                }
                b'*' | b'+' | b'?' => {
                    self.quantify(match c {
                        b'*' => Quantifier::STAR,
                        b'+' => Quantifier::PLUS,
                        _ => Quantifier::OPTIONAL,
                    });
                    self.pos += 1;
                }
                b'|' => {
                    self.pos += 1;
                    self.emit(AtomKind::Or)?
                }
                b'(' => {
                    self.pos += 1;
                    self.consume_group_start()?
                }
                b')' => {
                    self.pos += 1;
                    self.consume_group_end()?
                }
                b'\\' => self.consume_escape()?,
                b'[' => self.consume_bracket()?,
                b'{' => self.consume_brace()?,
                _ => self.consume_literal_run()?,
            }
        }
        self.emit(AtomKind::Empty)?;
        trace!(
            "compiled {} pattern bytes into {} atoms ({} groups)",
            self.text.len(),
            self.len,
            self.groups
        );
        let Compiler {
            text,
            atoms,
            len,
            groups,
            ..
        } = self;
        let atoms: &'a [Atom] = atoms;
        Ok(CompiledPattern {
            text,
            atoms: &atoms[..len],
            groups,
        })
    }
}

/// Compile delimiter-stripped \p pattern into \p atoms.
/// The length of \p atoms is the capacity; compilation fails with
/// `Error::CompileOverflow` if the atoms (plus the terminator) do not fit.
pub fn compile<'p, 'a>(
    pattern: &'p [u8],
    atoms: &'a mut [Atom],
) -> Result<CompiledPattern<'p, 'a>, Error> {
    if pattern.len() > MAX_PATTERN_LEN {
        return Err(Error::PatternTooLong {
            len: pattern.len(),
            max: MAX_PATTERN_LEN,
        });
    }
    Compiler {
        text: pattern,
        pos: 0,
        atoms,
        len: 0,
        groups: 0,
    }
    .compile()
}
