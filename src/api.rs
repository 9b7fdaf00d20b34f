use crate::exec;
use crate::parse;
use crate::syntax;
use log::debug;

pub use crate::insn::{Atom, AtomKind, CompiledPattern};
pub use crate::types::{
    Capture, GroupId, Quantifier, Range, Slice, DEFAULT_ATOM_CAPACITY, MAX_CAPTURE_GROUPS,
    MAX_PATTERN_LEN, REPEAT_MAX,
};
pub use parse::{compile, Error};
pub use syntax::strip_delimiters;

#[cfg(feature = "std")]
use core::str::FromStr;

impl CompiledPattern<'_, '_> {
    /// \return whether \p subject contains a match.
    #[inline]
    pub fn is_match(&self, subject: &[u8]) -> bool {
        exec::search(self, subject, &mut [], true).is_some()
    }

    /// Search \p subject, recording capture groups into \p slots.
    /// Groups beyond `slots.len()` are matched but not recorded.
    #[inline]
    pub fn captures(&self, subject: &[u8], slots: &mut [Capture]) -> bool {
        exec::search(self, subject, slots, true).is_some()
    }

    /// Search \p subject and return the extent of the first match.
    #[inline]
    pub fn find(&self, subject: &[u8], slots: &mut [Capture]) -> Option<Range> {
        exec::search(self, subject, slots, true)
    }
}

/// Match a compiled pattern against \p subject, filling \p captures.
///
/// The same `captures` buffer must not be used by two matches at once; the
/// caller owns that discipline.
#[inline]
pub fn is_match(compiled: &CompiledPattern, subject: &[u8], captures: &mut [Capture]) -> bool {
    compiled.captures(subject, captures)
}

/// Test \p subject against a `/pattern/g` pattern in one call.
///
/// The pattern is compiled into a stack buffer of `DEFAULT_ATOM_CAPACITY`
/// atoms. A pattern that is malformed or does not fit never matches.
///
/// ```rust
/// assert!(lwregex::regex_match("/t.*en/g", "tilen"));
/// assert!(!lwregex::regex_match("/^[0-9]{2,3}$/g", "1234"));
/// ```
pub fn regex_match(pattern: &str, subject: &str) -> bool {
    let inner = match strip_delimiters(pattern) {
        Ok(inner) => inner,
        Err(err) => {
            debug!("rejected pattern {:?}: {}", pattern, err);
            return false;
        }
    };
    let mut atoms = [Atom::EMPTY; DEFAULT_ATOM_CAPACITY];
    match compile(inner.as_bytes(), &mut atoms) {
        Ok(cp) => cp.is_match(subject.as_bytes()),
        Err(err) => {
            debug!("failed to compile {:?}: {}", pattern, err);
            false
        }
    }
}

/// Configuration for building a [`Regex`].
/// The default reserves `DEFAULT_ATOM_CAPACITY` atoms, 16 capture slots, and
/// enables optimizations.
#[cfg(feature = "std")]
#[derive(Debug, Copy, Clone)]
pub struct Config {
    /// Number of atoms available to the compiler, including the terminator.
    pub atom_capacity: usize,

    /// Number of capture groups recorded per match.
    pub capture_capacity: usize,

    /// If set, try the matcher at every offset instead of using a byte search
    /// to skip offsets which cannot start a match.
    pub no_opt: bool,
}

#[cfg(feature = "std")]
impl Default for Config {
    fn default() -> Self {
        Config {
            atom_capacity: DEFAULT_ATOM_CAPACITY,
            capture_capacity: 16,
            no_opt: false,
        }
    }
}

/// A Match represents a portion of a string which was found to match a Regex.
///
/// Ranges are byte offsets. Matching is byte-oriented, so `.` or a negated
/// class can stop inside a multi-byte UTF-8 character; slice
/// `text.as_bytes()` rather than `text` unless the subject is ASCII.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct Match {
    /// The total range of the match. Note this may be empty, if the regex
    /// matched an empty string.
    pub range: Range,

    /// The list of captures, one per recorded capture group. For each capture,
    /// if the value is None, that group did not match.
    pub captures: Vec<Option<Range>>,
}

#[cfg(feature = "std")]
impl Match {
    /// Access a group by index, using the convention of Python's group()
    /// function. Index 0 is the total match, index 1 is the first capture
    /// group.
    #[inline]
    pub fn group(&self, idx: usize) -> Option<Range> {
        if idx == 0 {
            Some(self.range.clone())
        } else {
            self.captures.get(idx - 1).cloned().flatten()
        }
    }

    /// Returns the range over the starting and ending byte offsets of the match.
    #[inline]
    pub fn range(&self) -> Range {
        self.range.clone()
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Return an iterator over a Match. The first returned value is the total
    /// match, and subsequent values represent the capture groups.
    #[inline]
    pub fn groups(&self) -> Groups<'_> {
        Groups { mat: self, i: 0 }
    }
}

/// An iterator over the capture groups of a [`Match`]
///
/// This struct is created by the [`groups`] method on [`Match`].
///
/// [`groups`]: Match::groups
#[cfg(feature = "std")]
#[derive(Clone)]
pub struct Groups<'m> {
    mat: &'m Match,
    i: usize,
}

#[cfg(feature = "std")]
impl Iterator for Groups<'_> {
    type Item = Option<Range>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.i;
        if i <= self.mat.captures.len() {
            self.i += 1;
            Some(self.mat.group(i))
        } else {
            None
        }
    }
}

/// A Regex owns its pattern text and compiled atoms.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct Regex {
    text: Box<[u8]>,
    atoms: Vec<Atom>,
    groups: usize,
    config: Config,
}

#[cfg(feature = "std")]
impl Regex {
    /// Construct a regex from a `/pattern/g` string using the default config.
    #[inline]
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        Self::with_config(pattern, Config::default())
    }

    /// Construct a regex from a `/pattern/g` string with \p config.
    pub fn with_config(pattern: &str, config: Config) -> Result<Regex, Error> {
        Self::from_stripped(strip_delimiters(pattern)?, config)
    }

    /// Construct a regex from pattern text that has no `/.../g` wrapper.
    pub fn from_stripped(pattern: &str, config: Config) -> Result<Regex, Error> {
        let text: Box<[u8]> = pattern.as_bytes().into();
        let mut atoms = vec![Atom::EMPTY; config.atom_capacity];
        let (len, groups) = {
            let cp = compile(&text, &mut atoms)?;
            (cp.len(), cp.groups())
        };
        atoms.truncate(len);
        atoms.shrink_to_fit();
        Ok(Regex {
            text,
            atoms,
            groups,
            config,
        })
    }

    /// Borrow the compiled form.
    #[inline]
    pub fn as_compiled(&self) -> CompiledPattern<'_, '_> {
        CompiledPattern {
            text: &self.text,
            atoms: &self.atoms,
            groups: self.groups,
        }
    }

    /// \return whether \p text contains a match.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        exec::search(&self.as_compiled(), text.as_bytes(), &mut [], !self.config.no_opt).is_some()
    }

    /// Searches \p text to find the first match.
    /// The returned ranges are byte offsets and need not fall on character
    /// boundaries.
    pub fn find(&self, text: &str) -> Option<Match> {
        let mut slots = vec![Capture::default(); self.groups.min(self.config.capture_capacity)];
        let range = exec::search(
            &self.as_compiled(),
            text.as_bytes(),
            &mut slots,
            !self.config.no_opt,
        )?;
        Some(Match {
            range,
            captures: slots.iter().map(Capture::as_range).collect(),
        })
    }
}

#[cfg(feature = "std")]
impl FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a `/pattern/g` string into a regular expression
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}
