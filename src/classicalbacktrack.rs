//! Classical backtracking execution engine
//!
//! The attempter walks the atoms iteratively. It recurses only to ask whether
//! the rest of the pattern can still match after a quantified atom, so the
//! recursion depth is bounded by the number of quantified atoms, never by the
//! subject length.

use crate::insn::{Atom, AtomKind, CompiledPattern};
use crate::matchers;
use crate::types::{Capture, Quantifier, IP};

#[derive(Debug)]
pub(crate) struct MatchAttempter<'p, 'a, 's, 'c> {
    text: &'p [u8],
    atoms: &'a [Atom],
    subject: &'s [u8],
    captures: &'c mut [Capture],
}

impl<'p, 'a, 's, 'c> MatchAttempter<'p, 'a, 's, 'c> {
    pub(crate) fn new(
        re: &CompiledPattern<'p, 'a>,
        subject: &'s [u8],
        captures: &'c mut [Capture],
    ) -> Self {
        debug_assert!(re.atoms.last().is_some_and(Atom::is_empty));
        Self {
            text: re.text,
            atoms: re.atoms,
            subject,
            captures,
        }
    }

    /// Forget everything recorded by a previous attempt.
    pub(crate) fn reset_captures(&mut self) {
        for cap in self.captures.iter_mut() {
            *cap = Capture::default();
        }
    }

    /// \return the IP of the alternative to try when the atom at \p ip fails,
    /// or None if it is not followed by an Or.
    /// Group ends between the atom and the Or are stepped over; the
    /// alternative starts right after the Or so its own group start runs.
    #[inline]
    fn alternative(&self, ip: IP) -> Option<IP> {
        // The failing atom is never the terminator, so ip + 1 is in bounds.
        let mut next = ip + 1;
        while matches!(self.atoms[next].kind, AtomKind::CaptureEnd(_)) {
            next += 1;
        }
        if self.atoms[next].is_or() {
            Some(next + 1)
        } else {
            None
        }
    }

    /// We arrived at an Or, so the branch before it matched. Skip the
    /// remaining alternatives, each with the group markers wrapped around it.
    fn skip_alternatives(&self, mut ip: IP) -> IP {
        while self.atoms[ip].is_or() {
            ip += 1;
            let mut opened = 0;
            while matches!(self.atoms[ip].kind, AtomKind::CaptureStart(_)) {
                opened += 1;
                ip += 1;
            }
            if self.atoms[ip].is_empty() {
                return ip;
            }
            if !self.atoms[ip].kind.is_capture_marker() {
                ip += 1;
            }
            while opened > 0 && matches!(self.atoms[ip].kind, AtomKind::CaptureEnd(_)) {
                opened -= 1;
                ip += 1;
            }
        }
        ip
    }

    /// \return whether nothing but capture markers sits between \p ip and the
    /// terminator.
    fn is_tail(&self, mut ip: IP) -> bool {
        while self.atoms[ip].kind.is_capture_marker() {
            ip += 1;
        }
        self.atoms[ip].is_empty()
    }

    /// Match one byte against a single-byte atom.
    #[inline(always)]
    fn match_byte(&self, kind: &AtomKind, pos: usize) -> Option<usize> {
        let c = *self.subject.get(pos)?;
        if matchers::match_one(kind, self.text, c) {
            Some(pos + 1)
        } else {
            None
        }
    }

    /// Match one repetition of a repeatable atom.
    #[inline(always)]
    fn match_once(&self, kind: &AtomKind, pos: usize) -> Option<usize> {
        match *kind {
            AtomKind::CharSequence(s) => matchers::match_sequence(s.get(self.text), self.subject, pos),
            _ => self.match_byte(kind, pos),
        }
    }

    /// Run the quantified atom at \p ip from \p start.
    /// Repetitions are consumed greedily; once `min` is reached, the rest of
    /// the pattern is tried after every repetition and the first success wins.
    /// If the rest of the pattern is empty there is no early exit, so the atom
    /// consumes up to `max`.
    fn run_range(&mut self, ip: IP, start: usize, q: Quantifier) -> Option<usize> {
        let kind = self.atoms[ip].kind;
        let next = ip + 1;
        let tail = self.is_tail(next);
        let mut pos = start;
        let mut count: u16 = 0;
        let mut probed = false;
        while count < q.max {
            match self.match_once(&kind, pos) {
                Some(p) => pos = p,
                None => break,
            }
            count += 1;
            probed = false;
            if count >= q.min && !tail {
                if let Some(end) = self.try_at_pos(next, pos) {
                    return Some(end);
                }
                probed = true;
            }
        }
        if q.contains(count) {
            // A failed probe at this position would fail again.
            if probed {
                None
            } else {
                self.try_at_pos(next, pos)
            }
        } else {
            let alt = self.alternative(ip)?;
            self.try_at_pos(alt, start)
        }
    }

    /// Attempt to match the atoms from \p ip against the subject at \p pos.
    /// \return the subject position where the pattern was exhausted, or None.
    pub(crate) fn try_at_pos(&mut self, mut ip: IP, mut pos: usize) -> Option<usize> {
        loop {
            let atom = self.atoms[ip];
            match atom.kind {
                AtomKind::Or => {
                    ip = self.skip_alternatives(ip);
                    continue;
                }
                AtomKind::CaptureStart(id) => {
                    if let Some(cap) = self.captures.get_mut(id as usize) {
                        cap.enter(pos);
                    }
                    ip += 1;
                    continue;
                }
                AtomKind::CaptureEnd(id) => {
                    if let Some(cap) = self.captures.get_mut(id as usize) {
                        cap.exit(pos);
                    }
                    ip += 1;
                    continue;
                }
                AtomKind::Empty => return Some(pos),
                _ => {}
            }

            if let Some(q) = atom.quantifier {
                return self.run_range(ip, pos, q);
            }

            let matched = match atom.kind {
                AtomKind::CharSequence(s) => {
                    matchers::match_sequence(s.get(self.text), self.subject, pos)
                }
                AtomKind::Begin => Some(pos).filter(|&p| p == 0),
                AtomKind::End => Some(pos).filter(|&p| p == self.subject.len()),
                _ => self.match_byte(&atom.kind, pos),
            };
            match matched {
                Some(p) => {
                    pos = p;
                    ip += 1;
                }
                // Retry the alternative from the same position.
                None => ip = self.alternative(ip)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::compile;

    fn run(pattern: &str, subject: &str) -> Option<usize> {
        let mut buf = [Atom::EMPTY; 32];
        let cp = compile(pattern.as_bytes(), &mut buf).unwrap();
        let mut caps = [Capture::default(); 4];
        MatchAttempter::new(&cp, subject.as_bytes(), &mut caps).try_at_pos(0, 0)
    }

    #[test]
    fn test_end_positions() {
        assert_eq!(run("abc", "abcd"), Some(3));
        assert_eq!(run("a.c", "axc"), Some(3));
        assert_eq!(run("x", "abc"), None);
        assert_eq!(run("", "abc"), Some(0));
    }

    #[test]
    fn test_greedy_to_tail() {
        assert_eq!(run(r"\d+", "12345x"), Some(5));
        assert_eq!(run(r"\d{2,3}", "12345"), Some(3));
        assert_eq!(run(r"(\d+)", "123"), Some(3));
    }

    #[test]
    fn test_early_exit() {
        // The remainder is tried after each repetition; the first success wins.
        assert_eq!(run("a.*c", "abcbc"), Some(3));
        assert_eq!(run("a+b", "aaab"), Some(4));
    }

    #[test]
    fn test_no_zero_repetition_probe() {
        // Once a repetition succeeds, zero repetitions are not revisited.
        assert_eq!(run("a*ab", "ab"), None);
        assert_eq!(run("a?a", "a"), None);
        assert_eq!(run("a?b", "b"), Some(1));
    }

    #[test]
    fn test_alternation() {
        assert_eq!(run("cd|ef", "ef"), Some(2));
        assert_eq!(run("cd|ef", "cd"), Some(2));
        assert_eq!(run("a|", "x"), Some(0));
        assert_eq!(run("a{2}|b", "b"), Some(1));
        assert_eq!(run("a*|b", "b"), Some(0));
        assert_eq!(run("a|b|c", "c"), Some(1));
        assert_eq!(run("a|b|c", "a"), Some(1));
    }

    #[test]
    fn test_alternation_across_groups() {
        assert_eq!(run("(ab)|(cd)", "ab"), Some(2));
        assert_eq!(run("(ab)|(cd)", "cd"), Some(2));
        assert_eq!(run("(ab)|(cd)", "xy"), None);
        assert_eq!(run("(a)|b", "b"), Some(1));
        assert_eq!(run("a|(b)", "a"), Some(1));
        assert_eq!(run("a|(b)", "b"), Some(1));
        // The group close after the last alternative belongs to the outer group.
        assert_eq!(run("x(cd|ef)y", "xcdy"), Some(4));
    }

    #[test]
    fn test_captures_recorded() {
        let mut buf = [Atom::EMPTY; 32];
        let cp = compile(br"x(\d+)y", &mut buf).unwrap();
        let mut caps = [Capture::default(); 2];
        let end = MatchAttempter::new(&cp, b"x42y", &mut caps).try_at_pos(0, 0);
        assert_eq!(end, Some(4));
        assert_eq!(caps[0].span(), Some((1, 2)));
        assert_eq!(caps[1].span(), None);
    }

    #[test]
    fn test_captures_beyond_slots_are_ignored() {
        let mut buf = [Atom::EMPTY; 32];
        let cp = compile(b"(a)(b)", &mut buf).unwrap();
        let mut caps = [Capture::default(); 1];
        let end = MatchAttempter::new(&cp, b"ab", &mut caps).try_at_pos(0, 0);
        assert_eq!(end, Some(2));
        assert_eq!(caps[0].as_range(), Some(0..1));
    }
}
