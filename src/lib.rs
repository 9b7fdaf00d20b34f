/*!

# lwregex - a lightweight backtracking regex engine

This crate provides a small regular expression engine intended for constrained
environments. Patterns compile into a caller-supplied, fixed-capacity array of
atoms, and matching allocates nothing.

# Example: one-shot matching

The convenience entry point takes a pattern written as `/pattern/g`:

```rust
assert!(lwregex::regex_match("/ab*c/g", "xxabbbcyy"));
assert!(lwregex::regex_match("/[Hh]ello/g", "say hello"));
assert!(!lwregex::regex_match("/^[0-9]{2,3}$/g", "1234"));
```

# Example: compiling into your own buffer

```rust
use lwregex::{compile, Atom, Capture};
let mut atoms = [Atom::EMPTY; 16];
let re = compile(br"(\d+)-(\d+)", &mut atoms).unwrap();
let mut caps = [Capture::default(); 2];
let m = re.find(b"call 555-1234", &mut caps).unwrap();
assert_eq!(m, 5..13);
assert_eq!(caps[0].span(), Some((5, 3)));
assert_eq!(caps[1].span(), Some((9, 4)));
```

If the atoms do not fit, compilation fails rather than overrunning the buffer:

```rust
use lwregex::{compile, Atom, Error};
let mut atoms = [Atom::EMPTY; 2];
assert_eq!(compile(b"a.b", &mut atoms).unwrap_err(), Error::CompileOverflow { capacity: 2 });
```

# Example: an owned regex

With the `std` feature (on by default) there is an owned `Regex`:

```rust
use lwregex::Regex;
let re = Regex::new(r"/(\d{4})/g").unwrap();
let text = "Today is 2020-20-05";
let m = re.find(text).unwrap();
let group = m.group(1).unwrap();
assert_eq!(&text.as_bytes()[group], b"2020");
```

Ranges are byte offsets into the subject. Since `.` matches a single byte, a
range may end inside a multi-byte UTF-8 character:

```rust
use lwregex::Regex;
let re = Regex::new("/a./g").unwrap();
let m = re.find("a\u{e9}").unwrap();
assert_eq!(m.range(), 0..2);
assert!(!"a\u{e9}".is_char_boundary(m.end()));
```

# Supported Syntax

- `^` and `$` anchor to the start and end of the subject.
- `.` matches any byte.
- `*`, `+`, `?`, `{n}`, `{n,}` and `{n,m}` repeat the previous atom greedily.
- `[abc]`, `[a-z]` and `[^...]` are byte classes.
- `\d`, `\s`, `\w` and their negations `\D`, `\S`, `\W`.
- `|` offers an alternative to the single atom before it.
- `(...)` records a capture group. Groups do not nest and cannot be repeated.

Matching is byte-oriented; there is no Unicode awareness and no case folding.
Backreferences, lookaround and lazy quantifiers are not supported.

# Architecture

lwregex has a compiler which turns pattern text into a flat array of atoms,
and a backtracking interpreter which walks that array. Literal atoms refer back
into the pattern text instead of copying it, so the pattern text must outlive
the compiled form.

A first-byte search using `memchr` skips offsets which cannot start a match.

*/

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::all)]
#![allow(clippy::upper_case_acronyms, clippy::match_like_matches_macro)]
// Clippy's manual_range_contains suggestion produces worse codegen.
#![allow(clippy::manual_range_contains)]

pub use crate::api::*;

mod api;
mod bytesearch;
mod charclasses;
mod classicalbacktrack;
mod exec;
mod insn;
mod matchers;
mod parse;
mod startpredicate;
mod syntax;
mod types;
