//! The `/pattern/g` wrapper accepted by the convenience entry points.

use crate::parse::Error;

/// Check that \p pattern is written as `/pattern/g` with balanced brackets,
/// and return the text between the delimiters.
///
/// Brackets are counted with a single counter across `()`, `[]` and `{}`;
/// the byte after a `\` is never counted. Brackets inside a class are counted
/// like any other.
///
/// ```rust
/// use lwregex::strip_delimiters;
/// assert_eq!(strip_delimiters("/t.*en/g"), Ok("t.*en"));
/// assert!(strip_delimiters("t.*en").is_err());
/// ```
pub fn strip_delimiters(pattern: &str) -> Result<&str, Error> {
    let inner = pattern
        .strip_prefix('/')
        .and_then(|p| p.strip_suffix("/g"))
        .ok_or(Error::MissingDelimiters)?;

    let mut depth: isize = 0;
    let mut bytes = inner.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'\\' => {
                bytes.next();
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth -= 1,
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::UnbalancedBrackets);
    }
    Ok(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        assert_eq!(strip_delimiters("/abc/g"), Ok("abc"));
        assert_eq!(strip_delimiters("//g"), Ok(""));
        assert_eq!(strip_delimiters("/abc/"), Err(Error::MissingDelimiters));
        assert_eq!(strip_delimiters("abc/g"), Err(Error::MissingDelimiters));
        assert_eq!(strip_delimiters("/g"), Err(Error::MissingDelimiters));
        assert_eq!(strip_delimiters(""), Err(Error::MissingDelimiters));
    }

    #[test]
    fn test_brackets() {
        assert_eq!(strip_delimiters("/a(b[c]{2})/g"), Ok("a(b[c]{2})"));
        assert_eq!(strip_delimiters("/a(b/g"), Err(Error::UnbalancedBrackets));
        assert_eq!(strip_delimiters("/a]/g"), Err(Error::UnbalancedBrackets));
        assert_eq!(strip_delimiters(r"/a\(b/g"), Ok(r"a\(b"));
        assert_eq!(strip_delimiters(r"/\[x\]/g"), Ok(r"\[x\]"));
        assert_eq!(strip_delimiters("/[(]/g"), Err(Error::UnbalancedBrackets));
    }
}
