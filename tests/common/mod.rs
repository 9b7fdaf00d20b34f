#![allow(clippy::uninlined_format_args)]

/// Test that \p pattern is rejected with default config.
#[track_caller]
pub fn test_parse_fails(pattern: &str) {
    let res = lwregex::Regex::new(pattern);
    assert!(res.is_err(), "Pattern should not have parsed: {}", pattern);
}

/// Format a Match by inserting commas between all capture groups.
fn format_match(r: &lwregex::Match, input: &str) -> String {
    let mut result = input[r.range()].to_string();
    for cg in r.captures.iter() {
        result.push(',');
        if let Some(cg) = cg {
            result.push_str(&input[cg.clone()])
        }
    }
    result
}

pub trait StringTestHelpers {
    /// "Fluent" style helper for testing that a String is equal to a str.
    fn test_eq(&self, s: &str);
}

impl StringTestHelpers for String {
    #[track_caller]
    fn test_eq(&self, rhs: &str) {
        assert_eq!(self.as_str(), rhs)
    }
}

/// A compiled regex which remembers a TestConfig.
#[derive(Debug, Clone)]
pub struct TestCompiledRegex {
    re: lwregex::Regex,
    tc: TestConfig,
}

impl TestCompiledRegex {
    /// Search for self in \p input, returning the first Match, or None if
    /// none.
    pub fn find(&self, input: &str) -> Option<lwregex::Match> {
        let found = self.re.find(input);
        // The boolean entry points must agree with find().
        assert_eq!(
            self.re.is_match(input),
            found.is_some(),
            "is_match disagrees with find for {:?} ({:?})",
            input,
            self.tc
        );
        found
    }

    /// Match against a string, returning the first formatted match.
    #[track_caller]
    pub fn match1f(&self, input: &str) -> String {
        match self.find(input) {
            Some(m) => format_match(&m, input),
            None => panic!("Failed to match {}", input),
        }
    }

    /// Match against a string, returning the match as a Vec containing None
    /// for unmatched groups, or the matched strings.
    #[track_caller]
    pub fn match1_vec<'b>(&self, input: &'b str) -> Vec<Option<&'b str>> {
        let m = self.find(input).expect("Failed to match");
        let mut result = vec![Some(&input[m.range()])];
        for cr in m.captures {
            result.push(cr.map(|r| &input[r]));
        }
        result
    }

    /// \return the range of the first match.
    #[track_caller]
    pub fn match1_range(&self, input: &str) -> lwregex::Range {
        match self.find(input) {
            Some(m) => m.range(),
            None => panic!("Failed to match {}", input),
        }
    }

    /// Test that matching against \p input fails.
    #[track_caller]
    pub fn test_fails(&self, input: &str) {
        assert!(
            self.find(input).is_none(),
            "Should not have matched {:?} ({:?})",
            input,
            self.tc
        )
    }

    /// Test that matching against \p input succeeds.
    #[track_caller]
    pub fn test_succeeds(&self, input: &str) {
        assert!(
            self.find(input).is_some(),
            "Should have matched {:?} ({:?})",
            input,
            self.tc
        )
    }
}

/// Describes how a test is run.
#[derive(Debug, Copy, Clone)]
pub struct TestConfig {
    optimize: bool,
}

impl TestConfig {
    fn config(&self) -> lwregex::Config {
        lwregex::Config {
            no_opt: !self.optimize,
            ..lwregex::Config::default()
        }
    }

    /// Compile a bare pattern, without `/.../g`.
    #[track_caller]
    pub fn compile(&self, pattern: &str) -> TestCompiledRegex {
        let re = lwregex::Regex::from_stripped(pattern, self.config());
        assert!(re.is_ok(), "Failed to compile {}: {:?}", pattern, re.err());
        TestCompiledRegex {
            re: re.unwrap(),
            tc: *self,
        }
    }

    /// Compile a pattern written as `/pattern/g`.
    #[track_caller]
    pub fn compiled(&self, pattern: &str) -> TestCompiledRegex {
        let re = lwregex::Regex::with_config(pattern, self.config());
        assert!(re.is_ok(), "Failed to compile {}: {:?}", pattern, re.err());
        TestCompiledRegex {
            re: re.unwrap(),
            tc: *self,
        }
    }
}

/// Invoke \p F with each test config, in turn.
pub fn test_with_configs<F>(func: F)
where
    F: Fn(TestConfig),
{
    // Note we wish to be able to determine the TestConfig from line number.
    // Also note that optimizations are not supposed to affect results.
    func(TestConfig { optimize: false });
    func(TestConfig { optimize: true });
}
