use lwregex::{Config, Regex};

#[test]
fn test_anchored_optimization() {
    // Test basic anchored regex
    let re = Regex::new(r"/^abc/g").unwrap();
    assert!(re.find("abc").is_some());
    assert!(re.find("abcdef").is_some());
    assert!(re.find("xabc").is_none()); // Should not match when not at start

    // Test anchored regex with more complex pattern
    let re = Regex::new(r"/^hello\s+world/g").unwrap();
    assert!(re.find("hello world").is_some());
    assert!(re.find("hello   world").is_some());
    assert!(re.find("  hello world").is_none()); // Should not match when not at start

    // Test anchored regex with capture groups
    let re = Regex::new(r"/^(\w+)=(\d+)/g").unwrap();
    let text = "key=123 other=456";
    let m = re.find(text).unwrap();
    assert_eq!(m.group(1).map(|r| &text[r]), Some("key"));
    assert_eq!(m.group(2).map(|r| &text[r]), Some("123"));
    assert!(re.find(" key=123").is_none()); // Should not match when not at start
}

#[test]
fn test_anchor_is_kept_without_optimizations() {
    let config = Config {
        no_opt: true,
        ..Config::default()
    };
    let re = Regex::with_config(r"/^abc/g", config).unwrap();
    assert!(re.is_match("abcdef"));
    assert!(!re.is_match("xabc"));
}

#[test]
fn test_first_byte_search() {
    // Patterns with a known first byte skip ahead; the answers match a plain scan.
    let plain = Config {
        no_opt: true,
        ..Config::default()
    };
    for pattern in ["/x/g", "/xyz/g", r"/x\.y/g", "/ab*c/g", "/q[0-9]+/g"] {
        let fast = Regex::new(pattern).unwrap();
        let slow = Regex::with_config(pattern, plain).unwrap();
        for subject in ["", "x", "axyz", "x.y", "aabbcc", "q", "q12q3", "zzzzzz"] {
            assert_eq!(
                fast.find(subject).map(|m| m.range()),
                slow.find(subject).map(|m| m.range()),
                "{} against {:?}",
                pattern,
                subject
            );
        }
    }
}
