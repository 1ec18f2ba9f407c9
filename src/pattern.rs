// src/pattern.rs
//! Wildcard and regular-expression name matching for include/exclude lists.

use regex::Regex;

/// A single compiled include or exclude entry.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    wildcard: Option<Regex>,
    regex: Option<Regex>,
}

impl Pattern {
    /// Compiles a pattern. Never fails: an entry that is not a valid regex
    /// simply never matches as one.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let wildcard = if raw.contains('*') {
            Regex::new(&wildcard_to_regex(raw)).ok()
        } else {
            None
        };
        let regex = Regex::new(&format!("^(?:{raw})$")).ok();
        Self {
            raw: raw.to_string(),
            wildcard,
            regex,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Exact match first, then wildcard, then a whole-string regex match.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if name == self.raw {
            return true;
        }
        if self.wildcard.as_ref().is_some_and(|re| re.is_match(name)) {
            return true;
        }
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }
}

/// One-off form of [`Pattern::matches`].
#[must_use]
pub fn match_pattern(name: &str, pattern: &str) -> bool {
    Pattern::new(pattern).matches(name)
}

fn wildcard_to_regex(raw: &str) -> String {
    let body: Vec<String> = raw.split('*').map(regex::escape).collect();
    format!("^{}$", body.join(".*"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_matches() {
        assert!(match_pattern("FooRoute.java", "FooRoute.java"));
        assert!(!match_pattern("FooRoute.java", "BarRoute.java"));
    }

    #[test]
    fn trailing_wildcard_is_a_prefix_match() {
        assert!(match_pattern("FooRoute.java", "Foo*"));
        assert!(!match_pattern("BarRoute.java", "Foo*"));
    }

    #[test]
    fn wildcard_anywhere() {
        assert!(match_pattern("sample/FooRoute.java", "*Route.java"));
        assert!(match_pattern("sample/FooRoute.java", "sample/*Route*"));
        assert!(!match_pattern("sample/FooRoute.java", "other/*"));
    }

    #[test]
    fn wildcard_dot_is_literal() {
        assert!(!match_pattern("FooRouteXjava", "*Route.java"));
    }

    #[test]
    fn regex_must_match_whole_name() {
        assert!(match_pattern("FooRoute.java", ".*Route\\.java"));
        assert!(!match_pattern("FooRoute.java", "Route"));
    }

    #[test]
    fn invalid_regex_never_matches() {
        assert!(!match_pattern("a(b", "a(b["));
        let p = Pattern::new("[unclosed");
        assert!(!p.matches("x"));
        assert_eq!(p.as_str(), "[unclosed");
    }
}
