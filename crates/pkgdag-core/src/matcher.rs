//! Package visibility filter.

use regex::Regex;

use crate::{Error, Result};

const VENDOR_SEGMENT: &str = "/vendor/";

/// Strip everything up to and including the last `/vendor/` segment.
///
/// `github.com/x/vendor/github.com/y` becomes `github.com/y`; identifiers
/// without a vendor segment are returned unchanged.
pub fn strip_vendor_prefix(package: &str) -> &str {
    match package.rfind(VENDOR_SEGMENT) {
        Some(i) => &package[i + VENDOR_SEGMENT.len()..],
        None => package,
    }
}

/// Decides which packages are visible in rendered output.
///
/// Built from an optional regular expression. Without a pattern every
/// package matches. Vendored identifiers are matched by their unvendored
/// suffix so a filter written against upstream paths also catches copies.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    regex: Option<Regex>,
}

impl Matcher {
    /// Compile `pattern`. `None` and the empty string both mean "match everything".
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let regex = match pattern {
            None | Some("") => None,
            Some(pattern) => Some(Regex::new(pattern).map_err(|err| {
                Error::invalid_pattern(pattern)
                    .with_operation("matcher::new")
                    .set_source(err)
            })?),
        };
        Ok(Self { regex })
    }

    /// A matcher that accepts every package.
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn is_match(&self, package: &str) -> bool {
        match &self.regex {
            None => true,
            Some(re) => re.is_match(strip_vendor_prefix(package)),
        }
    }
}
