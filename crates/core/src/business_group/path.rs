//! Business group path parsing
//!
//! A path names a business group by the chain of names from the root
//! organization, separated by `/`. A doubled delimiter (`//`) inside a name is
//! a literal `/`, so `"RootOrg/R&D // Labs"` is the two segments `RootOrg` and
//! `R&D / Labs`.
//!
//! A single trailing delimiter ends the last segment and is dropped:
//! `"RootOrg/Sub/"` parses as `["RootOrg", "Sub"]`.

use std::fmt;
use std::str::FromStr;

use anypoint_domain::constants::PATH_DELIMITER;
use anypoint_domain::{AnypointError, Result};

/// Split a raw path into its segment names.
///
/// Empty input yields no segments.
pub fn parse(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != PATH_DELIMITER {
            current.push(ch);
            continue;
        }

        match chars.peek() {
            Some(&next) if next == PATH_DELIMITER => {
                chars.next();
                current.push(PATH_DELIMITER);
            }
            // Trailing delimiter: terminates the last segment.
            None => {}
            Some(_) => segments.push(std::mem::take(&mut current)),
        }
    }

    segments.push(current);
    segments
}

/// Join segment names into a raw path, escaping embedded delimiters.
pub fn serialize<S: AsRef<str>>(segments: &[S]) -> String {
    let escaped = format!("{PATH_DELIMITER}{PATH_DELIMITER}");
    segments
        .iter()
        .map(|segment| segment.as_ref().replace(PATH_DELIMITER, &escaped))
        .collect::<Vec<_>>()
        .join(&PATH_DELIMITER.to_string())
}

/// Parsed, non-empty business group path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusinessGroupPath {
    segments: Vec<String>,
}

impl BusinessGroupPath {
    /// Parse a raw path; empty input is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::from_segments(parse(raw))
            .map_err(|err| err.context(format!("invalid business group path '{raw}'")))
    }

    /// Build a path from already split names.
    ///
    /// # Errors
    /// `InvalidInput` for an empty list, an empty name, or a name starting
    /// with the delimiter; those would not parse back from [`Display`] output.
    ///
    /// [`Display`]: fmt::Display
    pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Result<Self> {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(AnypointError::InvalidInput("business group path is empty".into()));
        }
        if let Some(position) = segments.iter().position(String::is_empty) {
            return Err(AnypointError::InvalidInput(format!(
                "business group path has an empty name at position {position}"
            )));
        }
        if let Some(name) = segments.iter().find(|name| name.starts_with(PATH_DELIMITER)) {
            return Err(AnypointError::InvalidInput(format!(
                "business group name '{name}' starts with '{PATH_DELIMITER}'"
            )));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// `true` when the path addresses the root organization itself.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Path of the containing group, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self { segments: self.segments[..self.segments.len() - 1].to_vec() })
    }
}

impl FromStr for BusinessGroupPath {
    type Err = AnypointError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BusinessGroupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(&self.segments))
    }
}
