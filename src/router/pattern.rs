use percent_encoding::percent_decode_str;
use std::collections::HashMap;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Route pattern {0:?} must start with '/' or be '*'")]
    MissingLeadingSlash(String),
    #[error("Route pattern {0:?} has a parameter without a name")]
    EmptyParam(String),
    #[error("Route pattern {0:?} has a wildcard before its last segment")]
    MisplacedWildcard(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard,
}

/// Path template such as `/download/:filename` or `/static/*`.
///
/// Paths are compared segment by segment with empty segments dropped, so
/// `/users` and `/users/` are the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// The `*` pattern, matching every path.
    pub fn catch_all() -> Self {
        Self { raw: "*".to_owned(), segments: vec![Segment::Wildcard] }
    }

    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw == "*" {
            return Ok(Self::catch_all());
        }
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_owned()));
        }

        let parts: Vec<&str> = split_segments(raw).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (idx, part) in parts.iter().enumerate() {
            let segment = if *part == "*" {
                if idx + 1 != parts.len() {
                    return Err(PatternError::MisplacedWildcard(raw.to_owned()));
                }
                Segment::Wildcard
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParam(raw.to_owned()));
                }
                Segment::Param(name.to_owned())
            } else {
                Segment::Literal((*part).to_owned())
            };
            segments.push(segment);
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    /// Returns the bound parameters when `path` matches, `None` otherwise.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();
        let mut parts = split_segments(path);

        for segment in &self.segments {
            match segment {
                Segment::Wildcard => return Some(params),
                Segment::Literal(literal) => {
                    if parts.next()? != literal.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    // Values that are not valid UTF-8 once decoded never match
                    let decoded = percent_decode_str(parts.next()?).decode_utf8().ok()?;
                    params.insert(name.clone(), decoded.into_owned());
                }
            }
        }

        parts.next().is_none().then_some(params)
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard])
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
