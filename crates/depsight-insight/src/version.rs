//! Maven version parsing, comparison, and version expression classification.
//!
//! Ordering follows Maven's rules rather than semver:
//! - Segments are split on `.` and `-`
//! - Numeric segments compare as numbers
//! - Well-known qualifiers order as
//!   `alpha` < `beta` < `milestone` < `rc` < `snapshot` < `""` (release) < `sp`
//! - Release aliases (`ga`, `final`, `release`) and zero runs that end a
//!   numeric block are dropped when parsing, so `1 == 1.0 == 1-ga`
//!
//! A requested version may also be an expression that denotes a moving
//! target: a range (`[1.0,2.0)`), a prefix (`1.+`), or a `latest.*` status.

use std::cmp::Ordering;
use std::fmt;

/// A parsed Maven version with comparable segments.
#[derive(Debug, Clone)]
pub struct MavenVersion {
    pub original: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Number(u64),
    Qualifier(Qualifier),
    Text(String),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum Qualifier {
    Alpha,
    Beta,
    Milestone,
    Rc,
    Snapshot,
    Release,
    Sp,
}

impl Segment {
    fn classify(token: &str) -> Self {
        if let Ok(n) = token.parse::<u64>() {
            return Self::Number(n);
        }
        let qualifier = match token.to_ascii_lowercase().as_str() {
            "alpha" | "a" => Qualifier::Alpha,
            "beta" | "b" => Qualifier::Beta,
            "milestone" | "m" => Qualifier::Milestone,
            "rc" | "cr" => Qualifier::Rc,
            "snapshot" => Qualifier::Snapshot,
            "ga" | "final" | "release" => Qualifier::Release,
            "sp" => Qualifier::Sp,
            _ => return Self::Text(token.to_string()),
        };
        Self::Qualifier(qualifier)
    }

    /// How this segment compares to a missing segment on the other side.
    ///
    /// A missing segment sits above text and pre-release qualifiers and
    /// below `sp` and every number, so padding never ties with a segment.
    fn cmp_padding(&self) -> Ordering {
        match self {
            Self::Number(_) => Ordering::Greater,
            Self::Qualifier(q) => q.cmp(&Qualifier::Release),
            Self::Text(_) => Ordering::Less,
        }
    }

    fn cmp_segment(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Qualifier(a), Self::Qualifier(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(_), _) => Ordering::Greater,
            (_, Self::Number(_)) => Ordering::Less,
            // Release and later qualifiers outrank free text; pre-releases don't.
            (Self::Qualifier(q), Self::Text(_)) => {
                if *q >= Qualifier::Release {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (Self::Text(_), Self::Qualifier(_)) => other.cmp_segment(self).reverse(),
        }
    }
}

impl MavenVersion {
    pub fn parse(version: &str) -> Self {
        let segments = version
            .split(['.', '-'])
            .filter(|token| !token.is_empty())
            .map(Segment::classify)
            .filter(|segment| *segment != Segment::Qualifier(Qualifier::Release))
            .collect();
        Self {
            original: version.to_string(),
            segments: normalize(segments),
        }
    }
}

/// Drop zeros that close a numeric block: `1.0.0` becomes `1` and
/// `1.0-alpha` becomes `1-alpha`, while `1.0.1` is kept whole.
fn normalize(segments: Vec<Segment>) -> Vec<Segment> {
    let mut kept = Vec::with_capacity(segments.len());
    let mut closes_block = true;
    for segment in segments.into_iter().rev() {
        match segment {
            Segment::Number(0) if closes_block => continue,
            Segment::Number(_) => closes_block = false,
            _ => closes_block = true,
        }
        kept.push(segment);
    }
    kept.reverse();
    kept
}

impl fmt::Display for MavenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| match (self.segments.get(i), other.segments.get(i)) {
                (Some(a), Some(b)) => a.cmp_segment(b),
                (Some(a), None) => a.cmp_padding(),
                (None, Some(b)) => b.cmp_padding().reverse(),
                (None, None) => Ordering::Equal,
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

/// One end of a [`VersionRange`].
#[derive(Debug, Clone)]
pub struct Bound {
    pub version: MavenVersion,
    pub inclusive: bool,
}

/// A Maven version range: `[1.0,2.0)`, `[1.0,]`, `(,2.0)`, or `[1.0]` (exact).
#[derive(Debug, Clone)]
pub struct VersionRange {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl VersionRange {
    /// Parse a range expression. Returns `None` for anything that isn't bracketed.
    pub fn parse(expr: &str) -> Option<Self> {
        let s = expr.trim();
        let lower_inclusive = match s.chars().next()? {
            '[' => true,
            '(' => false,
            _ => return None,
        };
        let upper_inclusive = match s.chars().last()? {
            ']' => true,
            ')' => false,
            _ => return None,
        };
        let inner = &s[1..s.len() - 1];

        let bound = |text: &str, inclusive: bool| {
            let text = text.trim();
            (!text.is_empty()).then(|| Bound {
                version: MavenVersion::parse(text),
                inclusive,
            })
        };

        match inner.split_once(',') {
            Some((lower, upper)) => Some(Self {
                lower: bound(lower, lower_inclusive),
                upper: bound(upper, upper_inclusive),
            }),
            None => {
                let exact = bound(inner, true)?;
                Some(Self {
                    lower: Some(exact.clone()),
                    upper: Some(exact),
                })
            }
        }
    }

    /// The single version this range admits, for `[v]` style ranges.
    pub fn exact(&self) -> Option<&MavenVersion> {
        match (&self.lower, &self.upper) {
            (Some(lo), Some(hi)) if lo.inclusive && hi.inclusive && lo.version == hi.version => {
                Some(&lo.version)
            }
            _ => None,
        }
    }
}

/// A requested version expression, classified by what it denotes.
#[derive(Debug, Clone)]
pub enum VersionExpr {
    /// One fixed version.
    Static(MavenVersion),
    Range(VersionRange),
    /// `1.+` or a bare `+`; holds the prefix without the plus.
    Prefix(String),
    /// `latest.release`, `latest.integration`, or the Maven `LATEST`/`RELEASE` metaversions.
    Latest(String),
}

impl VersionExpr {
    pub fn parse(expr: &str) -> Self {
        let s = expr.trim();
        if let Some(range) = VersionRange::parse(s) {
            return Self::Range(range);
        }
        if let Some(prefix) = s.strip_suffix('+') {
            return Self::Prefix(prefix.to_string());
        }
        if let Some(status) = s.strip_prefix("latest.") {
            return Self::Latest(status.to_string());
        }
        if s == "LATEST" || s == "RELEASE" {
            return Self::Latest(s.to_ascii_lowercase());
        }
        Self::Static(MavenVersion::parse(s))
    }

    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Self::Static(_))
    }
}
