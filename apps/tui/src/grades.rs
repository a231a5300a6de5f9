//! Parsing of free-text route ratings into a numeric grade and an optional
//! subgrade letter.
//!
//! Two grading dialects are recognized: the roped-climbing decimal system
//! ("5.11a", "5.9+", "5.10 R") and the bouldering V-scale ("V3", "V3-4",
//! "V0-easy"). The roped pattern is tried first; only if it does not match
//! is the bouldering pattern tried. A rating matching neither is a hard
//! error, never a silently skipped row.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::GradeError;

// "5.<digits>", optional a-d letter or "+", optional "R" safety suffix.
static RE_ROPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^5\.(\d{1,2})\s*([abcd+])?\s*R?").expect("roped grade pattern")
});

// "V<token>", optional "R" safety suffix. The token is resolved to a number
// separately so ranges like "3-4" and modifiers like "3+" can be handled.
static RE_BOULDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^V(.+?)\s*R?$").expect("boulder grade pattern"));

/// A normalized route grade.
///
/// `grade` is the roped decimal number ("5.11a" -> 11) or the V-scale number
/// ("V3" -> 3); callers tell the two apart via the tick's route type.
/// `subgrade` is the a/b/c/d letter of a roped grade, absent for letterless
/// roped grades and for all bouldering grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedGrade {
    pub grade: u8,
    pub subgrade: Option<char>,
}

/// Parse a raw rating string into a [`ParsedGrade`].
///
/// Dialect selection is first-match-wins: a rating that matches the roped
/// pattern is parsed as a roped grade even if that parse then fails; there
/// is no fallback to the bouldering dialect.
pub fn parse_grade(rating: &str) -> Result<ParsedGrade, GradeError> {
    if let Some(caps) = RE_ROPED.captures(rating) {
        let grade = caps[1]
            .parse::<u8>()
            .map_err(|_| unrecognized(rating))?;
        // The optional group also admits "+", which is not a subgrade.
        let subgrade = caps
            .get(2)
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| ('a'..='d').contains(c));
        return Ok(ParsedGrade { grade, subgrade });
    }

    // "-easy" is an alias for 0, e.g. "V-easy" and "V0-easy" both mean V0.
    // The substitution belongs to the bouldering dialect only, which is why
    // it happens after the roped pattern has been ruled out.
    let normalized = rating.replace("-easy", "0");
    if let Some(caps) = RE_BOULDER.captures(&normalized) {
        // Only the first numeric component of a range ("3-4") or a plus
        // grade ("3+") counts.
        let token = caps[1].split(['-', '+']).next().unwrap_or("").trim();
        let grade = token.parse::<u8>().map_err(|_| unrecognized(rating))?;
        return Ok(ParsedGrade {
            grade,
            subgrade: None,
        });
    }

    Err(unrecognized(rating))
}

fn unrecognized(rating: &str) -> GradeError {
    GradeError::Unrecognized {
        rating: rating.to_string(),
    }
}
