//! Parameter status and free-text status resolution
//!
//! Users describe a status in many ways: "fixed", "thaw", "tie_p1",
//! "in_a_relationship_with_p1". This module holds the closed synonym
//! tables and the resolver that maps such text onto a [`Status`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical text prefix of a tied status, e.g. `tie_p1`.
pub const TIE_MARKER: &str = "tie";

/// Accepted spellings for [`Status::Frozen`] (compared case-insensitively).
pub const FROZEN_SYNONYMS: &[&str] = &[
    "frozen",
    "freeze",
    "chill",
    "fix",
    "fixed",
    "secure",
    "stick",
    "glue",
    "preserve",
    "restrain",
    "restrained",
    "cannot_move",
    "cant_move",
    "canny_move",
    "married",
];

/// Accepted spellings for [`Status::Free`] (compared case-insensitively).
pub const FREE_SYNONYMS: &[&str] = &[
    "free",
    "thaw",
    "loose",
    "unrestrained",
    "release",
    "released",
    "can_move",
    "single",
];

/// Prefixes introducing a tie. The prefix is followed by `_` and the name of
/// the parameter to tie to, e.g. `bind_p2`.
pub const TIE_PREFIXES: &[&str] = &[
    "tie",
    "tied",
    "bind",
    "tether",
    "join",
    "joined",
    "in_a_relationship_with",
];

/// How a parameter takes part in a fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// Varied by the optimizer
    Free,
    /// Held at its current value
    Frozen,
    /// Forced to the value of the named parameter
    Tied(String),
}

impl Status {
    pub fn is_free(&self) -> bool {
        matches!(self, Status::Free)
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, Status::Frozen)
    }

    /// Target of a tie, if this status is one.
    pub fn tie_target(&self) -> Option<&str> {
        match self {
            Status::Tied(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Free => f.write_str("free"),
            Status::Frozen => f.write_str("frozen"),
            Status::Tied(target) => write!(f, "{}_{}", TIE_MARKER, target),
        }
    }
}

/// Resolve free text into a [`Status`].
///
/// Frozen and free synonyms win over tie prefixes. A tie is only produced when
/// the text after `<prefix>_` names a parameter for which `is_known` returns
/// true; the first matching prefix is used. Returns `None` when nothing
/// matches so the caller can keep the raw text and let validation reject it.
///
/// # Examples
///
/// ```
/// use paramtable_rs::table::status::{resolve_status, Status};
///
/// let known = |name: &str| name == "p1";
/// assert_eq!(resolve_status("Fixed", known), Some(Status::Frozen));
/// assert_eq!(resolve_status("thaw", known), Some(Status::Free));
/// assert_eq!(resolve_status("bind_p1", known), Some(Status::Tied("p1".into())));
/// assert_eq!(resolve_status("bind_p9", known), None);
/// ```
pub fn resolve_status<F>(raw: &str, is_known: F) -> Option<Status>
where
    F: Fn(&str) -> bool,
{
    let lowered = raw.to_lowercase();

    if FROZEN_SYNONYMS.contains(&lowered.as_str()) {
        return Some(Status::Frozen);
    }
    if FREE_SYNONYMS.contains(&lowered.as_str()) {
        return Some(Status::Free);
    }

    for prefix in TIE_PREFIXES {
        let rest = match (raw.get(..prefix.len()), raw.get(prefix.len()..)) {
            (Some(head), Some(rest)) if head.eq_ignore_ascii_case(prefix) => rest,
            _ => continue,
        };
        if let Some(target) = rest.strip_prefix('_') {
            if is_known(target) {
                return Some(Status::Tied(target.to_string()));
            }
        }
    }

    None
}

impl FromStr for Status {
    type Err = String;

    /// Parse a status without a parameter list to check tie targets against.
    ///
    /// Any `tie_<name>` is accepted; whether `<name>` exists is decided by the
    /// table that stores the status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(status) = resolve_status(s, |_| false) {
            return Ok(status);
        }
        match resolve_status(s, |name| !name.is_empty()) {
            Some(status) => Ok(status),
            None => Err(format!(
                "'{}' is not a status; use free, frozen or tie_<parameter> (or a synonym)",
                s
            )),
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
