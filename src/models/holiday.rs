use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Calendar holiday supplied by the (external) holiday store.
/// Takes precedence over every computed label for the listed locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    /// "YYYY-MM-DD"
    pub date: String,
    pub name: String,
    /// Location codes the holiday applies to; empty means everywhere.
    #[serde(default)]
    pub locations: HashSet<String>,
}

impl Holiday {
    /// Whether this holiday covers a record with the given location code.
    /// A record with no location matches any holiday on its date; the
    /// per-location filter is notionally applied upstream of the engine.
    pub fn applies_to(&self, location_code: Option<&str>) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        let code = match location_code {
            Some(c) => c,
            None => return true,
        };
        code.split_whitespace()
            .any(|t| self.locations.iter().any(|l| l.eq_ignore_ascii_case(t)))
    }
}

/// First holiday on `date` covering `location_code`, if any.
pub fn holiday_on<'a>(
    holidays: &'a [Holiday],
    date: &str,
    location_code: Option<&str>,
) -> Option<&'a Holiday> {
    holidays
        .iter()
        .find(|h| h.date == date && h.applies_to(location_code))
}
