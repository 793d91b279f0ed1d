//! Toponym type-token dictionary for area objects.
//!
//! The export carries a free-form type abbreviation next to every area
//! object's name ("st", "vlg", …). This table maps the known tokens to their
//! canonical abbreviation and full descriptive phrase. Unknown tokens pass
//! through unchanged in both positions: the registry keeps inventing type
//! tokens and an unrecognized one is not an error.

/// (token, canonical abbreviation, full phrase), token matched
/// case-insensitively after trimming any trailing dot.
const TOKENS: &[(&str, &str, &str)] = &[
    ("reg", "reg.", "region"),
    ("rep", "rep.", "republic"),
    ("dist", "dist.", "district"),
    ("mun", "mun.", "municipality"),
    ("c", "c.", "city"),
    ("twn", "twn.", "town"),
    ("stl", "stl.", "settlement"),
    ("ust", "u. stl.", "urban settlement"),
    ("vlg", "vlg.", "village"),
    ("hmlt", "hmlt.", "hamlet"),
    ("ter", "terr.", "territory"),
    ("st", "st.", "street"),
    ("ave", "ave.", "avenue"),
    ("ln", "ln.", "lane"),
    ("blvd", "blvd.", "boulevard"),
    ("hwy", "hwy.", "highway"),
    ("sq", "sq.", "square"),
    ("emb", "emb.", "embankment"),
    ("psg", "psg.", "passage"),
    ("drw", "drw.", "driveway"),
];

/// A resolved toponym type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToponymType {
    pub abbrev: String,
    pub full: String,
}

/// Resolve a free-form type token.
pub fn resolve(token: &str) -> ToponymType {
    let key = token.trim().trim_end_matches('.').to_ascii_lowercase();
    for (candidate, abbrev, full) in TOKENS {
        if *candidate == key {
            return ToponymType {
                abbrev: (*abbrev).to_string(),
                full: (*full).to_string(),
            };
        }
    }
    ToponymType {
        abbrev: token.trim().to_string(),
        full: token.trim().to_string(),
    }
}
