use std::fmt;

/// A correction applied to a STAC Item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fix {
    /// Stringified geometry was parsed into a JSON value
    Geometry,
    /// One or more empty-string members were removed
    EmptyFields,
}

impl fmt::Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fix::Geometry => f.write_str("geometry"),
            Fix::EmptyFields => f.write_str("empty fields"),
        }
    }
}

/// Result of running the fixes over one in-memory document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// Document changed; fixes listed in the order they applied
    Fixed(Vec<Fix>),
    /// Eligible document that needed nothing
    Unchanged,
    /// Document is not eligible for normalization
    Skipped(String),
}

impl FixOutcome {
    pub fn is_modified(&self) -> bool {
        matches!(self, FixOutcome::Fixed(_))
    }
}

/// Join fix tags for status lines ("geometry, empty fields")
pub fn describe_fixes(fixes: &[Fix]) -> String {
    fixes
        .iter()
        .map(Fix::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Aggregate counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl BatchSummary {
    /// Process exit status: 2 when something was modified, 0 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.modified > 0 {
            2
        } else {
            0
        }
    }
}
