//! Vendor-to-canonical field and value mappings.
//!
//! Value mapping is an ordered cascade terminated by a mandatory default,
//! kept as data rather than nested branching so each rule can be exercised
//! on its own: canonical passthrough first, then exact vendor tokens
//! (case-insensitive), then substring heuristics over the lowercased value,
//! then the default.

/// Vendor export column names and the canonical field each one feeds.
pub const FIELD_MAPPING: [(&str, &str); 10] = [
    ("Conversation ID", "ticket_id"),
    ("Conversation created at (America/Vancouver)", "created_date"),
    ("Teammate currently assigned", "assigned_to"),
    ("Conversation priority", "priority"),
    ("Current conversation state", "status"),
    (
        "Conversation first replied at (America/Vancouver)",
        "first_response_date",
    ),
    (
        "Conversation first closed at (America/Vancouver)",
        "resolution_date",
    ),
    ("Topics", "category"),
    ("Team currently assigned", "team"),
    ("Last teammate rating", "satisfaction_score"),
];

/// Which cascade rule produced a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeRule {
    /// The value was already canonical and passed through unchanged.
    Canonical,
    /// A known vendor token matched exactly after lowercasing.
    Exact,
    /// A substring heuristic over the lowercased value matched.
    Heuristic,
    /// Nothing matched, the mandatory default applied.
    Default,
}

/// An ordered value-mapping cascade terminated by a mandatory default.
#[derive(Debug, Clone, Copy)]
pub struct ValueCascade {
    /// Canonical field the cascade feeds, named in diagnostics.
    pub field: &'static str,
    canonical: &'static [&'static str],
    exact: &'static [(&'static str, &'static str)],
    heuristics: &'static [(&'static str, &'static str)],
    /// Value applied when no rule matches.
    pub default: &'static str,
}

impl ValueCascade {
    /// Map a raw vendor value to canonical form, reporting the deciding rule.
    pub fn resolve(&self, raw: &str) -> (&'static str, CascadeRule) {
        if let Some(value) = self.canonical.iter().copied().find(|candidate| *candidate == raw) {
            return (value, CascadeRule::Canonical);
        }
        let lowered = raw.to_lowercase();
        if let Some((_, value)) = self.exact.iter().copied().find(|(token, _)| *token == lowered) {
            return (value, CascadeRule::Exact);
        }
        if let Some((_, value)) = self
            .heuristics
            .iter()
            .copied()
            .find(|(needle, _)| lowered.contains(needle))
        {
            return (value, CascadeRule::Heuristic);
        }
        (self.default, CascadeRule::Default)
    }
}

/// Priority cascade. Blank values never reach it, required-field handling
/// runs first.
pub const PRIORITY_CASCADE: ValueCascade = ValueCascade {
    field: "priority",
    canonical: &["Low", "Medium", "High", "Critical"],
    exact: &[
        ("not_priority", "Low"),
        ("priority", "Medium"),
        ("low", "Low"),
        ("medium", "Medium"),
        ("high", "High"),
        ("urgent", "Critical"),
        ("critical", "Critical"),
    ],
    heuristics: &[
        ("urgent", "Critical"),
        ("critical", "Critical"),
        ("high", "High"),
        ("low", "Low"),
    ],
    default: "Medium",
};

/// Status cascade. `snoozed` and `waiting` are vendor states with no literal
/// canonical counterpart; a lowercase `closed` is a vendor token and maps to
/// `Resolved`, only the canonical spelling passes through.
pub const STATUS_CASCADE: ValueCascade = ValueCascade {
    field: "status",
    canonical: &["Open", "In Progress", "Resolved", "Closed"],
    exact: &[
        ("open", "Open"),
        ("snoozed", "Open"),
        ("waiting", "In Progress"),
        ("in_progress", "In Progress"),
        ("pending", "In Progress"),
        ("closed", "Resolved"),
        ("resolved", "Resolved"),
    ],
    heuristics: &[
        ("close", "Resolved"),
        ("resolve", "Resolved"),
        ("progress", "In Progress"),
        ("working", "In Progress"),
    ],
    default: "Open",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values_pass_through_unchanged() {
        for value in ["Low", "Medium", "High", "Critical"] {
            assert_eq!(
                PRIORITY_CASCADE.resolve(value),
                (value, CascadeRule::Canonical)
            );
        }
        for value in ["Open", "In Progress", "Resolved", "Closed"] {
            assert_eq!(STATUS_CASCADE.resolve(value), (value, CascadeRule::Canonical));
        }
    }

    #[test]
    fn vendor_tokens_match_exactly_case_insensitive() {
        assert_eq!(
            PRIORITY_CASCADE.resolve("not_priority"),
            ("Low", CascadeRule::Exact)
        );
        assert_eq!(
            PRIORITY_CASCADE.resolve("priority"),
            ("Medium", CascadeRule::Exact)
        );
        assert_eq!(
            PRIORITY_CASCADE.resolve("URGENT"),
            ("Critical", CascadeRule::Exact)
        );
        assert_eq!(
            STATUS_CASCADE.resolve("waiting"),
            ("In Progress", CascadeRule::Exact)
        );
        assert_eq!(STATUS_CASCADE.resolve("snoozed"), ("Open", CascadeRule::Exact));
        assert_eq!(
            STATUS_CASCADE.resolve("closed"),
            ("Resolved", CascadeRule::Exact)
        );
    }

    #[test]
    fn heuristics_scan_substrings_in_declaration_order() {
        assert_eq!(
            PRIORITY_CASCADE.resolve("Super High!"),
            ("High", CascadeRule::Heuristic)
        );
        assert_eq!(
            PRIORITY_CASCADE.resolve("critically urgent"),
            ("Critical", CascadeRule::Heuristic)
        );
        assert_eq!(
            STATUS_CASCADE.resolve("will close soon"),
            ("Resolved", CascadeRule::Heuristic)
        );
        assert_eq!(
            STATUS_CASCADE.resolve("agent working"),
            ("In Progress", CascadeRule::Heuristic)
        );
    }

    #[test]
    fn unknown_values_fall_back_to_the_default() {
        assert_eq!(
            PRIORITY_CASCADE.resolve("frobnicated"),
            ("Medium", CascadeRule::Default)
        );
        assert_eq!(
            STATUS_CASCADE.resolve("frobnicated"),
            ("Open", CascadeRule::Default)
        );
    }
}
