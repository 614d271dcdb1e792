//! Severity and pull request state badges.
//!
//! Badges classify free-form backend strings into a small set of visual
//! tiers and render them as coloured labels. Classification is
//! case-insensitive; unknown values fall into the default tier rather than
//! failing.

use crossterm::style::{Color, Stylize};

/// Visual tier of a review issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    /// Severity `critical`.
    Critical,
    /// Severity `major`.
    Major,
    /// Severity `minor`.
    Minor,
    /// Any other severity value.
    Other,
}

impl SeverityTier {
    /// Classifies a severity string, ignoring case.
    #[must_use]
    pub fn classify(severity: &str) -> Self {
        if severity.eq_ignore_ascii_case("critical") {
            Self::Critical
        } else if severity.eq_ignore_ascii_case("major") {
            Self::Major
        } else if severity.eq_ignore_ascii_case("minor") {
            Self::Minor
        } else {
            Self::Other
        }
    }

    /// Returns the display colour for the tier.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Critical => Color::Red,
            Self::Major => Color::DarkYellow,
            Self::Minor => Color::Yellow,
            Self::Other => Color::Grey,
        }
    }
}

/// Visual tier of a pull request lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestStateTier {
    /// State `open`.
    Open,
    /// State `closed`.
    Closed,
    /// Any other state value, including an absent one.
    Other,
}

impl PullRequestStateTier {
    /// Classifies a pull request state string, ignoring case.
    #[must_use]
    pub fn classify(state: Option<&str>) -> Self {
        match state {
            Some(value) if value.eq_ignore_ascii_case("open") => Self::Open,
            Some(value) if value.eq_ignore_ascii_case("closed") => Self::Closed,
            _ => Self::Other,
        }
    }

    /// Returns the display colour for the tier.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Open => Color::Green,
            Self::Closed => Color::Grey,
            Self::Other => Color::Yellow,
        }
    }
}

/// Renders a severity value as a coloured badge.
#[must_use]
pub fn severity_badge(severity: &str) -> String {
    let tier = SeverityTier::classify(severity);
    format!("[{severity}]")
        .with(tier.color())
        .to_string()
}

/// Renders a pull request state as a coloured badge.
///
/// An absent state renders as an empty string, matching the source data's
/// optionality rather than inventing a placeholder.
#[must_use]
pub fn state_badge(state: Option<&str>) -> String {
    let Some(value) = state else {
        return String::new();
    };
    let tier = PullRequestStateTier::classify(Some(value));
    format!("({value})").with(tier.color()).to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PullRequestStateTier, SeverityTier, severity_badge, state_badge};

    #[rstest]
    #[case::capitalised("Critical", SeverityTier::Critical)]
    #[case::upper("MAJOR", SeverityTier::Major)]
    #[case::lower("minor", SeverityTier::Minor)]
    #[case::unknown("info", SeverityTier::Other)]
    #[case::empty("", SeverityTier::Other)]
    fn severity_classification_ignores_case(#[case] input: &str, #[case] expected: SeverityTier) {
        assert_eq!(SeverityTier::classify(input), expected);
    }

    #[rstest]
    #[case::open(Some("open"), PullRequestStateTier::Open)]
    #[case::open_capitalised(Some("Open"), PullRequestStateTier::Open)]
    #[case::closed(Some("closed"), PullRequestStateTier::Closed)]
    #[case::merged(Some("merged"), PullRequestStateTier::Other)]
    #[case::absent(None, PullRequestStateTier::Other)]
    fn state_classification_has_three_tiers(
        #[case] input: Option<&str>,
        #[case] expected: PullRequestStateTier,
    ) {
        assert_eq!(PullRequestStateTier::classify(input), expected);
    }

    #[test]
    fn severity_badge_preserves_original_casing() {
        let badge = severity_badge("CRITICAL");
        assert!(badge.contains("[CRITICAL]"));
    }

    #[test]
    fn state_badge_renders_nothing_for_absent_state() {
        assert_eq!(state_badge(None), "");
        assert!(state_badge(Some("open")).contains("(open)"));
    }
}
