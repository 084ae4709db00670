use serde::{Deserialize, Serialize};

///
/// NameMatching
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameMatching {
    CaseSensitive,
    #[default]
    CaseInsensitive,
}

impl NameMatching {
    #[must_use]
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::CaseSensitive => a == b,
            Self::CaseInsensitive => a.eq_ignore_ascii_case(b),
        }
    }
}

///
/// TieBreak
/// What to do when eligible overloads bind the same number of arguments.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Prefer the overload with the fewest declared parameters.
    #[default]
    FewestParameters,

    /// Any tie on bound arguments is an error.
    Reject,
}

///
/// SelectionConfig
///
/// Operation names match case-insensitively by default; argument names are
/// case-sensitive keys so a miscased argument is never silently bound.
///

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    pub operation_names: NameMatching,
    pub argument_names: NameMatching,
    pub tie_break: TieBreak,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            operation_names: NameMatching::CaseInsensitive,
            argument_names: NameMatching::CaseSensitive,
            tie_break: TieBreak::default(),
        }
    }
}

///
/// TESTS
///
