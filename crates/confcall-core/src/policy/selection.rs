//! ===========================================================================
//! Overload Selection
//! ===========================================================================
//!
//! Pure, deterministic rules for choosing one signature out of an overload
//! family given the argument names a configuration entry supplied.
//!
//! - A candidate is eligible iff every supplied name binds to exactly one of
//!   its parameters and every required parameter is bound.
//! - The eligible candidate binding the most parameters wins; remaining ties
//!   go to the `TieBreak` rule.
//! - Anything other than exactly one winner is an error. There is no
//!   first-match fallback.
//!
//! ===========================================================================

use crate::{
    ThisError,
    config::schema::{SelectionConfig, TieBreak},
    log::Topic,
    model::{CallArguments, Parameter, Signature},
};

///
/// SelectionError
///

#[derive(Debug, ThisError)]
pub enum SelectionError {
    #[error(
        "no overload of '{name}' accepts arguments [{}] ({candidates} candidates named '{name}')",
        .supplied.join(", ")
    )]
    NoMatch {
        name: String,
        supplied: Vec<String>,
        candidates: usize,
    },

    #[error(
        "ambiguous overloads of '{name}' for arguments [{}]: {}",
        .supplied.join(", "),
        .matches.join(" | ")
    )]
    Ambiguous {
        name: String,
        supplied: Vec<String>,
        matches: Vec<String>,
    },
}

///
/// MethodSelector
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MethodSelector {
    rules: SelectionConfig,
}

impl MethodSelector {
    #[must_use]
    pub const fn new(rules: SelectionConfig) -> Self {
        Self { rules }
    }

    /// Choose the single best overload named `name` for `supplied`.
    pub fn select<'a>(
        &self,
        candidates: &'a [Signature],
        name: &str,
        supplied: &CallArguments,
    ) -> Result<&'a Signature, SelectionError> {
        let named: Vec<&Signature> = candidates
            .iter()
            .filter(|sig| self.rules.operation_names.matches(sig.name.as_str(), name))
            .collect();

        let eligible: Vec<(&Signature, usize)> = named
            .iter()
            .filter_map(|sig| self.bound_count(sig, supplied).map(|n| (*sig, n)))
            .collect();

        let Some(best) = eligible.iter().map(|(_, n)| *n).max() else {
            return Err(SelectionError::NoMatch {
                name: name.to_string(),
                supplied: supplied_names(supplied),
                candidates: named.len(),
            });
        };

        let mut top: Vec<&Signature> = eligible
            .into_iter()
            .filter(|(_, n)| *n == best)
            .map(|(sig, _)| sig)
            .collect();

        if top.len() > 1 && self.rules.tie_break == TieBreak::FewestParameters {
            let fewest = top.iter().map(|sig| sig.params.len()).min().unwrap_or_default();
            top.retain(|sig| sig.params.len() == fewest);
        }

        match top.as_slice() {
            [selected] => {
                crate::log!(Topic::Select, Debug, "{name} → {selected}");
                Ok(*selected)
            }
            _ => Err(SelectionError::Ambiguous {
                name: name.to_string(),
                supplied: supplied_names(supplied),
                matches: top.iter().map(ToString::to_string).collect(),
            }),
        }
    }

    /// Number of parameters `supplied` binds on `sig`, or `None` when the
    /// signature is not eligible.
    #[must_use]
    pub fn bound_count(&self, sig: &Signature, supplied: &CallArguments) -> Option<usize> {
        let names = self.rules.argument_names;

        // every supplied argument must land on exactly one parameter
        let all_known = supplied
            .names()
            .all(|arg| sig.params.iter().filter(|p| names.matches(&p.name, arg)).count() == 1);
        if !all_known {
            return None;
        }

        let mut bound = 0;
        for param in &sig.params {
            match supplied.names().filter(|arg| names.matches(&param.name, arg)).count() {
                0 if param.is_required() => return None,
                0 => {}
                1 => bound += 1,
                _ => return None,
            }
        }

        Some(bound)
    }

    /// Raw supplied value bound to `param`, if any.
    #[must_use]
    pub fn lookup<'s>(&self, param: &Parameter, supplied: &'s CallArguments) -> Option<&'s str> {
        supplied
            .iter()
            .find(|(arg, _)| self.rules.argument_names.matches(&param.name, arg))
            .map(|(_, value)| value)
    }
}

fn supplied_names(supplied: &CallArguments) -> Vec<String> {
    supplied.names().map(ToString::to_string).collect()
}

///
/// TESTS
///
