//! ===========================================================================
//! Dispatch
//! ===========================================================================
//!
//! End-to-end resolution of configuration entries into invocation-ready
//! calls:
//!
//!   read entries → select overload → convert each bound argument
//!
//! The dispatcher only borrows its collaborators. It holds no mutable state,
//! so one instance may serve any number of concurrent passes.
//!
//! ===========================================================================

use crate::{
    Error,
    config::ConfigModel,
    ids::SectionKind,
    log::Topic,
    model::{
        ArgValue, CallDescriptor, ConfigSection, ConfigurationPlan, ExtensionRegistry,
        ResolvedCall, TypeRegistry,
    },
    ops::{ArgumentConverter, TypeResolver},
    policy::MethodSelector,
    workflow::reader::ConfigurationReader,
};

///
/// Dispatcher
///

#[derive(Clone, Copy, Debug)]
pub struct Dispatcher<'a> {
    extensions: &'a ExtensionRegistry,
    selector: MethodSelector,
    converter: ArgumentConverter<'a>,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub const fn new(
        extensions: &'a ExtensionRegistry,
        types: &'a TypeRegistry,
        config: &'a ConfigModel,
    ) -> Self {
        let resolver = TypeResolver::new(types, &config.types.default_module);

        Self {
            extensions,
            selector: MethodSelector::new(config.selection),
            converter: ArgumentConverter::new(resolver),
        }
    }

    #[must_use]
    pub const fn converter(&self) -> ArgumentConverter<'a> {
        self.converter
    }

    /// Select the overload for one call and convert its arguments.
    ///
    /// Argument values are taken as already expanded; the reader expands
    /// `%NAME%` tokens when it builds the descriptor.
    pub fn resolve_call(
        &self,
        kind: SectionKind,
        call: &CallDescriptor,
    ) -> Result<ResolvedCall<'a>, Error> {
        let candidates = self.extensions.candidates(kind);
        let signature = self
            .selector
            .select(candidates, call.name.as_str(), &call.arguments)?;

        let mut arguments = Vec::with_capacity(signature.params.len());
        for param in &signature.params {
            let value = match self.selector.lookup(param, &call.arguments) {
                Some(raw) => self
                    .converter
                    .convert_expanded(raw, &param.ty)
                    .map_err(|source| Error::Argument {
                        operation: signature.name.clone(),
                        argument: param.name.clone(),
                        source,
                    })?,

                // selection guarantees every required parameter is bound
                None => param.default.clone().unwrap_or(ArgValue::Null),
            };

            arguments.push(value);
        }

        Ok(ResolvedCall {
            signature,
            arguments,
        })
    }

    /// Read and resolve every entry of one call section, in entry order.
    pub fn resolve_section(
        &self,
        kind: SectionKind,
        section: &ConfigSection,
    ) -> Result<Vec<ResolvedCall<'a>>, Error> {
        let calls = ConfigurationReader::get_method_calls(section)?;

        let resolved = calls
            .iter()
            .map(|call| self.resolve_call(kind, call))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| crate::log!(Topic::Select, Warn, "{kind}: {err}"))?;

        crate::log!(
            Topic::Select,
            Debug,
            "{kind}: resolved {} call(s)",
            resolved.len()
        );

        Ok(resolved)
    }

    /// Resolve every call section beneath `root`. Absent sections resolve to
    /// no calls.
    pub fn read(&self, root: &ConfigSection) -> Result<ConfigurationPlan<'a>, Error> {
        let mut plan = ConfigurationPlan::default();

        for kind in SectionKind::ALL {
            if let Some(section) = root.child(kind.key()) {
                *plan.calls_mut(kind) = self.resolve_section(kind, section)?;
            }
        }

        Ok(plan)
    }
}

///
/// TESTS
///
