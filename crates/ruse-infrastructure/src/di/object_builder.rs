//! Object construction from type descriptors
//!
//! Walks a descriptor's constructor parameters in declared order:
//!
//! | Parameter kind | Handling |
//! |----------------|----------|
//! | required, keyword-required | resolved; failures propagate |
//! | optional, keyword-optional | resolved only when resolvable, otherwise omitted |
//! | rest | skipped |
//!
//! Omitted optionals leave the constructor free to apply its own default.

use ruse_domain::{
    Arguments, Error, Identifier, Parameter, ParameterKind, Result, Service, ServiceResolver,
    TypeDescriptor,
};
use tracing::trace;

/// Builds instances of located types by resolving their dependencies
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectBuilder;

impl ObjectBuilder {
    /// Create a builder
    pub fn new() -> Self {
        Self
    }

    /// Resolve the descriptor's parameters through `resolver` and construct it
    pub fn build(
        &self,
        descriptor: &TypeDescriptor,
        resolver: &dyn ServiceResolver,
    ) -> Result<Service> {
        let arguments = self.resolve_arguments(descriptor, resolver)?;
        descriptor.construct(arguments)
    }

    /// Resolve the arguments a descriptor's constructor will receive
    pub fn resolve_arguments(
        &self,
        descriptor: &TypeDescriptor,
        resolver: &dyn ServiceResolver,
    ) -> Result<Arguments> {
        let mut arguments = Arguments::new(descriptor.name());

        for parameter in descriptor.parameters() {
            if parameter.kind() == ParameterKind::Rest {
                trace!(
                    type_name = descriptor.name(),
                    parameter = parameter.name(),
                    "Skipping rest parameter"
                );
                continue;
            }

            let identifier = parameter_identifier(descriptor, parameter)?;
            let Some(value) = resolve_parameter(parameter, &identifier, resolver)? else {
                trace!(
                    type_name = descriptor.name(),
                    parameter = parameter.name(),
                    "Optional parameter not resolvable, leaving default"
                );
                continue;
            };

            if parameter.kind().is_keyword() {
                arguments.insert_keyword(parameter.name(), value);
            } else {
                arguments.push_positional(parameter.name(), value);
            }
        }

        Ok(arguments)
    }
}

fn resolve_parameter(
    parameter: &Parameter,
    identifier: &Identifier,
    resolver: &dyn ServiceResolver,
) -> Result<Option<Service>> {
    if parameter.kind().is_required() || resolver.can_resolve(identifier) {
        resolver.resolve(identifier).map(Some)
    } else {
        Ok(None)
    }
}

fn parameter_identifier(descriptor: &TypeDescriptor, parameter: &Parameter) -> Result<Identifier> {
    Identifier::new(parameter.name()).map_err(|_| {
        Error::construction(
            descriptor.name(),
            format!("parameter {:?} has a blank name", parameter.name()),
        )
    })
}
