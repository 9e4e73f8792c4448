//! Constructible type descriptors
//!
//! A [`TypeDescriptor`] is the explicit stand-in for constructor
//! introspection: a fully-qualified name, the ordered constructor parameter
//! list, and a constructor closure that receives the resolved [`Arguments`].
//!
//! ```
//! use ruse_domain::{Arguments, TypeDescriptor};
//! use std::sync::Arc;
//!
//! struct Mailer;
//! struct Signup {
//!     mailer: Arc<Mailer>,
//! }
//!
//! let descriptor = TypeDescriptor::builder("Signup")
//!     .required("mailer")
//!     .build(|args: Arguments| Ok(Signup { mailer: args.require("mailer")? }));
//! assert_eq!(descriptor.parameters().len(), 1);
//! ```

use std::any::{Any, type_name};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::service::{Service, downcast, service};

/// How a constructor parameter is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Positional, must be supplied
    Required,
    /// Positional with a default the constructor applies itself
    Optional,
    /// Keyword, must be supplied
    KeywordRequired,
    /// Keyword with a default the constructor applies itself
    KeywordOptional,
    /// Variadic rest parameter, never injected
    Rest,
}

impl ParameterKind {
    /// Whether the parameter must be resolved for construction to proceed
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required | Self::KeywordRequired)
    }

    /// Whether the constructor carries its own default for the parameter
    pub fn has_default(self) -> bool {
        matches!(self, Self::Optional | Self::KeywordOptional)
    }

    /// Whether the parameter is passed by name
    pub fn is_keyword(self) -> bool {
        matches!(self, Self::KeywordRequired | Self::KeywordOptional)
    }
}

/// One declared constructor parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
}

impl Parameter {
    /// Declare a parameter; its name doubles as the identifier to resolve
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Declared name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }
}

/// A resolved positional argument together with the parameter it fills
#[derive(Clone)]
pub struct Argument {
    name: String,
    value: Service,
}

impl Argument {
    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved value
    pub fn value(&self) -> &Service {
        &self.value
    }
}

/// Resolved constructor arguments
///
/// Positional arguments appear in declared order. Optional parameters that
/// could not be resolved are simply absent. The keyword collection is `None`
/// when no keyword argument was supplied at all.
#[derive(Clone)]
pub struct Arguments {
    type_name: String,
    positional: Vec<Argument>,
    keywords: Option<BTreeMap<String, Service>>,
}

impl Arguments {
    /// Start an empty argument list for `type_name`
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            positional: Vec::new(),
            keywords: None,
        }
    }

    /// Append a positional argument
    pub fn push_positional(&mut self, name: impl Into<String>, value: Service) {
        self.positional.push(Argument {
            name: name.into(),
            value,
        });
    }

    /// Add a keyword argument, creating the keyword collection on first use
    pub fn insert_keyword(&mut self, name: impl Into<String>, value: Service) {
        self.keywords
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value);
    }

    /// Name of the type being constructed
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Positional arguments in declared order
    pub fn positional(&self) -> &[Argument] {
        &self.positional
    }

    /// Keyword arguments, absent when none were supplied
    pub fn keywords(&self) -> Option<&BTreeMap<String, Service>> {
        self.keywords.as_ref()
    }

    /// Untyped lookup by parameter name, positional first then keywords
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.positional
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
            .or_else(|| self.keywords.as_ref().and_then(|kw| kw.get(name)))
    }

    /// Whether an argument was supplied for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.service(name).is_some()
    }

    /// Typed lookup of an argument that may have been omitted
    ///
    /// Returns `Ok(None)` when the argument is absent so the constructor can
    /// fall back to its default, and an error when it is present with the
    /// wrong type.
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Result<Option<Arc<T>>> {
        match self.service(name) {
            None => Ok(None),
            Some(value) => downcast::<T>(value).map(Some).ok_or_else(|| {
                Error::construction(
                    &self.type_name,
                    format!("argument '{name}' is not a {}", type_name::<T>()),
                )
            }),
        }
    }

    /// Typed lookup of an argument that must be present
    pub fn require<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        self.get::<T>(name)?.ok_or_else(|| {
            Error::construction(&self.type_name, format!("missing argument '{name}'"))
        })
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positional: Vec<&str> = self.positional.iter().map(Argument::name).collect();
        let keywords: Option<Vec<&String>> = self.keywords.as_ref().map(|kw| kw.keys().collect());
        f.debug_struct("Arguments")
            .field("type_name", &self.type_name)
            .field("positional", &positional)
            .field("keywords", &keywords)
            .finish()
    }
}

type ConstructFn = dyn Fn(Arguments) -> Result<Service> + Send + Sync;

/// A constructible type: name, constructor parameters and constructor
#[derive(Clone)]
pub struct TypeDescriptor {
    name: String,
    parameters: Vec<Parameter>,
    constructor: Arc<ConstructFn>,
}

impl TypeDescriptor {
    /// Start describing the type registered under `name`
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Fully-qualified type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared constructor parameters in order
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Run the constructor with resolved arguments
    pub fn construct(&self, arguments: Arguments) -> Result<Service> {
        (self.constructor)(arguments)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TypeDescriptor`]
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    parameters: Vec<Parameter>,
}

impl TypeDescriptorBuilder {
    /// Declare a parameter of any kind
    pub fn parameter(mut self, name: impl Into<String>, kind: ParameterKind) -> Self {
        self.parameters.push(Parameter::new(name, kind));
        self
    }

    /// Declare a required positional parameter
    pub fn required(self, name: impl Into<String>) -> Self {
        self.parameter(name, ParameterKind::Required)
    }

    /// Declare an optional positional parameter
    pub fn optional(self, name: impl Into<String>) -> Self {
        self.parameter(name, ParameterKind::Optional)
    }

    /// Declare a required keyword parameter
    pub fn keyword(self, name: impl Into<String>) -> Self {
        self.parameter(name, ParameterKind::KeywordRequired)
    }

    /// Declare an optional keyword parameter
    pub fn keyword_optional(self, name: impl Into<String>) -> Self {
        self.parameter(name, ParameterKind::KeywordOptional)
    }

    /// Declare a variadic rest parameter
    pub fn rest(self, name: impl Into<String>) -> Self {
        self.parameter(name, ParameterKind::Rest)
    }

    /// Finish with a constructor returning a concrete value
    pub fn build<T, F>(self, construct: F) -> TypeDescriptor
    where
        T: Any + Send + Sync,
        F: Fn(Arguments) -> Result<T> + Send + Sync + 'static,
    {
        TypeDescriptor {
            name: self.name,
            parameters: self.parameters,
            constructor: Arc::new(move |args| construct(args).map(service)),
        }
    }

    /// Finish with a constructor that already returns a [`Service`]
    pub fn build_service<F>(self, construct: F) -> TypeDescriptor
    where
        F: Fn(Arguments) -> Result<Service> + Send + Sync + 'static,
    {
        TypeDescriptor {
            name: self.name,
            parameters: self.parameters,
            constructor: Arc::new(construct),
        }
    }
}
