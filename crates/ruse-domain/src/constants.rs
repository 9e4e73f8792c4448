//! Domain layer constants
//!
//! Naming rules shared by the classifier, the type registry and the locator.
//! Infrastructure-specific constants live in `ruse_infrastructure::constants`.

/// Separator between namespace components of a fully-qualified type name
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Separator between namespace components inside an identifier (`a/b_c`)
pub const IDENTIFIER_PATH_SEPARATOR: char = '/';
