//! # Ruse Application
//!
//! Registration tables that back the type locator. Types become
//! constructible either by explicit registration on a [`TypeCatalog`] at
//! startup, or by compile-time submission to [`TYPE_REGISTRATIONS`].

pub mod ports;

pub use ports::registry::{
    TYPE_REGISTRATIONS, TypeCatalog, TypeEntry, find_registered_type, list_registered_types,
};
