//! Type Registry System
//!
//! Defines the registration infrastructure for constructible types.
//! Uses the `linkme` crate for compile-time registration of types that can
//! be discovered and instantiated at runtime, alongside an explicit
//! [`TypeCatalog`] for startup-time registration.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Type Registration Flow                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate defines:   #[linkme::distributed_slice(               │
//! │                          TYPE_REGISTRATIONS)]                   │
//! │                      static ENTRY: TypeEntry = ...              │
//! │                              ↓                                  │
//! │  2. Catalog collects: TypeCatalog::linked()                     │
//! │                              ↓                                  │
//! │  3. Locator queries:  registry.lookup("Billing::Invoice")       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use ruse_application::{TYPE_REGISTRATIONS, TypeEntry};
//!
//! #[linkme::distributed_slice(TYPE_REGISTRATIONS)]
//! static MAILER: TypeEntry = TypeEntry {
//!     name: "Mailer",
//!     description: "Outgoing mail delivery",
//!     descriptor: || TypeDescriptor::builder("Mailer").build(|_| Ok(Mailer)),
//! };
//! ```

pub mod catalog;
pub mod types;

pub use catalog::TypeCatalog;
pub use types::{TYPE_REGISTRATIONS, TypeEntry, find_registered_type, list_registered_types};
