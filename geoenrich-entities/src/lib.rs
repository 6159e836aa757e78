#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geoenrich-entities
//!
//! Reusable, agnostic domain entities for geoenrich.
//!
//! The entities only contain generic functionality that does not reveal any
//! provider-specific request or response handling.

pub mod address;
pub mod geocode;
pub mod output;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
