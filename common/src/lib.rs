//! Shared registration core for the Kleine Kuppe Private School site.
//!
//! Everything in this crate is pure and platform-independent: the frontend
//! reads the live widget tree into a [`model::snapshot::FormSnapshot`] and
//! feeds it through validation, collection, formatting, and dispatch. The
//! crate never touches the DOM, never performs I/O, and never stores a
//! submission. The only outputs are a validation report and a deep-link
//! [`registration::dispatch::ExternalAction`].

pub mod error;
pub mod model;
pub mod registration;
pub mod site;
