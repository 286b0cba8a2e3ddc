//! The registration pipeline: validate → collect → format → dispatch.
//!
//! Every stage is a pure function over a [`crate::model::snapshot::FormSnapshot`]
//! or a [`crate::model::record::RegistrationRecord`]; the frontend owns all
//! side effects (error highlighting, scrolling, notices, opening the deep
//! link).

pub mod collect;
pub mod dispatch;
pub mod message;
pub mod validate;
