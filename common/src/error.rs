use thiserror::Error;

/// Failure raised while binding the field registry to the page.
///
/// Produced by the frontend's registry resolution pass at form
/// initialization. The submit pipeline never runs against a page that
/// failed this check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("form field `{0}` is missing from the page")]
    MissingField(&'static str),
}
