use crate::binding::BindingContext;

/// Reasons the safe-value boundary refuses an input.
///
/// Every rejection surfaces immediately to the caller; there is no retry and
/// no coercion of a rejected value into an accepted one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SafeValueError {
    #[error("Invalid URL: scheme '{0}' is not one of http, https, mailto.")]
    InvalidUrlScheme(String),
    #[error("Invalid binding context: no safe value can be constructed for '{0}'.")]
    InvalidBindingContext(String),
    #[error("Invalid binding value: a {0} binding accepts only strings and validated URLs.")]
    InvalidBindingValue(BindingContext),
}
