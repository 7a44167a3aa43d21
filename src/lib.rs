//! Trust boundary between untrusted strings and DOM-sensitive template
//! bindings.
//!
//! The rendering layer calls [`bridge`] with a value and the
//! [`BindingContext`] it is about to write into. The bridge either returns a
//! plain string that is safe to commit, or fails — and a failed value must
//! never be bound. URL sinks are guarded by [`ValidatedUrl`], a wrapper that
//! can only be constructed by passing the scheme allowlist check once, at
//! parse time. Markup, script, style and remote-resource sinks have no safe
//! construction path at all and always reject.

pub mod binding;
pub mod domain;
pub mod error;

pub use binding::{BindingContext, BindingValue, bridge};
pub use domain::ValidatedUrl;
pub use error::SafeValueError;
