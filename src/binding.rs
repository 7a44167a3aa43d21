use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ValidatedUrl;
use crate::error::SafeValueError;

/// The kind of sink a template binding writes into.
///
/// The set is closed: adding a variant forces every dispatch site to be
/// revisited. On the wire the rendering layer names contexts with
/// SCREAMING_SNAKE_CASE tags (`"URL"`, `"RESOURCE_URL"`, ...), which is what
/// `FromStr`, `Display` and the serde impls speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BindingContext {
    String,
    Constant,
    Url,
    ResourceUrl,
    Html,
    Javascript,
    Style,
}

impl BindingContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Constant => "CONSTANT",
            Self::Url => "URL",
            Self::ResourceUrl => "RESOURCE_URL",
            Self::Html => "HTML",
            Self::Javascript => "JAVASCRIPT",
            Self::Style => "STYLE",
        }
    }
}

impl Display for BindingContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingContext {
    type Err = SafeValueError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "STRING" => Ok(Self::String),
            "CONSTANT" => Ok(Self::Constant),
            "URL" => Ok(Self::Url),
            "RESOURCE_URL" => Ok(Self::ResourceUrl),
            "HTML" => Ok(Self::Html),
            "JAVASCRIPT" => Ok(Self::Javascript),
            "STYLE" => Ok(Self::Style),
            unknown => Err(SafeValueError::InvalidBindingContext(unknown.to_string())),
        }
    }
}

/// A value the rendering layer is about to commit into a binding.
///
/// Template engines hand over more than strings, so the non-string
/// primitives are modeled too; only `Text` and `Url` have a path into a URL
/// sink.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingValue {
    Text(String),
    Url(ValidatedUrl),
    Number(f64),
    Bool(bool),
    Null,
}

impl From<String> for BindingValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for BindingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<ValidatedUrl> for BindingValue {
    fn from(url: ValidatedUrl) -> Self {
        Self::Url(url)
    }
}

impl From<f64> for BindingValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for BindingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Decides whether `value` may be committed into `context`, returning the
/// primitive string to bind.
///
/// The caller must not bind anything when this fails.
pub fn bridge(value: BindingValue, context: BindingContext) -> Result<String, SafeValueError> {
    let outcome = dispatch(value, context);
    if let Err(error) = &outcome {
        tracing::warn!(context = %context, %error, "Refused value for sensitive binding");
    }
    outcome
}

fn dispatch(value: BindingValue, context: BindingContext) -> Result<String, SafeValueError> {
    match context {
        // Inert sinks: anything binds as plain text, no validation.
        BindingContext::String | BindingContext::Constant => Ok(render_text(value)),
        BindingContext::Url => match value {
            BindingValue::Text(raw) => Ok(ValidatedUrl::parse(raw)?.into_inner()),
            // Already proven safe at construction time.
            BindingValue::Url(url) => Ok(url.into_inner()),
            BindingValue::Number(_) | BindingValue::Bool(_) | BindingValue::Null => {
                Err(SafeValueError::InvalidBindingValue(context))
            }
        },
        // No safe construction path exists for these sinks; fail closed.
        BindingContext::ResourceUrl
        | BindingContext::Html
        | BindingContext::Javascript
        | BindingContext::Style => Err(SafeValueError::InvalidBindingContext(
            context.as_str().to_string(),
        )),
    }
}

fn render_text(value: BindingValue) -> String {
    match value {
        BindingValue::Text(s) => s,
        BindingValue::Url(url) => url.into_inner(),
        BindingValue::Number(n) => n.to_string(),
        BindingValue::Bool(b) => b.to_string(),
        BindingValue::Null => String::new(),
    }
}
