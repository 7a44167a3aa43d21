//! Black-box fixtures for the safe-value boundary, exercising only the
//! public API.

use claims::{assert_err, assert_ok};
use safebind::{BindingContext, BindingValue, SafeValueError, ValidatedUrl, bridge};

fn accepts_url(url: &str) {
    let validated = assert_ok!(ValidatedUrl::parse(url.to_string()));
    assert_eq!(url, validated.as_ref());
}

fn rejects_url(url: &str) {
    assert_err!(ValidatedUrl::parse(url.to_string()));
}

fn accepts_string(value: &str, context: BindingContext) {
    assert_eq!(value, assert_ok!(bridge(value.into(), context)));
}

fn rejects(value: BindingValue, context: BindingContext) {
    assert_err!(bridge(value, context));
}

#[test]
fn validated_url_accepts_valid_urls() {
    accepts_url("http://www.google.com/");
    accepts_url("https://www.google.com/");
    accepts_url("HtTpS://www.google.com/");
    accepts_url("//www.google.com/");
    accepts_url("/c/1234/file/path.html@45");
    accepts_url("#hash-url");
    accepts_url("mailto:name@example.com");
}

#[test]
fn validated_url_rejects_invalid_urls() {
    rejects_url("javascript://alert(\"evil\");");
    rejects_url("ftp:example.com");
    rejects_url("data:text/html,scary business");
}

#[test]
fn bridge_accepts_valid_url_strings() {
    accepts_string("/foo/bar", BindingContext::Url);
    accepts_string("#baz", BindingContext::Url);
}

#[test]
fn bridge_rejects_invalid_url_strings() {
    rejects("javascript://void();".into(), BindingContext::Url);
}

#[test]
fn bridge_accepts_validated_url_values() {
    let url = assert_ok!(ValidatedUrl::parse("/abc/123".to_string()));
    assert_eq!("/abc/123", assert_ok!(bridge(url.into(), BindingContext::Url)));
}

#[test]
fn bridge_rejects_non_string_values_in_url_context() {
    let error = assert_err!(bridge(3.1415926.into(), BindingContext::Url));
    assert_eq!(
        SafeValueError::InvalidBindingValue(BindingContext::Url),
        error
    );
}

#[test]
fn bridge_accepts_any_binding_to_string_or_constant() {
    accepts_string("foo/bar/baz", BindingContext::String);
    accepts_string("lorem ipsum dolor", BindingContext::Constant);
}

#[test]
fn bridge_rejects_all_other_contexts() {
    rejects("foo".into(), BindingContext::Javascript);
    rejects("foo".into(), BindingContext::Html);
    rejects("foo".into(), BindingContext::ResourceUrl);
    rejects("foo".into(), BindingContext::Style);
}

#[test]
fn bridging_a_freshly_validated_url_is_idempotent() {
    for fixture in ["", "/foo/bar", "#hash-url", "https://www.google.com/"] {
        let url = assert_ok!(ValidatedUrl::parse(fixture.to_string()));
        assert_eq!(fixture, assert_ok!(bridge(url.into(), BindingContext::Url)));
    }
}
