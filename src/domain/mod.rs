mod safe_url;

pub use safe_url::{ALLOWED_URL_SCHEMES, ValidatedUrl};
