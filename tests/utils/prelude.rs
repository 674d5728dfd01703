#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{
    document_form, get_cached_app, request::*, response::*, uuid, App, SAMPLE_PDF,
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use coaching_backend::error;
pub use http::StatusCode;
pub use serde_json::{json, Value};
pub use serial_test::{parallel, serial};
