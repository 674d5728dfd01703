use super::response::TestResponse;
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;

const ADMIN_USER: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug)]
pub struct RequestBuilder {
    builder: reqwest::RequestBuilder,
}

#[allow(unused)]
impl RequestBuilder {
    pub(super) fn new(builder: reqwest::RequestBuilder) -> Self {
        RequestBuilder { builder }
    }

    pub async fn send(self) -> TestResponse {
        TestResponse::new(self.builder.send().await.expect("failed to send request"))
    }

    pub fn json<T>(mut self, value: &T) -> RequestBuilder
    where
        T: Serialize,
    {
        self.builder = self.builder.json(value);
        self
    }

    pub fn multipart(mut self, form: reqwest::multipart::Form) -> RequestBuilder {
        self.builder = self.builder.multipart(form);
        self
    }

    /// The default admin credentials the backend falls back to when
    /// ADMIN_PASSWORD is not set.
    pub fn admin(self) -> RequestBuilder {
        self.basic_auth(ADMIN_USER, ADMIN_PASSWORD)
    }

    pub fn basic_auth(mut self, username: &str, password: &str) -> RequestBuilder {
        self.builder = self.builder.basic_auth(username, Some(password));
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        self.builder = self.builder.header(key, value);
        self
    }
}
