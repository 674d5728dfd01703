use bytes::Bytes;
use http::StatusCode;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct TestResponse {
    response: reqwest::Response,
}

#[allow(unused)]
impl TestResponse {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        TestResponse { response }
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        self.response
            .json()
            .await
            .expect("failed to deserialize to json")
    }

    pub async fn bytes(self) -> Bytes {
        self.response
            .bytes()
            .await
            .expect("failed to read response body")
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.response.headers().get(name)
    }
}
