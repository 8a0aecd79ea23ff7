//! OpenFIGI client. Search and mapping are POST endpoints; the API key is
//! optional and raises the rate limits when present.

use finquery_api::{Client, Endpoint, Error, Method, Params};
use serde_json::Value;

use super::types::MappingJob;

const BASE_URL: &str = "https://api.openfigi.com";

/// Client for the OpenFIGI symbology API.
pub struct OpenFigiClient {
    inner: Client,
}

impl OpenFigiClient {
    /// Creates a client for the production API. Requests without a key are
    /// accepted at reduced rate limits.
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        Self::with_base_url(BASE_URL, api_key)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Result<Self, Error> {
        let mut endpoint =
            Endpoint::new(base_url).with_header("content-type", "application/json");
        if let Some(key) = api_key {
            endpoint = endpoint.with_header_auth("X-OPENFIGI-APIKEY", key);
        }
        Ok(Self {
            inner: Client::new(endpoint)?,
        })
    }

    /// Free-text search for securities.
    pub async fn search(&self, query: &str) -> Result<Value, Error> {
        self.inner
            .call("/v3/search", &Params::new().set("query", query), Method::Post)
            .await
    }

    /// Resolves a batch of identifiers to FIGIs. The endpoint takes the jobs
    /// as a top-level JSON array and answers with one result per job, in
    /// order.
    pub async fn mapping(&self, jobs: &[MappingJob]) -> Result<Value, Error> {
        self.inner.call_with_body("/v3/mapping", jobs).await
    }

    /// Lists the allowed values for one mapping enum field, e.g.
    /// `marketSecDes` or `exchCode`.
    pub async fn mapping_values(&self, field: &str) -> Result<Value, Error> {
        self.inner
            .call(
                &format!("/v3/mapping/values/{field}"),
                &Params::new(),
                Method::Get,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn search_posts_the_query_object() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/search"))
            .and(body_json(json!({"query": "APPLE"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"name": "APPLE INC"}]})),
            )
            .mount(&server)
            .await;

        let client = OpenFigiClient::with_base_url(&server.uri(), None).unwrap();
        let value = client.search("APPLE").await.unwrap();
        assert_eq!(value["data"][0]["name"], "APPLE INC");
    }

    #[tokio::test]
    async fn key_header_is_sent_when_configured() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/search"))
            .and(header("X-OPENFIGI-APIKEY", "figi-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let client =
            OpenFigiClient::with_base_url(&server.uri(), Some("figi-key".to_string())).unwrap();
        let value = client.search("APPLE").await.unwrap();
        assert_eq!(value, json!({"data": []}));
    }

    #[tokio::test]
    async fn key_header_is_absent_without_a_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let client = OpenFigiClient::with_base_url(&server.uri(), None).unwrap();
        client.search("APPLE").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("X-OPENFIGI-APIKEY").is_none());
    }

    #[tokio::test]
    async fn mapping_posts_jobs_as_an_array() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/mapping"))
            .and(body_json(json!([
                {"idType": "ID_BB_GLOBAL", "idValue": "BBG000BLNNH6", "exchCode": "US"}
            ])))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"data": [{"figi": "BBG000BLNNH6"}]}])),
            )
            .mount(&server)
            .await;

        let client = OpenFigiClient::with_base_url(&server.uri(), None).unwrap();
        let jobs = vec![MappingJob::new("ID_BB_GLOBAL", "BBG000BLNNH6").with_exch_code("US")];
        let value = client.mapping(&jobs).await.unwrap();
        assert_eq!(value[0]["data"][0]["figi"], "BBG000BLNNH6");
    }

    #[tokio::test]
    async fn mapping_values_is_a_get_on_the_field_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/mapping/values/marketSecDes"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"values": ["Comdty", "Equity"]})),
            )
            .mount(&server)
            .await;

        let client = OpenFigiClient::with_base_url(&server.uri(), None).unwrap();
        let value = client.mapping_values("marketSecDes").await.unwrap();
        assert_eq!(value["values"][1], "Equity");
    }

    #[tokio::test]
    async fn unauthorized_surfaces_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/search"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client =
            OpenFigiClient::with_base_url(&server.uri(), Some("bad-key".to_string())).unwrap();
        let err = client.search("APPLE").await.unwrap_err();
        match err {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
