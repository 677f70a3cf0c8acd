use reqwest::multipart;
use reqwest::{Client, Response};

use filestore_analysis::{RankedWords, SortOrder};
use filestore_protocol::{
    endpoints, fields, DocumentResponse, FileQuery, FreqWordsQuery, HealthResponse,
};

use crate::error::{ClientError, ClientResult};

/// HTTP client for a running file store server.
pub struct StoreClient {
    base: String,
    http: Client,
}

impl StoreClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Create a document. Sent as `multipart/form-data`.
    pub async fn add(&self, name: &str, content: &str) -> ClientResult<()> {
        let form = multipart::Form::new()
            .text(fields::FILENAME, name.to_string())
            .text(fields::CONTENT, content.to_string());
        tracing::debug!(name, bytes = content.len(), "POST {}", endpoints::ADD);
        let resp = self
            .http
            .post(self.url(endpoints::ADD))
            .multipart(form)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn remove(&self, name: &str) -> ClientResult<()> {
        tracing::debug!(name, "POST {}", endpoints::REMOVE);
        let resp = self
            .http
            .post(self.url(endpoints::REMOVE))
            .form(&[(fields::FILENAME, name)])
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Replace a document's content. Sent url-encoded.
    pub async fn update(&self, name: &str, content: &str) -> ClientResult<()> {
        tracing::debug!(name, bytes = content.len(), "POST {}", endpoints::UPDATE);
        let resp = self
            .http
            .post(self.url(endpoints::UPDATE))
            .form(&[(fields::FILENAME, name), (fields::CONTENT, content)])
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn list(&self) -> ClientResult<Vec<String>> {
        let resp = self.http.get(self.url(endpoints::LIST)).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn get(&self, name: &str) -> ClientResult<DocumentResponse> {
        let query = FileQuery {
            filename: name.to_string(),
        };
        let resp = self
            .http
            .get(self.url(endpoints::GET))
            .query(&query)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Total words across every stored document.
    pub async fn word_count(&self) -> ClientResult<u64> {
        let resp = self.http.get(self.url(endpoints::WORD_COUNT)).send().await?;
        let body = check(resp).await?.text().await?;
        body.trim()
            .parse()
            .map_err(|_| ClientError::InvalidResponse(format!("expected an integer, got {body:?}")))
    }

    /// Ranked word counts, in the order the server ranked them.
    pub async fn frequent_words(&self, limit: i64, order: SortOrder) -> ClientResult<RankedWords> {
        let resp = self
            .http
            .get(self.url(endpoints::FREQ_WORDS))
            .query(&FreqWordsQuery::new(limit, order))
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let resp = self.http.get(self.url(endpoints::HEALTH)).send().await?;
        Ok(check(resp).await?.json().await?)
    }
}

/// Turn a non-success response into `ClientError::Status`.
async fn check(resp: Response) -> ClientResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default().trim().to_string();
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use filestore_server::{FileStoreServer, ServerConfig};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    async fn spawn_server(config: ServerConfig) -> (StoreClient, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = FileStoreServer::new(config);
        let handle = tokio::spawn(async move {
            let _ = server.serve_on(listener).await;
        });
        (StoreClient::new(format!("http://{addr}/")), handle)
    }

    #[test]
    fn base_is_trimmed() {
        let client = StoreClient::new("http://localhost:8080///");
        assert_eq!(client.base(), "http://localhost:8080");
        assert_eq!(client.url("/wc"), "http://localhost:8080/wc");
    }

    #[tokio::test]
    async fn crud_roundtrip() {
        let (client, server) = spawn_server(ServerConfig::default()).await;

        client.add("notes.txt", "Hello, hello world").await.unwrap();
        let doc = client.get("notes.txt").await.unwrap();
        assert_eq!(doc.name, "notes.txt");
        assert_eq!(doc.content, "Hello, hello world");

        client.update("notes.txt", "a & b = c").await.unwrap();
        assert_eq!(client.get("notes.txt").await.unwrap().content, "a & b = c");

        assert_eq!(client.list().await.unwrap(), vec!["notes.txt"]);

        client.remove("notes.txt").await.unwrap();
        assert!(client.list().await.unwrap().is_empty());

        server.abort();
    }

    #[tokio::test]
    async fn errors_carry_status_and_message() {
        let (client, server) = spawn_server(ServerConfig::default()).await;

        client.add("a", "x").await.unwrap();
        let err = client.add("a", "y").await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("already exists"));

        let err = client.remove("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        let err = client.get("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        server.abort();
    }

    #[tokio::test]
    async fn analytics() {
        let (client, server) = spawn_server(ServerConfig::default()).await;

        assert_eq!(client.word_count().await.unwrap(), 0);
        assert!(client
            .frequent_words(10, SortOrder::Descending)
            .await
            .unwrap()
            .is_empty());

        client.add("one", "the cat the").await.unwrap();
        client.add("two", "the dog").await.unwrap();
        assert_eq!(client.word_count().await.unwrap(), 5);

        let top = client.frequent_words(1, SortOrder::Descending).await.unwrap();
        assert_eq!(top.into_vec(), vec![("the".to_string(), 3)]);

        let asc = client.frequent_words(10, SortOrder::Ascending).await.unwrap();
        assert_eq!(asc.words(), vec!["cat", "dog", "the"]);

        server.abort();
    }

    #[tokio::test]
    async fn health_reports_document_count() {
        let (client, server) = spawn_server(ServerConfig::default()).await;
        client.add("a", "").await.unwrap();
        let health = client.health().await.unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.documents, 1);
        server.abort();
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = StoreClient::new(format!("http://{addr}"));
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
