use std::collections::HashMap;

use async_trait::async_trait;
use axum::extract::{FromRequest, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Form;

use filestore_protocol::fields;

use crate::error::{ServerError, ServerResult};

/// `filename` and `content` fields of a write request.
///
/// Fields are read from an `application/x-www-form-urlencoded` or
/// `multipart/form-data` body, falling back to the query string. A body value
/// wins over a query value, and the first occurrence of a repeated key wins.
/// A missing field is empty text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentForm {
    pub filename: String,
    pub content: String,
}

impl DocumentForm {
    fn from_values(mut values: HashMap<String, String>) -> Self {
        Self {
            filename: values.remove(fields::FILENAME).unwrap_or_default(),
            content: values.remove(fields::CONTENT).unwrap_or_default(),
        }
    }

    /// The filename, rejecting an empty one. Required where a document is
    /// created.
    pub fn require_filename(&self) -> ServerResult<&str> {
        if self.filename.is_empty() {
            return Err(ServerError::BadRequest(format!(
                "missing `{}` field",
                fields::FILENAME
            )));
        }
        Ok(&self.filename)
    }
}

fn rejected(status: StatusCode, message: String) -> ServerError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(message)
    } else if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
        ServerError::UnsupportedMediaType(message)
    } else {
        ServerError::BadRequest(message)
    }
}

fn merge_first(values: &mut HashMap<String, String>, pairs: Vec<(String, String)>) {
    for (key, value) in pairs {
        values.entry(key).or_insert(value);
    }
}

/// `None` without a `Content-Type`, otherwise whether the body is multipart.
fn is_multipart(req: &Request) -> Option<bool> {
    req.headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().is_ok_and(|ct| ct.starts_with("multipart/form-data")))
}

async fn read_multipart<S>(req: Request, state: &S) -> ServerResult<Vec<(String, String)>>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| rejected(e.status(), e.body_text()))?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected(e.status(), e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;
        pairs.push((name, value));
    }
    Ok(pairs)
}

#[async_trait]
impl<S> FromRequest<S> for DocumentForm
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = match req.uri().query() {
            Some(_) => {
                let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                pairs
            }
            None => Vec::new(),
        };

        let body = match is_multipart(&req) {
            None => Vec::new(),
            Some(true) => read_multipart(req, state).await?,
            Some(false) => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                pairs
            }
        };

        let mut values = HashMap::new();
        merge_first(&mut values, body);
        merge_first(&mut values, query);
        Ok(Self::from_values(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn urlencoded(uri: &str, body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn multipart(parts: &[(&str, &str)]) -> Request {
        let boundary = "XBOUNDARYX";
        let mut body = String::new();
        for (name, value) in parts {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));
        Request::builder()
            .method("POST")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn parses_urlencoded() {
        let form = DocumentForm::from_request(urlencoded("/", "filename=a.txt&content=hi+there"), &())
            .await
            .unwrap();
        assert_eq!(form.filename, "a.txt");
        assert_eq!(form.content, "hi there");
    }

    #[tokio::test]
    async fn parses_multipart() {
        let req = multipart(&[("filename", "notes.md"), ("content", "line one\nline two")]);
        let form = DocumentForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.filename, "notes.md");
        assert_eq!(form.content, "line one\nline two");
    }

    #[tokio::test]
    async fn missing_fields_are_empty() {
        let form = DocumentForm::from_request(urlencoded("/", "filename=a"), &())
            .await
            .unwrap();
        assert_eq!(form.content, "");

        let form = DocumentForm::from_request(urlencoded("/", "content=x"), &())
            .await
            .unwrap();
        assert_eq!(form.filename, "");
    }

    #[tokio::test]
    async fn query_string_is_a_fallback() {
        let req = Request::builder()
            .method("POST")
            .uri("/remove?filename=a.txt")
            .body(Body::empty())
            .unwrap();
        let form = DocumentForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.filename, "a.txt");

        let req = urlencoded("/update?filename=query&content=q", "filename=body");
        let form = DocumentForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.filename, "body");
        assert_eq!(form.content, "q");
    }

    #[tokio::test]
    async fn repeated_field_keeps_first() {
        let form = DocumentForm::from_request(urlencoded("/", "filename=a&filename=b"), &())
            .await
            .unwrap();
        assert_eq!(form.filename, "a");
    }

    #[test]
    fn require_filename_rejects_empty() {
        let form = DocumentForm {
            filename: String::new(),
            content: "x".into(),
        };
        assert!(matches!(form.require_filename(), Err(ServerError::BadRequest(_))));

        let form = DocumentForm {
            filename: "a".into(),
            content: String::new(),
        };
        assert_eq!(form.require_filename().unwrap(), "a");
    }

    #[tokio::test]
    async fn wrong_content_type_is_unsupported() {
        let req = Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let err = DocumentForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, ServerError::UnsupportedMediaType(_)));
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
