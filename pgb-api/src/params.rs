//! Request model: method, path, and form parameters.
//!
//! File uploads are an explicit parameter variant, so a text value that
//! happens to start with `@` is always sent literally.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use pgb_core::error::PgbResult;

/// HTTP methods used by the build service API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
}

impl HttpMethod {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Post => Method::POST,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single form parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Literal text field.
    Text(String),
    /// Local file, read and uploaded when the request is dispatched.
    File(PathBuf),
}

/// Ordered list of named form parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push((name.into(), ParamValue::Text(value.into())));
        self
    }

    /// Add a file upload field.
    pub fn file(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries
            .push((name.into(), ParamValue::File(path.into())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up the first value with the given name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Build a multipart form, reading any referenced files from disk.
    pub async fn to_form(&self) -> PgbResult<Form> {
        let mut form = Form::new();
        for (name, value) in &self.entries {
            form = match value {
                ParamValue::Text(text) => form.text(name.clone(), text.clone()),
                ParamValue::File(path) => {
                    let bytes = tokio::fs::read(path).await?;
                    let part = Part::bytes(bytes).file_name(upload_file_name(path));
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

/// File name reported for an upload: the last path component.
fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string())
}

/// A fully described API call, independent of any client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the service base URL, starting with `/`.
    pub path: String,
    pub params: Params,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>, params: Params) -> Self {
        Self {
            method,
            path: path.into(),
            params,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path, Params::new())
    }

    pub fn put(path: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Put, path, params)
    }

    pub fn post(path: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Post, path, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(Method::from(HttpMethod::Get), Method::GET);
        assert_eq!(Method::from(HttpMethod::Put), Method::PUT);
        assert_eq!(Method::from(HttpMethod::Post), Method::POST);
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
    }

    #[test]
    fn test_params_keep_order_and_kind() {
        let params = Params::new()
            .text("data", "{}")
            .file("file", "/tmp/app.zip")
            .text("note", "@not-a-file");

        assert_eq!(params.len(), 3);
        assert_eq!(params.names(), vec!["data", "file", "note"]);
        assert_eq!(
            params.get("file"),
            Some(&ParamValue::File(PathBuf::from("/tmp/app.zip")))
        );
        assert_eq!(
            params.get("note"),
            Some(&ParamValue::Text("@not-a-file".into()))
        );
        assert!(params.get("missing").is_none());
    }

    #[test]
    fn test_upload_file_name() {
        assert_eq!(upload_file_name(Path::new("/tmp/build/app.zip")), "app.zip");
        assert_eq!(upload_file_name(Path::new("/")), "upload");
    }

    #[tokio::test]
    async fn test_to_form_missing_file_is_io_error() {
        let params = Params::new().file("file", "/definitely/not/here/app.zip");
        let err = params.to_form().await.unwrap_err();
        assert!(matches!(err, pgb_core::PgbError::Io(_)));
    }

    #[tokio::test]
    async fn test_to_form_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.zip");
        std::fs::write(&path, b"PK\x03\x04").unwrap();

        let form = Params::new()
            .text("data", "{}")
            .file("file", &path)
            .to_form()
            .await
            .unwrap();
        assert!(!form.boundary().is_empty());
    }
}
