// SPDX-License-Identifier: MPL-2.0
//! Fetching changelog documents over HTTP or from a local directory.
//!
//! Both sources address a document by the same relative path,
//! `changelogs/<code>.json`, under a configured base. Every failure mode
//! collapses into a [`LoadError`]; nothing is retried.

use super::{parse_document, ChangelogDocument};
use crate::config::CHANGELOG_PATH_TEMPLATE;
use crate::error::{Error, LoadError, Result};
use crate::i18n::Language;
use std::path::PathBuf;
use std::time::Duration;

/// Relative path of the document for `lang`.
#[must_use]
pub fn resource_path(lang: Language) -> String {
    CHANGELOG_PATH_TEMPLATE.replace("{lang}", lang.code())
}

/// Fetches documents from `<base_url>/changelogs/<code>.json`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .user_agent(concat!("ChangelogViewer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn url_for(&self, lang: Language) -> String {
        format!("{}/{}", self.base_url, resource_path(lang))
    }

    pub async fn fetch(&self, lang: Language) -> std::result::Result<ChangelogDocument, LoadError> {
        let url = self.url_for(lang);
        tracing::trace!(%url, "sending changelog request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        parse_document(&body)
    }
}

/// Reads documents from `<root>/changelogs/<code>.json` on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn path_for(&self, lang: Language) -> PathBuf {
        self.root.join(resource_path(lang))
    }

    pub async fn fetch(&self, lang: Language) -> std::result::Result<ChangelogDocument, LoadError> {
        let path = self.path_for(lang);
        tracing::debug!(path = %path.display(), "reading changelog");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?;
        parse_document(&bytes)
    }
}

/// The configured document source.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    Directory(DirectorySource),
}

impl Source {
    /// Picks the source kind from the shape of `base`: `http://`/`https://`
    /// URLs are fetched, anything else (optionally `file://`-prefixed) is a
    /// directory.
    pub fn from_base(base: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return HttpSource::new(trimmed, timeout).map(Source::Http);
        }

        let dir = trimmed.strip_prefix("file://").unwrap_or(trimmed);
        let dir = if dir.is_empty() { "." } else { dir };
        Ok(Source::Directory(DirectorySource::new(dir)))
    }

    /// Human-readable address of the document for `lang`.
    #[must_use]
    pub fn describe(&self, lang: Language) -> String {
        match self {
            Source::Http(http) => http.url_for(lang),
            Source::Directory(dir) => dir.path_for(lang).display().to_string(),
        }
    }

    pub async fn fetch(&self, lang: Language) -> std::result::Result<ChangelogDocument, LoadError> {
        match self {
            Source::Http(http) => http.fetch(lang).await,
            Source::Directory(dir) => dir.fetch(lang).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ONE_ENTRY: &str =
        r##"[{"version":"1.2.0","date":"2025-01-01","content":"# Hi\n- item"}]"##;

    #[test]
    fn resource_path_is_derived_from_code() {
        assert_eq!(resource_path(Language::English), "changelogs/en.json");
        assert_eq!(
            resource_path(Language::TraditionalChinese),
            "changelogs/tw.json"
        );
    }

    #[test]
    fn from_base_selects_http_for_urls() {
        let source = Source::from_base("https://example.org/app/", Duration::from_secs(1)).unwrap();
        assert!(matches!(source, Source::Http(_)));
        assert_eq!(
            source.describe(Language::Japanese),
            "https://example.org/app/changelogs/ja.json"
        );
    }

    #[test]
    fn from_base_selects_directory_otherwise() {
        let source = Source::from_base("file:///srv/site", Duration::from_secs(1)).unwrap();
        match source {
            Source::Directory(dir) => {
                assert_eq!(
                    dir.path_for(Language::English),
                    PathBuf::from("/srv/site/changelogs/en.json")
                );
            }
            other => panic!("expected directory source, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_fetch_parses_success_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/changelogs/en.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ONE_ENTRY)
            .create_async()
            .await;

        let source = HttpSource::new(&server.url(), Duration::from_secs(5)).unwrap();
        let doc = source.fetch(Language::English).await.expect("document");
        mock.assert_async().await;

        assert_eq!(doc.len(), 1);
        assert_eq!(doc[0].version, "1.2.0");
        assert_eq!(doc[0].content, "# Hi\n- item");
    }

    #[tokio::test]
    async fn http_fetch_maps_404_to_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/changelogs/ja.json")
            .with_status(404)
            .create_async()
            .await;

        let source = HttpSource::new(&server.url(), Duration::from_secs(5)).unwrap();
        let err = source.fetch(Language::Japanese).await.unwrap_err();
        assert_eq!(err, LoadError::Status(404));
    }

    #[tokio::test]
    async fn http_fetch_maps_bad_json_to_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/changelogs/zh.json")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let source = HttpSource::new(&server.url(), Duration::from_secs(5)).unwrap();
        let err = source.fetch(Language::SimplifiedChinese).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn http_fetch_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let source = HttpSource::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = source.fetch(Language::English).await.unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
    }

    #[tokio::test]
    async fn directory_fetch_reads_file() {
        let dir = tempdir().expect("temp dir");
        std::fs::create_dir_all(dir.path().join("changelogs")).unwrap();
        std::fs::write(dir.path().join("changelogs/en.json"), ONE_ENTRY).unwrap();

        let source = Source::Directory(DirectorySource::new(dir.path()));
        let doc = source.fetch(Language::English).await.expect("document");
        assert_eq!(doc[0].date, "2025-01-01");
    }

    #[tokio::test]
    async fn directory_fetch_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let source = DirectorySource::new(dir.path());
        let err = source.fetch(Language::Japanese).await.unwrap_err();
        match err {
            LoadError::Io(msg) => assert!(msg.contains("ja.json")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
