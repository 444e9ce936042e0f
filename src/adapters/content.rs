use crate::core::talks::{parse_talks_txt, talks_from_pairs};
use crate::core::{ContentSource, Storage, Talk};
use crate::domain::period::Period;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const PHOTOS_FILE: &str = "photos.json";
pub const TALKS_JSON_FILE: &str = "talks.json";
pub const TALKS_TXT_FILE: &str = "talks.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalksSource {
    /// `talks.json`, already carrying months.
    #[default]
    Json,
    /// `talks.txt` speaker/topic pairs, stamped with the current month.
    Text,
}

/// Reads the site's data files through a [`Storage`].
pub struct FileContentSource<S: Storage> {
    storage: S,
    talks_source: TalksSource,
}

impl<S: Storage> FileContentSource<S> {
    pub fn new(storage: S, talks_source: TalksSource) -> Self {
        Self {
            storage,
            talks_source,
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self.storage.read_file(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl<S: Storage> ContentSource for FileContentSource<S> {
    async fn photo_labels(&self) -> Result<Vec<String>> {
        let labels: Vec<String> = self.read_json(PHOTOS_FILE).await?;
        tracing::debug!("Loaded {} photo labels", labels.len());
        Ok(labels)
    }

    async fn talks(&self) -> Result<Vec<Talk>> {
        let file = match self.talks_source {
            TalksSource::Json => TALKS_JSON_FILE,
            TalksSource::Text => TALKS_TXT_FILE,
        };

        if !self.storage.exists(file).await {
            tracing::warn!("No {} found, talks table will be empty", file);
            return Ok(Vec::new());
        }

        let talks: Vec<Talk> = match self.talks_source {
            TalksSource::Json => self.read_json(file).await?,
            TalksSource::Text => {
                let bytes = self.storage.read_file(file).await?;
                let content = String::from_utf8_lossy(&bytes);
                talks_from_pairs(parse_talks_txt(&content), &Period::current().short_label())
            }
        };

        tracing::debug!("Loaded {} talks from {}", talks.len(), file);
        Ok(talks)
    }
}
