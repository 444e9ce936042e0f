use crate::domain::model::Talk;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

/// Upstream data: which months have photos and which talks were given.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Month labels with a photo, in the order the data file lists them.
    async fn photo_labels(&self) -> Result<Vec<String>>;
    /// Talks, newest first.
    async fn talks(&self) -> Result<Vec<Talk>>;
}
