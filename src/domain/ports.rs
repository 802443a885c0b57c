use crate::domain::model::{Article, JournalRanking};
use crate::utils::error::Result;

/// A source of articles for a search query (e.g. a PubMed client).
pub trait ArticleSource: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<Article>>;
}

/// A source of journal rankings for a specialty (e.g. a live scrape of
/// a ranking site, or a cache of one).
pub trait RankingSource: Send + Sync {
    fn rankings(&self, specialty: &str) -> Result<Vec<JournalRanking>>;
}

/// A key/value record store holding JSON values.
pub trait RecordStore: Send + Sync {
    fn get(&self, key: &str) -> Option<serde_json::Value>;
    /// Returns false when the value could not be persisted.
    fn put(&self, key: &str, value: serde_json::Value) -> bool;
}
