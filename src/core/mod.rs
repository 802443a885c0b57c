pub mod estimate;
pub mod resolver;
pub mod tables;

pub use crate::domain::model::{Article, JournalRanking};
pub use crate::domain::ports::{ArticleSource, RankingSource, RecordStore};
pub use crate::utils::error::Result;
