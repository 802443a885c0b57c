//! Annotation of search results with impact factors.
//!
//! Scraped ranking data is the preferred source: when a ranking row
//! names the article's journal (case-insensitively), its value wins.
//! Every journal the rankings miss gets a resolver estimate instead,
//! so articles always leave this layer with a usable number.

use crate::core::resolver::resolve;
use crate::domain::model::{Article, JournalRanking};
use crate::domain::ports::{ArticleSource, RankingSource, RecordStore};
use crate::utils::error::Result;

/// Fill in `impact_factor` on each article, preferring scraped ranking
/// rows over resolver estimates.
pub fn annotate_articles(articles: &mut [Article], specialty: &str, rankings: &[JournalRanking]) {
    for article in articles.iter_mut() {
        let journal_lower = article.journal.to_lowercase();
        let ranked = rankings
            .iter()
            .find(|r| r.journal_name.to_lowercase() == journal_lower);
        article.impact_factor = match ranked {
            Some(row) => row.impact_factor,
            None => resolve(specialty, &article.journal),
        };
    }
}

/// Wires an article source and a ranking source through
/// [`annotate_articles`]. A failed ranking fetch degrades to
/// resolver-only annotation rather than failing the search.
pub struct ImpactAnnotator<A: ArticleSource, R: RankingSource> {
    articles: A,
    rankings: R,
}

impl<A: ArticleSource, R: RankingSource> ImpactAnnotator<A, R> {
    pub fn new(articles: A, rankings: R) -> Self {
        Self { articles, rankings }
    }

    pub fn search(&self, specialty: &str, query: &str) -> Result<Vec<Article>> {
        let mut articles = self.articles.search(query)?;

        let rankings = match self.rankings.rankings(specialty) {
            Ok(rankings) => rankings,
            Err(e) => {
                tracing::warn!("Ranking lookup failed for {}: {}; using estimates", specialty, e);
                Vec::new()
            }
        };

        annotate_articles(&mut articles, specialty, &rankings);
        Ok(articles)
    }
}

/// Exposes previously cached ranking JSON as a [`RankingSource`].
///
/// Rankings are stored under `rankings:{specialty}` as an array of
/// ranking rows. A missing or malformed entry behaves as an empty
/// ranking.
pub struct StoredRankings<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> StoredRankings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn cache_key(specialty: &str) -> String {
        format!("rankings:{}", specialty)
    }

    /// Cache rankings for later lookups. Returns false when the store
    /// rejects the write.
    pub fn save(&self, specialty: &str, rankings: &[JournalRanking]) -> Result<bool> {
        let value = serde_json::to_value(rankings)?;
        Ok(self.store.put(&Self::cache_key(specialty), value))
    }
}

impl<S: RecordStore> RankingSource for StoredRankings<S> {
    fn rankings(&self, specialty: &str) -> Result<Vec<JournalRanking>> {
        let Some(value) = self.store.get(&Self::cache_key(specialty)) else {
            return Ok(Vec::new());
        };
        match serde_json::from_value(value) {
            Ok(rankings) => Ok(rankings),
            Err(e) => {
                tracing::warn!("Discarding malformed ranking cache for {}: {}", specialty, e);
                Ok(Vec::new())
            }
        }
    }
}
