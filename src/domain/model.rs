use serde::{Deserialize, Serialize};

/// An article returned by a literature search, annotated with the
/// impact factor of the journal it appeared in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub pmid: String,
    pub title: String,
    pub journal: String,
    #[serde(default)]
    pub pub_date: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub mesh_terms: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub impact_factor: f64,
}

/// One row of a journal ranking for a specialty, as produced by a live
/// ranking source. Rank is assigned after sorting by impact factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalRanking {
    pub rank: usize,
    pub journal_name: String,
    pub impact_factor: f64,
}
