//! Read-only accessor over a fixture of articles and authors.
//!
//! ERROR HANDLING
//! ==============
//! A fixture is validated once in [`DataApi::new`]. Duplicate ids and
//! articles pointing at an unknown author are rejected there; after that the
//! lookups are infallible.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::{Article, Author};
use crate::payload::InitialData;

/// Authors keyed by id. Ordered so the serialized payload is deterministic.
pub type Authors = BTreeMap<String, Author>;

/// Errors produced while loading a fixture or decoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The document is not valid JSON or a record has the wrong shape.
    #[error("malformed data: {0}")]
    Json(#[from] serde_json::Error),
    /// Two articles share the same id.
    #[error("duplicate article id: {0}")]
    DuplicateArticle(String),
    /// Two authors share the same id.
    #[error("duplicate author id: {0}")]
    DuplicateAuthor(String),
    /// An article references an author that is not present.
    #[error("article {article_id} references unknown author {author_id}")]
    UnknownAuthor { article_id: String, author_id: String },
    /// An author map entry is stored under a key other than its own id.
    #[error("author keyed as {key} has id {id}")]
    AuthorKeyMismatch { key: String, id: String },
}

/// Raw fixture document: parallel lists of articles and authors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Fixture {
    /// Parse a fixture document.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Json`] if the document or any record is malformed.
    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Validated lookups over a fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataApi {
    articles: Vec<Article>,
    authors: Authors,
}

impl DataApi {
    /// Build the accessor, indexing authors by id.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate article or author ids, or when an
    /// article's author id does not resolve.
    pub fn new(fixture: Fixture) -> Result<Self, DataError> {
        let Fixture { articles, authors: author_list } = fixture;

        let mut authors = Authors::new();
        for author in author_list {
            if authors.contains_key(&author.id) {
                return Err(DataError::DuplicateAuthor(author.id));
            }
            authors.insert(author.id.clone(), author);
        }

        validate_articles(&articles, &authors)?;
        Ok(Self { articles, authors })
    }

    /// Parse and validate a fixture document in one step.
    ///
    /// # Errors
    ///
    /// See [`Fixture::from_json`] and [`DataApi::new`].
    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        Self::new(Fixture::from_json(raw)?)
    }

    /// Every article, in fixture order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Every author, keyed by id.
    #[must_use]
    pub fn authors(&self) -> &Authors {
        &self.authors
    }

    /// Build the render payload for this fixture.
    #[must_use]
    pub fn initial_data(&self) -> InitialData {
        InitialData::from_validated(self.articles.clone(), self.authors.clone())
    }

    /// Consume the accessor into the render payload.
    #[must_use]
    pub fn into_initial_data(self) -> InitialData {
        InitialData::from_validated(self.articles, self.authors)
    }
}

/// Check article id uniqueness and that every author id resolves.
pub(crate) fn validate_articles(articles: &[Article], authors: &Authors) -> Result<(), DataError> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        if !seen.insert(article.id.as_str()) {
            return Err(DataError::DuplicateArticle(article.id.clone()));
        }
        if !authors.contains_key(&article.author_id) {
            return Err(DataError::UnknownAuthor {
                article_id: article.id.clone(),
                author_id: article.author_id.clone(),
            });
        }
    }
    Ok(())
}
