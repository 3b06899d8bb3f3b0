//! The render payload shared by the server render and browser hydration.
//!
//! DESIGN
//! ======
//! `InitialData` can only be built from validated data: through
//! [`DataApi`](crate::DataApi) on the server, or through deserialization,
//! which re-runs the same checks. Every article therefore resolves to an
//! author and [`InitialData::entries`] never drops a record.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::api::{Authors, DataError, validate_articles};
use crate::model::{Article, Author};

/// Ordered articles plus their authors keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInitialData")]
pub struct InitialData {
    articles: Vec<Article>,
    authors: Authors,
}

#[derive(Deserialize)]
struct RawInitialData {
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    authors: Authors,
}

impl TryFrom<RawInitialData> for InitialData {
    type Error = DataError;

    fn try_from(raw: RawInitialData) -> Result<Self, Self::Error> {
        for (key, author) in &raw.authors {
            if *key != author.id {
                return Err(DataError::AuthorKeyMismatch { key: key.clone(), id: author.id.clone() });
            }
        }
        validate_articles(&raw.articles, &raw.authors)?;
        Ok(Self { articles: raw.articles, authors: raw.authors })
    }
}

impl InitialData {
    pub(crate) fn from_validated(articles: Vec<Article>, authors: Authors) -> Self {
        Self { articles, authors }
    }

    /// Articles in input order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Authors keyed by id.
    #[must_use]
    pub fn authors(&self) -> &Authors {
        &self.authors
    }

    /// Articles in order, each paired with its resolved author.
    pub fn entries(&self) -> impl Iterator<Item = (&Article, &Author)> {
        self.articles
            .iter()
            .filter_map(|article| self.authors.get(&article.author_id).map(|author| (article, author)))
    }

    /// Number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// True when there are no articles to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
