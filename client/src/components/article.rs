//! Single article card.
//!
//! DESIGN
//! ======
//! The author name is rendered as one text node so the link text reads
//! `First Last` in the markup without hydration separators between parts.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use leptos::prelude::*;
use state_api::{Article, Author};

use crate::util::date::display_date;

/// One article with its resolved author.
#[component]
pub fn ArticleCard(article: Article, author: Author) -> impl IntoView {
    let date = display_date(article.date);
    let name = author.full_name();

    view! {
        <div class="article">
            <div class="article__title">{article.title}</div>
            <div class="article__date">{date}</div>
            <div class="article__author">
                <a href=author.website>{name}</a>
            </div>
            <div class="article__body">{article.body}</div>
        </div>
    }
}
