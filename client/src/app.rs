//! Root component listing every article.

use leptos::prelude::*;
use state_api::InitialData;

use crate::components::article::ArticleCard;

/// The article list. Each article is paired with its author and handed to
/// [`ArticleCard`]; nothing here is reactive.
#[component]
pub fn App(data: InitialData) -> impl IntoView {
    let cards = data
        .entries()
        .map(|(article, author)| {
            view! { <ArticleCard article=article.clone() author=author.clone()/> }
        })
        .collect_view();

    view! { <div class="article-list">{cards}</div> }
}
