//! Search page handlers
//!
//! `GET /` shows the empty form, `POST /` runs every keyword search and
//! renders the results into the same page.

use axum::{extract::State, response::Html};

use crate::domain::ports::{Clock, NoticeFeed};
use crate::feed::render_page;
use crate::AppState;

/// GET /
///
/// Renders the search form with no results section.
pub async fn show_form<F, C>(State(state): State<AppState<F, C>>) -> Html<String>
where
    F: NoticeFeed + 'static,
    C: Clock + 'static,
{
    Html(render_page(&state.config.page_heading, None))
}

/// POST /
///
/// Searches all configured keywords in sequence before responding.
/// Failed keywords are rendered as error records, never as an error page.
pub async fn run_search<F, C>(State(state): State<AppState<F, C>>) -> Html<String>
where
    F: NoticeFeed + 'static,
    C: Clock + 'static,
{
    let results = state.search_service.run().await;
    Html(render_page(&state.config.page_heading, Some(&results)))
}
