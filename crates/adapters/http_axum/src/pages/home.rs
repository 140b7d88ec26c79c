//! Dashboard and the `?view=` dispatcher behind `/`.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use pgdesk_app::dashboard::{Dashboard, DashboardStats};
use pgdesk_app::navigation::Section;
use pgdesk_app::ports::Backend;

use super::{Chrome, PageQuery};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    chrome: Chrome,
    loading: bool,
    error: Option<String>,
    stats: Option<DashboardStats>,
    occupancy_rate: String,
}

impl DashboardPage {
    fn new(dashboard: &Dashboard) -> Self {
        let state = dashboard.state();
        let stats = state.value().copied();
        Self {
            chrome: Chrome::new(Section::Dashboard),
            loading: state.is_pending(),
            error: state.failure().map(str::to_string),
            occupancy_rate: stats.map(|s| s.occupancy_rate()).unwrap_or_default(),
            stats,
        }
    }
}

impl IntoResponse for DashboardPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: dashboard, or the section named by `?view=`.
pub async fn index<B>(State(state): State<AppState<B>>, Query(query): Query<PageQuery>) -> Response
where
    B: Backend + 'static,
{
    let backend = state.backend.as_ref();
    let section = query
        .view
        .as_deref()
        .map_or(Section::Dashboard, Section::parse);
    tracing::debug!(%section, "rendering section");

    match section {
        Section::Dashboard => {
            let mut dashboard = Dashboard::new();
            dashboard.load(backend).await;
            DashboardPage::new(&dashboard).into_response()
        }
        Section::Guests => super::guests::page(backend, &query).await.into_response(),
        Section::Rooms => super::rooms::page(backend, &query).await.into_response(),
        Section::Bookings => super::bookings::page(backend, &query).await.into_response(),
        Section::Payments => super::payments::page(backend, &query).await.into_response(),
        Section::Maintenance => super::maintenance::page(backend, &query)
            .await
            .into_response(),
    }
}
