//! Maintenance page and status workflow.

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use pgdesk_app::navigation::Section;
use pgdesk_app::ports::Backend;
use pgdesk_app::screen::{Screen, View};
use pgdesk_app::views::MaintenanceView;
use pgdesk_app::views::maintenance::{MaintenanceRow, STATUS_UPDATED};
use pgdesk_domain::error::ValidationError;
use pgdesk_domain::id::RequestId;
use pgdesk_domain::maintenance::{MaintenanceForm, MaintenanceStatus, StatusCounts};

use super::{Chrome, FormOption, Frame, NOTICE_STATUS_UPDATED, PageQuery};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "maintenance.html")]
pub struct MaintenancePage {
    chrome: Chrome,
    title: &'static str,
    frame: Frame<MaintenanceForm>,
    counts: StatusCounts,
    rows: Vec<MaintenanceRow>,
    rooms: Vec<FormOption>,
    guests: Vec<FormOption>,
    statuses: Vec<FormOption>,
}

impl MaintenancePage {
    fn new(screen: &Screen<MaintenanceView>, chrome: Chrome) -> Self {
        let frame = Frame::of(screen);
        let data = screen.data();
        let empty = MaintenanceForm::default();
        let form = frame.form.as_ref().unwrap_or(&empty);

        let rooms = data.map(|data| data.room_options()).unwrap_or_default();
        let guests = data.map(|data| data.guest_options()).unwrap_or_default();
        let rooms = super::select_options(rooms, &form.room_id);
        let guests = super::select_options(guests, &form.guest_id);
        let statuses = super::choice_options(MaintenanceStatus::ALL, &form.status);

        Self {
            chrome,
            title: MaintenanceView::TITLE,
            counts: data.map(|data| data.counts()).unwrap_or_default(),
            rows: data.map(|data| data.rows()).unwrap_or_default(),
            rooms,
            guests,
            statuses,
            frame,
        }
    }
}

impl IntoResponse for MaintenancePage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

pub(crate) async fn page<B: Backend>(backend: &B, query: &PageQuery) -> MaintenancePage {
    let screen = super::load_screen::<MaintenanceView, B>(backend, query).await;
    let notice = if query.has_notice(NOTICE_STATUS_UPDATED) {
        Some(STATUS_UPDATED.to_string())
    } else {
        query.notice_text(MaintenanceView::CREATED)
    };
    MaintenancePage::new(&screen, Chrome::new(Section::Maintenance).with_notice(notice))
}

/// `GET /maintenance`: requests with their next workflow actions.
pub async fn show<B>(
    State(state): State<AppState<B>>,
    Query(query): Query<PageQuery>,
) -> MaintenancePage
where
    B: Backend + 'static,
{
    page(state.backend.as_ref(), &query).await
}

/// `POST /maintenance`: file a request.
pub async fn create<B>(
    State(state): State<AppState<B>>,
    Form(form): Form<MaintenanceForm>,
) -> Response
where
    B: Backend + 'static,
{
    super::submit(
        state.backend.as_ref(),
        Section::Maintenance,
        form,
        MaintenancePage::new,
    )
    .await
}

/// Body of a status-change button.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// `POST /maintenance/{id}/status`: move a request along its workflow.
pub async fn update_status<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<RequestId>,
    Form(form): Form<StatusForm>,
) -> Response
where
    B: Backend + 'static,
{
    let backend = state.backend.as_ref();
    let mut screen = Screen::<MaintenanceView>::new();
    screen.load(backend).await;

    let alert = match form.status.parse::<MaintenanceStatus>() {
        Ok(status) => match screen.change_status(backend, id, status).await {
            Ok(_) => {
                let location = format!(
                    "{}?notice={NOTICE_STATUS_UPDATED}",
                    Section::Maintenance.path()
                );
                return Redirect::to(&location).into_response();
            }
            Err(err) => err.to_string(),
        },
        Err(_) => format!("Error: {}", ValidationError::UnknownOption("Status")),
    };
    let chrome = Chrome::new(Section::Maintenance).with_alert(alert);
    super::rejected(MaintenancePage::new(&screen, chrome))
}
