//! Room inventory page.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::response::{Html, IntoResponse, Response};

use pgdesk_app::navigation::Section;
use pgdesk_app::ports::Backend;
use pgdesk_app::screen::{Screen, View};
use pgdesk_app::views::RoomView;
use pgdesk_app::views::rooms::RoomRow;
use pgdesk_domain::room::{OccupancyCounts, OccupancyStatus, RoomForm, RoomType};

use super::{Chrome, FormOption, Frame, PageQuery};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "rooms.html")]
pub struct RoomsPage {
    chrome: Chrome,
    title: &'static str,
    frame: Frame<RoomForm>,
    counts: OccupancyCounts,
    rows: Vec<RoomRow>,
    room_types: Vec<FormOption>,
    statuses: Vec<FormOption>,
}

impl RoomsPage {
    fn new(screen: &Screen<RoomView>, chrome: Chrome) -> Self {
        let frame = Frame::of(screen);
        let (room_type, status) = frame.form.as_ref().map_or(("", ""), |form| {
            (form.room_type.as_str(), form.occupancy_status.as_str())
        });
        let room_types = super::choice_options(RoomType::ALL, room_type);
        let statuses = super::choice_options(OccupancyStatus::ALL, status);
        let data = screen.data();
        Self {
            chrome,
            title: RoomView::TITLE,
            counts: data.map(|data| data.counts()).unwrap_or_default(),
            rows: data.map(|data| data.rows()).unwrap_or_default(),
            room_types,
            statuses,
            frame,
        }
    }
}

impl IntoResponse for RoomsPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

pub(crate) async fn page<B: Backend>(backend: &B, query: &PageQuery) -> RoomsPage {
    let screen = super::load_screen::<RoomView, B>(backend, query).await;
    let notice = query.notice_text(RoomView::CREATED);
    RoomsPage::new(&screen, Chrome::new(Section::Rooms).with_notice(notice))
}

/// `GET /rooms`: room inventory with occupancy counts.
pub async fn show<B>(State(state): State<AppState<B>>, Query(query): Query<PageQuery>) -> RoomsPage
where
    B: Backend + 'static,
{
    page(state.backend.as_ref(), &query).await
}

/// `POST /rooms`: add a room.
pub async fn create<B>(State(state): State<AppState<B>>, Form(form): Form<RoomForm>) -> Response
where
    B: Backend + 'static,
{
    super::submit(state.backend.as_ref(), Section::Rooms, form, RoomsPage::new).await
}
