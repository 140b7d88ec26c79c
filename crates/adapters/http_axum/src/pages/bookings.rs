//! Booking page.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::response::{Html, IntoResponse, Response};

use pgdesk_app::navigation::Section;
use pgdesk_app::ports::Backend;
use pgdesk_app::screen::{Screen, View};
use pgdesk_app::views::BookingView;
use pgdesk_app::views::bookings::{BookingRow, BookingStats};
use pgdesk_domain::booking::{BookingForm, BookingStatus};

use super::{Chrome, FormOption, Frame, PageQuery};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "bookings.html")]
pub struct BookingsPage {
    chrome: Chrome,
    title: &'static str,
    frame: Frame<BookingForm>,
    stats: BookingStats,
    rows: Vec<BookingRow>,
    guests: Vec<FormOption>,
    rooms: Vec<FormOption>,
    statuses: Vec<FormOption>,
    can_submit: bool,
}

impl BookingsPage {
    fn new(screen: &Screen<BookingView>, chrome: Chrome) -> Self {
        let frame = Frame::of(screen);
        let empty = BookingForm::default();
        let form = frame.form.as_ref().unwrap_or(&empty);
        let data = screen.data();

        let guests = data.map(|data| data.guest_options()).unwrap_or_default();
        let rooms = data.map(|data| data.room_options()).unwrap_or_default();
        let guests = super::select_options(guests, &form.guest_id);
        let rooms = super::select_options(rooms, &form.room_id);
        let statuses = super::choice_options(BookingStatus::ALL, &form.booking_status);

        Self {
            chrome,
            title: BookingView::TITLE,
            stats: data.map(|data| data.stats()).unwrap_or_default(),
            rows: data.map(|data| data.rows()).unwrap_or_default(),
            can_submit: data.is_some_and(|data| data.can_submit()),
            guests,
            rooms,
            statuses,
            frame,
        }
    }
}

impl IntoResponse for BookingsPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

pub(crate) async fn page<B: Backend>(backend: &B, query: &PageQuery) -> BookingsPage {
    let screen = super::load_screen::<BookingView, B>(backend, query).await;
    let notice = query.notice_text(BookingView::CREATED);
    BookingsPage::new(&screen, Chrome::new(Section::Bookings).with_notice(notice))
}

/// `GET /bookings`: bookings with guest and room names resolved.
pub async fn show<B>(State(state): State<AppState<B>>, Query(query): Query<PageQuery>) -> BookingsPage
where
    B: Backend + 'static,
{
    page(state.backend.as_ref(), &query).await
}

/// `POST /bookings`: book an available room for a guest.
pub async fn create<B>(State(state): State<AppState<B>>, Form(form): Form<BookingForm>) -> Response
where
    B: Backend + 'static,
{
    super::submit(state.backend.as_ref(), Section::Bookings, form, BookingsPage::new).await
}
