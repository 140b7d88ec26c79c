//! Guest management page.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::response::{Html, IntoResponse, Response};

use pgdesk_app::navigation::Section;
use pgdesk_app::ports::Backend;
use pgdesk_app::screen::{Screen, View};
use pgdesk_app::views::GuestView;
use pgdesk_app::views::guests::GuestRow;
use pgdesk_domain::guest::{GuestForm, IdProofType};

use super::{Chrome, FormOption, Frame, PageQuery};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "guests.html")]
pub struct GuestsPage {
    chrome: Chrome,
    title: &'static str,
    frame: Frame<GuestForm>,
    rows: Vec<GuestRow>,
    id_proof_types: Vec<FormOption>,
}

impl GuestsPage {
    fn new(screen: &Screen<GuestView>, chrome: Chrome) -> Self {
        let frame = Frame::of(screen);
        let current = frame
            .form
            .as_ref()
            .map_or("", |form| form.id_proof_type.as_str());
        let id_proof_types = super::choice_options(IdProofType::ALL, current);
        Self {
            chrome,
            title: GuestView::TITLE,
            rows: screen.data().map(|data| data.rows()).unwrap_or_default(),
            id_proof_types,
            frame,
        }
    }
}

impl IntoResponse for GuestsPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

pub(crate) async fn page<B: Backend>(backend: &B, query: &PageQuery) -> GuestsPage {
    let screen = super::load_screen::<GuestView, B>(backend, query).await;
    let notice = query.notice_text(GuestView::CREATED);
    GuestsPage::new(&screen, Chrome::new(Section::Guests).with_notice(notice))
}

/// `GET /guests`: guest list and registration form.
pub async fn show<B>(State(state): State<AppState<B>>, Query(query): Query<PageQuery>) -> GuestsPage
where
    B: Backend + 'static,
{
    page(state.backend.as_ref(), &query).await
}

/// `POST /guests`: register a guest.
pub async fn create<B>(State(state): State<AppState<B>>, Form(form): Form<GuestForm>) -> Response
where
    B: Backend + 'static,
{
    super::submit(state.backend.as_ref(), Section::Guests, form, GuestsPage::new).await
}
