//! Payment page.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::response::{Html, IntoResponse, Response};

use pgdesk_app::navigation::Section;
use pgdesk_app::ports::Backend;
use pgdesk_app::screen::{Screen, View};
use pgdesk_app::views::PaymentView;
use pgdesk_app::views::payments::{PaymentRow, PaymentStats};
use pgdesk_domain::payment::{PaymentForm, PaymentMethod};
use pgdesk_domain::time;

use super::{Chrome, FormOption, Frame, PageQuery};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "payments.html")]
pub struct PaymentsPage {
    chrome: Chrome,
    title: &'static str,
    frame: Frame<PaymentForm>,
    stats: PaymentStats,
    total_amount: String,
    rows: Vec<PaymentRow>,
    bookings: Vec<FormOption>,
    methods: Vec<FormOption>,
}

impl PaymentsPage {
    fn new(screen: &Screen<PaymentView>, chrome: Chrome) -> Self {
        let frame = Frame::of(screen);
        let data = screen.data();
        let (booking, method) = frame.form.as_ref().map_or(("", ""), |form| {
            (form.booking_id.as_str(), form.payment_method.as_str())
        });
        let bookings = data.map(|data| data.booking_options()).unwrap_or_default();
        let bookings = super::select_options(bookings, booking);
        let methods = super::choice_options(PaymentMethod::ALL, method);
        let stats = data
            .map(|data| data.stats(time::today()))
            .unwrap_or_default();

        Self {
            chrome,
            title: PaymentView::TITLE,
            total_amount: stats.total_amount_display(),
            stats,
            rows: data.map(|data| data.rows()).unwrap_or_default(),
            bookings,
            methods,
            frame,
        }
    }
}

impl IntoResponse for PaymentsPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

pub(crate) async fn page<B: Backend>(backend: &B, query: &PageQuery) -> PaymentsPage {
    let screen = super::load_screen::<PaymentView, B>(backend, query).await;
    let notice = query.notice_text(PaymentView::CREATED);
    PaymentsPage::new(&screen, Chrome::new(Section::Payments).with_notice(notice))
}

/// `GET /payments`: payment history with monthly totals.
pub async fn show<B>(State(state): State<AppState<B>>, Query(query): Query<PageQuery>) -> PaymentsPage
where
    B: Backend + 'static,
{
    page(state.backend.as_ref(), &query).await
}

/// `POST /payments`: record a payment against an active booking.
pub async fn create<B>(State(state): State<AppState<B>>, Form(form): Form<PaymentForm>) -> Response
where
    B: Backend + 'static,
{
    super::submit(state.backend.as_ref(), Section::Payments, form, PaymentsPage::new).await
}
