//! Server-side rendered console pages (no JavaScript).
//!
//! - `GET  /`: dashboard, or `?view=<section>`
//! - `GET  /{section}`: list, `?form=open` shows the form
//! - `POST /{section}`: create, then redirect (PRG)
//! - `POST /maintenance/{id}/status`: move a request along its workflow
//!
//! A successful post redirects with `?notice=<code>`; the target page turns
//! the code into its confirmation text. A failed post renders the same page
//! with an alert and the submitted values.

#[allow(clippy::missing_errors_doc)]
pub mod bookings;
#[allow(clippy::missing_errors_doc)]
pub mod guests;
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod maintenance;
#[allow(clippy::missing_errors_doc)]
pub mod payments;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use std::fmt::Display;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use serde::Deserialize;

use pgdesk_app::navigation::Section;
use pgdesk_app::ports::Backend;
use pgdesk_app::screen::{Screen, View};
use pgdesk_app::views::SelectOption;

use crate::state::AppState;

/// Notice code for "record created".
pub(crate) const NOTICE_CREATED: &str = "created";
/// Notice code for "maintenance status changed".
pub(crate) const NOTICE_STATUS_UPDATED: &str = "status-updated";

/// Build the console sub-router.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: Backend + 'static,
{
    Router::new()
        .route("/", get(home::index::<B>))
        .route("/guests", get(guests::show::<B>).post(guests::create::<B>))
        .route("/rooms", get(rooms::show::<B>).post(rooms::create::<B>))
        .route(
            "/bookings",
            get(bookings::show::<B>).post(bookings::create::<B>),
        )
        .route(
            "/payments",
            get(payments::show::<B>).post(payments::create::<B>),
        )
        .route(
            "/maintenance",
            get(maintenance::show::<B>).post(maintenance::create::<B>),
        )
        .route(
            "/maintenance/{id}/status",
            post(maintenance::update_status::<B>),
        )
}

/// Query string understood by every page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Section to show on `/`.
    pub view: Option<String>,
    /// `open` shows the creation form.
    pub form: Option<String>,
    /// Confirmation code set by a redirect.
    pub notice: Option<String>,
}

impl PageQuery {
    fn form_open(&self) -> bool {
        self.form.as_deref() == Some("open")
    }

    fn has_notice(&self, code: &str) -> bool {
        self.notice.as_deref() == Some(code)
    }

    /// `created` when the page was reached after a successful creation.
    fn notice_text(&self, created: &str) -> Option<String> {
        self.has_notice(NOTICE_CREATED).then(|| created.to_string())
    }
}

/// One navigation-bar entry.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub path: String,
    pub title: &'static str,
    pub active: bool,
}

/// Parts of the page layout shared by every section.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub nav: Vec<NavItem>,
    pub notice: Option<String>,
    pub alert: Option<String>,
}

impl Chrome {
    pub fn new(active: Section) -> Self {
        let nav = Section::ALL
            .into_iter()
            .map(|section| NavItem {
                path: section.path(),
                title: section.title(),
                active: section == active,
            })
            .collect();
        Self {
            nav,
            notice: None,
            alert: None,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    #[must_use]
    pub fn with_alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }
}

/// A `<select>` option with its selection state resolved.
#[derive(Debug, Clone)]
pub struct FormOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

fn select_options(options: Vec<SelectOption>, current: &str) -> Vec<FormOption> {
    options
        .into_iter()
        .map(|option| FormOption {
            selected: option.value == current,
            value: option.value,
            label: option.label,
        })
        .collect()
}

fn choice_options<T: Display>(all: &[T], current: &str) -> Vec<FormOption> {
    all.iter()
        .map(|choice| {
            let value = choice.to_string();
            FormOption {
                selected: value == current,
                label: value.clone(),
                value,
            }
        })
        .collect()
}

/// What every list page shows besides its rows.
pub(crate) struct Frame<F> {
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<F>,
}

impl<F: Clone> Frame<F> {
    fn of<V: View<Form = F>>(screen: &Screen<V>) -> Self {
        Self {
            loading: screen.data().is_none() && screen.error().is_none(),
            error: screen.error().map(str::to_string),
            form: screen.form().cloned(),
        }
    }
}

/// Load a screen for a `GET`, opening the form when asked to.
async fn load_screen<V, B>(backend: &B, query: &PageQuery) -> Screen<V>
where
    V: View,
    B: Backend,
{
    let mut screen = Screen::<V>::new();
    screen.load(backend).await;
    if query.form_open() {
        screen.open_form();
    }
    screen
}

/// Handle a creation post for `section`.
///
/// Success redirects to the section with the "created" notice; any failure
/// renders the page again with the alert and the form as submitted.
async fn submit<V, B, P>(
    backend: &B,
    section: Section,
    form: V::Form,
    render: fn(&Screen<V>, Chrome) -> P,
) -> Response
where
    V: View,
    B: Backend,
    P: IntoResponse,
{
    let mut screen = Screen::<V>::new();
    screen.load(backend).await;
    match screen.create(backend, form).await {
        Ok(_) => created(section).into_response(),
        Err(err) => rejected(render(&screen, Chrome::new(section).with_alert(err.to_string()))),
    }
}

fn created(section: Section) -> Redirect {
    Redirect::to(&format!("{}?notice={NOTICE_CREATED}", section.path()))
}

fn rejected(page: impl IntoResponse) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mark_only_active_section() {
        let chrome = Chrome::new(Section::Rooms);
        let active: Vec<_> = chrome
            .nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.title)
            .collect();
        assert_eq!(active, ["Rooms"]);
        assert_eq!(chrome.nav.len(), 6);
        assert_eq!(chrome.nav[0].path, "/");
    }

    #[test]
    fn should_select_current_value() {
        let options = select_options(
            vec![SelectOption::new(1, "101"), SelectOption::new(2, "102")],
            "2",
        );
        assert!(!options[0].selected);
        assert!(options[1].selected);
    }

    #[test]
    fn should_translate_known_notice_codes_only() {
        let query = PageQuery {
            notice: Some("created".to_string()),
            ..PageQuery::default()
        };
        assert_eq!(
            query.notice_text("Room added successfully!").as_deref(),
            Some("Room added successfully!")
        );

        let forged = PageQuery {
            notice: Some("<script>".to_string()),
            ..PageQuery::default()
        };
        assert_eq!(forged.notice_text("a"), None);
    }
}
