//! Generic list-and-create screen.
//!
//! Every management view follows the same lifecycle: it loads its
//! collections, shows them, and lets the operator open a creation form whose
//! submission creates one record and reloads. [`Screen`] implements that
//! lifecycle once; a [`View`] supplies what differs.
//!
//! ```text
//! Loading ──ok──▶ Ready ──open_form──▶ FormOpen
//!    │              ▲                     │
//!    └──err──▶ Error └──cancel / created──┘
//! ```

use std::fmt;
use std::future::Future;

use pgdesk_domain::error::{BackendError, DeskError, ValidationError};
use pgdesk_domain::time::{self, Date};

use crate::fetch::{FetchState, MountGuard, Remote, describe_load_failure};
use crate::ports::{Backend, Resource};

/// What a concrete management view contributes to a [`Screen`].
pub trait View {
    /// Collections the view joins before rendering.
    type Data: Send;

    /// Raw text values of the creation form.
    type Form: Default + Clone + Send;

    /// The record the creation form produces.
    type Record: Resource;

    /// Page heading.
    const TITLE: &'static str;

    /// Confirmation shown once a record was created.
    const CREATED: &'static str;

    /// Alert text used when the backend gives no detail.
    const CREATE_FAILED: &'static str;

    /// Read every collection the view needs, all or nothing.
    fn fetch<B: Backend>(backend: &B)
    -> impl Future<Output = Result<Self::Data, BackendError>> + Send;

    /// Turn the form into a creation payload, checking references against
    /// the loaded data.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    fn validate(
        form: &Self::Form,
        data: &Self::Data,
        today: Date,
    ) -> Result<<Self::Record as Resource>::Draft, ValidationError>;
}

/// Observable phase of a [`Screen`].
pub enum Phase<'a, V: View> {
    Loading,
    Ready(&'a V::Data),
    FormOpen(&'a V::Data, &'a V::Form),
    Error(&'a str),
}

/// Confirmation text after a successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submission or action the operator must be alerted about.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The data the operation depends on is not loaded.
    #[error("Error: {0}")]
    NotReady(String),

    /// Validation or the backend refused the operation.
    #[error("Error: {message}")]
    Rejected {
        message: String,
        #[source]
        source: DeskError,
    },
}

impl SubmitError {
    pub(crate) fn rejected(source: impl Into<DeskError>, fallback: &str) -> Self {
        let source = source.into();
        Self::Rejected {
            message: source.user_message(fallback),
            source,
        }
    }

    /// The alert text without the `Error: ` prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::NotReady(message) | Self::Rejected { message, .. } => message,
        }
    }
}

/// One management view's state.
pub struct Screen<V: View> {
    pub(crate) remote: Remote<V::Data>,
    form: Option<V::Form>,
}

impl<V: View> Default for Screen<V> {
    fn default() -> Self {
        Self {
            remote: Remote::new(),
            form: None,
        }
    }
}

impl<V: View> Screen<V> {
    /// A freshly mounted screen, still loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase<'_, V> {
        match (self.remote.state(), &self.form) {
            (FetchState::Pending, _) => Phase::Loading,
            (FetchState::Failure(reason), _) => Phase::Error(reason),
            (FetchState::Success(data), Some(form)) => Phase::FormOpen(data, form),
            (FetchState::Success(data), None) => Phase::Ready(data),
        }
    }

    pub fn data(&self) -> Option<&V::Data> {
        self.remote.state().value()
    }

    pub fn error(&self) -> Option<&str> {
        self.remote.state().failure()
    }

    pub fn form(&self) -> Option<&V::Form> {
        self.form.as_ref()
    }

    /// Handle used to tear the screen down while a load is in flight.
    pub fn mount_guard(&self) -> MountGuard {
        self.remote.guard()
    }

    /// Fetch the view's collections.
    #[tracing::instrument(skip_all, fields(view = V::TITLE))]
    pub async fn load<B: Backend>(&mut self, backend: &B) {
        self.remote.run(V::fetch(backend), describe_load_failure).await;
    }

    /// Show the creation form with its defaults. Ignored until data is loaded.
    pub fn open_form(&mut self) {
        self.open_form_with(V::Form::default());
    }

    /// Show the creation form pre-filled with `form`.
    pub fn open_form_with(&mut self, form: V::Form) {
        if self.data().is_some() {
            self.form = Some(form);
        }
    }

    /// Hide the creation form, dropping whatever was entered.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Submit the creation form using today's date for defaults.
    ///
    /// # Errors
    ///
    /// See [`Screen::submit_on`].
    pub async fn submit<B: Backend>(
        &mut self,
        backend: &B,
        form: V::Form,
    ) -> Result<Notice, SubmitError> {
        self.submit_on(backend, form, time::today()).await
    }

    /// Validate `form`, create the record and reload.
    ///
    /// On success the form is closed and reset. On failure the form stays
    /// open holding exactly what was submitted.
    ///
    /// # Errors
    ///
    /// See [`Screen::create_on`].
    pub async fn submit_on<B: Backend>(
        &mut self,
        backend: &B,
        form: V::Form,
        today: Date,
    ) -> Result<Notice, SubmitError> {
        let notice = self.create_on(backend, form, today).await?;
        self.load(backend).await;
        Ok(notice)
    }

    /// Submit the creation form without reloading, using today's date.
    ///
    /// # Errors
    ///
    /// See [`Screen::create_on`].
    pub async fn create<B: Backend>(
        &mut self,
        backend: &B,
        form: V::Form,
    ) -> Result<Notice, SubmitError> {
        self.create_on(backend, form, time::today()).await
    }

    /// Validate `form` and create the record, leaving the loaded data as is.
    ///
    /// Used when the caller redirects and the next page fetches anyway.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotReady`] when the screen has no data, and
    /// [`SubmitError::Rejected`] when validation or the backend refuses.
    #[tracing::instrument(skip_all, fields(view = V::TITLE))]
    pub async fn create_on<B: Backend>(
        &mut self,
        backend: &B,
        form: V::Form,
        today: Date,
    ) -> Result<Notice, SubmitError> {
        let Some(data) = self.data() else {
            let reason = self.error().unwrap_or("Failed to fetch data").to_string();
            return Err(SubmitError::NotReady(reason));
        };

        let draft = match V::validate(&form, data, today) {
            Ok(draft) => draft,
            Err(err) => {
                tracing::debug!(error = %err, "form rejected");
                self.form = Some(form);
                return Err(SubmitError::rejected(err, V::CREATE_FAILED));
            }
        };

        let resource = <V::Record as Resource>::NAME;
        match backend.create::<V::Record>(&draft).await {
            Ok(_) => {
                tracing::info!(resource, "record created");
                self.form = None;
                Ok(Notice::new(V::CREATED))
            }
            Err(err) => {
                tracing::warn!(error = %err, resource, "create failed");
                self.form = Some(form);
                Err(SubmitError::rejected(err, V::CREATE_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, sample_guest};
    use crate::views::guests::GuestView;
    use pgdesk_domain::guest::GuestForm;

    fn guest_form(name: &str) -> GuestForm {
        GuestForm {
            full_name: name.to_string(),
            phone_number: "9000000001".to_string(),
            ..GuestForm::default()
        }
    }

    fn today() -> Date {
        Date::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[tokio::test]
    async fn should_start_loading_then_become_ready() {
        let backend = FakeBackend::default();
        backend.insert(&sample_guest(1, "Asha"));
        let mut screen = Screen::<GuestView>::new();
        assert!(matches!(screen.phase(), Phase::Loading));

        screen.load(&backend).await;
        assert!(matches!(screen.phase(), Phase::Ready(data) if data.guests.len() == 1));
    }

    #[tokio::test]
    async fn should_enter_error_phase_when_load_fails() {
        let backend = FakeBackend::default();
        backend.fail_path("/api/guests", 500);
        let mut screen = Screen::<GuestView>::new();

        screen.load(&backend).await;
        assert!(matches!(screen.phase(), Phase::Error("HTTP 500")));
        assert!(screen.data().is_none());
    }

    #[tokio::test]
    async fn should_ignore_late_load_after_unmount() {
        let backend = FakeBackend::default();
        backend.insert(&sample_guest(1, "Asha"));
        let mut screen = Screen::<GuestView>::new();
        backend.unmount_during_list(screen.mount_guard());

        screen.load(&backend).await;
        assert!(matches!(screen.phase(), Phase::Loading));
    }

    #[tokio::test]
    async fn should_open_and_cancel_form() {
        let backend = FakeBackend::default();
        let mut screen = Screen::<GuestView>::new();
        screen.open_form();
        assert!(screen.form().is_none(), "form must not open while loading");

        screen.load(&backend).await;
        screen.open_form();
        assert!(matches!(screen.phase(), Phase::FormOpen(_, form) if *form == GuestForm::default()));

        screen.cancel_form();
        assert!(matches!(screen.phase(), Phase::Ready(_)));
    }

    #[tokio::test]
    async fn should_create_reload_and_reset_form_on_submit() {
        let backend = FakeBackend::default();
        backend.insert(&sample_guest(1, "Asha"));
        let mut screen = Screen::<GuestView>::new();
        screen.load(&backend).await;
        screen.open_form();

        let notice = screen
            .submit_on(&backend, guest_form("Ravi Kumar"), today())
            .await
            .unwrap();

        assert_eq!(notice.as_str(), "Guest added successfully!");
        assert!(screen.form().is_none());
        let data = screen.data().unwrap();
        assert_eq!(data.guests.len(), 2);
        assert_eq!(data.guests.as_slice()[1].full_name, "Ravi Kumar");
    }

    #[tokio::test]
    async fn should_create_without_fetching_again() {
        let backend = FakeBackend::default();
        let mut screen = Screen::<GuestView>::new();
        screen.load(&backend).await;
        let lists = backend.lists();

        let notice = screen
            .create_on(&backend, guest_form("Ravi Kumar"), today())
            .await
            .unwrap();

        assert_eq!(notice.as_str(), "Guest added successfully!");
        assert_eq!(backend.lists(), lists);
        assert_eq!(backend.count("/api/guests"), 1);
        assert!(screen.form().is_none());
    }

    #[tokio::test]
    async fn should_keep_form_values_when_backend_rejects() {
        let backend = FakeBackend::default();
        backend.fail_create("/api/guests", 400, Some("Phone number already registered"));
        let mut screen = Screen::<GuestView>::new();
        screen.load(&backend).await;
        screen.open_form();

        let err = screen
            .submit_on(&backend, guest_form("Ravi"), today())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error: Phone number already registered");
        assert_eq!(screen.form(), Some(&guest_form("Ravi")));
        assert_eq!(backend.count("/api/guests"), 0);
    }

    #[tokio::test]
    async fn should_use_fallback_text_without_backend_detail() {
        let backend = FakeBackend::default();
        backend.fail_create("/api/guests", 500, None);
        let mut screen = Screen::<GuestView>::new();
        screen.load(&backend).await;

        let err = screen
            .submit_on(&backend, guest_form("Ravi"), today())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Failed to create guest");
    }

    #[tokio::test]
    async fn should_not_call_backend_when_validation_fails() {
        let backend = FakeBackend::default();
        let mut screen = Screen::<GuestView>::new();
        screen.load(&backend).await;

        let err = screen
            .submit_on(&backend, guest_form("  "), today())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Full name is required");
        assert!(backend.created().is_empty());
        assert!(screen.form().is_some());
    }

    #[tokio::test]
    async fn should_refuse_submit_before_data_is_loaded() {
        let backend = FakeBackend::default();
        let mut screen = Screen::<GuestView>::new();

        let err = screen
            .submit_on(&backend, guest_form("Ravi"), today())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::NotReady(_)));
        assert!(backend.created().is_empty());
    }
}
