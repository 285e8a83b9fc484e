//! Registration orchestrator.
//!
//! This module coordinates the registration state machine and side effects.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, warn, Instrument};

use sf_core::ports::{NavigationPort, NotificationPort, RegistrationApiPort, RegistrationEventPort};
use sf_core::registration::{
    FormField, FormToggle, RegisterRequest, RegistrationAction, RegistrationEvent,
    RegistrationState, RegistrationStateMachine, Route,
};

use super::context::RegistrationContext;
use super::error_toast::{toast_message, GENERIC_ERROR_MESSAGE};
use super::form_view::RegistrationView;

/// Errors produced by the registration orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("a registration request is already in flight")]
    Busy,
    #[error("navigation to {route:?} failed: {source}")]
    Navigation {
        route: Route,
        #[source]
        source: anyhow::Error,
    },
}

/// Holds the busy flag for the lifetime of one submit.
///
/// Dropping the guard clears the flag, so every exit path releases it.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Orchestrator that drives registration state and side effects.
pub struct RegistrationOrchestrator {
    context: Arc<RegistrationContext>,

    pending_request: Arc<Mutex<Option<RegisterRequest>>>,
    busy: AtomicBool,

    registration_api: Arc<dyn RegistrationApiPort>,
    notification_port: Arc<dyn NotificationPort>,
    navigation_port: Arc<dyn NavigationPort>,
    event_port: Arc<dyn RegistrationEventPort>,
}

impl RegistrationOrchestrator {
    pub fn new(
        registration_api: Arc<dyn RegistrationApiPort>,
        notification_port: Arc<dyn NotificationPort>,
        navigation_port: Arc<dyn NavigationPort>,
        event_port: Arc<dyn RegistrationEventPort>,
    ) -> Self {
        Self {
            context: RegistrationContext::default().arc(),
            pending_request: Arc::new(Mutex::new(None)),
            busy: AtomicBool::new(false),
            registration_api,
            notification_port,
            navigation_port,
            event_port,
        }
    }

    pub async fn update_text(&self, field: FormField, value: impl Into<String>) {
        self.context.form().await.set_text(field, value);
    }

    pub async fn set_toggle(&self, toggle: FormToggle, checked: bool) {
        self.context.form().await.set_toggle(toggle, checked);
    }

    /// Flip a toggle (checkbox or visibility eye) and return its new value.
    pub async fn flip_toggle(&self, toggle: FormToggle) -> bool {
        self.context.form().await.flip(toggle)
    }

    /// True between submit start and request settlement.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn get_state(&self) -> RegistrationState {
        self.context.get_state().await
    }

    pub async fn view(&self) -> RegistrationView {
        let state = self.context.get_state().await;
        let busy = self.is_busy();
        let form = self.context.form().await;
        RegistrationView::project(&form, state, busy)
    }

    /// Submit the form.
    ///
    /// Local validation failures are reported through the notification port
    /// and return `Ok(RegistrationState::Editing)` without touching the busy
    /// flag. A submit while another is in flight is rejected with
    /// [`RegisterError::Busy`].
    pub async fn submit(&self) -> Result<RegistrationState, RegisterError> {
        if self.is_busy() {
            warn!("registration submit rejected: request already in flight");
            return Err(RegisterError::Busy);
        }

        let (check, request) = {
            let form = self.context.form().await;
            let check = form.submit_check();
            let request = (check.complete && check.validation_error().is_none())
                .then(|| form.to_request());
            (check, request)
        };

        // busy covers only submits that will reach the backend
        let _busy = match request {
            Some(request) => {
                let Some(guard) = BusyGuard::claim(&self.busy) else {
                    warn!("registration submit rejected: request already in flight");
                    return Err(RegisterError::Busy);
                };
                *self.pending_request.lock().await = Some(request);
                Some(guard)
            }
            None => None,
        };

        let result = self.dispatch(RegistrationEvent::Submit(check)).await;
        // a submit ignored by the state machine leaves its snapshot behind
        self.pending_request.lock().await.take();
        result
    }

    /// Follow the "Already have an account? Login" link.
    ///
    /// Ignored while a registration request is in flight.
    pub async fn go_to_login(&self) -> Result<RegistrationState, RegisterError> {
        if self.is_busy() {
            let state = self.context.get_state().await;
            debug!(?state, "login link ignored: registration request in flight");
            return Ok(state);
        }
        self.dispatch(RegistrationEvent::GoToLogin).await
    }

    async fn dispatch(&self, event: RegistrationEvent) -> Result<RegistrationState, RegisterError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.registration_orchestrator.dispatch", event = ?event);
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = event_name(&event);
                let (next, actions) = RegistrationStateMachine::transition(current, event);
                info!(from = ?from, to = ?next, event = event_name, "registration state transition");
                self.set_state_and_emit(next.clone()).await;
                current = next;
                let follow_up_events = self.execute_actions(actions).await?;
                pending_events.extend(follow_up_events);
            }

            if matches!(current, RegistrationState::NavigatedAway { .. }) {
                self.context.reset_form().await;
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<RegistrationAction>,
    ) -> Result<Vec<RegistrationEvent>, RegisterError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "registration executing action");
            match action {
                RegistrationAction::SendRegistration => {
                    follow_up_events.push(self.send_registration().await);
                    debug!("registration action SendRegistration completed");
                }
                RegistrationAction::Notify(notification) => {
                    if let Err(err) = self.notification_port.notify(notification).await {
                        warn!(error = %err, "failed to show registration notification");
                    }
                }
                RegistrationAction::Navigate(route) => {
                    self.navigation_port
                        .navigate(route)
                        .await
                        .map_err(|source| {
                            error!(error = %source, ?route, "registration navigation failed");
                            RegisterError::Navigation { route, source }
                        })?;
                    debug!(?route, "registration action Navigate completed");
                }
            }
        }

        Ok(follow_up_events)
    }

    async fn send_registration(&self) -> RegistrationEvent {
        let Some(request) = self.take_request().await else {
            error!("send registration requested without a captured form");
            return RegistrationEvent::RequestFailed {
                message: GENERIC_ERROR_MESSAGE.to_string(),
            };
        };

        let span = info_span!("usecase.registration_orchestrator.send");
        async {
            match self.registration_api.register(&request).await {
                Ok(reply) => {
                    info!(
                        error = reply.error,
                        success = reply.success,
                        "registration reply received"
                    );
                    RegistrationEvent::ReplyReceived(reply)
                }
                Err(err) => {
                    warn!(error = %err, "registration request failed");
                    RegistrationEvent::RequestFailed {
                        message: toast_message(&err),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn take_request(&self) -> Option<RegisterRequest> {
        self.pending_request.lock().await.take()
    }

    async fn set_state_and_emit(&self, state: RegistrationState) {
        self.context.set_state(state.clone()).await;
        self.event_port.emit_registration_state_changed(state).await;
    }
}

fn event_name(event: &RegistrationEvent) -> &'static str {
    match event {
        RegistrationEvent::Submit(_) => "Submit",
        RegistrationEvent::ReplyReceived(_) => "ReplyReceived",
        RegistrationEvent::RequestFailed { .. } => "RequestFailed",
        RegistrationEvent::GoToLogin => "GoToLogin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sf_core::ports::ApiError;
    use sf_core::registration::{Notification, NotificationKind, RegistrationReply};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::Notify;

    struct StubRegistrationApi {
        reply: StdMutex<Option<Result<RegistrationReply, ApiError>>>,
        calls: AtomicUsize,
        bodies: StdMutex<Vec<(String, String, String)>>,
    }

    impl StubRegistrationApi {
        fn new(reply: Result<RegistrationReply, ApiError>) -> Self {
            Self {
                reply: StdMutex::new(Some(reply)),
                calls: AtomicUsize::new(0),
                bodies: StdMutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RegistrationApiPort for StubRegistrationApi {
        async fn register(
            &self,
            request: &RegisterRequest,
        ) -> Result<RegistrationReply, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies.lock().unwrap().push((
                request.name.clone(),
                request.email.clone(),
                request.password.expose().to_string(),
            ));
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(ApiError::Transport("no stubbed reply".to_string())))
        }
    }

    #[derive(Default)]
    struct RecordingNotifications {
        shown: StdMutex<Vec<Notification>>,
    }

    #[async_trait]
    impl NotificationPort for RecordingNotifications {
        async fn notify(&self, notification: Notification) -> anyhow::Result<()> {
            self.shown.lock().unwrap().push(notification);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigation {
        routes: StdMutex<Vec<Route>>,
    }

    #[async_trait]
    impl NavigationPort for RecordingNavigation {
        async fn navigate(&self, route: Route) -> anyhow::Result<()> {
            self.routes.lock().unwrap().push(route);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingEvents {
        emitted: StdMutex<Vec<RegistrationState>>,
    }

    #[async_trait]
    impl RegistrationEventPort for RecordingEvents {
        async fn emit_registration_state_changed(&self, state: RegistrationState) {
            self.emitted.lock().unwrap().push(state);
        }
    }

    struct Harness {
        orchestrator: RegistrationOrchestrator,
        api: Arc<StubRegistrationApi>,
        notifications: Arc<RecordingNotifications>,
        navigation: Arc<RecordingNavigation>,
        events: Arc<RecordingEvents>,
    }

    fn harness(reply: Result<RegistrationReply, ApiError>) -> Harness {
        let api = Arc::new(StubRegistrationApi::new(reply));
        let notifications = Arc::new(RecordingNotifications::default());
        let navigation = Arc::new(RecordingNavigation::default());
        let events = Arc::new(RecordingEvents::default());
        let orchestrator = RegistrationOrchestrator::new(
            api.clone(),
            notifications.clone(),
            navigation.clone(),
            events.clone(),
        );
        Harness {
            orchestrator,
            api,
            notifications,
            navigation,
            events,
        }
    }

    async fn fill(orchestrator: &RegistrationOrchestrator, password: &str, confirm: &str) {
        orchestrator.update_text(FormField::Name, "Ada").await;
        orchestrator
            .update_text(FormField::Email, "ada@example.com")
            .await;
        orchestrator.update_text(FormField::Password, password).await;
        orchestrator
            .update_text(FormField::ConfirmPassword, confirm)
            .await;
    }

    #[tokio::test]
    async fn mismatched_passwords_block_without_network_call() {
        let h = harness(Ok(RegistrationReply::success("Registered")));
        fill(&h.orchestrator, "Abcdef1!", "Abcdef1").await;
        h.orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;

        let state = h.orchestrator.submit().await.unwrap();

        assert_eq!(state, RegistrationState::Editing);
        assert_eq!(h.api.call_count(), 0);
        let shown = h.notifications.shown.lock().unwrap().clone();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Error);
        assert!(shown[0].message.contains("must be the same"));
        assert!(!h.orchestrator.is_busy());
    }

    #[tokio::test]
    async fn unchecked_terms_block_without_network_call() {
        let h = harness(Ok(RegistrationReply::success("Registered")));
        fill(&h.orchestrator, "Abcdef1!", "Abcdef1!").await;

        let state = h.orchestrator.submit().await.unwrap();

        assert_eq!(state, RegistrationState::Editing);
        assert_eq!(h.api.call_count(), 0);
        assert_eq!(
            h.notifications.shown.lock().unwrap().clone(),
            vec![Notification::error(
                "You must agree to the terms and privacy policy"
            )]
        );
    }

    #[tokio::test]
    async fn incomplete_form_submit_is_a_silent_noop() {
        let h = harness(Ok(RegistrationReply::success("Registered")));
        h.orchestrator.update_text(FormField::Name, "Ada").await;
        h.orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;

        let state = h.orchestrator.submit().await.unwrap();

        assert_eq!(state, RegistrationState::Editing);
        assert_eq!(h.api.call_count(), 0);
        assert!(h.notifications.shown.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn success_reply_notifies_and_navigates_to_login() {
        let h = harness(Ok(RegistrationReply::success("Registered")));
        fill(&h.orchestrator, "Abcdef1!", "Abcdef1!").await;
        h.orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;
        h.orchestrator
            .set_toggle(FormToggle::SubscribeNewsletter, true)
            .await;

        let state = h.orchestrator.submit().await.unwrap();

        assert_eq!(
            state,
            RegistrationState::NavigatedAway {
                route: Route::Login
            }
        );
        assert_eq!(
            h.api.bodies.lock().unwrap().clone(),
            vec![(
                "Ada".to_string(),
                "ada@example.com".to_string(),
                "Abcdef1!".to_string()
            )]
        );
        assert_eq!(
            h.notifications.shown.lock().unwrap().clone(),
            vec![Notification::success("Registered")]
        );
        assert_eq!(h.navigation.routes.lock().unwrap().clone(), vec![Route::Login]);
        assert_eq!(
            h.events.emitted.lock().unwrap().clone(),
            vec![
                RegistrationState::Submitting,
                RegistrationState::NavigatedAway {
                    route: Route::Login
                }
            ]
        );
        assert!(!h.orchestrator.is_busy());
        // form record is discarded on navigation
        assert!(h.orchestrator.view().await.name.is_empty());
    }

    #[tokio::test]
    async fn error_reply_shows_server_message_and_stays_editable() {
        let h = harness(Ok(RegistrationReply::error("Email exists")));
        fill(&h.orchestrator, "Abcdef1!", "Abcdef1!").await;
        h.orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;

        let state = h.orchestrator.submit().await.unwrap();

        assert_eq!(state, RegistrationState::Editing);
        assert_eq!(
            h.notifications.shown.lock().unwrap().clone(),
            vec![Notification::error("Email exists")]
        );
        assert!(h.navigation.routes.lock().unwrap().is_empty());
        let view = h.orchestrator.view().await;
        assert!(view.submit.enabled);
        assert_eq!(view.name, "Ada");
    }

    #[tokio::test]
    async fn transport_failure_uses_generic_translator() {
        let h = harness(Err(ApiError::Transport("connection refused".to_string())));
        fill(&h.orchestrator, "Abcdef1!", "Abcdef1!").await;
        h.orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;

        let state = h.orchestrator.submit().await.unwrap();

        assert_eq!(state, RegistrationState::Editing);
        assert_eq!(h.api.call_count(), 1);
        assert_eq!(
            h.notifications.shown.lock().unwrap().clone(),
            vec![Notification::error("Network Error")]
        );
        assert!(!h.orchestrator.is_busy());
    }

    #[tokio::test]
    async fn login_link_navigates_without_request() {
        let h = harness(Ok(RegistrationReply::success("Registered")));

        let state = h.orchestrator.go_to_login().await.unwrap();

        assert_eq!(
            state,
            RegistrationState::NavigatedAway {
                route: Route::Login
            }
        );
        assert_eq!(h.api.call_count(), 0);
        assert_eq!(h.navigation.routes.lock().unwrap().clone(), vec![Route::Login]);
    }

    struct FailingNavigation;

    #[async_trait]
    impl NavigationPort for FailingNavigation {
        async fn navigate(&self, _route: Route) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("router unavailable"))
        }
    }

    #[tokio::test]
    async fn navigation_failure_is_reported_and_busy_cleared() {
        let api = Arc::new(StubRegistrationApi::new(Ok(RegistrationReply::success(
            "Registered",
        ))));
        let orchestrator = RegistrationOrchestrator::new(
            api,
            Arc::new(RecordingNotifications::default()),
            Arc::new(FailingNavigation),
            Arc::new(RecordingEvents::default()),
        );
        fill(&orchestrator, "Abcdef1!", "Abcdef1!").await;
        orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;

        let err = orchestrator.submit().await.unwrap_err();

        assert!(matches!(
            err,
            RegisterError::Navigation {
                route: Route::Login,
                ..
            }
        ));
        assert!(!orchestrator.is_busy());
    }

    /// Blocks inside `register` until released, to observe the in-flight window.
    struct GatedRegistrationApi {
        entered: Notify,
        release: Notify,
        reply: RegistrationReply,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RegistrationApiPort for GatedRegistrationApi {
        async fn register(
            &self,
            _request: &RegisterRequest,
        ) -> Result<RegistrationReply, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn busy_only_while_request_in_flight_and_duplicates_rejected() {
        for reply in [
            RegistrationReply::success("Registered"),
            RegistrationReply::error("Email exists"),
        ] {
            let api = Arc::new(GatedRegistrationApi {
                entered: Notify::new(),
                release: Notify::new(),
                reply,
                calls: AtomicUsize::new(0),
            });
            let orchestrator = Arc::new(RegistrationOrchestrator::new(
                api.clone(),
                Arc::new(RecordingNotifications::default()),
                Arc::new(RecordingNavigation::default()),
                Arc::new(RecordingEvents::default()),
            ));
            fill(&orchestrator, "Abcdef1!", "Abcdef1!").await;
            orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;
            assert!(!orchestrator.is_busy());

            let submitting = {
                let orchestrator = orchestrator.clone();
                tokio::spawn(async move { orchestrator.submit().await })
            };
            api.entered.notified().await;

            assert!(orchestrator.is_busy());
            let view = orchestrator.view().await;
            assert!(!view.submit.enabled);
            assert_eq!(view.submit.label, "Creating Account...");
            assert!(matches!(
                orchestrator.submit().await,
                Err(RegisterError::Busy)
            ));

            api.release.notify_one();
            submitting.await.unwrap().unwrap();

            assert!(!orchestrator.is_busy());
            assert_eq!(api.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn login_link_is_ignored_while_request_in_flight() {
        let api = Arc::new(GatedRegistrationApi {
            entered: Notify::new(),
            release: Notify::new(),
            reply: RegistrationReply::error("Email exists"),
            calls: AtomicUsize::new(0),
        });
        let navigation = Arc::new(RecordingNavigation::default());
        let orchestrator = Arc::new(RegistrationOrchestrator::new(
            api.clone(),
            Arc::new(RecordingNotifications::default()),
            navigation.clone(),
            Arc::new(RecordingEvents::default()),
        ));
        fill(&orchestrator, "Abcdef1!", "Abcdef1!").await;
        orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;

        let submitting = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.submit().await })
        };
        api.entered.notified().await;

        let state = tokio::time::timeout(
            std::time::Duration::from_secs(1),
            orchestrator.go_to_login(),
        )
        .await
        .expect("login link must not wait for the request")
        .unwrap();
        assert_eq!(state, RegistrationState::Submitting);

        api.release.notify_one();
        let settled = submitting.await.unwrap().unwrap();

        assert_eq!(settled, RegistrationState::Editing);
        assert_eq!(orchestrator.get_state().await, RegistrationState::Editing);
        assert!(navigation.routes.lock().unwrap().is_empty());
    }

    /// Records the orchestrator's busy flag at the moment each toast is shown.
    #[derive(Default)]
    struct BusyAtNotify {
        orchestrator: std::sync::OnceLock<std::sync::Weak<RegistrationOrchestrator>>,
        busy_seen: StdMutex<Vec<bool>>,
    }

    #[async_trait]
    impl NotificationPort for BusyAtNotify {
        async fn notify(&self, _notification: Notification) -> anyhow::Result<()> {
            let busy = self
                .orchestrator
                .get()
                .and_then(std::sync::Weak::upgrade)
                .map(|orchestrator| orchestrator.is_busy())
                .unwrap_or_default();
            self.busy_seen.lock().unwrap().push(busy);
            Ok(())
        }
    }

    #[tokio::test]
    async fn local_validation_failure_never_sets_busy() {
        let notifications = Arc::new(BusyAtNotify::default());
        let events = Arc::new(RecordingEvents::default());
        let orchestrator = Arc::new(RegistrationOrchestrator::new(
            Arc::new(StubRegistrationApi::new(Ok(RegistrationReply::success(
                "Registered",
            )))),
            notifications.clone(),
            Arc::new(RecordingNavigation::default()),
            events.clone(),
        ));
        notifications
            .orchestrator
            .set(Arc::downgrade(&orchestrator))
            .unwrap();

        // mismatch, then terms not accepted
        fill(&orchestrator, "Abcdef1!", "Abcdef1").await;
        orchestrator.set_toggle(FormToggle::AgreeToTerms, true).await;
        orchestrator.submit().await.unwrap();
        fill(&orchestrator, "Abcdef1!", "Abcdef1!").await;
        orchestrator.set_toggle(FormToggle::AgreeToTerms, false).await;
        orchestrator.submit().await.unwrap();

        assert_eq!(notifications.busy_seen.lock().unwrap().clone(), vec![false, false]);
        assert!(!events
            .emitted
            .lock()
            .unwrap()
            .contains(&RegistrationState::Submitting));
        assert_eq!(orchestrator.view().await.submit.label, "Register");
    }
}
