use std::time::Duration;

use crate::models::{BookingDraft, BookingRequest};
use crate::services::api::BookingApi;
use crate::services::notify::{Notice, Notifier};
use crate::validation::{self, Field, FieldErrors};

/// How long the confirmation stays on screen before the form clears.
pub const SUCCESS_DISPLAY_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected,
    /// The backend acknowledged the booking.
    Accepted,
    /// Transport or server failure; the draft is untouched.
    Failed,
    /// A submission was already in flight or showing its confirmation.
    Ignored,
}

/// Owns the draft, its error map and the submission state. Single-owner by
/// construction: nothing else reads or writes the form.
pub struct SubmissionController {
    draft: BookingDraft,
    errors: FieldErrors,
    state: SubmissionState,
    api: Box<dyn BookingApi>,
    notifier: Box<dyn Notifier>,
    success_delay: Duration,
}

impl SubmissionController {
    pub fn new(api: Box<dyn BookingApi>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            draft: BookingDraft::default(),
            errors: FieldErrors::new(),
            state: SubmissionState::Idle,
            api,
            notifier,
            success_delay: SUCCESS_DISPLAY_DELAY,
        }
    }

    pub fn with_success_delay(mut self, delay: Duration) -> Self {
        self.success_delay = delay;
        self
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Applies one edit and clears any stale error for that field. Typing
    /// never triggers validation on its own.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
        self.errors.clear_field(field);
    }

    /// Validation plus the in-flight guard. Returns the request to send, or
    /// `None` when this trigger must not produce a network call.
    pub fn begin_submit(&mut self) -> Option<BookingRequest> {
        if self.state != SubmissionState::Idle {
            return None;
        }

        let errors = validation::validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            self.notifier
                .notify(Notice::error("Por favor, corrija os erros no formulário"));
            return None;
        }

        self.errors = FieldErrors::new();
        self.state = SubmissionState::Submitting;
        Some(self.draft.to_request())
    }

    /// Applies the backend's verdict for the in-flight request. Failures are
    /// not discriminated: network and non-2xx resolve the same way.
    pub fn resolve(&mut self, result: anyhow::Result<()>) -> SubmitOutcome {
        if self.state != SubmissionState::Submitting {
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                self.state = SubmissionState::Success;
                self.notifier
                    .notify(Notice::success("Agendamento realizado com sucesso!"));
                SubmitOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!("booking submission failed: {err:#}");
                self.state = SubmissionState::Idle;
                self.notifier
                    .notify(Notice::error("Erro ao realizar agendamento. Tente novamente."));
                SubmitOutcome::Failed
            }
        }
    }

    /// Ends the confirmation window: clears the form and returns to idle.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.errors = FieldErrors::new();
        self.state = SubmissionState::Idle;
    }

    /// Full submit cycle: validate, post exactly once, and on success hold
    /// the confirmation for the display delay before clearing the form.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(request) = self.begin_submit() else {
            return if self.state == SubmissionState::Idle {
                SubmitOutcome::Rejected
            } else {
                SubmitOutcome::Ignored
            };
        };

        let result = self.api.create_booking(&request).await;
        let outcome = self.resolve(result);

        if outcome == SubmitOutcome::Accepted {
            tokio::time::sleep(self.success_delay).await;
            self.reset();
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::services::notify::NoticeLevel;

    struct MockApi {
        requests: Arc<Mutex<Vec<BookingRequest>>>,
        fail: bool,
    }

    #[async_trait]
    impl BookingApi for MockApi {
        async fn create_booking(&self, request: &BookingRequest) -> anyhow::Result<()> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                anyhow::bail!("HTTP 500");
            }
            Ok(())
        }
    }

    struct RecordingNotifier {
        notices: Arc<Mutex<Vec<Notice>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    type Captured = (
        SubmissionController,
        Arc<Mutex<Vec<BookingRequest>>>,
        Arc<Mutex<Vec<Notice>>>,
    );

    fn controller(fail: bool) -> Captured {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let notices = Arc::new(Mutex::new(Vec::new()));
        let controller = SubmissionController::new(
            Box::new(MockApi {
                requests: Arc::clone(&requests),
                fail,
            }),
            Box::new(RecordingNotifier {
                notices: Arc::clone(&notices),
            }),
        );
        (controller, requests, notices)
    }

    fn fill_valid(controller: &mut SubmissionController) {
        controller.edit(Field::Name, "João da Silva");
        controller.edit(Field::Phone, "(11) 93204-9040");
        controller.edit(Field::Email, "joao@email.com");
        controller.edit(Field::VehicleBrand, "Volkswagen");
        controller.edit(Field::VehicleModel, "Golf");
        controller.edit(Field::VehicleYear, "2020");
        controller.edit(Field::ServiceType, "Revisão Completa");
        controller.edit(Field::PreferredDate, "2026-09-01");
        controller.edit(Field::PreferredTime, "09:00");
        controller.edit(Field::Message, "Barulho ao frear");
    }

    #[tokio::test]
    async fn test_invalid_submit_makes_no_request() {
        let (mut controller, requests, notices) = controller(false);

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.errors().is_empty());
        assert!(requests.lock().unwrap().is_empty());

        let notices = notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Por favor, corrija os erros no formulário");
    }

    #[tokio::test]
    async fn test_second_trigger_while_in_flight_is_ignored() {
        let (mut controller, _requests, _notices) = controller(false);
        fill_valid(&mut controller);

        let first = controller.begin_submit();
        assert!(first.is_some());
        assert_eq!(controller.state(), SubmissionState::Submitting);

        // The submit control is disabled while a request is outstanding.
        assert!(controller.begin_submit().is_none());
        assert_eq!(controller.state(), SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn test_submit_during_confirmation_window_is_ignored() {
        let (mut controller, requests, _notices) = controller(false);
        fill_valid(&mut controller);

        controller.begin_submit().unwrap();
        assert_eq!(controller.resolve(Ok(())), SubmitOutcome::Accepted);
        assert_eq!(controller.state(), SubmissionState::Success);

        assert_eq!(controller.submit().await, SubmitOutcome::Ignored);
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_transitions_step_by_step() {
        let (mut controller, _requests, notices) = controller(false);
        fill_valid(&mut controller);

        assert_eq!(controller.state(), SubmissionState::Idle);
        let request = controller.begin_submit().unwrap();
        assert_eq!(request.service_type, "Revisão Completa");
        assert_eq!(controller.state(), SubmissionState::Submitting);

        assert_eq!(controller.resolve(Ok(())), SubmitOutcome::Accepted);
        assert_eq!(controller.state(), SubmissionState::Success);
        assert_eq!(
            notices.lock().unwrap()[0],
            Notice::success("Agendamento realizado com sucesso!")
        );

        controller.reset();
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.draft(), &BookingDraft::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_success_cycle_clears_form_after_delay() {
        let (mut controller, requests, _notices) = controller(false);
        fill_valid(&mut controller);

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(requests.lock().unwrap().len(), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.draft(), &BookingDraft::default());
        assert!(controller.errors().is_empty());
    }

    #[tokio::test]
    async fn test_failure_preserves_input() {
        let (mut controller, requests, notices) = controller(true);
        fill_valid(&mut controller);
        let before = controller.draft().clone();

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(requests.lock().unwrap().len(), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.draft(), &before);

        let notices = notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices[0],
            Notice::error("Erro ao realizar agendamento. Tente novamente.")
        );
    }

    #[tokio::test]
    async fn test_failure_allows_a_fresh_submit() {
        let (mut controller, requests, _notices) = controller(true);
        fill_valid(&mut controller);

        assert_eq!(controller.submit().await, SubmitOutcome::Failed);
        assert_eq!(controller.submit().await, SubmitOutcome::Failed);

        // Each failure required an explicit new trigger; both went out.
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_edit_clears_only_that_fields_error() {
        let (mut controller, _requests, _notices) = controller(false);

        controller.submit().await;
        assert!(controller.errors().contains(Field::Name));
        assert!(controller.errors().contains(Field::Phone));

        // Clearing happens per keystroke, without re-validating the value.
        controller.edit(Field::Phone, "123");
        assert!(!controller.errors().contains(Field::Phone));
        assert!(controller.errors().contains(Field::Name));
    }
}
