//! Student form controller.
//!
//! Owns the form state and performs every side effect around it: fetching
//! on route changes, validating, submitting, toasts and navigation.

use std::sync::Arc;

use crate::api::{ApiError, StudentId, StudentPayload, StudentService};
use crate::store::auth::AuthDispatch;
use crate::ui::history::{self, Navigator, HOME_PATH};
use crate::ui::mvi::Reducer;
use crate::ui::toast::Notifier;

use super::intent::StudentFormIntent;
use super::reducer::StudentFormReducer;
use super::state::{Field, StudentFields, StudentFormState};
use super::validation::{validate, Violation};
use super::watch::IdWatch;

pub const CREATED_MESSAGE: &str = "Aluno(a) criado(a) com sucesso!";
pub const UPDATED_MESSAGE: &str = "Aluno(a) editado(a) com sucesso!";
pub const GENERIC_SAVE_ERROR: &str = "Ocorreu um erro ao salvar o aluno(a)";

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Collaborators the form talks to.
#[derive(Clone)]
pub struct FormContext {
    pub service: Arc<dyn StudentService>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub auth: Arc<dyn AuthDispatch>,
}

/// Result of feeding a route id to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No fetch was due (no id, or the id did not change).
    Skipped,
    Loaded,
    /// Fetch failed; the user was sent home.
    Failed,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blocked before any network call.
    Invalid(Vec<Violation>),
    /// Created; carries the id assigned by the server, if it sent one.
    Created(Option<StudentId>),
    Updated,
    Failed,
}

pub struct StudentForm {
    ctx: FormContext,
    id: Option<StudentId>,
    watch: IdWatch,
    state: StudentFormState,
}

impl StudentForm {
    /// New form in create mode with every field empty.
    pub fn new(ctx: FormContext) -> Self {
        Self {
            ctx,
            id: None,
            watch: IdWatch::new(),
            state: StudentFormState::default(),
        }
    }

    /// New form for the given route id; fetches the record when present.
    pub async fn mount(ctx: FormContext, id: Option<StudentId>) -> Self {
        let mut form = Self::new(ctx);
        form.set_route_id(id).await;
        form
    }

    /// Feeds the id currently in the route. Fetches when it changed.
    pub async fn set_route_id(&mut self, id: Option<StudentId>) -> LoadOutcome {
        self.id = id.clone();

        let Some(id) = self.watch.observe(id) else {
            return LoadOutcome::Skipped;
        };

        let outcome = self.load_record(&id).await;
        self.watch.finish(&id);
        outcome
    }

    async fn load_record(&mut self, id: &StudentId) -> LoadOutcome {
        dispatch_mvi!(self, state, StudentFormReducer, StudentFormIntent::BusyStarted);
        let result = self.ctx.service.fetch(id).await;
        dispatch_mvi!(self, state, StudentFormReducer, StudentFormIntent::BusyFinished);

        match result {
            Ok(record) => {
                tracing::info!(%id, "student loaded");
                dispatch_mvi!(
                    self,
                    state,
                    StudentFormReducer,
                    StudentFormIntent::Loaded { record }
                );
                LoadOutcome::Loaded
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "failed to load student");
                if err.is_client_error() {
                    for message in err.messages() {
                        self.ctx.notifier.error(message);
                    }
                }
                self.ctx.navigator.navigate_to(HOME_PATH);
                LoadOutcome::Failed
            }
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        dispatch_mvi!(
            self,
            state,
            StudentFormReducer,
            StudentFormIntent::Edit {
                field,
                value: value.into(),
            }
        );
    }

    /// Runs every field rule without side effects.
    pub fn validate(&self) -> Vec<Violation> {
        validate(&self.state.fields)
    }

    /// Validates, then creates or updates the student.
    ///
    /// Each violation is shown as its own error toast and blocks the call.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let violations = self.validate();
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "submit blocked by validation");
            for violation in &violations {
                self.ctx.notifier.error(violation.message());
            }
            return SubmitOutcome::Invalid(violations);
        }

        let payload = StudentPayload::from(&self.state.fields);

        dispatch_mvi!(self, state, StudentFormReducer, StudentFormIntent::BusyStarted);
        let result = match self.id.clone() {
            Some(id) => self.update(&id, &payload).await,
            None => self.create(&payload).await,
        };
        dispatch_mvi!(self, state, StudentFormReducer, StudentFormIntent::BusyFinished);

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report_save_error(&err);
                SubmitOutcome::Failed
            }
        }
    }

    async fn update(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<SubmitOutcome, ApiError> {
        self.ctx.service.update(id, payload).await?;
        tracing::info!(%id, "student updated");
        self.ctx.notifier.success(UPDATED_MESSAGE);
        Ok(SubmitOutcome::Updated)
    }

    async fn create(&self, payload: &StudentPayload) -> Result<SubmitOutcome, ApiError> {
        let record = self.ctx.service.create(payload).await?;
        self.ctx.notifier.success(CREATED_MESSAGE);

        match &record.id {
            Some(id) => {
                tracing::info!(%id, "student created");
                self.ctx.navigator.navigate_to(&history::student_edit_path(id));
            }
            None => tracing::warn!("create response carried no id; staying on form"),
        }
        Ok(SubmitOutcome::Created(record.id))
    }

    fn report_save_error(&self, err: &ApiError) {
        tracing::warn!(id = ?self.id, error = %err, "failed to save student");

        let messages = err.messages();
        if messages.is_empty() {
            self.ctx.notifier.error(GENERIC_SAVE_ERROR);
        } else {
            for message in messages {
                self.ctx.notifier.error(message);
            }
        }

        if err.is_unauthorized() {
            self.ctx.auth.login_failure();
        }
    }

    pub fn state(&self) -> &StudentFormState {
        &self.state
    }

    pub fn fields(&self) -> &StudentFields {
        &self.state.fields
    }

    pub fn id(&self) -> Option<&StudentId> {
        self.id.as_ref()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Display photo URL; empty when there is none.
    pub fn photo(&self) -> &str {
        &self.state.photo
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Editar Aluno"
        } else {
            "Novo Aluno"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit_mode() {
            "Salvar"
        } else {
            "Criar"
        }
    }

    /// Link to the photo editor. Only available in edit mode.
    pub fn photo_edit_path(&self) -> Option<String> {
        self.id.as_ref().map(history::photo_edit_path)
    }
}
