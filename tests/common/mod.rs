//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use student_form::api::{ApiError, StudentId, StudentPayload, StudentRecord, StudentService};
use student_form::store::auth::AuthReducer;
use student_form::store::Store;
use student_form::ui::history::History;
use student_form::ui::student::{Field, FormContext, StudentForm};
use student_form::ui::toast::ToastLog;

/// A call received by [`FakeStudentService`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch(String),
    Create(StudentPayload),
    Update(String, StudentPayload),
}

/// In-memory `/alunos` resource.
///
/// Ids are assigned sequentially from 1. Queued failures are returned by
/// the next call of any kind, before touching the records.
#[derive(Default)]
pub struct FakeStudentService {
    records: Mutex<HashMap<String, StudentRecord>>,
    next_id: Mutex<u64>,
    failures: Mutex<VecDeque<ApiError>>,
    calls: Mutex<Vec<Call>>,
    omit_created_id: Mutex<bool>,
}

impl FakeStudentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: &str, record: StudentRecord) {
        let record = StudentRecord {
            id: StudentId::new(id),
            ..record
        };
        self.records.lock().insert(id.to_string(), record);
    }

    pub fn fail_next(&self, err: ApiError) {
        self.failures.lock().push_back(err);
    }

    pub fn omit_created_id(&self) {
        *self.omit_created_id.lock() = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn record(&self, id: &str) -> Option<StudentRecord> {
        self.records.lock().get(id).cloned()
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.failures.lock().pop_front()
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            errors: vec!["Aluno não existe".to_string()],
        }
    }
}

fn record_from_payload(id: Option<StudentId>, payload: &StudentPayload) -> StudentRecord {
    StudentRecord {
        id,
        nome: Some(payload.nome.clone()),
        sobrenome: Some(payload.sobrenome.clone()),
        email: Some(payload.email.clone()),
        idade: Some(payload.idade.clone()),
        peso: Some(payload.peso.clone()),
        altura: Some(payload.altura.clone()),
        fotos: Vec::new(),
    }
}

#[async_trait]
impl StudentService for FakeStudentService {
    async fn fetch(&self, id: &StudentId) -> Result<StudentRecord, ApiError> {
        self.calls.lock().push(Call::Fetch(id.to_string()));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        self.record(id.as_str()).ok_or_else(Self::not_found)
    }

    async fn create(&self, payload: &StudentPayload) -> Result<StudentRecord, ApiError> {
        self.calls.lock().push(Call::Create(payload.clone()));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let id = {
            let mut next = self.next_id.lock();
            *next += 1;
            next.to_string()
        };
        let record = record_from_payload(StudentId::new(id.clone()), payload);
        self.records.lock().insert(id, record.clone());

        if *self.omit_created_id.lock() {
            return Ok(StudentRecord {
                id: None,
                ..record
            });
        }
        Ok(record)
    }

    async fn update(
        &self,
        id: &StudentId,
        payload: &StudentPayload,
    ) -> Result<(), ApiError> {
        self.calls
            .lock()
            .push(Call::Update(id.to_string(), payload.clone()));
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let mut records = self.records.lock();
        let existing = records.get(id.as_str()).ok_or_else(Self::not_found)?;
        let record = StudentRecord {
            fotos: existing.fotos.clone(),
            ..record_from_payload(Some(id.clone()), payload)
        };
        records.insert(id.to_string(), record);
        Ok(())
    }
}

/// Everything a form test needs to drive and observe the controller.
pub struct Harness {
    pub ctx: FormContext,
    pub service: Arc<FakeStudentService>,
    pub history: Arc<History>,
    pub toasts: Arc<ToastLog>,
    pub auth: Store<AuthReducer>,
}

pub fn harness() -> Harness {
    let service = Arc::new(FakeStudentService::new());
    let history = Arc::new(History::new());
    let toasts = Arc::new(ToastLog::new());
    let auth: Store<AuthReducer> = Store::new();

    let ctx = FormContext {
        service: service.clone(),
        navigator: history.clone(),
        notifier: toasts.clone(),
        auth: Arc::new(auth.clone()),
    };

    Harness {
        ctx,
        service,
        history,
        toasts,
        auth,
    }
}

pub fn id(raw: &str) -> Option<StudentId> {
    StudentId::new(raw)
}

/// Fills the form with the values used throughout the tests.
pub fn fill_valid(form: &mut StudentForm) {
    form.set_field(Field::FirstName, "Ana");
    form.set_field(Field::LastName, "Silva");
    form.set_field(Field::Email, "ana@x.com");
    form.set_field(Field::Age, "25");
    form.set_field(Field::Weight, "60.5");
    form.set_field(Field::Height, "1.70");
}
