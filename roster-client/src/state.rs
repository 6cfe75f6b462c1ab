//! Client sync state
//!
//! Owns the authoritative local copy of the records, the pending draft and
//! the projection inputs; reconciles the cache after each remote mutation.
//! Any remote failure leaves the cache untouched and surfaces a static,
//! action-specific message instead of the raw error payload.
//!
//! 状态机: Idle → Loading → { Loaded, Errored }

use shared::Employee;
use validator::Validate;

use crate::error::ClientError;
use crate::form::EmployeeForm;
use crate::http::RosterClient;
use crate::projection::{self, SortField, ViewState};

/// Load phase of the employee list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Pending edit: the form plus the id being edited (None = create)
#[derive(Debug, Clone)]
pub struct Draft {
    pub form: EmployeeForm,
    pub editing_id: Option<u64>,
}

/// Client-side directory state machine
#[derive(Debug)]
pub struct DirectoryState {
    client: RosterClient,
    employees: Vec<Employee>,
    view: ViewState,
    draft: Option<Draft>,
    phase: LoadPhase,
    saving: bool,
    error_message: Option<String>,
}

impl DirectoryState {
    pub fn new(client: RosterClient) -> Self {
        Self {
            client,
            employees: Vec::new(),
            view: ViewState::default(),
            draft: None,
            phase: LoadPhase::Idle,
            saving: false,
            error_message: None,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// The filtered, sorted view a UI renders
    pub fn visible(&self) -> Vec<Employee> {
        projection::project(&self.employees, &self.view)
    }

    // ── Projection inputs ──────────────────────────────────────────

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.view.sort_by(field);
    }

    pub fn flip_direction(&mut self) {
        self.view.flip_direction();
    }

    // ── Draft lifecycle ────────────────────────────────────────────

    /// Open an empty create form
    pub fn open_create(&mut self) {
        self.draft = Some(Draft {
            form: EmployeeForm::default(),
            editing_id: None,
        });
    }

    /// Open an edit form pre-filled from the local record
    ///
    /// 本地缓存中不存在该 id 时不打开表单
    pub fn open_edit(&mut self, id: u64) {
        if let Some(employee) = self.employees.iter().find(|e| e.id == id) {
            self.draft = Some(Draft {
                form: EmployeeForm::from_employee(employee),
                editing_id: Some(id),
            });
        }
    }

    /// Discard the pending draft
    pub fn close_draft(&mut self) {
        self.draft = None;
        self.saving = false;
    }

    // ── Remote operations ──────────────────────────────────────────

    /// Fetch the full list, replacing the local cache
    pub async fn load(&mut self) {
        self.phase = LoadPhase::Loading;
        match self.client.list().await {
            Ok(employees) => {
                self.employees = employees;
                self.error_message = None;
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                tracing::warn!("Failed to load employees: {}", e);
                self.error_message = Some(
                    "We could not load employees. Please ensure the server is running."
                        .to_string(),
                );
                self.phase = LoadPhase::Errored;
            }
        }
    }

    /// Submit the pending draft (create or update)
    ///
    /// Validation failures never reach the network and the draft stays open
    /// on any failure. Re-entry while a submit is in flight is a no-op.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if self.saving {
            return Ok(());
        }
        let Some(draft) = self.draft.clone() else {
            return Ok(());
        };

        if let Err(errors) = draft.form.validate() {
            return Err(ClientError::Validation(errors.to_string()));
        }

        self.saving = true;
        let result = match draft.editing_id {
            Some(id) => self.submit_update(id, &draft.form).await,
            None => self.submit_create(&draft.form).await,
        };
        self.saving = false;
        result
    }

    async fn submit_create(&mut self, form: &EmployeeForm) -> Result<(), ClientError> {
        match self.client.create(&form.to_draft()).await {
            Ok(employee) => {
                self.employees.push(employee);
                self.draft = None;
                self.error_message = None;
                Ok(())
            }
            Err(e) => {
                self.error_message = Some("Unable to create employee right now.".to_string());
                Err(e)
            }
        }
    }

    async fn submit_update(&mut self, id: u64, form: &EmployeeForm) -> Result<(), ClientError> {
        match self.client.update(id, &form.to_update()).await {
            Ok(updated) => {
                if let Some(existing) = self.employees.iter_mut().find(|e| e.id == updated.id) {
                    *existing = updated;
                }
                self.draft = None;
                self.error_message = None;
                Ok(())
            }
            Err(e) => {
                self.error_message = Some("Unable to update employee right now.".to_string());
                Err(e)
            }
        }
    }

    /// Delete a record; the caller is expected to have confirmed the action
    pub async fn remove(&mut self, id: u64) -> Result<(), ClientError> {
        match self.client.delete(id).await {
            Ok(()) => {
                self.employees.retain(|e| e.id != id);
                self.error_message = None;
                Ok(())
            }
            Err(e) => {
                self.error_message = Some("Unable to delete employee right now.".to_string());
                Err(e)
            }
        }
    }
}
