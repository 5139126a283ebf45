use tracing::debug;

use super::{
    form::RegistrationForm,
    record::{ProfessorRecord, Role, StudentRecord},
};

/// The form currently mounted. Only one exists at a time.
#[derive(Debug)]
pub enum ActiveForm {
    Student(RegistrationForm<StudentRecord>),
    Professor(RegistrationForm<ProfessorRecord>),
}

impl ActiveForm {
    pub fn mount(role: Role) -> Self {
        match role {
            Role::Student => Self::Student(RegistrationForm::new()),
            Role::Professor => Self::Professor(RegistrationForm::new()),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Professor(_) => Role::Professor,
        }
    }
}

#[derive(Debug)]
pub struct RoleSelector {
    active: ActiveForm,
}

impl Default for RoleSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleSelector {
    pub fn new() -> Self {
        Self {
            active: ActiveForm::mount(Role::default()),
        }
    }

    pub fn active_role(&self) -> Role {
        self.active.role()
    }

    pub fn active(&self) -> &ActiveForm {
        &self.active
    }

    /// Show the form for `role`. Selecting the role already shown changes nothing, any
    /// other selection drops the current form with whatever was typed into it.
    pub fn select_role(&mut self, role: Role) {
        if self.active.role() == role {
            return;
        }
        debug!("Switching registration form from {} to {}", self.active.role(), role);
        self.active = ActiveForm::mount(role);
    }

    pub fn student_mut(&mut self) -> Option<&mut RegistrationForm<StudentRecord>> {
        match &mut self.active {
            ActiveForm::Student(form) => Some(form),
            ActiveForm::Professor(_) => None,
        }
    }

    pub fn professor_mut(&mut self) -> Option<&mut RegistrationForm<ProfessorRecord>> {
        match &mut self.active {
            ActiveForm::Professor(form) => Some(form),
            ActiveForm::Student(_) => None,
        }
    }
}
