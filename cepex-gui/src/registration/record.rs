use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Professor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Professor => write!(f, "Professor"),
        }
    }
}

/// The text fields shared by every registration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    RegistrationId,
    TaxId,
    FirstName,
    LastName,
    Email,
    Password,
    PasswordConfirm,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::RegistrationId,
        Field::TaxId,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::PasswordConfirm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RegistrationId => "Registration ID",
            Self::TaxId => "Tax ID (CPF)",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PasswordConfirm => "Confirm password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirm)
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub registration_id: String,
    pub tax_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl Identity {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RegistrationId => &self.registration_id,
            Field::TaxId => &self.tax_id,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirm => &self.password_confirm,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::RegistrationId => &mut self.registration_id,
            Field::TaxId => &mut self.tax_id,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordConfirm => &mut self.password_confirm,
        };
        *slot = value;
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirm
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// Passwords must never reach a log line.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Identity")
            .field("registration_id", &self.registration_id)
            .field("tax_id", &self.tax_id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_confirm", &"<redacted>")
            .finish()
    }
}

/// Field values captured by one mounted form.
pub trait Record: Clone + Default + fmt::Debug {
    const ROLE: Role;

    fn identity(&self) -> &Identity;
    fn identity_mut(&mut self) -> &mut Identity;
    fn into_registration(self) -> Registration;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRecord {
    pub identity: Identity,
}

impl Record for StudentRecord {
    const ROLE: Role = Role::Student;

    fn identity(&self) -> &Identity {
        &self.identity
    }
    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
    fn into_registration(self) -> Registration {
        Registration::Student(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessorRecord {
    pub identity: Identity,
    pub is_coordinator: bool,
}

impl Record for ProfessorRecord {
    const ROLE: Role = Role::Professor;

    fn identity(&self) -> &Identity {
        &self.identity
    }
    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }
    fn into_registration(self) -> Registration {
        Registration::Professor(self)
    }
}

/// A completed record handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Student(StudentRecord),
    Professor(ProfessorRecord),
}

impl Registration {
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Professor(_) => Role::Professor,
        }
    }

    pub fn identity(&self) -> &Identity {
        match self {
            Self::Student(r) => &r.identity,
            Self::Professor(r) => &r.identity,
        }
    }

    /// Only professors carry the coordinator flag.
    pub fn is_coordinator(&self) -> Option<bool> {
        match self {
            Self::Student(_) => None,
            Self::Professor(r) => Some(r.is_coordinator),
        }
    }
}
