//! Where a completed registration goes once its form accepts it.
//!
//! No backend exists yet: [`OperatorLog`] only surfaces the record to whoever runs the
//! application, and [`Outbox`] leaves a JSON line per registration on disk for a later
//! import.
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use serde::Serialize;
use tracing::info;

use crate::{
    config::{SinkConfig, SinkKind},
    dir::CepexDirectory,
    registration::{Registration, Role},
};

pub const DEFAULT_OUTBOX_FILE_NAME: &str = "registrations.jsonl";

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write registration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize registration: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Receives one registration per successful submit.
pub trait RegistrationSink {
    fn register(&mut self, registration: &Registration) -> Result<(), SinkError>;
}

/// Shows the registration to the operator through the log and keeps nothing.
#[derive(Debug, Default)]
pub struct OperatorLog;

impl RegistrationSink for OperatorLog {
    fn register(&mut self, registration: &Registration) -> Result<(), SinkError> {
        let identity = registration.identity();
        info!(
            role = %registration.role(),
            registration_id = %identity.registration_id,
            tax_id = %identity.tax_id,
            name = %identity.full_name(),
            email = %identity.email,
            is_coordinator = ?registration.is_coordinator(),
            "Registration submitted"
        );
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct OutboxEntry<'a> {
    id: uuid::Uuid,
    submitted_at: String,
    role: Role,
    registration_id: &'a str,
    tax_id: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_coordinator: Option<bool>,
}

/// Appends registrations to a JSON-lines file. Passwords are stored as Argon2id PHC strings.
#[derive(Debug)]
pub struct Outbox {
    path: PathBuf,
}

impl Outbox {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn hash_password(password: &str) -> Result<String, SinkError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SinkError::PasswordHash(e.to_string()))
}

impl RegistrationSink for Outbox {
    fn register(&mut self, registration: &Registration) -> Result<(), SinkError> {
        let identity = registration.identity();
        let entry = OutboxEntry {
            id: uuid::Uuid::new_v4(),
            submitted_at: chrono::Utc::now().to_rfc3339(),
            role: registration.role(),
            registration_id: &identity.registration_id,
            tax_id: &identity.tax_id,
            first_name: &identity.first_name,
            last_name: &identity.last_name,
            email: &identity.email,
            password_hash: hash_password(&identity.password)?,
            is_coordinator: registration.is_coordinator(),
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        info!(
            id = %entry.id,
            role = %entry.role,
            path = %self.path.display(),
            "Registration written to outbox"
        );
        Ok(())
    }
}

/// Build the sink selected by the configuration.
pub fn from_config(config: &SinkConfig, dir: &CepexDirectory) -> Box<dyn RegistrationSink> {
    match config.kind {
        SinkKind::Log => Box::new(OperatorLog),
        SinkKind::Outbox => {
            let path = match &config.path {
                Some(p) if p.is_absolute() => p.clone(),
                Some(p) => dir.path().join(p),
                None => dir.path().join(DEFAULT_OUTBOX_FILE_NAME),
            };
            info!("Registrations will be appended to {}", path.display());
            Box::new(Outbox::new(path))
        }
    }
}
