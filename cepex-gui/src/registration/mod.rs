//! Student and professor registration: records, checks, the form state machine and the
//! selector choosing which form is shown.
pub mod form;
pub mod record;
pub mod selector;
pub mod validation;

pub use form::{FormState, RegistrationForm, SubmitOutcome};
pub use record::{Field, Identity, ProfessorRecord, Record, Registration, Role, StudentRecord};
pub use selector::{ActiveForm, RoleSelector};
pub use validation::FieldError;
