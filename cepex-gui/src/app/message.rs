use crate::registration::{Field, Role};

#[derive(Debug, Clone)]
pub enum Message {
    SelectRole(Role),
    Student(FormMessage),
    Professor(FormMessage),
    DismissNotice,
}

#[derive(Debug, Clone)]
pub enum FormMessage {
    FieldEdited(Field, String),
    /// Professor form only.
    CoordinatorToggled(bool),
    Submit,
}
