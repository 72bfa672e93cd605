pub mod attachments;
pub mod draft;
pub mod form;
pub mod suggestion;
