// State management module
// Holds the in-memory record stores for both services

pub mod contacts;
pub mod students;

pub use contacts::{Contact, ContactId, ContactStore, SharedContactStore};
pub use students::{SharedStudentStore, Student, StudentId, StudentStore};
