// Student record store
// Ordered sequence of students plus a monotonic id counter

use crate::validation::StudentFields;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Unique identifier for a student
pub type StudentId = u64;

/// Student store shared between request handlers
pub type SharedStudentStore = Arc<RwLock<StudentStore>>;

/// Student structure
/// A validated student record as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// Unique identifier, never reused
    pub id: StudentId,
    /// Display name (non-empty)
    pub name: String,
    /// Email address
    pub email: String,
    /// Age, at least 10
    pub age: Number,
}

/// In-memory student store
/// Records keep insertion order; ids come from a counter that deletions never rewind
#[derive(Debug, Clone)]
pub struct StudentStore {
    students: Vec<Student>,
    next_id: StudentId,
}

impl Default for StudentStore {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }
}

impl StudentStore {
    /// Create an empty store whose first id is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store for sharing across handlers
    pub fn shared() -> SharedStudentStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Append a new student, assigning the next id
    /// Returns the stored record
    pub fn create(&mut self, name: String, email: String, age: Number) -> Student {
        let student = Student {
            id: self.next_id,
            name,
            email,
            age,
        };
        self.next_id += 1;
        self.students.push(student.clone());
        student
    }

    /// All students in insertion order
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    /// Get a student by ID
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Merge the supplied fields onto an existing student
    /// Fields left as `None` keep their current value
    /// Returns the updated student if it was found
    pub fn update(&mut self, id: StudentId, fields: StudentFields) -> Option<&Student> {
        let idx = self.position(id)?;
        let student = &mut self.students[idx];

        if let Some(name) = fields.name {
            student.name = name;
        }
        if let Some(email) = fields.email {
            student.email = email;
        }
        if let Some(age) = fields.age {
            student.age = age;
        }

        Some(&self.students[idx])
    }

    /// Remove a student from the store
    /// Returns the removed student if it existed
    pub fn remove(&mut self, id: StudentId) -> Option<Student> {
        let idx = self.position(id)?;
        Some(self.students.remove(idx))
    }

    /// Get the number of students in the store
    pub(crate) fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the store holds no students
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }
}
