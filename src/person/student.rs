use super::interface::{introduce, PersonVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
}

impl Student {
    /// Creates a [Student] with its fixed display name
    /// ```
    /// use person_factory::person::{Student, PersonVariant};
    /// let student = Student::new();
    /// assert_eq!(student.name(), "Student Name");
    /// ```
    pub fn new() -> Self {
        Self { name: "Student Name".to_string() }
    }
}

impl Default for Student {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonVariant for Student {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &'static str {
        "I am a student"
    }
    fn person_method(&self) {
        introduce(self)
    }
}
