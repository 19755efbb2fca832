use super::interface::{introduce, PersonVariant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    name: String,
}

impl Teacher {
    /// Creates a [Teacher] with its fixed display name
    /// ```
    /// use person_factory::person::{Teacher, PersonVariant};
    /// let teacher = Teacher::new();
    /// assert_eq!(teacher.name(), "Teacher Name");
    /// ```
    pub fn new() -> Self {
        Self { name: "Teacher Name".to_string() }
    }
}

impl Default for Teacher {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonVariant for Teacher {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &'static str {
        "I am a teacher"
    }
    fn person_method(&self) {
        introduce(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn introduces_itself() {
        let mut out = Vec::<u8>::new();
        Teacher::new().write_description(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "I am a teacher\n");
    }

    #[test]
    fn name_is_fixed() {
        assert_eq!(Teacher::default(), Teacher::new());
    }
}
