use std::{fmt, io::{self, Write}, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use simple_error::SimpleError;

use crate::common::factory::Factory;
use super::{interface::Persons, student::Student, teacher::Teacher};

/// Diagnostic printed when a person type is not recognized.
pub const INVALID_TYPE: &str = "Invalid Type";

/// The keys [PersonFactory] understands. Matching is exact and case-sensitive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonKind {
    Student,
    Teacher,
}

impl PersonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Student => "Student",
            PersonKind::Teacher => "Teacher",
        }
    }
    pub fn build(&self) -> Persons {
        match self {
            PersonKind::Student => Student::new().into(),
            PersonKind::Teacher => Teacher::new().into(),
        }
    }
}

impl FromStr for PersonKind {
    type Err = UnrecognizedVariant;
    /// ```
    /// use person_factory::person::PersonKind;
    ///
    /// assert_eq!("Student".parse::<PersonKind>().ok(), Some(PersonKind::Student));
    /// assert_eq!("Teacher".parse::<PersonKind>().ok(), Some(PersonKind::Teacher));
    /// assert!("student".parse::<PersonKind>().is_err());
    /// assert!(" Teacher".parse::<PersonKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Student" => Ok(PersonKind::Student),
            "Teacher" => Ok(PersonKind::Teacher),
            other => Err(UnrecognizedVariant { person_type: other.to_string() }),
        }
    }
}

/// The input named no known kind of person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedVariant {
    pub person_type: String,
}

impl fmt::Display for UnrecognizedVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized person type {:?}", self.person_type)
    }
}

impl std::error::Error for UnrecognizedVariant {}

/// Turns a person type into a [Persons].
///
/// Holds no state; any number of calls with the same input give
/// equal results.
#[derive(Debug, Default, Clone, Copy)]
pub struct PersonFactory;

impl PersonFactory {
    pub fn new() -> Self {
        PersonFactory
    }

    /// Builds the person named by `person_type`, printing [INVALID_TYPE]
    /// to stdout if there is no such kind.
    /// ```
    /// use person_factory::person::{PersonFactory, PersonVariant};
    ///
    /// let factory = PersonFactory::new();
    /// assert_eq!(factory.build_person("Student").unwrap().description(), "I am a student");
    /// assert!(factory.build_person("Guest").is_err());
    /// ```
    pub fn build_person(&self, person_type: &str) -> Result<Persons, UnrecognizedVariant> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.build_person_with(person_type, &mut lock)
    }

    /// Same as [PersonFactory::build_person], with the diagnostic going
    /// to `diagnostics` instead of stdout.
    pub fn build_person_with(&self, person_type: &str, diagnostics: &mut dyn Write)
        -> Result<Persons, UnrecognizedVariant>
    {
        match person_type.parse::<PersonKind>() {
            Ok(kind) => {
                log::debug!("Building a {}", kind.as_str());
                Ok(kind.build())
            }
            Err(err) => {
                if let Err(io_err) = writeln!(diagnostics, "{INVALID_TYPE}").and_then(|_| diagnostics.flush()) {
                    log::warn!("Cannot write diagnostic: {io_err}");
                }
                log::warn!("{err}");
                Err(err)
            }
        }
    }
}

impl PersonFactory {
    /// [Factory::generate] with the diagnostic going to `diagnostics`.
    pub fn generate_with(&self, args: &Value, diagnostics: &mut dyn Write) -> Result<Persons, SimpleError> {
        let person_type = match args {
            Value::String(s) => s.as_str(),
            Value::Object(map) => map.get("person_type")
                .and_then(|v| v.as_str())
                .ok_or_else(|| SimpleError::new(format!("No string \"person_type\" in {args}")))?,
            other => return Err(SimpleError::new(format!("Cannot read a person type from {other}"))),
        };
        self.build_person_with(person_type, diagnostics)
            .map_err(|err| SimpleError::new(err.to_string()))
    }
}

impl Factory<Result<Persons, SimpleError>> for PersonFactory {
    /// Accepts either a bare string (`"Teacher"`) or an object carrying
    /// a `person_type` string (`{"person_type": "Teacher"}`).
    /// Like [PersonFactory::build_person], an unknown type prints
    /// [INVALID_TYPE] to stdout.
    fn generate(&self, args: Value) -> Result<Persons, SimpleError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.generate_with(&args, &mut lock)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::person::interface::PersonVariant;
    use super::*;

    fn build(person_type: &str) -> (Result<Persons, UnrecognizedVariant>, String) {
        let mut diag = Vec::<u8>::new();
        let result = PersonFactory::new().build_person_with(person_type, &mut diag);
        (result, String::from_utf8(diag).unwrap())
    }

    #[test]
    fn builds_student() {
        let (result, diag) = build("Student");
        let person = result.expect("Student is a known type");
        assert!(matches!(person, Persons::Student(_)));
        assert_eq!(person.description(), "I am a student");
        assert!(diag.is_empty(), "no diagnostic expected, got {diag:?}");
    }

    #[test]
    fn builds_teacher() {
        let (result, diag) = build("Teacher");
        let person = result.expect("Teacher is a known type");
        assert!(matches!(person, Persons::Teacher(_)));
        assert_eq!(person.description(), "I am a teacher");
        assert!(diag.is_empty());
    }

    #[test]
    fn rejects_everything_else() {
        for input in ["Guest", "", "student", "TEACHER", "Student ", "Student\n"] {
            let (result, diag) = build(input);
            assert_eq!(result, Err(UnrecognizedVariant { person_type: input.to_string() }));
            assert_eq!(diag, "Invalid Type\n");
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let first = build("Teacher");
        let second = build("Teacher");
        assert_eq!(first, second);
        assert_eq!(build("Guest"), build("Guest"));
    }

    #[test]
    fn kind_round_trips_through_its_name() {
        for kind in [PersonKind::Student, PersonKind::Teacher] {
            assert_eq!(kind.as_str().parse::<PersonKind>(), Ok(kind));
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[test]
    fn generate_from_json() {
        let factory = PersonFactory::new();
        let student = factory.generate(json!("Student")).unwrap();
        assert_eq!(student.name(), "Student Name");
        let teacher = factory.generate(json!({"person_type": "Teacher"})).unwrap();
        assert_eq!(teacher.name(), "Teacher Name");
    }

    #[test]
    fn generate_rejects_bad_args() {
        let factory = PersonFactory::new();
        for args in [json!({"kind": "Teacher"}), json!(7), json!({"person_type": 7})] {
            let mut diag = Vec::<u8>::new();
            assert!(factory.generate_with(&args, &mut diag).is_err(), "{args} should be rejected");
            assert!(diag.is_empty(), "malformed args are not a person type: {args}");
        }

        let mut diag = Vec::<u8>::new();
        let err = factory.generate_with(&json!("Guest"), &mut diag).unwrap_err();
        assert_eq!(diag, b"Invalid Type\n");
        assert!(err.to_string().contains("Guest"), "{err}");
    }
}
