use serde_json::Value;

/// Builds a `T` out of loosely-typed JSON arguments.
///
/// Implementors decide how much of `args` they understand; anything
/// that can fail should be reflected in `T` itself (usually a `Result`).
pub trait Factory<T> {
    fn generate(&self, args: Value) -> T;
}
