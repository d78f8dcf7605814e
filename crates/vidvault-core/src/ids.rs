//! Identifier generation for uploaded objects.

use uuid::Uuid;

/// Produces a new opaque identifier on every call.
///
/// Uniqueness is entirely the generator's responsibility; callers never check an id
/// against existing store contents.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random (v4) UUID generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Append the content extension to a generated id: `{id}.{extension}`.
pub fn with_extension(id: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        id.to_string()
    } else {
        format!("{}.{}", id, extension)
    }
}
