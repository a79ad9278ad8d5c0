use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of document identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random version-4 UUIDs in the hyphenated 8-4-4-4-12 form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Source of the `createdDate` stamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
