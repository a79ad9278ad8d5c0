pub mod builder;
pub mod id;

pub use builder::{DEFAULT_CREATED_BY, DocumentBuilder};
pub use id::{Clock, IdGenerator, SystemClock, UuidGenerator};
