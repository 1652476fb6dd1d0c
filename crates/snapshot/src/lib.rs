pub mod error;
pub mod model;
pub mod sources;
pub mod traits;
pub mod validator;

pub use error::{Result, SnapshotError};
pub use model::CompetitionSnapshot;
pub use sources::{InMemorySource, JsonFileSource};
pub use traits::SnapshotSource;
pub use crate::validator::{SnapshotValidator, ValidationReport};
