pub mod api_source;
pub mod local_source;
pub mod renderer;
pub mod site;

pub use crate::domain::model::{AnimalRecord, FetchOutcome};
pub use crate::domain::ports::{AnimalSource, ConfigProvider, SourceKind, Storage};
pub use crate::utils::error::Result;

/// Resolves `name` through `source`, folding any failure into a printable message.
pub async fn fetch<S: AnimalSource + ?Sized>(source: &S, name: &str) -> FetchOutcome {
    FetchOutcome::from(source.fetch_animals(name).await)
}
