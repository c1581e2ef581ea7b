//! ID type wrappers for type safety.

mod id_macro;
pub mod ingest_id;
pub mod space_id;

pub use ingest_id::IngestId;
pub use space_id::SpaceId;
