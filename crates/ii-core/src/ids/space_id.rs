use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Storage space an ingest was deposited into, e.g. `digitised`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(String);

impl_id!(SpaceId);
