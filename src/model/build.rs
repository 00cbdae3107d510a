use crate::prelude::*;

pub type BuildId = u64;

/// The game build the API is currently serving. Used as the freshness
/// key for on-disk caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Build {
    pub id: BuildId,
}
