//! Optional on-disk collection cache, keyed by the game build the data
//! was fetched against. Strictly a convenience path: every repository
//! works without it, and a cache that is stale, missing or unreadable
//! just means one extra fetch.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::model::build::BuildId;
use crate::prelude::*;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    build_id: BuildId,
    entries: Vec<T>,
}

/// One cached collection in one bincode file.
pub struct CollectionCache<T> {
    path: PathBuf,
    _entries: PhantomData<fn() -> T>,
}

impl<T> CollectionCache<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entries: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries from disk, or `None` when the file is missing, was
    /// written against an older build than `current_build`, or does not
    /// decode. None of those are errors; the caller refetches.
    pub fn load(&self, current_build: BuildId) -> Result<Option<Vec<T>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let envelope: Envelope<T> = match bincode::deserialize_from(reader) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "discarding undecodable cache file");
                return Ok(None);
            }
        };
        if envelope.build_id < current_build {
            debug!(
                cached = envelope.build_id,
                current = current_build,
                "cache is stale, discarding"
            );
            return Ok(None);
        }
        Ok(Some(envelope.entries))
    }

    /// Overwrite the file with a fresh collection.
    pub fn store(&self, build_id: BuildId, entries: Vec<T>) -> Result<Vec<T>> {
        let writer = BufWriter::new(File::create(&self.path)?);
        let envelope = Envelope { build_id, entries };
        bincode::serialize_into(writer, &envelope)?;
        Ok(envelope.entries)
    }

    /// The usual call shape: serve the cache when it is still fresh,
    /// otherwise run `fetch` and persist what it returned.
    pub fn load_or_fetch(
        &self,
        current_build: BuildId,
        fetch: impl FnOnce() -> Result<Vec<T>>,
    ) -> Result<Vec<T>> {
        if let Some(entries) = self.load(current_build)? {
            return Ok(entries);
        }
        self.store(current_build, fetch()?)
    }
}

#[cfg(test)]
mod tests {
    use super::CollectionCache;
    use crate::model::world::{Population, World};

    fn worlds() -> Vec<World> {
        vec![
            World {
                id: 1001,
                name: "Anvil Rock".to_string(),
                population: Population::Medium,
            },
            World {
                id: 1019,
                name: "Blackgate".to_string(),
                population: Population::Full,
            },
        ]
    }

    #[test]
    fn roundtrips_when_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CollectionCache::new(dir.path().join("worlds.bin"));
        cache.store(115000, worlds()).unwrap();
        // same build and newer-than-current are both fresh
        assert_eq!(cache.load(115000).unwrap().unwrap(), worlds());
        assert_eq!(cache.load(114000).unwrap().unwrap(), worlds());
    }

    #[test]
    fn stale_build_discards() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CollectionCache::new(dir.path().join("worlds.bin"));
        cache.store(115000, worlds()).unwrap();
        assert_eq!(cache.load(116000).unwrap(), None);
    }

    #[test]
    fn missing_and_corrupt_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache: CollectionCache<World> = CollectionCache::new(dir.path().join("worlds.bin"));
        assert_eq!(cache.load(1).unwrap(), None);

        std::fs::write(cache.path(), b"definitely not bincode").unwrap();
        assert_eq!(cache.load(1).unwrap(), None);
    }

    #[test]
    fn load_or_fetch_fetches_once_per_build() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CollectionCache::new(dir.path().join("worlds.bin"));
        let mut fetches = 0;
        for _ in 0..2 {
            let entries = cache
                .load_or_fetch(115000, || {
                    fetches += 1;
                    Ok(worlds())
                })
                .unwrap();
            assert_eq!(entries.len(), 2);
        }
        assert_eq!(fetches, 1);
    }
}
