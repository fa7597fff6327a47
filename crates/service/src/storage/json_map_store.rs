use std::{collections::HashMap, hash::Hash, path::{Path, PathBuf}, sync::Arc};
use tokio::{fs, sync::RwLock};
use tracing::{debug, warn};

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Holds a `HashMap<K, V>` in memory and rewrites the whole file after each
/// mutation. Readers never touch the disk. Writes go to a sibling `.tmp` file
/// that is renamed over the data file, so the data file always holds either
/// the previous or the new map.
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
    tmp_path: PathBuf,
}

fn tmp_path_for(file_path: &Path) -> PathBuf {
    let mut name = file_path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

async fn write_replace(file_path: &Path, tmp_path: &Path, data: &[u8]) -> Result<(), ServiceError> {
    fs::write(tmp_path, data).await.map_err(ServiceError::storage)?;
    fs::rename(tmp_path, file_path).await.map_err(ServiceError::storage)
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store at `path`, creating the file with an empty map if missing.
    /// An unreadable or malformed file is an error rather than an empty store.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        let tmp_path = tmp_path_for(&file_path);
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if fs::metadata(parent).await.is_err() {
                warn!(dir = %parent.display(), "data directory missing; creating it");
            }
            fs::create_dir_all(parent).await.map_err(ServiceError::storage)?;
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("corrupt store file {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                let data = serde_json::to_vec(&empty).map_err(ServiceError::storage)?;
                write_replace(&file_path, &tmp_path, &data).await?;
                empty
            }
            Err(e) => return Err(ServiceError::storage(e)),
        };
        debug!(path = %file_path.display(), entries = map.len(), "json_map_store_opened");

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path, tmp_path }))
    }

    async fn persist(&self, map: &HashMap<K, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(map).map_err(ServiceError::storage)?;
        write_replace(&self.file_path, &self.tmp_path, &data).await?;
        debug!(path = %self.file_path.display(), entries = map.len(), "json_map_store_persisted");
        Ok(())
    }

    /// All values, in map iteration order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Insert or replace a value and persist. The write lock is held across
    /// the file write so concurrent inserts reach disk in lock order.
    pub async fn insert(&self, key: K, value: V) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        let previous = map.insert(key.clone(), value);
        if let Err(e) = self.persist(&map).await {
            match previous {
                Some(old) => { map.insert(key, old); }
                None => { map.remove(&key); }
            }
            return Err(e);
        }
        Ok(())
    }
}
