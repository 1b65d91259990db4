use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "./forum_data";

/// Which persistence backend to run the forum on.
#[derive(Clone, Debug)]
pub enum StorageBackend {
    /// Transient in-process memory; everything is lost on restart.
    Memory,
    /// Durable RocksDB database at the given directory.
    RocksDb { path: PathBuf },
}

#[derive(Clone, Debug)]
pub struct ForumConfig {
    pub port: u16,
    pub storage: StorageBackend,
}

impl ForumConfig {
    /// Reads configuration from the environment.
    ///
    /// `PORT` selects the listen port (default 3000). `FORUM_STORAGE`
    /// selects the backend: `rocksdb` for the durable store (rooted at
    /// `FORUM_DATA_DIR`, default `./forum_data`), anything else for memory.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let storage = match env::var("FORUM_STORAGE").as_deref() {
            Ok("rocksdb") => StorageBackend::RocksDb {
                path: env::var("FORUM_DATA_DIR")
                    .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
                    .into(),
            },
            _ => StorageBackend::Memory,
        };

        Self { port, storage }
    }
}
