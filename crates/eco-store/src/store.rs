use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use eco_core::{EcoError, Profile, Result};

/// Name of the persisted document inside the store root.
const STORE_FILE: &str = "connection.json";

/// File-backed store of connection profiles.
///
/// Always constructed from an explicit root directory so tests can point
/// it anywhere; the default root is resolved once at the CLI boundary.
/// Concurrent invocations race on the document; last writer wins.
pub struct ConnectionStore {
    root: PathBuf,
}

impl ConnectionStore {
    /// Resolve the store root: explicit path > ECO_HOME env > ~/.eco
    pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("ECO_HOME") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eco")
    }

    /// Open a store rooted at the given directory (resolved when `None`).
    pub fn open(root: Option<&Path>) -> Self {
        Self {
            root: Self::resolve_root(root),
        }
    }

    /// Path of the persisted document.
    pub fn file_path(&self) -> PathBuf {
        self.root.join(STORE_FILE)
    }

    /// Load all profiles. A missing file is the empty store, not an
    /// error; a file that exists but doesn't parse is reported as
    /// corrupt instead of crashing the command.
    pub fn load(&self) -> Result<Vec<Profile>> {
        let path = self.file_path();
        if !path.exists() {
            debug!(?path, "store file missing, treating as empty");
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)?;
        let profiles: Vec<Profile> =
            serde_json::from_str(&raw).map_err(|e| EcoError::CorruptStore {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        debug!(count = profiles.len(), "loaded connection profiles");
        Ok(profiles)
    }

    /// Persist the full profile list, creating the store directory on
    /// first use. The document is written next to itself and renamed
    /// into place so readers never observe a partial write.
    pub fn save(&self, profiles: &[Profile]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.file_path();
        let json = serde_json::to_string_pretty(profiles)?;

        let tmp = self.root.join(format!("{STORE_FILE}.tmp"));
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        info!(?path, count = profiles.len(), "saved connection profiles");
        Ok(())
    }

    /// Append a new profile and return the updated list. Ids are assigned
    /// as the current store length: after a removal the next id can
    /// collide with a surviving one. Kept for compatibility, not fixed.
    pub fn add(
        &self,
        name: String,
        description: String,
        pem_file_path: PathBuf,
        ip: String,
    ) -> Result<Vec<Profile>> {
        let mut profiles = self.load()?;
        let profile = Profile {
            id: profiles.len() as u32,
            name,
            description,
            pem_file_path,
            ip,
        };
        info!(id = profile.id, name = %profile.name, "adding connection");
        profiles.push(profile);
        self.save(&profiles)?;
        Ok(profiles)
    }

    /// Remove every profile with the given id, returning the first match
    /// together with the remaining list. The file is left untouched when
    /// the id is unknown.
    pub fn remove(&self, id: u32) -> Result<(Profile, Vec<Profile>)> {
        let profiles = self.load()?;
        let removed = profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(EcoError::ProfileNotFound(id))?;
        let remaining: Vec<Profile> = profiles.into_iter().filter(|p| p.id != id).collect();
        self.save(&remaining)?;
        info!(id, name = %removed.name, "removed connection");
        Ok((removed, remaining))
    }

    /// Look up a profile by id (first match).
    pub fn find(&self, id: u32) -> Result<Option<Profile>> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }
}
