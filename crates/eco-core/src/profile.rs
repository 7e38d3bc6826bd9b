use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One stored SSH connection record.
///
/// Declaration order is the on-disk field order, and `pem_file_path`
/// keeps its camelCase wire name so existing store files load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Assigned as the store length at insertion time. Not stable across
    /// a removal followed by an addition: ids can collide. Kept that way
    /// for compatibility with existing stores.
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pemFilePath")]
    pub pem_file_path: PathBuf,
    pub ip: String,
}
