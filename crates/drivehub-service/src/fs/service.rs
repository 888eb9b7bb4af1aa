//! In-memory file tree with directory CRUD and keyword search.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_entity::fs::{EntryKind, SearchHit};

use crate::api::FileApi;
use crate::fault::FaultInjector;
use crate::fs::path::{join, leaf_name, parent_of};
use crate::latency::Latency;

/// Mock implementation of [`FileApi`].
///
/// Only directories are registered in the map; leaf files exist as names
/// in their parent's ordered child list.
#[derive(Debug)]
pub struct FileService {
    /// Registered directories: path -> ordered child names.
    dirs: DashMap<String, Vec<String>>,
    latency: Latency,
    faults: Arc<FaultInjector>,
}

impl FileService {
    /// Create a service containing only an empty root directory.
    pub fn new(latency: Latency, faults: Arc<FaultInjector>) -> Self {
        let dirs = DashMap::new();
        dirs.insert("/".to_string(), Vec::new());
        Self {
            dirs,
            latency,
            faults,
        }
    }

    /// Register a directory with its children without latency or fault
    /// checks. Seeding only.
    pub fn load(&self, path: impl Into<String>, children: Vec<String>) {
        self.dirs.insert(path.into(), children);
    }
}

#[async_trait]
impl FileApi for FileService {
    async fn list_dir(&self, path: &str) -> AppResult<Vec<String>> {
        self.latency.read().await;
        self.faults.check("list_dir")?;

        self.dirs
            .get(path)
            .map(|children| children.clone())
            .ok_or_else(|| AppError::not_found(format!("Directory not found: {path}")))
    }

    async fn create_entry(&self, parent: &str, name: &str, kind: EntryKind) -> AppResult<()> {
        self.latency.write().await;
        self.faults.check("create_entry")?;

        if !self.dirs.contains_key(parent) {
            return Err(AppError::not_found(format!(
                "Parent directory not found: {parent}"
            )));
        }

        if kind == EntryKind::Directory {
            self.dirs.insert(join(parent, name), Vec::new());
        }

        // Scoped so the parent's shard lock is released before returning.
        if let Some(mut children) = self.dirs.get_mut(parent) {
            children.push(name.to_string());
        }

        info!(parent, name, %kind, "Entry created");
        Ok(())
    }

    async fn delete_entry(&self, path: &str) -> AppResult<()> {
        self.latency.write().await;
        self.faults.check("delete_entry")?;

        let parent = parent_of(path);
        let name = leaf_name(path);

        {
            let mut children = self.dirs.get_mut(parent).ok_or_else(|| {
                AppError::not_found(format!("Parent directory not found: {parent}"))
            })?;
            // Deleting a name the parent never listed is a tolerated no-op.
            children.retain(|child| child != name);
        }

        if self.dirs.remove(path).is_some() {
            debug!(path, "Directory registration dropped");
        }

        info!(path, "Entry deleted");
        Ok(())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchHit>> {
        self.latency.search().await;
        self.faults.check("search")?;

        let needle = query.to_lowercase();

        // Snapshot first so no shard locks are held while probing kinds.
        let snapshot: Vec<(String, Vec<String>)> = self
            .dirs
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let mut hits = Vec::new();
        for (dir_path, children) in &snapshot {
            for name in children {
                if name.to_lowercase().contains(&needle) {
                    let full_path = join(dir_path, name);
                    let kind = if self.dirs.contains_key(&full_path) {
                        EntryKind::Directory
                    } else {
                        EntryKind::File
                    };
                    hits.push(SearchHit {
                        name: name.clone(),
                        path: full_path,
                        kind,
                    });
                }
            }
        }

        // Dashmap iteration order is unspecified; sort for stable output.
        hits.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(query, hits = hits.len(), "Search completed");
        Ok(hits)
    }
}
