//! # forge-store: Declaration Store
//!
//! Persists shape declarations as two artifacts per shape in one directory:
//!
//! - `<name>.json`: the canonical document, the source of truth.
//! - `<name>.cs`: the readable listing, regenerated on every write.
//!
//! Presence of either artifact means the name is taken. Names are matched
//! case-insensitively on lookup.
//!
//! ## Writes
//!
//! Both artifacts are staged to temporary files concurrently and then
//! committed by rename. A failed stage or commit fails the whole write and
//! rolls back what it can: staged files are discarded, and a half-committed
//! write restores (update) or removes (add) the canonical document. Writers
//! of one name are serialized by a per-name async mutex. There is no
//! cross-process locking.
//!
//! ## Removal
//!
//! The listing is deleted before the document, each retried with
//! exponential backoff until [`StoreConfig::remove_timeout`] elapses. A
//! removal that runs out of time leaves the document loadable.

pub mod error;
pub mod listing;
pub mod schema;

pub use error::StoreError;
pub use schema::DocumentSchema;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use forge_core::{name_key, validate_identifier, ClassDocument};
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

use crate::listing::LISTING_EXTENSION;

/// File extension of the canonical document.
pub const DOCUMENT_EXTENSION: &str = "json";

/// Default deadline for [`DeclarationStore::remove`].
pub const DEFAULT_REMOVE_TIMEOUT: Duration = Duration::from_secs(1);

const RETRY_INITIAL_BACKOFF: Duration = Duration::from_millis(5);
const RETRY_MAX_BACKOFF: Duration = Duration::from_millis(100);
const STAGING_SUFFIX: &str = "tmp";

/// Location and tuning of a declaration store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding every artifact.
    pub root: PathBuf,
    /// How long `remove` keeps retrying before giving up.
    pub remove_timeout: Duration,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            remove_timeout: DEFAULT_REMOVE_TIMEOUT,
        }
    }

    pub fn with_remove_timeout(mut self, remove_timeout: Duration) -> Self {
        self.remove_timeout = remove_timeout;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Create,
    Replace,
}

struct Inner {
    config: StoreConfig,
    schema: DocumentSchema,
    write_locks: DashMap<String, Arc<Mutex<()>>>,
}

/// File-backed store of canonical declarations.
///
/// Cheaply cloneable via `Arc`; all clones share the same write locks.
#[derive(Clone)]
pub struct DeclarationStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for DeclarationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarationStore")
            .field("root", &self.inner.config.root)
            .finish_non_exhaustive()
    }
}

impl DeclarationStore {
    /// Open the store, creating its root directory if needed.
    pub async fn open(config: StoreConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.root)
            .await
            .map_err(|e| StoreError::io(&config.root, e))?;
        let schema = DocumentSchema::embedded()?;
        tracing::debug!(root = %config.root.display(), "declaration store opened");
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                schema,
                write_locks: DashMap::new(),
            }),
        })
    }

    pub fn root(&self) -> &Path {
        &self.inner.config.root
    }

    pub fn remove_timeout(&self) -> Duration {
        self.inner.config.remove_timeout
    }

    /// Paths of the canonical document and the listing for `name`.
    pub fn artifact_paths(&self, name: &str) -> (PathBuf, PathBuf) {
        let root = self.root();
        (
            root.join(format!("{name}.{DOCUMENT_EXTENSION}")),
            root.join(format!("{name}.{LISTING_EXTENSION}")),
        )
    }

    /// Store a new declaration. Fails if any artifact already exists under
    /// the name, compared case-insensitively.
    pub async fn add(&self, doc: &ClassDocument) -> Result<(), StoreError> {
        self.write(doc, WriteMode::Create).await
    }

    /// Replace a stored declaration. Fails unless both artifacts exist under
    /// exactly `doc.name`.
    pub async fn update(&self, doc: &ClassDocument) -> Result<(), StoreError> {
        self.write(doc, WriteMode::Replace).await
    }

    /// Whether any artifact is stored under `name` (case-insensitive).
    pub async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.locate(name).await?.is_some())
    }

    /// Find the stored spelling of `name`, matching case-insensitively.
    pub async fn locate(&self, name: &str) -> Result<Option<String>, StoreError> {
        check_name(name)?;
        let (doc_path, listing_path) = self.artifact_paths(name);
        if path_exists(&doc_path).await? || path_exists(&listing_path).await? {
            return Ok(Some(name.to_string()));
        }

        let root = self.root();
        let mut entries = fs::read_dir(root)
            .await
            .map_err(|e| StoreError::io(root, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(root, e))?
        {
            let path = entry.path();
            if let Some(stem) = artifact_stem(&path) {
                if stem.eq_ignore_ascii_case(name) {
                    return Ok(Some(stem.to_string()));
                }
            }
        }
        Ok(None)
    }

    /// Load the canonical document stored under `name`.
    ///
    /// Returns `Ok(None)` when nothing is stored or only the listing is.
    pub async fn get(&self, name: &str) -> Result<Option<ClassDocument>, StoreError> {
        let Some(stored) = self.locate(name).await? else {
            return Ok(None);
        };
        let (doc_path, _) = self.artifact_paths(&stored);
        match fs::read(&doc_path).await {
            Ok(bytes) => self.parse(&doc_path, &bytes).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&doc_path, e)),
        }
    }

    /// Load every canonical document, sorted by name.
    ///
    /// Documents are parsed in parallel. A document that cannot be read,
    /// parsed or schema-checked is skipped with a warning.
    pub async fn get_all(&self) -> Result<Vec<ClassDocument>, StoreError> {
        let root = self.root();
        let mut entries = fs::read_dir(root)
            .await
            .map_err(|e| StoreError::io(root, e))?;

        let mut parses = JoinSet::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(root, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            let store = self.clone();
            parses.spawn(async move {
                let parsed = match fs::read(&path).await {
                    Ok(bytes) => store.parse(&path, &bytes),
                    Err(e) => Err(StoreError::io(&path, e)),
                };
                (path, parsed)
            });
        }

        let mut docs = Vec::new();
        while let Some(joined) = parses.join_next().await {
            match joined {
                Ok((_, Ok(doc))) => docs.push(doc),
                Ok((path, Err(e))) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable declaration");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "declaration parse task failed");
                }
            }
        }
        docs.sort_by_key(|doc| name_key(&doc.name));
        Ok(docs)
    }

    /// Read the listing stored under `name`.
    pub async fn read_listing(&self, name: &str) -> Result<Option<String>, StoreError> {
        let Some(stored) = self.locate(name).await? else {
            return Ok(None);
        };
        let (_, listing_path) = self.artifact_paths(&stored);
        match fs::read_to_string(&listing_path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&listing_path, e)),
        }
    }

    /// Delete both artifacts stored under `name`.
    ///
    /// Fails with [`StoreError::NotFound`] when neither exists, and with
    /// [`StoreError::RemoveTimedOut`] when deletion keeps failing past the
    /// configured deadline.
    pub async fn remove(&self, name: &str) -> Result<(), StoreError> {
        check_name(name)?;
        let lock = self.write_lock(name);
        let _guard = lock.lock().await;

        let Some(stored) = self.locate(name).await? else {
            return Err(StoreError::NotFound(name.to_string()));
        };
        let timeout = self.remove_timeout();
        match tokio::time::timeout(timeout, self.delete_with_retry(&stored)).await {
            Ok(()) => {
                tracing::debug!(name = %stored, "declaration removed");
                Ok(())
            }
            Err(_) => Err(StoreError::RemoveTimedOut {
                name: stored,
                timeout,
            }),
        }
    }

    async fn write(&self, doc: &ClassDocument, mode: WriteMode) -> Result<(), StoreError> {
        let name = doc.name.as_str();
        check_name(name)?;
        let (doc_path, listing_path) = self.artifact_paths(name);

        let value = serde_json::to_value(doc).map_err(|e| StoreError::json(&doc_path, e))?;
        self.inner.schema.check(name, &value)?;
        let body = serde_json::to_vec_pretty(&value).map_err(|e| StoreError::json(&doc_path, e))?;
        let rendered = listing::render(doc);

        let lock = self.write_lock(name);
        let _guard = lock.lock().await;

        let previous = match mode {
            WriteMode::Create => {
                if self.locate(name).await?.is_some() {
                    return Err(StoreError::AlreadyExists(name.to_string()));
                }
                None
            }
            WriteMode::Replace => {
                if !(path_exists(&doc_path).await? && path_exists(&listing_path).await?) {
                    return Err(StoreError::NotFound(name.to_string()));
                }
                let old = fs::read(&doc_path)
                    .await
                    .map_err(|e| StoreError::io(&doc_path, e))?;
                Some(old)
            }
        };

        let staged_doc = staging_path(&doc_path);
        let staged_listing = staging_path(&listing_path);
        let (doc_staged, listing_staged) = tokio::join!(
            stage(&staged_doc, &body),
            stage(&staged_listing, rendered.as_bytes()),
        );
        if let Err(e) = doc_staged.and(listing_staged) {
            discard(&[&staged_doc, &staged_listing]).await;
            return Err(e);
        }

        if let Err(e) = commit(&staged_doc, &doc_path).await {
            discard(&[&staged_doc, &staged_listing]).await;
            return Err(e);
        }
        if let Err(e) = commit(&staged_listing, &listing_path).await {
            discard(&[&staged_listing]).await;
            let restored = match previous {
                Some(old) => fs::write(&doc_path, old).await,
                None => fs::remove_file(&doc_path).await,
            };
            if let Err(rollback) = restored {
                tracing::error!(
                    name,
                    error = %rollback,
                    "rollback of half-committed declaration failed"
                );
            }
            return Err(e);
        }

        tracing::debug!(name, mode = ?mode, "declaration written");
        Ok(())
    }

    fn parse(&self, path: &Path, bytes: &[u8]) -> Result<ClassDocument, StoreError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| StoreError::json(path, e))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        self.inner.schema.check(stem, &value)?;
        let doc: ClassDocument =
            serde_json::from_value(value).map_err(|e| StoreError::json(path, e))?;
        if !doc.name.eq_ignore_ascii_case(stem) {
            return Err(StoreError::Schema {
                name: stem.to_string(),
                violations: vec![format!("/name: \"{}\" does not match the file name", doc.name)],
            });
        }
        Ok(doc)
    }

    /// Delete the listing, then the document, retrying each until it is
    /// gone. The document goes last so a removal cut short by the deadline
    /// still leaves a loadable declaration behind.
    async fn delete_with_retry(&self, name: &str) {
        let (doc_path, listing_path) = self.artifact_paths(name);
        for path in [&listing_path, &doc_path] {
            let mut backoff = RETRY_INITIAL_BACKOFF;
            while let Err(e) = delete_artifact(path).await {
                tracing::warn!(
                    name,
                    path = %path.display(),
                    error = %e,
                    retry_in_ms = backoff.as_millis() as u64,
                    "declaration removal failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(RETRY_MAX_BACKOFF);
            }
        }
    }

    fn write_lock(&self, name: &str) -> Arc<Mutex<()>> {
        self.inner
            .write_locks
            .entry(name_key(name))
            .or_default()
            .clone()
    }
}

fn check_name(name: &str) -> Result<(), StoreError> {
    validate_identifier(name).map_err(|_| StoreError::InvalidName(name.to_string()))
}

fn artifact_stem(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if ext != DOCUMENT_EXTENSION && ext != LISTING_EXTENSION {
        return None;
    }
    path.file_stem()?.to_str()
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".");
    staged.push(STAGING_SUFFIX);
    PathBuf::from(staged)
}

async fn path_exists(path: &Path) -> Result<bool, StoreError> {
    fs::try_exists(path)
        .await
        .map_err(|e| StoreError::io(path, e))
}

async fn stage(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    fs::write(path, bytes)
        .await
        .map_err(|e| StoreError::io(path, e))
}

async fn commit(staged: &Path, target: &Path) -> Result<(), StoreError> {
    fs::rename(staged, target)
        .await
        .map_err(|e| StoreError::io(target, e))
}

async fn discard(paths: &[&Path]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "failed to discard staged file");
            }
        }
    }
}

async fn delete_artifact(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{PropertyDocument, ShapeKind, Visibility};

    fn property(name: &str, ty: &str, setter: Option<Visibility>) -> PropertyDocument {
        PropertyDocument {
            name: name.into(),
            property_type: ty.into(),
            access_modifier: Visibility::Public,
            getter_access_modifier: Some(Visibility::Public),
            setter_access_modifier: setter,
        }
    }

    fn doc(name: &str, props: Vec<PropertyDocument>) -> ClassDocument {
        ClassDocument {
            name: name.into(),
            access_modifier: Visibility::Public,
            data_type: ShapeKind::Class,
            properties: props,
        }
    }

    fn data1() -> ClassDocument {
        doc("Data1", vec![property("IntegerValue", "int", Some(Visibility::Public))])
    }

    fn data2() -> ClassDocument {
        doc("Data2", vec![property("StringValue", "string", None)])
    }

    fn data3() -> ClassDocument {
        doc("Data3", vec![property("BooleanValue", "bool", None)])
    }

    async fn open(dir: &tempfile::TempDir) -> DeclarationStore {
        DeclarationStore::open(StoreConfig::new(dir.path()))
            .await
            .unwrap()
    }

    fn file_names(dir: &tempfile::TempDir) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn add_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data1()).await.unwrap();

        assert_eq!(file_names(&dir), vec!["Data1.cs", "Data1.json"]);
        let loaded = store.get("Data1").await.unwrap().unwrap();
        assert_eq!(loaded, data1());
    }

    #[tokio::test]
    async fn add_twice_fails_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data1()).await.unwrap();

        let err = store.add(&data1()).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));

        let mut shouting = data1();
        shouting.name = "DATA1".into();
        let err = store.add(&shouting).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn add_fails_when_only_listing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        std::fs::write(dir.path().join("Data1.cs"), "stale").unwrap();
        assert!(store.exists("Data1").await.unwrap());
        let err = store.add(&data1()).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn update_requires_existing_declaration() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        let err = store.update(&data1()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(file_names(&dir).is_empty());
    }

    #[tokio::test]
    async fn update_requires_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data1()).await.unwrap();
        std::fs::remove_file(dir.path().join("Data1.cs")).unwrap();
        let err = store.update(&data1()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_replaces_document_and_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data1()).await.unwrap();

        let mut replaced = data1();
        replaced.properties.push(property("Label", "string", None));
        store.update(&replaced).await.unwrap();

        assert_eq!(store.get("Data1").await.unwrap().unwrap(), replaced);
        let listing = store.read_listing("Data1").await.unwrap().unwrap();
        assert!(listing.contains("public string Label { get; }"));
        assert_eq!(file_names(&dir), vec!["Data1.cs", "Data1.json"]);
    }

    #[tokio::test]
    async fn get_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data2()).await.unwrap();
        let loaded = store.get("data2").await.unwrap().unwrap();
        assert_eq!(loaded.name, "Data2");
        assert_eq!(store.locate("DATA2").await.unwrap().as_deref(), Some("Data2"));
    }

    #[tokio::test]
    async fn get_unknown_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        assert!(store.get("Missing").await.unwrap().is_none());
        assert!(store.read_listing("Missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_name_is_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        let err = store.get("../etc/passwd").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidName(_)));
        let err = store.add(&doc("Bad Name", vec![])).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidName(_)));
        assert!(file_names(&dir).is_empty());
    }

    #[tokio::test]
    async fn schema_violation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        let mut no_accessors = property("Hidden", "int", None);
        no_accessors.getter_access_modifier = None;
        let err = store.add(&doc("Broken", vec![no_accessors])).await.unwrap_err();
        assert!(matches!(err, StoreError::Schema { .. }));
        assert!(file_names(&dir).is_empty());
    }

    #[tokio::test]
    async fn get_all_counts_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data3()).await.unwrap();
        store.add(&data1()).await.unwrap();
        store.add(&data2()).await.unwrap();

        let all = store.get_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Data1", "Data2", "Data3"]);

        store.remove("Data1").await.unwrap();
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_all_skips_unreadable_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data1()).await.unwrap();
        std::fs::write(dir.path().join("Garbage.json"), "{ not json").unwrap();
        std::fs::write(
            dir.path().join("Invalid.json"),
            r#"{"name":"Invalid","properties":[{"name":"X","propertyType":"int","accessModifier":"friend","getterAccessModifier":"public"}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("Renamed.json"),
            r#"{"name":"Other","properties":[]}"#,
        )
        .unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Data1");
    }

    #[tokio::test]
    async fn legacy_document_loads_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        std::fs::write(
            dir.path().join("Legacy.json"),
            r#"{"name":"Legacy","properties":[{"name":"Count","propertyType":"int","accessModifier":"public","getterAccessModifier":"public","setterAccessModifier":"public"}]}"#,
        )
        .unwrap();
        let loaded = store.get("Legacy").await.unwrap().unwrap();
        assert_eq!(loaded.data_type, ShapeKind::Class);
        assert_eq!(loaded.access_modifier, Visibility::Public);
    }

    #[tokio::test]
    async fn remove_twice_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        store.add(&data1()).await.unwrap();
        store.remove("Data1").await.unwrap();
        assert!(file_names(&dir).is_empty());

        let err = store.remove("Data1").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_clears_orphaned_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        std::fs::write(dir.path().join("Orphan.cs"), "public class Orphan\n{\n}\n").unwrap();
        store.remove("orphan").await.unwrap();
        assert!(file_names(&dir).is_empty());
    }

    #[tokio::test]
    async fn remove_gives_up_after_deadline() {
        let dir = tempfile::tempdir().unwrap();
        let store = DeclarationStore::open(
            StoreConfig::new(dir.path()).with_remove_timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap();
        store.add(&data1()).await.unwrap();
        // A directory where the listing should be cannot be removed as a file.
        std::fs::remove_file(dir.path().join("Data1.cs")).unwrap();
        std::fs::create_dir(dir.path().join("Data1.cs")).unwrap();
        std::fs::write(dir.path().join("Data1.cs").join("pin"), "").unwrap();

        let err = store.remove("Data1").await.unwrap_err();
        assert!(matches!(err, StoreError::RemoveTimedOut { .. }));
        // The document outlives a removal that ran out of time.
        assert!(dir.path().join("Data1.json").exists());
        assert_eq!(store.get("Data1").await.unwrap().unwrap(), data1());
    }

    #[tokio::test]
    async fn concurrent_adds_of_one_name_admit_exactly_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = open(&dir).await;
        let mut tasks = JoinSet::new();
        for _ in 0..8 {
            let store = store.clone();
            tasks.spawn(async move { store.add(&data1()).await.is_ok() });
        }
        let mut successes = 0;
        while let Some(ok) = tasks.join_next().await {
            if ok.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(file_names(&dir), vec!["Data1.cs", "Data1.json"]);
    }
}
