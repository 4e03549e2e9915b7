//! The content store: canonical in-memory aggregates plus best-effort
//! persistence to a durable key-value backend.
//!
//! Durability here is advisory. Every mutation re-serializes all three
//! aggregates; a failed write keeps the in-memory edit and raises a
//! transient notice instead of rolling back or propagating.

pub mod backend;

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{SidebarMenu, SiteInfo, WorkItem};
use crate::error::Result;

pub use backend::{DirStorage, MemoryStorage, StorageBackend};

/// Durable keys, unchanged from earlier builds so existing data loads.
pub const WORKS_KEY: &str = "chiro_works_v2";
pub const SITE_INFO_KEY: &str = "chiro_site_info_v2";
pub const MENU_KEY: &str = "chiro_menu_v2";

/// How long a raised notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Short-lived operator-facing status, auto-dismissed after [`NOTICE_TTL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A persist attempt failed because the backend is out of room. The
    /// edit is still applied in memory.
    StorageFull,
    /// A persist attempt failed for any other reason.
    SaveFailed,
    /// A snapshot was produced for out-of-band backup.
    Exported,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    works: &'a [WorkItem],
    site_info: &'a SiteInfo,
    menu_labels: &'a SidebarMenu,
}

pub struct ContentStore {
    works: Vec<WorkItem>,
    site: SiteInfo,
    menu: SidebarMenu,
    backend: Box<dyn StorageBackend>,
    notice: Option<(Notice, Instant)>,
}

impl ContentStore {
    /// Load all three aggregates from `backend`, substituting built-in
    /// defaults for any key that is absent or fails to parse. Load
    /// failures never reach the caller.
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let works = load_aggregate(backend.as_ref(), WORKS_KEY, default_works);
        let site = load_aggregate(backend.as_ref(), SITE_INFO_KEY, SiteInfo::default);
        let menu = load_aggregate(backend.as_ref(), MENU_KEY, SidebarMenu::default);

        Self {
            works,
            site,
            menu,
            backend,
            notice: None,
        }
    }

    // --- Read accessors ---

    pub fn works(&self) -> &[WorkItem] {
        &self.works
    }

    pub fn work_by_id(&self, id: &str) -> Option<&WorkItem> {
        self.works.iter().find(|w| w.id == id)
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    pub fn menu(&self) -> &SidebarMenu {
        &self.menu
    }

    /// The latest notice, if it has not expired yet.
    pub fn notice(&self) -> Option<Notice> {
        match self.notice {
            Some((notice, raised_at)) if raised_at.elapsed() < NOTICE_TTL => Some(notice),
            _ => None,
        }
    }

    // --- Mutation (editor-only) ---
    //
    // All mutation funnels through these so the persist-on-change trigger
    // stays reliable. The editor is the only caller.

    pub(crate) fn set_works(&mut self, works: Vec<WorkItem>) {
        self.works = works;
        self.persist_all();
    }

    pub(crate) fn update_site(&mut self, f: impl FnOnce(&mut SiteInfo)) {
        f(&mut self.site);
        self.persist_all();
    }

    pub(crate) fn update_menu(&mut self, f: impl FnOnce(&mut SidebarMenu)) {
        f(&mut self.menu);
        self.persist_all();
    }

    /// Serialize all three aggregates to their durable keys. Any change to
    /// any aggregate re-persists everything; no entity is ever partially
    /// persisted.
    fn persist_all(&mut self) {
        if let Err(e) = self.try_persist_all() {
            eprintln!("Failed to persist content: {}", e);
            let notice = if e.is_storage_full() {
                Notice::StorageFull
            } else {
                Notice::SaveFailed
            };
            self.raise(notice);
        }
    }

    fn try_persist_all(&mut self) -> Result<()> {
        let works = serde_json::to_string(&self.works)?;
        let site = serde_json::to_string(&self.site)?;
        let menu = serde_json::to_string(&self.menu)?;

        self.backend.write(WORKS_KEY, &works)?;
        self.backend.write(SITE_INFO_KEY, &site)?;
        self.backend.write(MENU_KEY, &menu)?;
        Ok(())
    }

    /// Produce a single pretty-printed snapshot of all three aggregates
    /// for the operator to copy out-of-band. There is no import
    /// counterpart; restoring means writing the durable keys directly.
    pub fn export(&mut self) -> Result<String> {
        let json = serde_json::to_string_pretty(&Snapshot {
            works: &self.works,
            site_info: &self.site,
            menu_labels: &self.menu,
        })?;
        self.raise(Notice::Exported);
        Ok(json)
    }

    fn raise(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    #[cfg(test)]
    fn backdate_notice(&mut self, by: Duration) {
        if let Some((_, raised_at)) = &mut self.notice {
            *raised_at -= by;
        }
    }
}

fn load_aggregate<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    match backend.read(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to parse {}: {}. Using defaults.", key, e);
                default()
            }
        },
        None => default(),
    }
}

/// Sample archive shown before the operator has saved anything.
fn default_works() -> Vec<WorkItem> {
    vec![
        WorkItem {
            id: "1700000000001".to_string(),
            brand: "Nove".to_string(),
            logo: None,
            company: "Nove Coffee Roasters".to_string(),
            category: "branding".to_string(),
            one_liner: "A roastery identity that tastes like the first cup".to_string(),
            thumbnail: String::new(),
            role: "Brand identity\nPackaging system\nLaunch key visual".to_string(),
            media: Vec::new(),
            creative_directions: Vec::new(),
            visuals: Vec::new(),
        },
        WorkItem {
            id: "1700000000002".to_string(),
            brand: "Glowlab".to_string(),
            logo: None,
            company: "Glowlab Cosmetics".to_string(),
            category: "detail-page".to_string(),
            one_liner: "A serum detail page that reads like a ritual".to_string(),
            thumbnail: String::new(),
            role: "Detail page design\nArt direction".to_string(),
            media: Vec::new(),
            creative_directions: Vec::new(),
            visuals: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_store() -> ContentStore {
        ContentStore::load(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_load_empty_backend_uses_defaults() {
        let store = empty_store();
        assert_eq!(store.works().len(), 2);
        assert_eq!(store.site(), &SiteInfo::default());
        assert_eq!(store.menu(), &SidebarMenu::default());
        assert_eq!(store.notice(), None);
    }

    #[test]
    fn test_load_corrupt_blob_degrades_silently() {
        let mut backend = MemoryStorage::new();
        backend.write(WORKS_KEY, "not json at all").unwrap();
        backend.write(MENU_KEY, "[1,2,3]").unwrap();
        let store = ContentStore::load(Box::new(backend));
        assert_eq!(store.works().len(), 2);
        assert_eq!(store.menu(), &SidebarMenu::default());
    }

    #[test]
    fn test_load_partial_site_info_merges_over_default() {
        let mut backend = MemoryStorage::new();
        backend
            .write(SITE_INFO_KEY, r##"{"pointColor": "#123456"}"##)
            .unwrap();
        let store = ContentStore::load(Box::new(backend));
        assert_eq!(store.site().point_color, "#123456");
        assert_eq!(
            store.site().hero_headline,
            SiteInfo::default().hero_headline
        );
    }

    #[test]
    fn test_mutation_persists_all_three_keys() {
        let mut store = empty_store();
        store.update_menu(|m| m.main = "Archive".to_string());

        assert_eq!(store.backend.read(WORKS_KEY).map(|s| s.is_empty()), Some(false));
        let site_blob = store.backend.read(SITE_INFO_KEY).unwrap();
        let menu_blob = store.backend.read(MENU_KEY).unwrap();
        assert!(site_blob.contains("pointColor"));
        assert!(menu_blob.contains("Archive"));
    }

    #[test]
    fn test_persisted_state_survives_reload() {
        let mut store = empty_store();
        store.update_site(|s| s.hero_headline = "Reloaded".to_string());
        store.set_works(Vec::new());
        let backend = std::mem::replace(&mut store.backend, Box::new(MemoryStorage::new()));

        let reloaded = ContentStore::load(backend);
        assert_eq!(reloaded.site().hero_headline, "Reloaded");
        assert!(reloaded.works().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_and_raises_notice() {
        let mut backend = MemoryStorage::new();
        backend.quota_exhausted = true;
        let mut store = ContentStore::load(Box::new(backend));

        store.update_site(|s| s.point_color = "#000001".to_string());
        // The edit stayed applied even though nothing was written
        assert_eq!(store.site().point_color, "#000001");
        assert_eq!(store.notice(), Some(Notice::StorageFull));
    }

    #[test]
    fn test_notice_expires() {
        let mut backend = MemoryStorage::new();
        backend.quota_exhausted = true;
        let mut store = ContentStore::load(Box::new(backend));
        store.update_menu(|m| m.main = "x".to_string());
        assert_eq!(store.notice(), Some(Notice::StorageFull));

        store.backdate_notice(NOTICE_TTL + Duration::from_millis(10));
        assert_eq!(store.notice(), None);
    }

    #[test]
    fn test_export_shape() {
        let mut store = empty_store();
        let json = store.export().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("works"));
        assert!(obj.contains_key("siteInfo"));
        assert!(obj.contains_key("menuLabels"));
        assert_eq!(store.notice(), Some(Notice::Exported));
    }

    #[test]
    fn test_dir_storage_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        {
            let backend = DirStorage::new(dir.path().to_path_buf());
            let mut store = ContentStore::load(Box::new(backend));
            store.update_site(|s| s.hero_headline = "On disk".to_string());
        }
        let backend = DirStorage::new(dir.path().to_path_buf());
        let store = ContentStore::load(Box::new(backend));
        assert_eq!(store.site().hero_headline, "On disk");
    }
}
