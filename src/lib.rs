//! Content engine for a single-page designer portfolio with an in-place
//! admin panel.
//!
//! # Structure
//!
//! - `domain/` - The three persisted aggregates (work list, site copy,
//!   menu labels) plus typography and navigation types
//! - `store/` - Canonical in-memory state, durable key-value persistence,
//!   snapshot export
//! - `editor` - Operator mutation surface: work-item drafts, tagged
//!   site-copy edits, the session auth gate
//! - `render/` - Pure view construction: markup interpolation, media
//!   classification, style resolution
//!
//! The host owns navigation and the actual layout engine; this crate owns
//! what the site says, how it is styled, and how edits reach disk.
//! Persistence is best-effort by design: a failed write keeps the
//! in-memory edit and raises a transient notice instead of failing the
//! operation.

pub mod domain;
pub mod editor;
pub mod error;
pub mod render;
pub mod store;

// Re-exports for convenient external access
pub use domain::{
    CapabilityItem, CreativeDirection, DesignProcessStep, FontWeight, MediaAspect, MenuSection,
    NavState, Page, SidebarMenu, SiteInfo, TypographyStyle, WorkItem,
};
pub use editor::{Editor, SiteStyleField, SiteTextField};
pub use error::{Result, StoreError};
pub use render::{render, MediaKind, PageView, Segment, View, Viewport};
pub use store::{ContentStore, DirStorage, MemoryStorage, Notice, StorageBackend};
