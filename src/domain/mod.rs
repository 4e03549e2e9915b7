//! Pure data model: the three persisted aggregates and the navigation
//! types the renderer reads.

pub mod menu;
pub mod site;
pub mod typography;
pub mod work;

pub use menu::{MenuSection, NavState, Page, SidebarMenu};
pub use site::{CapabilityItem, DesignProcessStep, SiteInfo};
pub use typography::{FontWeight, TypographyStyle};
pub use work::{CreativeDirection, MediaAspect, WorkItem, allocate_work_id, DETAIL_PAGE_CATEGORY};
