use serde::{Deserialize, Serialize};

/// Display labels for the four fixed navigation sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarMenu {
    pub main: String,
    pub about: String,
    pub capability: String,
    pub contact: String,
}

impl Default for SidebarMenu {
    fn default() -> Self {
        Self {
            main: "Main".to_string(),
            about: "About".to_string(),
            capability: "Capability".to_string(),
            contact: "Contact".to_string(),
        }
    }
}

/// The four editable label slots, used by the editor's label setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSection {
    Main,
    About,
    Capability,
    Contact,
}

impl SidebarMenu {
    pub fn label(&self, section: MenuSection) -> &str {
        match section {
            MenuSection::Main => &self.main,
            MenuSection::About => &self.about,
            MenuSection::Capability => &self.capability,
            MenuSection::Contact => &self.contact,
        }
    }

    pub fn set_label(&mut self, section: MenuSection, label: String) {
        match section {
            MenuSection::Main => self.main = label,
            MenuSection::About => self.about = label,
            MenuSection::Capability => self.capability = label,
            MenuSection::Contact => self.contact = label,
        }
    }
}

/// Logical page identifiers. Serialized with the original route ids so a
/// host that persists or deep-links navigation state stays compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Main,
    About,
    WorkDetail,
    Capability,
    Contact,
    Admin,
}

/// Externally-owned navigation state. The core reads it to pick what to
/// render; it never drives the transitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub page: Page,
    pub selected_work_id: Option<String>,
}

impl NavState {
    pub fn page(page: Page) -> Self {
        Self {
            page,
            selected_work_id: None,
        }
    }

    pub fn work_detail(id: impl Into<String>) -> Self {
        Self {
            page: Page::WorkDetail,
            selected_work_id: Some(id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let menu = SidebarMenu::default();
        assert_eq!(menu.main, "Main");
        assert_eq!(menu.contact, "Contact");
    }

    #[test]
    fn test_set_label() {
        let mut menu = SidebarMenu::default();
        menu.set_label(MenuSection::Capability, "Services".to_string());
        assert_eq!(menu.label(MenuSection::Capability), "Services");
        assert_eq!(menu.label(MenuSection::About), "About");
    }

    #[test]
    fn test_page_route_ids() {
        assert_eq!(
            serde_json::to_string(&Page::WorkDetail).unwrap(),
            "\"work_detail\""
        );
        let page: Page = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(page, Page::Admin);
    }
}
