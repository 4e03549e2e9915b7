//! Operator mutation surface: the draft lifecycle for work items, tagged
//! site-copy edits, and the session auth gate.
//!
//! Draft edits are isolated from the committed collection until an
//! explicit save; cancelling discards the draft, it is never merged.

use crate::domain::{
    allocate_work_id, MenuSection, SiteInfo, TypographyStyle, WorkItem,
};
use crate::store::ContentStore;

/// The static shared secret the admin panel compares operator input
/// against. A soft deterrent only: it is compiled in, unhashed, and the
/// authenticated flag lives in memory for the session. Not a security
/// boundary.
const ACCESS_KEY: &str = "1264";

/// Editable plain-text fields of [`SiteInfo`]. One variant per logical
/// field keeps updates type-safe instead of patching by key string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteTextField {
    HeroHeadline,
    HeroSubheadline,
    MainIntroText,
    DesignProcessTitle,
    WorksGalleryTitle,
    CapabilitiesTitle,
    AboutIntro,
    AboutPerspectiveLabel,
    AboutDesignCriteria,
    AboutWorkingStyleLabel,
    AboutWorkingStyle,
    AboutExperienceLabel,
    AboutExperience,
    AboutClosing,
    ContactHeadline,
    ContactSubheadline,
}

impl SiteTextField {
    fn apply(self, site: &mut SiteInfo, value: String) {
        match self {
            SiteTextField::HeroHeadline => site.hero_headline = value,
            SiteTextField::HeroSubheadline => site.hero_subheadline = value,
            SiteTextField::MainIntroText => site.main_intro_text = value,
            SiteTextField::DesignProcessTitle => site.design_process_title = value,
            SiteTextField::WorksGalleryTitle => site.works_gallery_title = value,
            SiteTextField::CapabilitiesTitle => site.capabilities_title = value,
            SiteTextField::AboutIntro => site.about_intro = value,
            SiteTextField::AboutPerspectiveLabel => site.about_perspective_label = value,
            SiteTextField::AboutDesignCriteria => site.about_design_criteria = value,
            SiteTextField::AboutWorkingStyleLabel => site.about_working_style_label = value,
            SiteTextField::AboutWorkingStyle => site.about_working_style = value,
            SiteTextField::AboutExperienceLabel => site.about_experience_label = value,
            SiteTextField::AboutExperience => site.about_experience = value,
            SiteTextField::AboutClosing => site.about_closing = value,
            SiteTextField::ContactHeadline => site.contact_headline = value,
            SiteTextField::ContactSubheadline => site.contact_subheadline = value,
        }
    }
}

/// Editable typography slots of [`SiteInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteStyleField {
    HeroHeadline,
    HeroSubheadline,
    MainIntroText,
    DesignProcessTitle,
    DesignProcessStepTitle,
    DesignProcessStepDescription,
    WorksGalleryTitle,
    CapabilitiesTitle,
    CapabilityItemTitle,
    CapabilityItemDescription,
    AboutIntro,
    AboutClosing,
    BodyText,
    WorkTitle,
    Sidebar,
    SectionHeading,
    CardTitle,
    ContactHeadline,
    ContactSubheadline,
    WorkMetadataLabel,
    WorkMetadataValue,
    WorkOneLiner,
    WorkDetailHeaderBrand,
    WorkDetailHeaderTitle,
    WorkDetailHeaderBullet,
    WorkDetailTab,
}

impl SiteStyleField {
    fn apply(self, site: &mut SiteInfo, style: TypographyStyle) {
        match self {
            SiteStyleField::HeroHeadline => site.hero_headline_style = style,
            SiteStyleField::HeroSubheadline => site.hero_subheadline_style = style,
            SiteStyleField::MainIntroText => site.main_intro_text_style = style,
            SiteStyleField::DesignProcessTitle => site.design_process_title_style = style,
            SiteStyleField::DesignProcessStepTitle => {
                site.design_process_step_title_style = style
            }
            SiteStyleField::DesignProcessStepDescription => {
                site.design_process_step_description_style = style
            }
            SiteStyleField::WorksGalleryTitle => site.works_gallery_title_style = style,
            SiteStyleField::CapabilitiesTitle => site.capabilities_title_style = style,
            SiteStyleField::CapabilityItemTitle => site.capability_item_title_style = style,
            SiteStyleField::CapabilityItemDescription => {
                site.capability_item_description_style = style
            }
            SiteStyleField::AboutIntro => site.about_intro_style = style,
            SiteStyleField::AboutClosing => site.about_closing_style = style,
            SiteStyleField::BodyText => site.body_text_style = style,
            SiteStyleField::WorkTitle => site.work_title_style = style,
            SiteStyleField::Sidebar => site.sidebar_style = style,
            SiteStyleField::SectionHeading => site.section_heading_style = style,
            SiteStyleField::CardTitle => site.card_title_style = style,
            SiteStyleField::ContactHeadline => site.contact_headline_style = style,
            SiteStyleField::ContactSubheadline => site.contact_subheadline_style = style,
            SiteStyleField::WorkMetadataLabel => site.work_metadata_label_style = style,
            SiteStyleField::WorkMetadataValue => site.work_metadata_value_style = style,
            SiteStyleField::WorkOneLiner => site.work_one_liner_style = style,
            SiteStyleField::WorkDetailHeaderBrand => {
                site.work_detail_header_brand_style = style
            }
            SiteStyleField::WorkDetailHeaderTitle => {
                site.work_detail_header_title_style = style
            }
            SiteStyleField::WorkDetailHeaderBullet => {
                site.work_detail_header_bullet_style = style
            }
            SiteStyleField::WorkDetailTab => site.work_detail_tab_style = style,
        }
    }
}

#[derive(Default)]
pub struct Editor {
    draft: Option<WorkItem>,
    authenticated: bool,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Auth gate ---

    /// Compare operator input against the access key. A match sets the
    /// session flag; anything else (including empty input) is a silent
    /// no-op.
    pub fn login(&mut self, input: &str) -> bool {
        if input == ACCESS_KEY {
            self.authenticated = true;
        }
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    // --- Draft lifecycle ---

    /// Begin a new work item. The identifier is allocated now, unique
    /// among current items, but nothing is added to the collection until
    /// [`Editor::save_draft`].
    pub fn start_new_work(&mut self, store: &ContentStore) {
        let id = allocate_work_id(store.works());
        self.draft = Some(WorkItem::draft(id));
    }

    /// Begin editing an existing item; the draft is a copy, the committed
    /// entry stays untouched until save. Unknown id is a no-op.
    pub fn start_edit(&mut self, store: &ContentStore, id: &str) -> bool {
        match store.work_by_id(id) {
            Some(work) => {
                self.draft = Some(work.clone());
                true
            }
            None => false,
        }
    }

    pub fn draft(&self) -> Option<&WorkItem> {
        self.draft.as_ref()
    }

    /// Direct access to the draft's fields. Safe to hand out: the draft is
    /// isolated until save, and the guarded list operations below are the
    /// only ones with input rules.
    pub fn draft_mut(&mut self) -> Option<&mut WorkItem> {
        self.draft.as_mut()
    }

    /// Append a gallery visual to the draft. The reference is trimmed;
    /// empty or whitespace-only input is silently rejected.
    pub fn append_visual(&mut self, url: &str) {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(draft) = &mut self.draft {
            draft.visuals.push(trimmed.to_string());
        }
    }

    /// Remove the visual at `index` from the draft. Out of range is a
    /// no-op.
    pub fn remove_visual(&mut self, index: usize) {
        if let Some(draft) = &mut self.draft {
            if index < draft.visuals.len() {
                draft.visuals.remove(index);
            }
        }
    }

    /// Discard the draft without touching the collection.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Commit the draft: replace the item with the same id in place, or
    /// append when the id is new. Exits draft state.
    pub fn save_draft(&mut self, store: &mut ContentStore) {
        let Some(draft) = self.draft.take() else {
            return;
        };
        let mut works = store.works().to_vec();
        match works.iter().position(|w| w.id == draft.id) {
            Some(index) => works[index] = draft,
            None => works.push(draft),
        }
        store.set_works(works);
    }

    /// Remove a work item by id, gated on `confirm`. The item is looked up
    /// first, so a stale id is a safe no-op; declining the confirmation
    /// leaves the collection unchanged. Returns whether a removal
    /// happened.
    pub fn delete_work(
        &mut self,
        store: &mut ContentStore,
        id: &str,
        confirm: impl FnOnce(&WorkItem) -> bool,
    ) -> bool {
        let Some(work) = store.work_by_id(id) else {
            return false;
        };
        if !confirm(work) {
            return false;
        }
        let works: Vec<WorkItem> = store
            .works()
            .iter()
            .filter(|w| w.id != id)
            .cloned()
            .collect();
        store.set_works(works);
        true
    }

    // --- Site copy ---

    pub fn set_site_text(&mut self, store: &mut ContentStore, field: SiteTextField, value: String) {
        store.update_site(|site| field.apply(site, value));
    }

    pub fn set_site_style(
        &mut self,
        store: &mut ContentStore,
        field: SiteStyleField,
        style: TypographyStyle,
    ) {
        store.update_site(|site| field.apply(site, style));
    }

    pub fn set_process_step_title(&mut self, store: &mut ContentStore, index: usize, title: String) {
        if index >= store.site().design_process_steps.len() {
            return;
        }
        store.update_site(|site| {
            let mut steps = site.design_process_steps.clone();
            steps[index].title = title;
            site.design_process_steps = steps;
        });
    }

    pub fn set_process_step_description(
        &mut self,
        store: &mut ContentStore,
        index: usize,
        description: String,
    ) {
        if index >= store.site().design_process_steps.len() {
            return;
        }
        store.update_site(|site| {
            let mut steps = site.design_process_steps.clone();
            steps[index].description = description;
            site.design_process_steps = steps;
        });
    }

    pub fn set_capability_title(&mut self, store: &mut ContentStore, index: usize, title: String) {
        if index >= store.site().capabilities.len() {
            return;
        }
        store.update_site(|site| {
            let mut capabilities = site.capabilities.clone();
            capabilities[index].title = title;
            site.capabilities = capabilities;
        });
    }

    pub fn set_capability_description(
        &mut self,
        store: &mut ContentStore,
        index: usize,
        description: String,
    ) {
        if index >= store.site().capabilities.len() {
            return;
        }
        store.update_site(|site| {
            let mut capabilities = site.capabilities.clone();
            capabilities[index].description = description;
            site.capabilities = capabilities;
        });
    }

    pub fn set_menu_label(&mut self, store: &mut ContentStore, section: MenuSection, label: String) {
        store.update_menu(|menu| menu.set_label(section, label));
    }

    /// Set the global accent used by the admin chrome and as the fallback
    /// color for inline markup spans.
    pub fn set_accent_color(&mut self, store: &mut ContentStore, color: String) {
        store.update_site(|site| site.point_color = color);
    }

    pub fn set_about_section_spacing(&mut self, store: &mut ContentStore, spacing: f32) {
        store.update_site(|site| site.about_section_spacing = spacing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn store() -> ContentStore {
        ContentStore::load(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_login_gate() {
        let mut editor = Editor::new();
        assert!(!editor.login(""));
        assert!(!editor.login("wrong"));
        assert!(!editor.is_authenticated());
        assert!(editor.login("1264"));
        assert!(editor.is_authenticated());
        editor.logout();
        assert!(!editor.is_authenticated());
    }

    #[test]
    fn test_new_draft_is_isolated_until_save() {
        let mut store = store();
        let mut editor = Editor::new();
        let before = store.works().len();

        editor.start_new_work(&store);
        editor.draft_mut().unwrap().brand = "Half-typed".to_string();
        assert_eq!(store.works().len(), before);

        editor.cancel_edit();
        assert!(editor.draft().is_none());
        assert_eq!(store.works().len(), before);
        assert!(!store.works().iter().any(|w| w.brand == "Half-typed"));
    }

    #[test]
    fn test_save_new_draft_appends() {
        let mut store = store();
        let mut editor = Editor::new();
        let before = store.works().len();

        editor.start_new_work(&store);
        let id = editor.draft().unwrap().id.clone();
        editor.draft_mut().unwrap().brand = "Fresh".to_string();
        editor.save_draft(&mut store);

        assert!(editor.draft().is_none());
        assert_eq!(store.works().len(), before + 1);
        assert_eq!(store.works().last().unwrap().id, id);
    }

    #[test]
    fn test_save_existing_draft_replaces_in_place() {
        let mut store = store();
        let mut editor = Editor::new();
        let target = store.works()[0].id.clone();
        let before = store.works().len();

        assert!(editor.start_edit(&store, &target));
        editor.draft_mut().unwrap().one_liner = "Rewritten".to_string();
        editor.save_draft(&mut store);

        assert_eq!(store.works().len(), before);
        assert_eq!(store.works()[0].id, target);
        assert_eq!(store.works()[0].one_liner, "Rewritten");
    }

    #[test]
    fn test_start_edit_unknown_id() {
        let mut editor = Editor::new();
        assert!(!editor.start_edit(&store(), "no-such-id"));
        assert!(editor.draft().is_none());
    }

    #[test]
    fn test_allocated_ids_are_unique() {
        let mut store = store();
        let mut editor = Editor::new();
        for _ in 0..3 {
            editor.start_new_work(&store);
            editor.save_draft(&mut store);
        }
        let mut ids: Vec<_> = store.works().iter().map(|w| w.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.works().len());
    }

    #[test]
    fn test_append_visual_trims_and_rejects_blank() {
        let mut editor = Editor::new();
        editor.start_new_work(&store());

        editor.append_visual("   ");
        assert!(editor.draft().unwrap().visuals.is_empty());

        editor.append_visual("  http://x/y.png  ");
        assert_eq!(editor.draft().unwrap().visuals, vec!["http://x/y.png"]);
    }

    #[test]
    fn test_remove_visual_bounds() {
        let mut editor = Editor::new();
        editor.start_new_work(&store());
        editor.append_visual("a.png");
        editor.append_visual("b.png");

        editor.remove_visual(5); // out of range, no-op
        assert_eq!(editor.draft().unwrap().visuals.len(), 2);

        editor.remove_visual(0);
        assert_eq!(editor.draft().unwrap().visuals, vec!["b.png"]);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut store = store();
        let mut editor = Editor::new();
        let id = store.works()[0].id.clone();
        let before = store.works().len();

        assert!(!editor.delete_work(&mut store, &id, |_| false));
        assert_eq!(store.works().len(), before);

        assert!(editor.delete_work(&mut store, &id, |w| {
            assert_eq!(w.id, id);
            true
        }));
        assert_eq!(store.works().len(), before - 1);
        assert!(store.work_by_id(&id).is_none());
    }

    #[test]
    fn test_delete_stale_id_is_noop() {
        let mut store = store();
        let mut editor = Editor::new();
        let before = store.works().len();
        assert!(!editor.delete_work(&mut store, "stale", |_| true));
        assert_eq!(store.works().len(), before);
    }

    #[test]
    fn test_site_text_and_style_edits() {
        let mut store = store();
        let mut editor = Editor::new();

        editor.set_site_text(
            &mut store,
            SiteTextField::HeroHeadline,
            "New headline".to_string(),
        );
        assert_eq!(store.site().hero_headline, "New headline");

        let style = TypographyStyle::new(90.0, crate::domain::FontWeight::Black, "#abcdef");
        editor.set_site_style(&mut store, SiteStyleField::HeroHeadline, style.clone());
        assert_eq!(store.site().hero_headline_style, style);
    }

    #[test]
    fn test_indexed_list_edit_rebuilds_without_disturbing_others() {
        let mut store = store();
        let mut editor = Editor::new();
        let untouched = store.site().design_process_steps[0].clone();

        editor.set_process_step_title(&mut store, 1, "Reframe".to_string());
        assert_eq!(store.site().design_process_steps[1].title, "Reframe");
        assert_eq!(store.site().design_process_steps[0], untouched);

        // Out-of-range index is a no-op
        let before = store.site().capabilities.clone();
        editor.set_capability_title(&mut store, 99, "x".to_string());
        assert_eq!(store.site().capabilities, before);
    }

    #[test]
    fn test_menu_and_accent_edits() {
        let mut store = store();
        let mut editor = Editor::new();

        editor.set_menu_label(&mut store, MenuSection::Main, "Archive".to_string());
        assert_eq!(store.menu().main, "Archive");

        editor.set_accent_color(&mut store, "#00f0ff".to_string());
        assert_eq!(store.site().point_color, "#00f0ff");

        editor.set_about_section_spacing(&mut store, 120.0);
        assert_eq!(store.site().about_section_spacing, 120.0);
    }
}
