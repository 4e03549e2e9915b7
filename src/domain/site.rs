use serde::{Deserialize, Serialize};

use super::typography::TypographyStyle;

/// One step of the fixed-length design-process strip. All steps share the
/// two step styles on [`SiteInfo`]; only the copy is per-step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DesignProcessStep {
    pub title: String,
    pub description: String,
}

/// One capability card. Independent copy per entry, shared styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CapabilityItem {
    pub title: String,
    pub description: String,
}

/// The singleton aggregate holding all non-work site copy and its
/// per-field typography.
///
/// Every field carries a serde default, so a stored blob that predates a
/// schema addition still loads with every field defined: stored keys
/// override, defaults fill the gaps. Loading is therefore the merge
/// function; there is no separate patch type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    /// Legacy field from early builds; preserved on round-trip, unread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_urls: Option<Vec<String>>,

    #[serde(default = "defaults::hero_headline")]
    pub hero_headline: String,
    #[serde(default = "defaults::hero_headline_style")]
    pub hero_headline_style: TypographyStyle,

    #[serde(default = "defaults::hero_subheadline")]
    pub hero_subheadline: String,
    #[serde(default = "defaults::hero_subheadline_style")]
    pub hero_subheadline_style: TypographyStyle,

    #[serde(default = "defaults::main_intro_text")]
    pub main_intro_text: String,
    #[serde(default = "defaults::main_intro_text_style")]
    pub main_intro_text_style: TypographyStyle,

    #[serde(default = "defaults::design_process_title")]
    pub design_process_title: String,
    #[serde(default = "defaults::design_process_title_style")]
    pub design_process_title_style: TypographyStyle,

    #[serde(default = "defaults::design_process_steps")]
    pub design_process_steps: Vec<DesignProcessStep>,
    #[serde(default = "defaults::design_process_step_title_style")]
    pub design_process_step_title_style: TypographyStyle,
    #[serde(default = "defaults::design_process_step_description_style")]
    pub design_process_step_description_style: TypographyStyle,

    #[serde(default = "defaults::works_gallery_title")]
    pub works_gallery_title: String,
    #[serde(default = "defaults::works_gallery_title_style")]
    pub works_gallery_title_style: TypographyStyle,

    #[serde(default = "defaults::capabilities_title")]
    pub capabilities_title: String,
    #[serde(default = "defaults::capabilities_title_style")]
    pub capabilities_title_style: TypographyStyle,

    #[serde(default = "defaults::capabilities")]
    pub capabilities: Vec<CapabilityItem>,
    #[serde(default = "defaults::capability_item_title_style")]
    pub capability_item_title_style: TypographyStyle,
    #[serde(default = "defaults::capability_item_description_style")]
    pub capability_item_description_style: TypographyStyle,

    #[serde(default = "defaults::about_intro")]
    pub about_intro: String,
    #[serde(default = "defaults::about_intro_style")]
    pub about_intro_style: TypographyStyle,

    #[serde(default = "defaults::about_perspective_label")]
    pub about_perspective_label: String,
    #[serde(default = "defaults::about_design_criteria")]
    pub about_design_criteria: String,
    #[serde(default = "defaults::about_working_style_label")]
    pub about_working_style_label: String,
    #[serde(default = "defaults::about_working_style")]
    pub about_working_style: String,
    #[serde(default = "defaults::about_experience_label")]
    pub about_experience_label: String,
    #[serde(default = "defaults::about_experience")]
    pub about_experience: String,

    #[serde(default = "defaults::about_closing")]
    pub about_closing: String,
    #[serde(default = "defaults::about_closing_style")]
    pub about_closing_style: TypographyStyle,

    /// Vertical gap between the about sections, in pixels.
    #[serde(default = "defaults::about_section_spacing")]
    pub about_section_spacing: f32,

    #[serde(default = "defaults::body_text_style")]
    pub body_text_style: TypographyStyle,

    /// Global accent: UI accent in the admin chrome, and the substitution
    /// color for inline markup spans that carry no explicit color.
    #[serde(default = "defaults::point_color")]
    pub point_color: String,

    #[serde(default = "defaults::work_title_style")]
    pub work_title_style: TypographyStyle,
    #[serde(default = "defaults::sidebar_style")]
    pub sidebar_style: TypographyStyle,
    #[serde(default = "defaults::section_heading_style")]
    pub section_heading_style: TypographyStyle,
    #[serde(default = "defaults::card_title_style")]
    pub card_title_style: TypographyStyle,

    #[serde(default = "defaults::contact_headline")]
    pub contact_headline: String,
    #[serde(default = "defaults::contact_headline_style")]
    pub contact_headline_style: TypographyStyle,
    #[serde(default = "defaults::contact_subheadline")]
    pub contact_subheadline: String,
    #[serde(default = "defaults::contact_subheadline_style")]
    pub contact_subheadline_style: TypographyStyle,

    #[serde(default = "defaults::work_metadata_label_style")]
    pub work_metadata_label_style: TypographyStyle,
    #[serde(default = "defaults::work_metadata_value_style")]
    pub work_metadata_value_style: TypographyStyle,
    #[serde(default = "defaults::work_one_liner_style")]
    pub work_one_liner_style: TypographyStyle,

    #[serde(default = "defaults::work_detail_header_brand_style")]
    pub work_detail_header_brand_style: TypographyStyle,
    #[serde(default = "defaults::work_detail_header_title_style")]
    pub work_detail_header_title_style: TypographyStyle,
    #[serde(default = "defaults::work_detail_header_bullet_style")]
    pub work_detail_header_bullet_style: TypographyStyle,
    #[serde(default = "defaults::work_detail_tab_style")]
    pub work_detail_tab_style: TypographyStyle,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            gallery_urls: None,
            hero_headline: defaults::hero_headline(),
            hero_headline_style: defaults::hero_headline_style(),
            hero_subheadline: defaults::hero_subheadline(),
            hero_subheadline_style: defaults::hero_subheadline_style(),
            main_intro_text: defaults::main_intro_text(),
            main_intro_text_style: defaults::main_intro_text_style(),
            design_process_title: defaults::design_process_title(),
            design_process_title_style: defaults::design_process_title_style(),
            design_process_steps: defaults::design_process_steps(),
            design_process_step_title_style: defaults::design_process_step_title_style(),
            design_process_step_description_style: defaults::design_process_step_description_style(),
            works_gallery_title: defaults::works_gallery_title(),
            works_gallery_title_style: defaults::works_gallery_title_style(),
            capabilities_title: defaults::capabilities_title(),
            capabilities_title_style: defaults::capabilities_title_style(),
            capabilities: defaults::capabilities(),
            capability_item_title_style: defaults::capability_item_title_style(),
            capability_item_description_style: defaults::capability_item_description_style(),
            about_intro: defaults::about_intro(),
            about_intro_style: defaults::about_intro_style(),
            about_perspective_label: defaults::about_perspective_label(),
            about_design_criteria: defaults::about_design_criteria(),
            about_working_style_label: defaults::about_working_style_label(),
            about_working_style: defaults::about_working_style(),
            about_experience_label: defaults::about_experience_label(),
            about_experience: defaults::about_experience(),
            about_closing: defaults::about_closing(),
            about_closing_style: defaults::about_closing_style(),
            about_section_spacing: defaults::about_section_spacing(),
            body_text_style: defaults::body_text_style(),
            point_color: defaults::point_color(),
            work_title_style: defaults::work_title_style(),
            sidebar_style: defaults::sidebar_style(),
            section_heading_style: defaults::section_heading_style(),
            card_title_style: defaults::card_title_style(),
            contact_headline: defaults::contact_headline(),
            contact_headline_style: defaults::contact_headline_style(),
            contact_subheadline: defaults::contact_subheadline(),
            contact_subheadline_style: defaults::contact_subheadline_style(),
            work_metadata_label_style: defaults::work_metadata_label_style(),
            work_metadata_value_style: defaults::work_metadata_value_style(),
            work_one_liner_style: defaults::work_one_liner_style(),
            work_detail_header_brand_style: defaults::work_detail_header_brand_style(),
            work_detail_header_title_style: defaults::work_detail_header_title_style(),
            work_detail_header_bullet_style: defaults::work_detail_header_bullet_style(),
            work_detail_tab_style: defaults::work_detail_tab_style(),
        }
    }
}

mod defaults {
    use super::{CapabilityItem, DesignProcessStep};
    use crate::domain::typography::{FontWeight, TypographyStyle};

    pub fn hero_headline() -> String {
        "Design that {stays} after the scroll.".to_string()
    }

    pub fn hero_headline_style() -> TypographyStyle {
        TypographyStyle::new(72.0, FontWeight::Black, "#ffffff")
            .with_line_height(1.05)
            .with_letter_spacing(-0.03)
    }

    pub fn hero_subheadline() -> String {
        "Brand identity, detail pages and campaign visuals, built end to end.".to_string()
    }

    pub fn hero_subheadline_style() -> TypographyStyle {
        TypographyStyle::new(20.0, FontWeight::Medium, "#b3b3b3").with_line_height(1.5)
    }

    pub fn main_intro_text() -> String {
        "Good design is not decoration.\nIt is the shortest path between a brand and the person looking at it.".to_string()
    }

    pub fn main_intro_text_style() -> TypographyStyle {
        TypographyStyle::new(32.0, FontWeight::Bold, "#000000").with_line_height(1.4)
    }

    pub fn design_process_title() -> String {
        "Process".to_string()
    }

    pub fn design_process_title_style() -> TypographyStyle {
        TypographyStyle::new(40.0, FontWeight::Black, "#ffffff")
    }

    pub fn design_process_steps() -> Vec<DesignProcessStep> {
        vec![
            DesignProcessStep {
                title: "Research".to_string(),
                description: "Understand the product, the market and the one sentence the brand needs to say.".to_string(),
            },
            DesignProcessStep {
                title: "Concept".to_string(),
                description: "Translate that sentence into type, color and composition directions.".to_string(),
            },
            DesignProcessStep {
                title: "Refine".to_string(),
                description: "Iterate with the client until every screen and surface carries the same voice.".to_string(),
            },
        ]
    }

    pub fn design_process_step_title_style() -> TypographyStyle {
        TypographyStyle::new(22.0, FontWeight::Bold, "#ffffff")
    }

    pub fn design_process_step_description_style() -> TypographyStyle {
        TypographyStyle::new(15.0, FontWeight::Regular, "#a6a6a6").with_line_height(1.6)
    }

    pub fn works_gallery_title() -> String {
        "Work Archive".to_string()
    }

    pub fn works_gallery_title_style() -> TypographyStyle {
        TypographyStyle::new(14.0, FontWeight::Black, "#808080").with_letter_spacing(0.4)
    }

    pub fn capabilities_title() -> String {
        "What I {do}.".to_string()
    }

    pub fn capabilities_title_style() -> TypographyStyle {
        TypographyStyle::new(56.0, FontWeight::Black, "#ffffff").with_letter_spacing(-0.02)
    }

    pub fn capabilities() -> Vec<CapabilityItem> {
        vec![
            CapabilityItem {
                title: "Brand Identity".to_string(),
                description: "Logos, typography systems and guidelines that survive handoff.".to_string(),
            },
            CapabilityItem {
                title: "Detail Pages".to_string(),
                description: "Long-form commerce pages that sell without shouting.".to_string(),
            },
            CapabilityItem {
                title: "Campaign Visuals".to_string(),
                description: "Key visuals and social assets for launches and seasons.".to_string(),
            },
            CapabilityItem {
                title: "Art Direction".to_string(),
                description: "Shoots and motion briefs kept on-brand from moodboard to delivery.".to_string(),
            },
        ]
    }

    pub fn capability_item_title_style() -> TypographyStyle {
        TypographyStyle::new(28.0, FontWeight::Bold, "#ffffff")
    }

    pub fn capability_item_description_style() -> TypographyStyle {
        TypographyStyle::new(16.0, FontWeight::Regular, "#8c8c8c").with_line_height(1.6)
    }

    pub fn about_intro() -> String {
        "I design identities that outlast the campaign they launched with.".to_string()
    }

    pub fn about_intro_style() -> TypographyStyle {
        TypographyStyle::new(48.0, FontWeight::Black, "#ffffff").with_line_height(1.2)
    }

    pub fn about_perspective_label() -> String {
        "Perspective".to_string()
    }

    pub fn about_design_criteria() -> String {
        "A layout is right when removing any element breaks it. I cut until that point, then stop.".to_string()
    }

    pub fn about_working_style_label() -> String {
        "Working Style".to_string()
    }

    pub fn about_working_style() -> String {
        "Short loops, honest feedback. You see work-in-progress early and often, never a big reveal.".to_string()
    }

    pub fn about_experience_label() -> String {
        "Experience".to_string()
    }

    pub fn about_experience() -> String {
        "Eight years across studios and in-house teams, from roastery rebrands to beauty launches.".to_string()
    }

    pub fn about_closing() -> String {
        "Let's make something {worth keeping}.".to_string()
    }

    pub fn about_closing_style() -> TypographyStyle {
        TypographyStyle::new(40.0, FontWeight::Black, "#ffffff")
    }

    pub fn about_section_spacing() -> f32 {
        80.0
    }

    pub fn body_text_style() -> TypographyStyle {
        TypographyStyle::new(18.0, FontWeight::Regular, "#cccccc").with_line_height(1.55)
    }

    pub fn point_color() -> String {
        "#ff4d00".to_string()
    }

    pub fn work_title_style() -> TypographyStyle {
        TypographyStyle::new(24.0, FontWeight::Black, "#ffffff")
    }

    pub fn sidebar_style() -> TypographyStyle {
        TypographyStyle::new(15.0, FontWeight::Medium, "#000000")
    }

    pub fn section_heading_style() -> TypographyStyle {
        TypographyStyle::new(14.0, FontWeight::Black, "#999999").with_letter_spacing(0.2)
    }

    pub fn card_title_style() -> TypographyStyle {
        TypographyStyle::new(18.0, FontWeight::Black, "#ffffff").with_letter_spacing(0.2)
    }

    pub fn contact_headline() -> String {
        "Have a project in {mind}?".to_string()
    }

    pub fn contact_headline_style() -> TypographyStyle {
        TypographyStyle::new(64.0, FontWeight::Black, "#ffffff").with_letter_spacing(-0.02)
    }

    pub fn contact_subheadline() -> String {
        "Tell me about it. I usually reply within a day.".to_string()
    }

    pub fn contact_subheadline_style() -> TypographyStyle {
        TypographyStyle::new(18.0, FontWeight::Regular, "#b3b3b3").with_line_height(1.5)
    }

    pub fn work_metadata_label_style() -> TypographyStyle {
        TypographyStyle::new(12.0, FontWeight::Black, "#666666").with_letter_spacing(0.3)
    }

    pub fn work_metadata_value_style() -> TypographyStyle {
        TypographyStyle::new(16.0, FontWeight::Medium, "#ffffff")
    }

    pub fn work_one_liner_style() -> TypographyStyle {
        TypographyStyle::new(20.0, FontWeight::Medium, "#d9d9d9")
    }

    pub fn work_detail_header_brand_style() -> TypographyStyle {
        TypographyStyle::new(64.0, FontWeight::Black, "#ffffff").with_line_height(1.0)
    }

    pub fn work_detail_header_title_style() -> TypographyStyle {
        TypographyStyle::new(28.0, FontWeight::Bold, "#ffffff").with_line_height(1.3)
    }

    pub fn work_detail_header_bullet_style() -> TypographyStyle {
        TypographyStyle::new(15.0, FontWeight::Regular, "#999999").with_line_height(1.6)
    }

    pub fn work_detail_tab_style() -> TypographyStyle {
        TypographyStyle::new(12.0, FontWeight::Black, "#ffffff").with_letter_spacing(0.3)
    }
}
