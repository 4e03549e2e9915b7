//! Pure view construction: (content model, navigation state, viewport) to
//! a renderable page value. Markup interpolation, viewport scaling and
//! media classification all happen here; nothing is mutated.

use crate::domain::{MediaAspect, NavState, Page, SidebarMenu, SiteInfo, WorkItem};
use crate::store::ContentStore;

use super::markup::{resolve_markup, Segment};
use super::media::{classify, MediaKind};
use super::style::{resolve, resolve_scaled, resolve_sidebar, ResolvedStyle, Viewport};

/// Markup-interpolated text with its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledBlock {
    pub segments: Vec<Segment>,
    pub style: ResolvedStyle,
}

/// Verbatim text with its resolved style (fields the markup syntax does
/// not apply to).
#[derive(Debug, Clone, PartialEq)]
pub struct PlainBlock {
    pub text: String,
    pub style: ResolvedStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaView {
    pub src: String,
    pub kind: MediaKind,
    pub aspect: MediaAspect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkCardView {
    pub id: String,
    pub company: String,
    pub brand: String,
    pub one_liner: String,
    /// Thumbnail or first gallery visual; `None` renders the placeholder.
    pub media: Option<MediaView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStepView {
    pub title: PlainBlock,
    pub description: PlainBlock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MainView {
    pub hero_headline: StyledBlock,
    pub hero_subheadline: StyledBlock,
    pub intro: StyledBlock,
    pub process_title: StyledBlock,
    pub process_steps: Vec<ProcessStepView>,
    pub gallery_title: StyledBlock,
    pub works: Vec<WorkCardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutSectionView {
    pub label: PlainBlock,
    pub body: StyledBlock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    pub intro: StyledBlock,
    pub sections: Vec<AboutSectionView>,
    pub closing: StyledBlock,
    /// Pixel gap between sections.
    pub section_spacing: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityCardView {
    pub title: StyledBlock,
    pub description: StyledBlock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityView {
    pub title: StyledBlock,
    pub items: Vec<CapabilityCardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub headline: StyledBlock,
    pub subheadline: StyledBlock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkDetailView {
    pub brand: PlainBlock,
    pub company: String,
    pub one_liner: PlainBlock,
    pub role_paragraphs: Vec<PlainBlock>,
    pub tab_label: PlainBlock,
    pub visuals: Vec<MediaView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkNavEntry {
    pub id: String,
    pub brand: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    pub labels: SidebarMenu,
    pub style: ResolvedStyle,
    pub work_nav: Vec<WorkNavEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Main(MainView),
    About(AboutView),
    Capability(CapabilityView),
    Contact(ContactView),
    WorkDetail(WorkDetailView),
    /// The admin route; everything past the gate is editor state, not
    /// content.
    Admin { unlocked: bool },
    /// Work-detail navigation pointing at an id that no longer exists.
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub sidebar: SidebarView,
    pub page: PageView,
    /// The global accent, for UI chrome outside any text field.
    pub accent: String,
}

/// Build the view for the current navigation state.
pub fn render(store: &ContentStore, nav: &NavState, viewport: Viewport, admin_unlocked: bool) -> View {
    let site = store.site();

    let page = match nav.page {
        Page::Main => PageView::Main(render_main(site, store.works(), viewport)),
        Page::About => PageView::About(render_about(site, viewport)),
        Page::Capability => PageView::Capability(render_capability(site, viewport)),
        Page::Contact => PageView::Contact(render_contact(site, viewport)),
        Page::WorkDetail => match nav
            .selected_work_id
            .as_deref()
            .and_then(|id| store.work_by_id(id))
        {
            Some(work) => PageView::WorkDetail(render_work_detail(site, work, viewport)),
            None => PageView::Empty,
        },
        Page::Admin => PageView::Admin {
            unlocked: admin_unlocked,
        },
    };

    View {
        sidebar: render_sidebar(store, nav),
        page,
        accent: site.point_color.clone(),
    }
}

fn styled(text: &str, accent: &str, style: ResolvedStyle) -> StyledBlock {
    StyledBlock {
        segments: resolve_markup(text, accent),
        style,
    }
}

fn plain(text: &str, style: ResolvedStyle) -> PlainBlock {
    PlainBlock {
        text: text.to_string(),
        style,
    }
}

fn render_sidebar(store: &ContentStore, nav: &NavState) -> SidebarView {
    let work_nav = store
        .works()
        .iter()
        .map(|w| WorkNavEntry {
            id: w.id.clone(),
            brand: w.brand.clone(),
            active: nav.page == Page::WorkDetail && nav.selected_work_id.as_deref() == Some(&w.id),
        })
        .collect();

    SidebarView {
        labels: store.menu().clone(),
        style: resolve_sidebar(&store.site().sidebar_style),
        work_nav,
    }
}

fn render_main(site: &SiteInfo, works: &[WorkItem], viewport: Viewport) -> MainView {
    let accent = &site.point_color;

    let process_steps = site
        .design_process_steps
        .iter()
        .map(|step| ProcessStepView {
            title: plain(&step.title, resolve(&site.design_process_step_title_style)),
            description: plain(
                &step.description,
                resolve(&site.design_process_step_description_style),
            ),
        })
        .collect();

    let work_cards = works
        .iter()
        .map(|work| WorkCardView {
            id: work.id.clone(),
            company: work.company.clone(),
            brand: work.brand.clone(),
            one_liner: work.one_liner.clone(),
            media: work.display_media().map(|src| MediaView {
                src: src.to_string(),
                kind: classify(src),
                aspect: work.aspect(),
            }),
        })
        .collect();

    MainView {
        hero_headline: styled(
            &site.hero_headline,
            accent,
            resolve_scaled(&site.hero_headline_style, viewport),
        ),
        hero_subheadline: styled(
            &site.hero_subheadline,
            accent,
            resolve_scaled(&site.hero_subheadline_style, viewport),
        ),
        // The intro sits on the white band and always renders black
        intro: styled(
            &site.main_intro_text,
            accent,
            resolve_scaled(&site.main_intro_text_style, viewport).with_color("#000000"),
        ),
        process_title: styled(
            &site.design_process_title,
            accent,
            resolve(&site.design_process_title_style),
        ),
        process_steps,
        gallery_title: styled(
            &site.works_gallery_title,
            accent,
            resolve(&site.works_gallery_title_style),
        ),
        works: work_cards,
    }
}

fn render_about(site: &SiteInfo, viewport: Viewport) -> AboutView {
    let accent = &site.point_color;
    let body_style = resolve(&site.body_text_style).with_line_height(1.55);

    let sections = [
        (&site.about_perspective_label, &site.about_design_criteria),
        (&site.about_working_style_label, &site.about_working_style),
        (&site.about_experience_label, &site.about_experience),
    ]
    .into_iter()
    .map(|(label, body)| AboutSectionView {
        label: plain(label, resolve(&site.card_title_style)),
        body: styled(body, accent, body_style.clone()),
    })
    .collect();

    AboutView {
        intro: styled(
            &site.about_intro,
            accent,
            resolve_scaled(&site.about_intro_style, viewport),
        ),
        sections,
        // The closing card forces white copy over its dark panel
        closing: styled(
            &site.about_closing,
            accent,
            resolve_scaled(&site.about_closing_style, viewport).with_color("#ffffff"),
        ),
        section_spacing: site.about_section_spacing,
    }
}

fn render_capability(site: &SiteInfo, viewport: Viewport) -> CapabilityView {
    let accent = &site.point_color;
    let items = site
        .capabilities
        .iter()
        .map(|cap| CapabilityCardView {
            title: styled(&cap.title, accent, resolve(&site.capability_item_title_style)),
            description: styled(
                &cap.description,
                accent,
                resolve(&site.capability_item_description_style),
            ),
        })
        .collect();

    CapabilityView {
        title: styled(
            &site.capabilities_title,
            accent,
            resolve_scaled(&site.capabilities_title_style, viewport),
        ),
        items,
    }
}

fn render_contact(site: &SiteInfo, viewport: Viewport) -> ContactView {
    let accent = &site.point_color;
    ContactView {
        headline: styled(
            &site.contact_headline,
            accent,
            resolve_scaled(&site.contact_headline_style, viewport),
        ),
        subheadline: styled(
            &site.contact_subheadline,
            accent,
            resolve_scaled(&site.contact_subheadline_style, viewport),
        ),
    }
}

fn render_work_detail(site: &SiteInfo, work: &WorkItem, viewport: Viewport) -> WorkDetailView {
    let aspect = work.aspect();
    let bullet_style = resolve(&site.work_detail_header_bullet_style);

    WorkDetailView {
        brand: plain(
            &work.brand,
            resolve_scaled(&site.work_detail_header_brand_style, viewport),
        ),
        company: work.company.clone(),
        one_liner: plain(
            &work.one_liner,
            resolve_scaled(&site.work_detail_header_title_style, viewport),
        ),
        role_paragraphs: work
            .role_lines()
            .map(|line| plain(line, bullet_style.clone()))
            .collect(),
        tab_label: plain("Creative_Media", resolve(&site.work_detail_tab_style)),
        visuals: work
            .visuals
            .iter()
            .map(|src| MediaView {
                src: src.clone(),
                kind: classify(src),
                aspect,
            })
            .collect(),
    }
}
