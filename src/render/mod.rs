//! Presentation helpers: everything between the stored content model and
//! a renderer. Pure functions only; the layout engine consuming these
//! views lives outside this crate.

pub mod markup;
pub mod media;
pub mod style;
pub mod view;

pub use markup::{resolve_markup, Segment};
pub use media::{classify, MediaKind};
pub use style::{effective_font_size, resolve, resolve_scaled, resolve_sidebar, ResolvedStyle, Viewport};
pub use view::{render, PageView, View};
