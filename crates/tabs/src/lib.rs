//! Responsive tab navigation for Leptos.
//!
//! Renders a horizontal strip of tab buttons on wide viewports and collapses
//! into a single dropdown selector on narrow viewports once the tab count
//! exceeds a configurable threshold. The active selection lives in a
//! per-mount store; the viewport width is observed through an injectable
//! [`viewport::ViewportHost`] capability so the component can be driven
//! without a real display surface.

pub mod descriptor;
pub mod icons;
pub mod mode;
pub mod ui;
pub mod view_model;
pub mod viewport;

pub use descriptor::{TabDescriptor, FALLBACK_TRIGGER_LABEL};
pub use mode::{
    presentation_mode, PresentationMode, DEFAULT_COLLAPSE_THRESHOLD, NARROW_VIEWPORT_PX,
};
pub use ui::ResponsiveTabs;
pub use view_model::ResponsiveTabsVm;
pub use viewport::{use_narrow_signal, BrowserViewport, Unsubscribe, ViewportHost};
