//! Chat Widget UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (completion proxy, PDF extraction)
//! - view_model.rs: ChatWidgetVm with RwSignals and the send/upload flow
//! - view.rs: Main component ChatWidget

mod model;
mod view;
mod view_model;

pub use view::ChatWidget;
pub use view_model::ChatWidgetVm;
