//! Tabbed results widget.
//!
//! Contains:
//! - `widget` - the `TabWidget` seam and the DOM-rendered `DomTabView`
//! - `initializer` - the one-shot module-to-tab transformation

pub mod initializer;
pub mod widget;

pub use initializer::TabInitializer;
pub use widget::{DomTabView, TabWidget};
