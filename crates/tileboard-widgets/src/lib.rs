//! Drawing for the **tileboard** dashboard.
//!
//! Widget bodies are drawn by [`Renderer`](renderer::Renderer)s looked up by
//! kind in a [`RendererRegistry`](renderer::RendererRegistry). The rest of
//! this crate is the chrome around them.
//!
//! # Renderers
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pie`] | Braille pie chart with a value legend |
//! | [`stat_bar`] | Headline figure, fill bar, and severity legend |
//! | [`placeholder`] | "No data" and unknown-kind messages |
//! | [`datasets`] | The fixed figures behind the stock charts |
//!
//! # Chrome
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chrome`] | Card borders and legend packing |
//! | [`picker`] | "Add Widgets" checklist dialog |
//! | [`key`] | Key bindings and help text |
//! | [`overlay`] | Centered dialog geometry |

pub mod chrome;
pub mod datasets;
pub mod key;
pub mod overlay;
pub mod picker;
pub mod pie;
pub mod placeholder;
pub mod renderer;
pub mod stat_bar;

#[cfg(test)]
mod test_util;

pub use picker::{Picker, PickerAction};
pub use renderer::{Renderer, RendererRegistry};
