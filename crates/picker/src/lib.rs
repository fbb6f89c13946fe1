//! Color picker components for building color selection UIs with GPUI.
//!
//! Three leaf components cooperate through one typed event:
//!
//! - [`SwatchBar`] re-emits a clicked preset verbatim.
//! - [`HexInputState`] normalizes and validates typed hex text, degrading to
//!   the first preset on invalid input.
//! - [`SelectionDisplay`] shows the current color and re-broadcasts it when
//!   clicked.
//!
//! [`ColorPicker`] wires the three together. Every interaction path
//! converges on [`ColorPickerEvent::Selected`]; hosts subscribe to that one
//! event and receive the chosen color string exactly as entered or
//! configured.

mod color;
mod config;
mod event;
mod field;
mod hex_input;
mod picker;
mod selection;
mod swatch;
mod swatch_bar;
mod theme;

pub use color::{is_valid_hex, HexColor};
pub use config::{PickerConfig, DEFAULT_PRESETS};
pub use event::{ColorPickerEvent, HexFieldEvent};
pub use field::HexField;
pub use hex_input::{resolve_submission, FieldReader, HexInputState};
pub use picker::ColorPicker;
pub use selection::SelectionDisplay;
pub use swatch::Swatch;
pub use swatch_bar::SwatchBar;
pub use theme::{ActiveTheme, Theme, ThemeColor, ThemeMode};

use gpui::{div, App, Div, Styled};

/// Initialize the library. Must be called once, before any component is
/// constructed.
pub fn init(cx: &mut App) {
    theme::init(cx);
}

/// Horizontal flex container with vertically centered items.
pub fn h_flex() -> Div {
    div().flex().flex_row().items_center()
}

/// Vertical flex container.
pub fn v_flex() -> Div {
    div().flex().flex_col()
}
