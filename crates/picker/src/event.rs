use crate::color::HexColor;
use gpui::SharedString;

/// The single selection event every interaction path funnels into.
///
/// Swatch clicks, hex submissions, and selection re-broadcasts all emit this
/// type, so listeners observe one canonical payload shape instead of
/// per-component name/payload pairs.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorPickerEvent {
    /// A color was chosen. The payload is exactly the chosen string: a
    /// validated hex value or a trusted preset, never re-cased or rewritten.
    Selected(HexColor),
}

/// Notifications from the hex text field collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum HexFieldEvent {
    /// The field content changed.
    Change(SharedString),
    /// Enter was pressed; the current content should be submitted.
    Submit,
}
