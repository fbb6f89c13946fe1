use crate::color::{is_valid_hex, HexColor};
use crate::config::PickerConfig;
use crate::event::ColorPickerEvent;
use crate::field::HexField;
use std::rc::Rc;
use std::sync::Arc;

use gpui::{App, Context, Entity, EventEmitter, SharedString};

/// Reads the current content of the externally-owned text field.
///
/// Resolved at construction from a typed entity handle, so there is no
/// runtime field-name lookup to fail. A dropped field reads as empty, which
/// resolves to the fallback color like any other invalid input.
pub type FieldReader = Rc<dyn Fn(&App) -> SharedString>;

/// Decide what a raw submission resolves to.
///
/// The `#` prefix is applied before validation, so a bare `RRGGBB` string is
/// accepted. Case is preserved. Anything that still fails validation
/// resolves to `fallback` (the first configured preset); there is no error
/// path for bad input.
pub fn resolve_submission(raw: &str, fallback: &HexColor) -> HexColor {
    let candidate = if raw.starts_with('#') {
        raw.to_string()
    } else {
        format!("#{raw}")
    };

    if is_valid_hex(&candidate) {
        HexColor::from(candidate)
    } else {
        fallback.clone()
    }
}

/// The hex submission handler.
///
/// Owns no text and renders nothing: it reads the injected field on submit,
/// normalizes and validates, and emits the canonical selection event.
pub struct HexInputState {
    config: Arc<PickerConfig>,
    read_field: FieldReader,
}

impl HexInputState {
    /// Construct with a typed reference to the field read on submit.
    pub fn new(field: &Entity<HexField>, config: Arc<PickerConfig>) -> Self {
        let field = field.downgrade();
        let read_field: FieldReader = Rc::new(move |cx| {
            field
                .upgrade()
                .map(|field| SharedString::from(field.read(cx).text().to_string()))
                .unwrap_or_default()
        });

        Self { config, read_field }
    }

    /// Construct with a custom reader, for hosts that own a different field
    /// implementation.
    pub fn with_reader(read_field: FieldReader, config: Arc<PickerConfig>) -> Self {
        Self { config, read_field }
    }

    /// Read the field and emit the resolved color. Invalid input silently
    /// degrades to the first preset; subscribers cannot tell the two cases
    /// apart.
    pub fn submit(&mut self, cx: &mut Context<Self>) {
        let raw = (self.read_field)(cx);
        self.submit_raw(&raw, cx);
    }

    /// Resolve and emit `raw` directly, for callers that already hold the
    /// text.
    pub fn submit_raw(&mut self, raw: &str, cx: &mut Context<Self>) {
        let color = resolve_submission(raw, &self.config.fallback());
        tracing::trace!(raw, color = %color, "hex submitted");
        cx.emit(ColorPickerEvent::Selected(color));
    }
}

impl EventEmitter<ColorPickerEvent> for HexInputState {}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> HexColor {
        HexColor::from("#ff0000")
    }

    #[test]
    fn valid_hex_passes_through_unchanged() {
        assert_eq!(resolve_submission("#ff8080", &fallback()).as_str(), "#ff8080");
    }

    #[test]
    fn bare_digits_gain_a_prefix_before_validation() {
        assert_eq!(resolve_submission("00ff00", &fallback()).as_str(), "#00ff00");
        assert_eq!(resolve_submission("ff0000", &fallback()).as_str(), "#ff0000");
    }

    #[test]
    fn case_is_preserved_not_normalized() {
        assert_eq!(resolve_submission("FF8080", &fallback()).as_str(), "#FF8080");
        assert_eq!(resolve_submission("#AbCdEf", &fallback()).as_str(), "#AbCdEf");
    }

    #[test]
    fn invalid_input_degrades_to_the_fallback() {
        for raw in ["", "#", "xyz", "#xyz", "12345", "1234567", "not-a-color", "#ff80"] {
            assert_eq!(
                resolve_submission(raw, &fallback()).as_str(),
                "#ff0000",
                "{raw:?} should resolve to the fallback"
            );
        }
    }

    #[test]
    fn fallback_is_taken_verbatim_even_if_not_hex() {
        // Presets are trusted; a named fallback propagates unvalidated.
        let named = HexColor::from("red");
        assert_eq!(resolve_submission("nope", &named).as_str(), "red");
    }

    #[test]
    fn double_prefix_is_not_stripped() {
        // "##ff0000" keeps its extra "#" and fails validation.
        assert_eq!(resolve_submission("##ff0000", &fallback()).as_str(), "#ff0000");
    }
}
