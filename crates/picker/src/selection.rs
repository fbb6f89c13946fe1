use crate::color::HexColor;
use crate::config::PickerConfig;
use crate::event::ColorPickerEvent;
use crate::theme::ActiveTheme;
use crate::v_flex;

use gpui::{
    div, px, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement as _, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

/// Shows the currently selected color and re-broadcasts it when clicked.
///
/// The click is a pass-through confirmation: the displayed color is emitted
/// again, unchanged, so hosts treat "re-pick the current color" and "pick a
/// new color" identically. The displayed color is an input pushed in by the
/// host; this component never decides what is selected.
pub struct SelectionDisplay {
    color: HexColor,
}

impl SelectionDisplay {
    /// Starts at the configured initial color, else the first preset.
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            color: config.initial_color(),
        }
    }

    pub fn color(&self) -> &HexColor {
        &self.color
    }

    /// Host-driven update when a new color was selected elsewhere.
    pub fn set_color(&mut self, color: HexColor, cx: &mut Context<Self>) {
        if self.color != color {
            self.color = color;
            cx.notify();
        }
    }

    fn on_click(&mut self, cx: &mut Context<Self>) {
        tracing::trace!(color = %self.color, "selection re-broadcast");
        cx.emit(ColorPickerEvent::Selected(self.color.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_preset_when_no_initial_configured() {
        let config = PickerConfig::default().resolve();
        let display = SelectionDisplay::new(&config);
        assert_eq!(display.color().as_str(), "#ff0000");
        assert_eq!(
            display.color().background_style(),
            "background-color:#ff0000"
        );
    }

    #[test]
    fn starts_at_configured_initial() {
        let config = PickerConfig {
            presets: vec![HexColor::from("#00ff00")],
            initial: Some(HexColor::from("#ff8080")),
        }
        .resolve();
        let display = SelectionDisplay::new(&config);
        assert_eq!(display.color().as_str(), "#ff8080");
    }
}

impl EventEmitter<ColorPickerEvent> for SelectionDisplay {}

impl Render for SelectionDisplay {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let fill = self.color.to_hsla().unwrap_or(cx.theme().muted);

        v_flex()
            .gap_1()
            .w_full()
            .child(
                div()
                    .id("selection-surface")
                    .w_full()
                    .h(px(48.))
                    .rounded(cx.theme().radius)
                    .border_1()
                    .border_color(cx.theme().border)
                    .bg(fill)
                    .cursor_pointer()
                    .on_click(cx.listener(|this, _, _window, cx| this.on_click(cx))),
            )
            .child(
                div()
                    .font_family(cx.theme().mono_font_family.clone())
                    .text_size(px(10.))
                    .text_color(cx.theme().muted_foreground)
                    .child(SharedString::from(self.color.background_style())),
            )
    }
}
