use crate::color::HexColor;
use crate::config::PickerConfig;
use crate::event::ColorPickerEvent;
use crate::h_flex;
use crate::swatch::Swatch;
use std::sync::Arc;

use gpui::{
    Context, ElementId, EventEmitter, IntoElement, ParentElement as _, Render, Styled as _, Window,
};

/// The preset swatch row.
///
/// Clicking a swatch re-emits the configured color verbatim: presets are
/// trusted and bypass hex validation entirely. The bar keeps no selection
/// state of its own.
pub struct SwatchBar {
    config: Arc<PickerConfig>,
}

impl SwatchBar {
    /// `config` is expected to be resolved ([`PickerConfig::resolve`]);
    /// default injection happens there, once, not per component.
    pub fn new(config: Arc<PickerConfig>) -> Self {
        Self { config }
    }

    pub fn presets(&self) -> &[HexColor] {
        &self.config.presets
    }

    /// Emit the clicked color, unchanged. Exactly one emission per call.
    pub fn on_swatch_clicked(&mut self, color: HexColor, cx: &mut Context<Self>) {
        tracing::trace!(color = %color, "swatch clicked");
        cx.emit(ColorPickerEvent::Selected(color));
    }
}

impl EventEmitter<ColorPickerEvent> for SwatchBar {}

impl Render for SwatchBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .gap_2()
            .children(self.config.presets.iter().enumerate().map(|(ix, color)| {
                Swatch::new(
                    ElementId::NamedInteger("swatch".into(), ix as u64),
                    color.clone(),
                )
                .on_click(cx.listener(|this, color: &HexColor, _window, cx| {
                    this.on_swatch_clicked(color.clone(), cx);
                }))
            }))
    }
}
