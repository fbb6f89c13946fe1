use crate::color::HexColor;
use crate::config::PickerConfig;
use crate::event::{ColorPickerEvent, HexFieldEvent};
use crate::field::HexField;
use crate::hex_input::HexInputState;
use crate::selection::SelectionDisplay;
use crate::swatch_bar::SwatchBar;
use crate::theme::ActiveTheme;
use crate::{h_flex, v_flex};
use std::sync::Arc;

use gpui::{
    px, App, AppContext as _, Context, Entity, EventEmitter, IntoElement, ParentElement as _,
    Render, Styled, Subscription, Window,
};

// Composition overview:
// - The leaves stay stateless about the selection; the picker routes every
//   Selected event into the display and re-emits it upward.
// - Header is the selection surface; footer is the preset swatches plus the
//   hex field. Enter in the field drives the submission handler.

pub struct ColorPicker {
    config: Arc<PickerConfig>,
    selection: Entity<SelectionDisplay>,
    swatch_bar: Entity<SwatchBar>,
    hex_field: Entity<HexField>,
    hex_input: Entity<HexInputState>,
    _subscriptions: Vec<Subscription>,
}

impl ColorPicker {
    pub fn view(config: PickerConfig, window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(config, window, cx))
    }

    pub fn new(config: PickerConfig, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let config = Arc::new(config.resolve());

        let selection = cx.new(|_| SelectionDisplay::new(&config));
        let swatch_bar = cx.new(|_| SwatchBar::new(config.clone()));
        let hex_field = cx.new(|cx| HexField::new(cx).placeholder("#rrggbb"));
        let hex_input = cx.new(|_| HexInputState::new(&hex_field, config.clone()));

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.subscribe(&hex_field, |this, _, event, cx| {
            if let HexFieldEvent::Submit = event {
                this.hex_input.update(cx, |hex_input, cx| hex_input.submit(cx));
            }
        }));
        subscriptions.push(
            cx.subscribe(&swatch_bar, |this, _, event, cx| this.on_selected(event, cx)),
        );
        subscriptions.push(
            cx.subscribe(&hex_input, |this, _, event, cx| this.on_selected(event, cx)),
        );
        subscriptions.push(
            cx.subscribe(&selection, |this, _, event, cx| this.on_selected(event, cx)),
        );

        Self {
            config,
            selection,
            swatch_bar,
            hex_field,
            hex_input,
            _subscriptions: subscriptions,
        }
    }

    fn on_selected(&mut self, event: &ColorPickerEvent, cx: &mut Context<Self>) {
        let ColorPickerEvent::Selected(color) = event;
        self.selection
            .update(cx, |selection, cx| selection.set_color(color.clone(), cx));
        cx.emit(event.clone());
    }

    pub fn config(&self) -> &Arc<PickerConfig> {
        &self.config
    }

    /// The color currently shown by the selection display.
    pub fn current_color(&self, cx: &App) -> HexColor {
        self.selection.read(cx).color().clone()
    }

    pub fn hex_field(&self) -> &Entity<HexField> {
        &self.hex_field
    }
}

impl EventEmitter<ColorPickerEvent> for ColorPicker {}

impl Render for ColorPicker {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_3()
            .w(px(260.))
            .p_3()
            .bg(cx.theme().card)
            .border_1()
            .border_color(cx.theme().border)
            .rounded(cx.theme().radius_lg)
            .child(self.selection.clone())
            .child(
                h_flex()
                    .gap_2()
                    .justify_between()
                    .child(self.swatch_bar.clone())
                    .child(self.hex_field.clone()),
            )
    }
}
