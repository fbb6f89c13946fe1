use crate::section;
use color_picker::{
    h_flex, v_flex, ActiveTheme as _, ColorPicker, ColorPickerEvent, HexColor, PickerConfig,
};

use gpui::{
    div, px, App, AppContext as _, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window,
};

const CONFIGURED_PICKER_JSON: &str =
    r##"{"presets": ["#ff8080", "#80ff80", "#8080ff", "red"], "initial": "#8080ff"}"##;

/// Demonstrates the composed picker with default and configured presets,
/// and logs the selection events a host receives.
pub struct ColorPickerStory {
    picker: Entity<ColorPicker>,
    configured_picker: Entity<ColorPicker>,
    last_selected: Option<HexColor>,
    selection_count: usize,
    _subscriptions: Vec<Subscription>,
}

impl ColorPickerStory {
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let picker = ColorPicker::view(PickerConfig::default(), window, cx);

        let configured = PickerConfig::from_json(CONFIGURED_PICKER_JSON).unwrap_or_default();
        let configured_picker = ColorPicker::view(configured, window, cx);

        let mut subscriptions = Vec::new();
        subscriptions.push(
            cx.subscribe(&picker, |this, _, event, cx| this.on_selected(event, cx)),
        );
        subscriptions.push(
            cx.subscribe(&configured_picker, |this, _, event, cx| {
                this.on_selected(event, cx)
            }),
        );

        Self {
            picker,
            configured_picker,
            last_selected: None,
            selection_count: 0,
            _subscriptions: subscriptions,
        }
    }

    fn on_selected(&mut self, event: &ColorPickerEvent, cx: &mut Context<Self>) {
        let ColorPickerEvent::Selected(color) = event;
        tracing::info!(color = %color, "story received selection");
        self.last_selected = Some(color.clone());
        self.selection_count += 1;
        cx.notify();
    }

    fn status_line(&self) -> SharedString {
        match &self.last_selected {
            Some(color) => format!(
                "last selected: {} ({} events)",
                color, self.selection_count
            )
            .into(),
            None => "no selection yet: click a swatch or type a hex value".into(),
        }
    }
}

impl Render for ColorPickerStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .p_4()
            .gap_2()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(section("Default presets").child(self.picker.clone()))
            .child(section("Configured presets").child(self.configured_picker.clone()))
            .child(
                h_flex()
                    .gap_2()
                    .text_size(px(12.))
                    .text_color(cx.theme().muted_foreground)
                    .child(div().child(self.status_line())),
            )
    }
}
