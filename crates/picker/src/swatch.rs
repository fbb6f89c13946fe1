use crate::color::HexColor;
use crate::theme::ActiveTheme;
use std::rc::Rc;

use gpui::{
    div, prelude::FluentBuilder as _, px, App, ElementId, InteractiveElement, IntoElement, Pixels,
    RenderOnce, StatefulInteractiveElement, Styled, Window,
};

/// A fixed-size clickable color square.
///
/// The click handler receives the swatch color verbatim; no validation is
/// applied here or downstream, because swatches only ever show trusted
/// configuration values.
#[derive(IntoElement)]
pub struct Swatch {
    id: ElementId,
    color: HexColor,
    size: Pixels,
    selected: bool,
    on_click: Option<Rc<dyn Fn(&HexColor, &mut Window, &mut App) + 'static>>,
}

impl Swatch {
    pub fn new(id: impl Into<ElementId>, color: impl Into<HexColor>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            size: px(24.),
            selected: false,
            on_click: None,
        }
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    /// Show a selection ring around the swatch.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&HexColor, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Swatch {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let fill = self.color.to_hsla().unwrap_or(cx.theme().muted);
        let color = self.color;

        div()
            .id(self.id)
            .flex_none()
            .size(self.size)
            .rounded(cx.theme().radius)
            .border_1()
            .border_color(if self.selected {
                cx.theme().ring
            } else {
                cx.theme().border
            })
            .bg(fill)
            .when(cx.theme().shadow, |this| this.shadow_xs())
            .when_some(self.on_click, |this, on_click| {
                this.cursor_pointer().on_click(move |_, window, cx| {
                    on_click(&color, window, cx);
                })
            })
    }
}
