use crate::event::HexFieldEvent;
use crate::h_flex;
use crate::theme::ActiveTheme;

use gpui::{
    div, prelude::FluentBuilder as _, px, App, Context, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, Keystroke, MouseButton, MouseDownEvent,
    ParentElement as _, Render, SharedString, Styled, Window,
};

/// A minimal single-line text field for hex color entry.
///
/// This is the externally-owned collaborator the submission handler reads
/// from; it never validates or normalizes its content. Editing is
/// append/backspace with the cursor pinned to the end, which covers the
/// 7-character ASCII strings the field exists for.
pub struct HexField {
    focus_handle: FocusHandle,
    value: String,
    placeholder: SharedString,
    max_len: usize,
}

impl HexField {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            value: String::new(),
            placeholder: SharedString::default(),
            max_len: 16,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Current field content, verbatim.
    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, text: impl Into<String>, cx: &mut Context<Self>) {
        self.value = text.into();
        cx.emit(HexFieldEvent::Change(SharedString::from(self.value.clone())));
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt {
            return;
        }

        match keystroke.key.as_str() {
            "enter" => {
                cx.emit(HexFieldEvent::Submit);
            }
            "backspace" => {
                if self.value.pop().is_some() {
                    cx.emit(HexFieldEvent::Change(SharedString::from(self.value.clone())));
                    cx.notify();
                }
            }
            "escape" => {
                if !self.value.is_empty() {
                    self.value.clear();
                    cx.emit(HexFieldEvent::Change(SharedString::from(self.value.clone())));
                    cx.notify();
                }
            }
            _ => {
                let Some(text) = Self::typed_text(keystroke) else {
                    return;
                };
                if self.value.len() + text.len() > self.max_len {
                    return;
                }
                self.value.push_str(&text);
                cx.emit(HexFieldEvent::Change(SharedString::from(self.value.clone())));
                cx.notify();
            }
        }
    }

    // The platform reports the produced character in `key_char` when the
    // keystroke types something; fall back to single-character key names for
    // platforms that leave it unset.
    fn typed_text(keystroke: &Keystroke) -> Option<String> {
        if let Some(key_char) = &keystroke.key_char {
            if !key_char.is_empty() && key_char.chars().all(|c| c.is_ascii_graphic()) {
                return Some(key_char.clone());
            }
            return None;
        }

        let mut chars = keystroke.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_graphic() => Some(c.to_string()),
            _ => None,
        }
    }
}

impl Focusable for HexField {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl EventEmitter<HexFieldEvent> for HexField {}

impl Render for HexField {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let is_empty = self.value.is_empty();

        h_flex()
            .id("hex-field")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, _cx| {
                    this.focus_handle.focus(window);
                }),
            )
            .h(px(28.))
            .w(px(110.))
            .px_2()
            .overflow_hidden()
            .text_sm()
            .font_family(cx.theme().mono_font_family.clone())
            .bg(cx.theme().background)
            .border_1()
            .border_color(if is_focused {
                cx.theme().ring
            } else {
                cx.theme().input
            })
            .rounded(cx.theme().radius)
            .map(|this| {
                if is_empty {
                    this.text_color(cx.theme().muted_foreground)
                        .child(self.placeholder.clone())
                } else {
                    this.text_color(cx.theme().foreground)
                        .child(SharedString::from(self.value.clone()))
                }
            })
            .when(is_focused, |this| {
                this.child(div().flex_none().w(px(1.)).h(px(14.)).bg(cx.theme().caret))
            })
    }
}
