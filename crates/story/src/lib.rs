mod color_picker_story;

pub use color_picker_story::ColorPickerStory;

use color_picker::{h_flex, v_flex, ActiveTheme as _};
use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Initialize logging and the component library. Call once, inside
/// `Application::run`.
pub fn init(cx: &mut App) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    color_picker::init(cx);
}

/// A titled, bordered section of story content.
#[derive(IntoElement)]
pub struct StorySection {
    title: AnyElement,
    children: Vec<AnyElement>,
}

pub(crate) fn section(title: impl IntoElement) -> StorySection {
    StorySection {
        title: title.into_any_element(),
        children: vec![],
    }
}

impl ParentElement for StorySection {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for StorySection {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        v_flex()
            .gap_2()
            .mb_5()
            .w_full()
            .child(h_flex().justify_between().w_full().gap_4().child(self.title))
            .child(
                h_flex()
                    .flex_wrap()
                    .items_center()
                    .justify_center()
                    .w_full()
                    .gap_4()
                    .p_4()
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .children(self.children),
            )
    }
}
