use color_picker_story::ColorPickerStory;
use gpui::{
    px, size, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions,
};

fn main() {
    let app = Application::new();

    app.run(move |cx| {
        color_picker_story::init(cx);
        cx.activate(true);

        let bounds = Bounds::centered(None, size(px(520.), px(680.)), cx);

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some("Color Picker".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| ColorPickerStory::view(window, cx),
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
