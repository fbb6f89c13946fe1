use gpui::{hsla, px, App, Global, Hsla, Pixels, SharedString, WindowAppearance};
use std::ops::{Deref, DerefMut};

/// Install the global [`Theme`], following the system appearance.
pub fn init(cx: &mut App) {
    let mode = match cx.window_appearance() {
        WindowAppearance::Dark | WindowAppearance::VibrantDark => ThemeMode::Dark,
        WindowAppearance::Light | WindowAppearance::VibrantLight => ThemeMode::Light,
    };
    cx.set_global(Theme::new(mode));
}

pub trait ActiveTheme {
    fn theme(&self) -> &Theme;
}

impl ActiveTheme for App {
    #[inline(always)]
    fn theme(&self) -> &Theme {
        Theme::global(self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[inline(always)]
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Colors the picker widgets consume.
#[derive(Clone, Debug)]
pub struct ThemeColor {
    pub background: Hsla,
    pub foreground: Hsla,
    pub card: Hsla,
    pub caret: Hsla,
    pub border: Hsla,
    pub input: Hsla,
    pub ring: Hsla,
    pub primary: Hsla,
    pub muted: Hsla,
    pub muted_foreground: Hsla,
}

impl ThemeColor {
    fn light() -> Self {
        Self {
            background: hsla(0., 0., 1., 1.),
            foreground: hsla(240. / 360., 0.10, 0.04, 1.),
            card: hsla(0., 0., 1., 1.),
            caret: hsla(240. / 360., 0.10, 0.04, 1.),
            border: hsla(240. / 360., 0.06, 0.90, 1.),
            input: hsla(240. / 360., 0.06, 0.90, 1.),
            ring: hsla(240. / 360., 0.05, 0.65, 1.),
            primary: hsla(240. / 360., 0.06, 0.10, 1.),
            muted: hsla(240. / 360., 0.05, 0.96, 1.),
            muted_foreground: hsla(240. / 360., 0.04, 0.46, 1.),
        }
    }

    fn dark() -> Self {
        Self {
            background: hsla(240. / 360., 0.10, 0.04, 1.),
            foreground: hsla(0., 0., 0.98, 1.),
            card: hsla(240. / 360., 0.10, 0.06, 1.),
            caret: hsla(0., 0., 0.98, 1.),
            border: hsla(240. / 360., 0.04, 0.16, 1.),
            input: hsla(240. / 360., 0.04, 0.16, 1.),
            ring: hsla(240. / 360., 0.05, 0.84, 1.),
            primary: hsla(0., 0., 0.98, 1.),
            muted: hsla(240. / 360., 0.04, 0.16, 1.),
            muted_foreground: hsla(240. / 360., 0.05, 0.65, 1.),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub colors: ThemeColor,
    pub mode: ThemeMode,
    pub font_family: SharedString,
    pub mono_font_family: SharedString,
    pub font_size: Pixels,
    /// Radius for small elements (swatches, the field).
    pub radius: Pixels,
    /// Radius for the picker panel.
    pub radius_lg: Pixels,
    pub shadow: bool,
}

impl Deref for Theme {
    type Target = ThemeColor;

    fn deref(&self) -> &Self::Target {
        &self.colors
    }
}

impl DerefMut for Theme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.colors
    }
}

impl Global for Theme {}

impl Theme {
    #[inline(always)]
    pub fn global(cx: &App) -> &Theme {
        cx.global::<Theme>()
    }

    #[inline(always)]
    pub fn global_mut(cx: &mut App) -> &mut Theme {
        cx.global_mut::<Theme>()
    }

    #[inline(always)]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn new(mode: ThemeMode) -> Self {
        Self {
            colors: if mode.is_dark() {
                ThemeColor::dark()
            } else {
                ThemeColor::light()
            },
            mode,
            font_family: default_font_family(),
            mono_font_family: default_mono_font_family(),
            font_size: px(14.),
            radius: px(4.),
            radius_lg: px(8.),
            shadow: true,
        }
    }
}

fn default_font_family() -> SharedString {
    if cfg!(target_os = "macos") {
        ".SystemUIFont".into()
    } else if cfg!(target_os = "windows") {
        "Segoe UI".into()
    } else {
        "FreeSans".into()
    }
}

fn default_mono_font_family() -> SharedString {
    if cfg!(target_os = "macos") {
        "Menlo".into()
    } else if cfg!(target_os = "windows") {
        "Consolas".into()
    } else {
        "DejaVu Sans Mono".into()
    }
}
