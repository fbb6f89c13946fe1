use gpui::{Hsla, Rgba, SharedString};
use once_cell::sync::Lazy;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// A color value as entered or configured, e.g. `#ff8080`.
///
/// The string is carried verbatim: case is never changed, and trusted preset
/// values (including non-hex names like `red`) pass through unaltered.
/// Validity is a property checked at the input seam ([`is_valid_hex`]), not
/// an invariant of the type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(SharedString);

impl HexColor {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid_hex(&self) -> bool {
        is_valid_hex(&self.0)
    }

    /// The CSS declaration for painting this color as a background, in the
    /// exact textual form `background-color:<value>`.
    pub fn background_style(&self) -> String {
        format!("background-color:{}", self.0)
    }

    /// Best-effort paint color. Valid `#RRGGBB` strings parse per channel;
    /// CSS basic color names resolve through a small table; anything else is
    /// `None` and callers pick their own surface fallback. The stored string
    /// is unaffected either way.
    pub fn to_hsla(&self) -> Option<Hsla> {
        if let Some(rgba) = parse_rgb_hex(&self.0) {
            return Some(rgba.into());
        }

        CSS_BASIC_COLORS
            .get(self.0.to_ascii_lowercase().as_str())
            .map(|rgba| (*rgba).into())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for HexColor {
    fn from(value: &str) -> Self {
        Self(SharedString::from(value.to_string()))
    }
}

impl From<String> for HexColor {
    fn from(value: String) -> Self {
        Self(SharedString::from(value))
    }
}

impl From<SharedString> for HexColor {
    fn from(value: SharedString) -> Self {
        Self(value)
    }
}

impl JsonSchema for HexColor {
    fn schema_name() -> Cow<'static, str> {
        "HexColor".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

/// Whether `value` is a 6-digit hex color: exactly `#` followed by six
/// hexadecimal digits, either case. Total over arbitrary strings.
pub fn is_valid_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };

    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_rgb_hex(value: &str) -> Option<Rgba> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    let red = channel(0..2)?;
    let green = channel(2..4)?;
    let blue = channel(4..6)?;

    Some(Rgba {
        r: red as f32 / 255.0,
        g: green as f32 / 255.0,
        b: blue as f32 / 255.0,
        a: 1.0,
    })
}

/// The 16 CSS basic color names, for painting named presets.
static CSS_BASIC_COLORS: Lazy<HashMap<&'static str, Rgba>> = Lazy::new(|| {
    HashMap::from([
        ("aqua", gpui::rgb(0x00ffff)),
        ("black", gpui::rgb(0x000000)),
        ("blue", gpui::rgb(0x0000ff)),
        ("fuchsia", gpui::rgb(0xff00ff)),
        ("gray", gpui::rgb(0x808080)),
        ("green", gpui::rgb(0x008000)),
        ("lime", gpui::rgb(0x00ff00)),
        ("maroon", gpui::rgb(0x800000)),
        ("navy", gpui::rgb(0x000080)),
        ("olive", gpui::rgb(0x808000)),
        ("purple", gpui::rgb(0x800080)),
        ("red", gpui::rgb(0xff0000)),
        ("silver", gpui::rgb(0xc0c0c0)),
        ("teal", gpui::rgb(0x008080)),
        ("white", gpui::rgb(0xffffff)),
        ("yellow", gpui::rgb(0xffff00)),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use regex::Regex;

    fn reference_regex() -> Regex {
        Regex::new("(?i)^#[0-9A-F]{6}$").unwrap()
    }

    #[test]
    fn accepts_six_hex_digits_either_case() {
        for value in ["#000000", "#ffffff", "#FFFFFF", "#ff8080", "#AbCdEf", "#123abc"] {
            assert!(is_valid_hex(value), "{value} should be valid");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for value in [
            "", "#", "ff0000", "#fffff", "#fffffff", "#ggffee", "##fffff", "#ff ff0",
            "#ffffff ", " #ffffff", "#ffffff\n", "#ÿÿÿÿÿÿ", "red",
        ] {
            assert!(!is_valid_hex(value), "{value:?} should be invalid");
        }
    }

    #[test]
    fn background_style_exact_form() {
        assert_eq!(
            HexColor::from("#000000").background_style(),
            "background-color:#000000"
        );
        assert_eq!(
            HexColor::from("#ff8080").background_style(),
            "background-color:#ff8080"
        );
    }

    #[test]
    fn case_is_preserved() {
        let color = HexColor::from("#FF8080");
        assert_eq!(color.as_str(), "#FF8080");
        assert_eq!(color.background_style(), "background-color:#FF8080");
    }

    #[test]
    fn hex_strings_paint() {
        let hsla = HexColor::from("#ff0000").to_hsla().unwrap();
        assert_eq!(hsla, Hsla::from(gpui::rgb(0xff0000)));
    }

    #[test]
    fn named_colors_paint_but_do_not_validate() {
        let color = HexColor::from("red");
        assert!(!color.is_valid_hex());
        assert_eq!(color.to_hsla(), Some(Hsla::from(gpui::rgb(0xff0000))));
        assert_eq!(
            HexColor::from("Lime").to_hsla(),
            Some(Hsla::from(gpui::rgb(0x00ff00)))
        );
        assert_eq!(HexColor::from("not-a-color").to_hsla(), None);
    }

    proptest! {
        #[test]
        fn agrees_with_reference_regex(value in "\\PC*") {
            prop_assert_eq!(is_valid_hex(&value), reference_regex().is_match(&value));
        }

        #[test]
        fn agrees_with_reference_regex_near_misses(value in "#?[0-9a-fA-Fg#]{0,8}") {
            prop_assert_eq!(is_valid_hex(&value), reference_regex().is_match(&value));
        }
    }
}
