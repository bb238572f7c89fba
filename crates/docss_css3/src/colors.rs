//! Color resolution of hex values, color names and the `rgb()`, `rgba()`, `hsl()` and
//! `hsla()` functions.
use crate::node::{Expression, Function, Term, Value};
use crate::units::Unit;
use cow_utils::CowUtils;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// A RGB color with alpha channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RgbColor {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component (0 = transparent, 255 = solid)
    pub a: u8,
}

impl Default for RgbColor {
    fn default() -> Self {
        // Default full alpha (solid) with black color
        RgbColor::new(0, 0, 0)
    }
}

impl RgbColor {
    /// Create a new solid color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b, a: 255 }
    }

    /// Create a new color with r,g,b and alpha values
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        RgbColor { r, g, b, a }
    }

    fn from_u32(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        RgbColor::new(r, g, b)
    }

    /// Parses 3 or 6 hex digits, with or without a leading `#`. With 3 digits, every digit is
    /// doubled (`#abc` is `#aabbcc`).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            3 => {
                let nibble = |shift: u32| ((value >> shift) & 0xf) as u8 * 0x11;
                Some(RgbColor::new(nibble(8), nibble(4), nibble(0)))
            }
            6 => Some(RgbColor::from_u32(value)),
            _ => None,
        }
    }

    /// Looks up a color name. Names are case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        COLOR_NAMES
            .get(name.cow_to_ascii_lowercase().as_ref())
            .copied()
    }

    /// Resolves one of the color functions `rgb()`, `rgba()`, `hsl()` and `hsla()`. Every
    /// function takes three components and an optional alpha value.
    pub fn from_function(function: &Function) -> Option<Self> {
        let args = function
            .expression
            .terms
            .iter()
            .map(Component::from_term)
            .collect::<Option<Vec<_>>>()?;

        let (c1, c2, c3, alpha) = match args.as_slice() {
            [c1, c2, c3] => (*c1, *c2, *c3, None),
            [c1, c2, c3, a] => (*c1, *c2, *c3, Some(*a)),
            _ => return None,
        };
        let a = alpha.map_or(255, Component::alpha);

        match function.name.cow_to_ascii_lowercase().as_ref() {
            "rgb" | "rgba" => Some(RgbColor::with_alpha(
                c1.channel(),
                c2.channel(),
                c3.channel(),
                a,
            )),
            "hsl" | "hsla" => {
                let (r, g, b) = hsl_to_rgb(c1.value, c2.percentage(), c3.percentage());
                Some(RgbColor::with_alpha(r, g, b, a))
            }
            _ => None,
        }
    }
}

/// Numeric argument of a color function
#[derive(Clone, Copy, Debug)]
struct Component {
    value: f64,
    percent: bool,
}

impl Component {
    fn from_term(term: &Term) -> Option<Self> {
        let Value::Number { unit, .. } = &term.value else {
            return None;
        };

        Some(Component {
            value: term.to_number().ok()?,
            percent: *unit == Unit::Percent,
        })
    }

    /// Color channel: a percentage scales 0-100% onto 0-255 (rounded down), a plain number is
    /// clamped.
    fn channel(self) -> u8 {
        if self.percent {
            (255.0 * self.value.clamp(0.0, 100.0) / 100.0).floor() as u8
        } else {
            self.value.clamp(0.0, 255.0) as u8
        }
    }

    /// Alpha channel: a plain number is a fraction between 0 and 1
    fn alpha(self) -> u8 {
        if self.percent {
            self.channel()
        } else {
            (self.value.clamp(0.0, 1.0) * 255.0).floor() as u8
        }
    }

    /// Saturation and lightness are percentages, with or without the `%`
    fn percentage(self) -> f64 {
        self.value.clamp(0.0, 100.0)
    }
}

/// Converts hue (degrees), saturation and lightness (percentages) to RGB. All three values are
/// first scaled to the 0-255 range, and the sector calculation is done in that range.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let h = hue.rem_euclid(360.0) * 255.0 / 360.0;
    let s = saturation * 255.0 / 100.0;
    let l = lightness * 255.0 / 100.0;

    let chroma = (255.0 - (2.0 * l - 255.0).abs()) * s / 255.0;
    let sector = h * 6.0 / 255.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match sector.floor() as u32 % 6 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let byte = |v: f64| (v + m).round().clamp(0.0, 255.0) as u8;
    (byte(r), byte(g), byte(b))
}

/// Returns true when the value looks like a color: a `#` with 3 or 6 hex digits, 3 or 6 bare hex
/// digits (but not only decimal digits), or a known color name.
pub fn is_color(value: &str) -> bool {
    let is_hex = |s: &str| matches!(s.len(), 3 | 6) && s.chars().all(|c| c.is_ascii_hexdigit());

    if let Some(hex) = value.strip_prefix('#') {
        return is_hex(hex);
    }
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    is_hex(value) || RgbColor::from_name(value).is_some()
}

fn is_color_function(name: &str) -> bool {
    matches!(
        name.cow_to_ascii_lowercase().as_ref(),
        "rgb" | "rgba" | "hsl" | "hsla"
    )
}

impl Term {
    /// Returns true when the term is shaped like a color. This does not resolve function
    /// arguments.
    pub fn is_color(&self) -> bool {
        match &self.value {
            Value::Hex(hex) => is_color(&format!("#{hex}")),
            Value::Ident(value) | Value::String(value) => is_color(value),
            Value::Function(function) => is_color_function(&function.name),
            _ => false,
        }
    }

    /// Resolves the term to a color
    pub fn to_color(&self) -> Option<RgbColor> {
        match &self.value {
            Value::Hex(hex) => RgbColor::from_hex(hex),
            Value::Ident(value) | Value::String(value) if is_color(value) => {
                RgbColor::from_name(value).or_else(|| RgbColor::from_hex(value))
            }
            Value::Function(function) => RgbColor::from_function(function),
            _ => None,
        }
    }
}

impl Expression {
    /// Returns true when the expression is a single color
    pub fn is_color(&self) -> bool {
        matches!(self.terms.as_slice(), [term] if term.is_color())
    }

    /// Resolves the first term of the expression to a color
    pub fn to_color(&self) -> Option<RgbColor> {
        self.terms.first().and_then(Term::to_color)
    }
}

lazy_static! {
    static ref COLOR_NAMES: HashMap<&'static str, RgbColor> = CSS_COLOR_NAMES
        .iter()
        .map(|(name, value)| (*name, RgbColor::from_u32(*value)))
        .collect();
}

// Values for this table are taken from https://www.w3.org/TR/css-color-3/#svg-color
const CSS_COLOR_NAMES: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
    ("rebeccapurple", 0x663399),
];
