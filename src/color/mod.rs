use smart_leds::RGB8;

use crate::wire::WireColor;

pub type Rgb = RGB8;

/// Default color of a lit lamp
pub const LAMP_LIT: Rgb = Rgb {
    r: 255,
    g: 196,
    b: 64,
};

/// Default color of an unlit lamp
pub const LAMP_UNLIT: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Color to paint a wire of the given color with
pub const fn wire_rgb(color: WireColor) -> Rgb {
    match color {
        WireColor::Red => Rgb { r: 255, g: 0, b: 0 },
        WireColor::Green => Rgb { r: 0, g: 255, b: 0 },
        WireColor::Blue => Rgb { r: 0, g: 0, b: 255 },
    }
}
