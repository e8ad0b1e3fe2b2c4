use crate::core::data::colour::Colour;

/// Converts hue/saturation/brightness (each in `[0, 1]`, hue wrapping) to RGB.
///
/// Channels are rounded to the nearest byte, matching the usual HSB model
/// found in desktop toolkits.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    if saturation == 0.0 {
        let grey = to_channel(brightness);
        return Colour {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let h = (hue - hue.floor()) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Colour {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

#[inline]
fn to_channel(value: f32) -> u8 {
    (value * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn secondary_hues() {
        assert_eq!(hsb_to_rgb(1.0 / 6.0, 1.0, 1.0), Colour { r: 255, g: 255, b: 0 });
        assert_eq!(hsb_to_rgb(0.5, 1.0, 1.0), Colour { r: 0, g: 255, b: 255 });
        assert_eq!(hsb_to_rgb(5.0 / 6.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 255 });
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(hsb_to_rgb(1.0, 1.0, 1.0), hsb_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsb_to_rgb(1.5, 1.0, 1.0), hsb_to_rgb(0.5, 1.0, 1.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsb_to_rgb(0.3, 0.0, 0.5), Colour { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(hsb_to_rgb(0.7, 1.0, 0.0), Colour::BLACK);
    }
}
