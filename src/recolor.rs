use image::RgbaImage;

use crate::error::{Error, Result};

/// A flat replacement color. An alpha-less tint keeps each pixel's original
/// alpha; a tint that carries alpha overwrites it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    r: u8,
    g: u8,
    b: u8,
    a: Option<u8>,
}

impl Tint {
    pub fn rgb(r: u8, g: u8, b: u8) -> Tint {
        Tint { r, g, b, a: None }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Tint {
        Tint { r, g, b, a: Some(a) }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(color: &str) -> Result<Tint> {
        let digits = color.strip_prefix('#').unwrap_or(color);
        match digits.len() {
            6 => {
                let mut parts = [0u8; 3];
                hex::decode_to_slice(digits, &mut parts)
                    .map_err(|_| Error::Color(color.to_owned()))?;
                Ok(Tint::rgb(parts[0], parts[1], parts[2]))
            }
            8 => {
                let mut parts = [0u8; 4];
                hex::decode_to_slice(digits, &mut parts)
                    .map_err(|_| Error::Color(color.to_owned()))?;
                Ok(Tint::rgba(parts[0], parts[1], parts[2], parts[3]))
            }
            _ => Err(Error::Color(color.to_owned())),
        }
    }
}

/// Replaces the color of every non-transparent pixel of every image with the
/// tint, in place. Fully transparent pixels keep their color channels and
/// stay at alpha 0, so applying the same tint again is a no-op.
pub fn recolor_images<'a, I>(images: I, tint: Tint)
where
    I: IntoIterator<Item = &'a mut RgbaImage>,
{
    for image in images {
        let buffer: &mut [u8] = image.as_mut();
        for px in buffer.chunks_exact_mut(4) {
            if px[3] == 0 {
                continue;
            }
            px[0] = tint.r;
            px[1] = tint.g;
            px[2] = tint.b;
            if let Some(a) = tint.a {
                px[3] = a;
            }
        }
    }
}
