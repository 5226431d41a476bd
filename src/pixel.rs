/// One pixel, in the byte order BMP stores it.
///
/// Alpha only carries data for 32-bit images. 24-bit decode leaves it at zero
/// and 24-bit encode ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

    /// Color with alpha left at zero.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Whether R, G and B all equal `v`. Alpha is not compared.
    pub(crate) fn is_gray_level(&self, v: u8) -> bool {
        self.r == v && self.g == v && self.b == v
    }
}

/// On-disk pixel depth. Only the two uncompressed true-color depths exist.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 3 bytes per pixel: B, G, R.
    Bgr24,
    /// 4 bytes per pixel: B, G, R, A.
    Bgra32,
}

impl BitDepth {
    /// Map the `bits per pixel` header field. `None` for anything but 24 or 32.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            24 => Some(Self::Bgr24),
            32 => Some(Self::Bgra32),
            _ => None,
        }
    }

    pub fn bits(&self) -> u16 {
        match self {
            Self::Bgr24 => 24,
            Self::Bgra32 => 32,
        }
    }

    /// Bytes per pixel on disk.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgr24 => 3,
            Self::Bgra32 => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Bgra32)
    }
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::alt::BGRA8 {
    fn from(p: Pixel) -> Self {
        rgb::alt::BGRA8 {
            b: p.b,
            g: p.g,
            r: p.r,
            a: p.a,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::alt::BGRA8> for Pixel {
    fn from(p: rgb::alt::BGRA8) -> Self {
        Pixel {
            b: p.b,
            g: p.g,
            r: p.r,
            a: p.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_depth_mapping() {
        assert_eq!(BitDepth::from_bits(24), Some(BitDepth::Bgr24));
        assert_eq!(BitDepth::from_bits(32), Some(BitDepth::Bgra32));
        assert_eq!(BitDepth::from_bits(16), None);
        assert_eq!(BitDepth::Bgra32.bytes_per_pixel(), 4);
        assert!(!BitDepth::Bgr24.has_alpha());
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn bgra8_keeps_channel_order() {
        let px = Pixel::rgba(1, 2, 3, 4);
        let bgra: rgb::alt::BGRA8 = px.into();
        assert_eq!((bgra.b, bgra.g, bgra.r, bgra.a), (3, 2, 1, 4));
        assert_eq!(Pixel::from(bgra), px);
    }
}
