//! Colors and the fixed palette catalog

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha byte
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS color string: `#rrggbb` when opaque, `#rrggbbaa` otherwise
    pub fn to_css(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Center/outer color pair for one flower head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub center: Color,
    pub outer: Color,
    /// The periodic red rose; glows brighter
    pub distinguished: bool,
}

impl Palette {
    const fn standard(center: Color, outer: Color) -> Self {
        Self {
            center,
            outer,
            distinguished: false,
        }
    }
}

/// Standard pastel catalog
pub const PETAL_PALETTES: [Palette; 10] = [
    Palette::standard(Color::rgb(0xff, 0xeb, 0x9c), Color::rgb(0xff, 0x7e, 0xb3)), // yellow -> pink
    Palette::standard(Color::rgb(0xff, 0xd4, 0xa3), Color::rgb(0xff, 0xad, 0x66)), // peach -> orange
    Palette::standard(Color::rgb(0xff, 0xe5, 0xf1), Color::rgb(0xcc, 0x8b, 0xff)), // white -> purple
    Palette::standard(Color::rgb(0xff, 0xf5, 0xb8), Color::rgb(0xff, 0x5f, 0x8d)), // pale yellow -> rose
    Palette::standard(Color::rgb(0xff, 0xe0, 0xc4), Color::rgb(0xff, 0xb8, 0x6c)), // cream -> apricot
    Palette::standard(Color::rgb(0xe0, 0xf4, 0xff), Color::rgb(0x9e, 0xcb, 0xff)), // pale blue -> pastel blue
    Palette::standard(Color::rgb(0xff, 0xfe, 0xf5), Color::rgb(0xff, 0xf5, 0xe6)), // warm white -> soft white
    Palette::standard(Color::rgb(0xe8, 0xff, 0xe8), Color::rgb(0xb5, 0xff, 0xd9)), // pale mint -> mint
    Palette::standard(Color::rgb(0xff, 0xe5, 0xe5), Color::rgb(0xff, 0x9f, 0x9f)), // pale pink -> coral
    Palette::standard(Color::rgb(0xd4, 0xb3, 0xff), Color::rgb(0x5a, 0x2b, 0xff)), // lavender -> deep violet
];

/// Every n-th flower is a red rose
pub const RED_ROSE: Palette = Palette {
    center: Color::rgb(0xff, 0x4d, 0x4d),
    outer: Color::rgb(0xd4, 0x00, 0x00),
    distinguished: true,
};

pub const STEM_COLORS: [Color; 3] = [
    Color::rgb(0x66, 0xcc, 0x66),
    Color::rgb(0x55, 0xaa, 0x55),
    Color::rgb(0x99, 0xcc, 0x66),
];

pub const FIREFLY_COLORS: [Color; 4] = [
    Color::rgb(0xff, 0xeb, 0x9c),
    Color::rgb(0xb5, 0xff, 0xd9),
    Color::rgb(0x9e, 0xcb, 0xff),
    Color::rgb(0xff, 0xf8, 0xdc),
];

/// Warm white at the heart of every flower center
pub const CENTER_HIGHLIGHT: Color = Color::rgb(0xff, 0xf8, 0xdc);

/// Transparent rim of the flower center glow
pub const CENTER_FADE: Color = Color::rgba(0xff, 0xc8, 0x64, 0x00);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_opaque() {
        assert_eq!(Color::rgb(0xff, 0x7e, 0xb3).to_css(), "#ff7eb3");
        assert_eq!(Color::BLACK.to_css(), "#000000");
    }

    #[test]
    fn test_css_translucent() {
        let edge = Color::rgb(0xff, 0x7e, 0xb3).with_alpha(0x80);
        assert_eq!(edge.to_css(), "#ff7eb380");
        assert_eq!(CENTER_FADE.to_css(), "#ffc86400");
    }

    #[test]
    fn test_catalog_is_not_distinguished() {
        assert!(PETAL_PALETTES.iter().all(|p| !p.distinguished));
        assert!(RED_ROSE.distinguished);
        assert!(!PETAL_PALETTES.contains(&RED_ROSE));
    }
}
