//! Design tokens for the marketing sites. No IO, no platform deps.
//!
//! Every theme shares one fixed schema, so switching themes can never hit a
//! missing token: the key set is the struct definition itself. Values are
//! CSS-ready (`Rgb` for colors, length/shadow/easing strings for the rest).

use std::fmt;

/// 24-bit sRGB color
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex form, e.g. `#2563eb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// One color role with its main/light/dark/contrast variants
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorVariant {
    pub main: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
    /// Readable foreground for text placed on `main`
    pub contrast: Rgb,
}

/// Semantic color roles defined by every theme
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Background,
    Text,
    Success,
    Warning,
    Error,
}

/// Color tokens, one [`ColorVariant`] per role
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorTokens {
    pub primary: ColorVariant,
    pub secondary: ColorVariant,
    pub background: ColorVariant,
    pub text: ColorVariant,
    pub success: ColorVariant,
    pub warning: ColorVariant,
    pub error: ColorVariant,
}

impl ColorTokens {
    /// Typed role accessor. Replaces the old dotted-path lookup ("e.g.
    /// `colors.primary.main`") that silently fell back on typos.
    pub fn role(&self, role: ColorRole) -> &ColorVariant {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Background => &self.background,
            ColorRole::Text => &self.text,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
        }
    }
}

/// Named font weights
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeightScale {
    pub light: u16,
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

/// Type scale entry for a text role
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeStyle {
    /// CSS font-size
    pub size: &'static str,
    /// CSS line-height
    pub line_height: &'static str,
    pub weight: u16,
}

/// Typography tokens
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypographyTokens {
    pub font_family: &'static str,
    /// Root font-size the rem scale hangs off
    pub base_size: &'static str,
    pub weights: WeightScale,
    pub heading: TypeStyle,
    pub body: TypeStyle,
    pub button: TypeStyle,
}

/// Border-radius scale (CSS lengths)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RadiusTokens {
    pub none: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub pill: &'static str,
}

/// Box-shadow scale
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShadowTokens {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
}

/// Transition durations and the shared easing curve
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionTokens {
    pub fast: &'static str,
    pub base: &'static str,
    pub slow: &'static str,
    pub easing: &'static str,
}

/// Complete token set for one named theme
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Canonical kebab-case theme name (the persistence key value)
    pub name: &'static str,
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    /// Base unit for the spacing scale, in px
    pub spacing_unit: u32,
    pub radius: RadiusTokens,
    pub shadows: ShadowTokens,
    pub transitions: TransitionTokens,
}

impl ThemeTokens {
    /// Spacing scale: integer factor to CSS length, e.g. `spacing(3)` =
    /// `"24px"` with the default 8px unit
    pub fn spacing(&self, factor: u32) -> String {
        format!("{}px", factor * self.spacing_unit)
    }

    /// "modern-business" (default) - saturated blue/teal on white
    pub fn modern_business() -> Self {
        Self {
            name: "modern-business",
            colors: ColorTokens {
                primary: ColorVariant {
                    main: Rgb(0x25, 0x63, 0xeb),
                    light: Rgb(0x60, 0xa5, 0xfa),
                    dark: Rgb(0x1e, 0x40, 0xaf),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                secondary: ColorVariant {
                    main: Rgb(0x0f, 0x76, 0x6e),
                    light: Rgb(0x2d, 0xd4, 0xbf),
                    dark: Rgb(0x11, 0x5e, 0x59),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                background: ColorVariant {
                    main: Rgb(0xff, 0xff, 0xff),
                    light: Rgb(0xf8, 0xfa, 0xfc),
                    dark: Rgb(0x0f, 0x17, 0x2a),
                    contrast: Rgb(0x0f, 0x17, 0x2a),
                },
                text: ColorVariant {
                    main: Rgb(0x0f, 0x17, 0x2a),
                    light: Rgb(0x47, 0x55, 0x69),
                    dark: Rgb(0x02, 0x06, 0x17),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                success: ColorVariant {
                    main: Rgb(0x15, 0x80, 0x3d),
                    light: Rgb(0x4a, 0xde, 0x80),
                    dark: Rgb(0x16, 0x65, 0x34),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                warning: ColorVariant {
                    main: Rgb(0xb4, 0x53, 0x09),
                    light: Rgb(0xfb, 0xbf, 0x24),
                    dark: Rgb(0x92, 0x40, 0x0e),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                error: ColorVariant {
                    main: Rgb(0xdc, 0x26, 0x26),
                    light: Rgb(0xf8, 0x71, 0x71),
                    dark: Rgb(0x99, 0x1b, 0x1b),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
            },
            typography: TypographyTokens {
                font_family: "'Inter', 'Helvetica Neue', Arial, sans-serif",
                base_size: "16px",
                weights: WeightScale {
                    light: 300,
                    regular: 400,
                    medium: 500,
                    semibold: 600,
                    bold: 700,
                },
                heading: TypeStyle {
                    size: "2.25rem",
                    line_height: "1.2",
                    weight: 700,
                },
                body: TypeStyle {
                    size: "1rem",
                    line_height: "1.6",
                    weight: 400,
                },
                button: TypeStyle {
                    size: "0.9375rem",
                    line_height: "1",
                    weight: 600,
                },
            },
            spacing_unit: 8,
            radius: RadiusTokens {
                none: "0",
                sm: "4px",
                md: "8px",
                lg: "16px",
                pill: "9999px",
            },
            shadows: ShadowTokens {
                sm: "0 1px 2px rgba(15, 23, 42, 0.08)",
                md: "0 4px 12px rgba(15, 23, 42, 0.12)",
                lg: "0 12px 32px rgba(15, 23, 42, 0.16)",
            },
            transitions: TransitionTokens {
                fast: "120ms",
                base: "200ms",
                slow: "400ms",
                easing: "cubic-bezier(0.4, 0, 0.2, 1)",
            },
        }
    }

    /// "trustworthy-professional" - navy/bronze on warm ivory
    pub fn trustworthy_professional() -> Self {
        Self {
            name: "trustworthy-professional",
            colors: ColorTokens {
                primary: ColorVariant {
                    main: Rgb(0x1e, 0x3a, 0x5f),
                    light: Rgb(0x3b, 0x6b, 0x9e),
                    dark: Rgb(0x12, 0x24, 0x3c),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                secondary: ColorVariant {
                    main: Rgb(0x92, 0x40, 0x0e),
                    light: Rgb(0xd9, 0x77, 0x06),
                    dark: Rgb(0x6b, 0x2f, 0x0a),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                background: ColorVariant {
                    main: Rgb(0xfd, 0xfb, 0xf7),
                    light: Rgb(0xff, 0xff, 0xff),
                    dark: Rgb(0x1f, 0x29, 0x37),
                    contrast: Rgb(0x1f, 0x29, 0x37),
                },
                text: ColorVariant {
                    main: Rgb(0x1f, 0x29, 0x37),
                    light: Rgb(0x4b, 0x55, 0x63),
                    dark: Rgb(0x11, 0x18, 0x27),
                    contrast: Rgb(0xfd, 0xfb, 0xf7),
                },
                success: ColorVariant {
                    main: Rgb(0x16, 0x65, 0x34),
                    light: Rgb(0x22, 0xc5, 0x5e),
                    dark: Rgb(0x14, 0x53, 0x2d),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                warning: ColorVariant {
                    main: Rgb(0x9a, 0x34, 0x12),
                    light: Rgb(0xf5, 0x9e, 0x0b),
                    dark: Rgb(0x7c, 0x2d, 0x12),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
                error: ColorVariant {
                    main: Rgb(0xb9, 0x1c, 0x1c),
                    light: Rgb(0xef, 0x44, 0x44),
                    dark: Rgb(0x7f, 0x1d, 0x1d),
                    contrast: Rgb(0xff, 0xff, 0xff),
                },
            },
            typography: TypographyTokens {
                font_family: "'Source Serif Pro', Georgia, 'Times New Roman', serif",
                base_size: "17px",
                weights: WeightScale {
                    light: 300,
                    regular: 400,
                    medium: 500,
                    semibold: 600,
                    bold: 700,
                },
                heading: TypeStyle {
                    size: "2.5rem",
                    line_height: "1.25",
                    weight: 600,
                },
                body: TypeStyle {
                    size: "1.0625rem",
                    line_height: "1.7",
                    weight: 400,
                },
                button: TypeStyle {
                    size: "1rem",
                    line_height: "1",
                    weight: 500,
                },
            },
            spacing_unit: 8,
            radius: RadiusTokens {
                none: "0",
                sm: "2px",
                md: "6px",
                lg: "12px",
                pill: "9999px",
            },
            shadows: ShadowTokens {
                sm: "0 1px 3px rgba(31, 41, 55, 0.10)",
                md: "0 4px 10px rgba(31, 41, 55, 0.14)",
                lg: "0 10px 28px rgba(31, 41, 55, 0.18)",
            },
            transitions: TransitionTokens {
                fast: "150ms",
                base: "250ms",
                slow: "450ms",
                easing: "ease-in-out",
            },
        }
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::modern_business()
    }
}

/// Relative luminance for sRGB color (WCAG formula)
pub fn relative_luminance(Rgb(r, g, b): Rgb) -> f64 {
    fn channel(x: u8) -> f64 {
        let xf = (x as f64) / 255.0;
        if xf <= 0.03928 {
            xf / 12.92
        } else {
            ((xf + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors (WCAG formula), always >= 1.0
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (hi, lo) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

/// A11y audit (non-fatal): log when a pairing falls below WCAG AA (log-only)
pub fn audit_contrast(fg: Rgb, bg: Rgb, label: &str) {
    let ratio = contrast_ratio(fg, bg);
    if ratio < 4.5 {
        log::warn!("[theme] {label} contrast {ratio:.2}:1 below WCAG AA 4.5:1");
    } else {
        log::debug!("[theme] {label} contrast {ratio:.2}:1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb(0x25, 0x63, 0xeb).hex(), "#2563eb");
        assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
        assert_eq!(Rgb(255, 255, 255).hex(), "#ffffff");
    }

    #[test]
    fn spacing_scale_multiplies_base_unit() {
        let tokens = ThemeTokens::modern_business();
        assert_eq!(tokens.spacing(0), "0px");
        assert_eq!(tokens.spacing(1), "8px");
        assert_eq!(tokens.spacing(3), "24px");
    }

    #[test]
    fn role_accessor_matches_fields() {
        let tokens = ThemeTokens::trustworthy_professional();
        assert_eq!(tokens.colors.role(ColorRole::Primary), &tokens.colors.primary);
        assert_eq!(tokens.colors.role(ColorRole::Error), &tokens.colors.error);
    }

    #[test]
    fn contrast_ratio_is_symmetric_and_bounded() {
        let white = Rgb(255, 255, 255);
        let black = Rgb(0, 0, 0);
        let r1 = contrast_ratio(white, black);
        let r2 = contrast_ratio(black, white);
        assert!((r1 - r2).abs() < 1e-9);
        assert!(r1 > 20.0, "white/black should be ~21:1, got {r1}");
        assert!((contrast_ratio(white, white) - 1.0).abs() < 1e-9);
    }
}
