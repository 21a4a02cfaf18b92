//! Color palette for widget feedback.
//!
//! Colors are packed as 0xRRGGBBAA and converted to CSS at the DOM boundary.

/// Green used for correct answers and non-negative results.
pub const POSITIVE: u32 = 0x10B981FF;

/// Red used for wrong answers and negative results.
pub const NEGATIVE: u32 = 0xEF4444FF;

/// Blue used for in-progress score labels and default buttons.
pub const NEUTRAL: u32 = 0x3B82F6FF;

/// Amber used for warning toasts.
pub const WARNING: u32 = 0xF59E0BFF;

/// Convert RGBA u32 (packed as 0xRRGGBBAA) to CSS rgba() string.
pub fn rgba_u32_to_css(color: u32) -> String {
    let (r, g, b) = channels(color);
    let a = (color & 0xFF) as f32 / 255.0;
    format!("rgba({}, {}, {}, {})", r, g, b, a)
}

/// Convert RGBA u32 to CSS rgba() string with a custom alpha value.
///
/// Used for tinted backgrounds behind feedback text.
pub fn rgba_u32_to_css_alpha(color: u32, alpha: f32) -> String {
    let (r, g, b) = channels(color);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Pick the positive or negative color for a sign flag.
pub fn sign_color(positive: bool) -> u32 {
    if positive { POSITIVE } else { NEGATIVE }
}

fn channels(color: u32) -> (u32, u32, u32) {
    ((color >> 24) & 0xFF, (color >> 16) & 0xFF, (color >> 8) & 0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_css() {
        assert_eq!(rgba_u32_to_css(POSITIVE), "rgba(16, 185, 129, 1)");
        assert_eq!(rgba_u32_to_css(0x0000FF00), "rgba(0, 0, 255, 0)");
    }

    #[test]
    fn test_rgba_to_css_alpha() {
        assert_eq!(
            rgba_u32_to_css_alpha(NEGATIVE, 0.1),
            "rgba(239, 68, 68, 0.1)"
        );
    }

    #[test]
    fn test_sign_color() {
        assert_eq!(sign_color(true), POSITIVE);
        assert_eq!(sign_color(false), NEGATIVE);
    }
}
