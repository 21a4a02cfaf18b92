//! Toast and confetti presentation parameters.

use crate::color;

/// How long a toast stays visible before fading, in milliseconds.
pub const TOAST_MS: u32 = 3000;

/// Toast fade-out duration, in milliseconds.
pub const TOAST_FADE_MS: u32 = 300;

/// Particles launched per celebration.
pub const CONFETTI_COUNT: usize = 50;

const CONFETTI_COLORS: [&str; 6] = [
    "#10b981", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899",
];

/// Toast notification kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Parse a kind name. Unknown names are `Info`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    /// Background color as packed RGBA.
    pub fn color(self) -> u32 {
        match self {
            ToastKind::Info => color::NEUTRAL,
            ToastKind::Success => color::POSITIVE,
            ToastKind::Warning => color::WARNING,
            ToastKind::Error => color::NEGATIVE,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }
}

/// One confetti particle's animation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiParticle {
    /// Horizontal start, percent of viewport width.
    pub left_pct: f64,
    /// Horizontal drift over the fall, in pixels.
    pub drift_px: f64,
    /// Total rotation over the fall, in degrees.
    pub rotation_deg: f64,
    /// Fall duration, 2000..=3000 ms.
    pub duration_ms: u32,
    pub size_px: f64,
    pub color: &'static str,
}

/// Plan `count` particles from a source of uniform values in `[0, 1)`.
pub fn plan_confetti(count: usize, mut random: impl FnMut() -> f64) -> Vec<ConfettiParticle> {
    (0..count)
        .map(|i| {
            let left_pct = random() * 100.0;
            let drift_px = (random() - 0.5) * 200.0;
            let rotation_deg = random() * 720.0;
            let duration_ms = 2000 + (random() * 1000.0).clamp(0.0, 1000.0) as u32;
            let size_px = 6.0 + random() * 6.0;
            ConfettiParticle {
                left_pct,
                drift_px,
                rotation_deg,
                duration_ms,
                size_px,
                color: CONFETTI_COLORS[i % CONFETTI_COLORS.len()],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for `Math.random()`.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn test_plan_confetti_ranges() {
        let particles = plan_confetti(CONFETTI_COUNT, lcg(7));
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((-100.0..100.0).contains(&p.drift_px));
            assert!((0.0..720.0).contains(&p.rotation_deg));
            assert!((2000..=3000).contains(&p.duration_ms));
        }
    }

    #[test]
    fn test_plan_confetti_extremes() {
        let low = plan_confetti(1, || 0.0);
        assert_eq!(low[0].duration_ms, 2000);
        assert_eq!(low[0].drift_px, -100.0);

        let high = plan_confetti(1, || 0.999_999);
        assert_eq!(high[0].duration_ms, 2999);
    }

    #[test]
    fn test_toast_kind() {
        assert_eq!(ToastKind::parse("Success"), ToastKind::Success);
        assert_eq!(ToastKind::parse("nope"), ToastKind::Info);
        assert_eq!(ToastKind::Error.color(), color::NEGATIVE);
        assert_eq!(ToastKind::Warning.class_name(), "toast-warning");
    }
}
