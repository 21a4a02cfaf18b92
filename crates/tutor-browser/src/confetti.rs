//! Decorative confetti for quiz completion.

use gloo_timers::callback::Timeout;
use tutor_core::plan_confetti;

use crate::dom;
use crate::error::DomError;

/// Drop `count` particles from the top of the viewport.
///
/// Each particle removes itself when its fall animation ends.
pub fn launch_confetti(count: usize) -> Result<(), DomError> {
    let document = dom::document()?;
    let body = dom::body()?;

    for particle in plan_confetti(count, js_sys::Math::random) {
        let element = dom::create(&document, "div", "confetti-particle")?;
        let left = format!("{:.2}%", particle.left_pct);
        let size = format!("{:.1}px", particle.size_px);
        let drift = format!("{:.1}px", particle.drift_px);
        let rotation = format!("{:.0}deg", particle.rotation_deg);
        let duration = format!("{}ms", particle.duration_ms);
        dom::set_styles(
            &element,
            &[
                ("left", left.as_str()),
                ("width", size.as_str()),
                ("height", size.as_str()),
                ("background-color", particle.color),
                ("--drift", drift.as_str()),
                ("--rotation", rotation.as_str()),
                ("animation-duration", duration.as_str()),
            ],
        );
        body.append_child(&element)?;

        Timeout::new(particle.duration_ms, move || element.remove()).forget();
    }
    Ok(())
}
