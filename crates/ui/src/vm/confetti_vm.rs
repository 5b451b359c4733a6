use rand::Rng;

pub const CONFETTI_COLORS: [&str; 6] = [
    "#f94144", "#f9c74f", "#90be6d", "#43aa8b", "#577590", "#f3722c",
];

/// One falling piece of the high-score celebration.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiParticleVm {
    pub left_percent: f32,
    pub drift_px: f32,
    pub size_px: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub rotation_deg: u32,
    pub color: &'static str,
}

impl ConfettiParticleVm {
    /// Inline style consumed by the `confetti-fall` keyframes.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; width: {:.1}px; height: {:.1}px; background: {}; \
             animation-delay: {}ms; animation-duration: {}ms; \
             --confetti-drift: {:.0}px; --confetti-spin: {}deg;",
            self.left_percent,
            self.size_px,
            self.size_px * 0.6,
            self.color,
            self.delay_ms,
            self.duration_ms,
            self.drift_px,
            self.rotation_deg,
        )
    }
}

#[must_use]
pub fn confetti_particles<R: Rng>(count: usize, rng: &mut R) -> Vec<ConfettiParticleVm> {
    (0..count)
        .map(|_| ConfettiParticleVm {
            left_percent: rng.random_range(0.0..100.0),
            drift_px: rng.random_range(-80.0..80.0),
            size_px: rng.random_range(6.0..12.0),
            delay_ms: rng.random_range(0..800),
            duration_ms: rng.random_range(2200..3800),
            rotation_deg: rng.random_range(180..900),
            color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
        })
        .collect()
}
