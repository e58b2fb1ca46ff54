use crate::config::PulseConfig;

/// Slow sinusoidal scale around 1.0.
#[inline]
pub fn breathing(t: f32, rate: f32, amount: f32) -> f32 {
    1.0 + (t * rate).sin() * amount
}

/// Sharp additive throb: the positive half of a sine raised to `sharpness`.
#[inline]
pub fn heartbeat(t: f32, rate: f32, amount: f32, sharpness: f32) -> f32 {
    if amount <= 0.0 {
        return 0.0;
    }
    amount * (t * rate).sin().max(0.0).powf(sharpness)
}

/// Overall object scale at elapsed time `t`.
pub fn scale_at(pulse: &PulseConfig, t: f32) -> f32 {
    breathing(t, pulse.breath_rate, pulse.breath_amount)
        + heartbeat(t, pulse.beat_rate, pulse.beat_amount, pulse.beat_sharpness)
}
