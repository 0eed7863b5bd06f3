/// Step brightness by `delta`, clamped to `0..=255`.
pub fn step_brightness(current: u8, delta: i16) -> u8 {
    (i16::from(current) + delta).clamp(0, i16::from(u8::MAX)) as u8
}

/// Step an effect index by `delta` with wraparound over `count` effects.
///
/// Returns `current` unchanged when there are no effects.
pub fn step_effect(current: u8, delta: i16, count: u8) -> u8 {
    if count == 0 {
        return current;
    }
    let count = i16::from(count);
    (i16::from(current) + delta).rem_euclid(count) as u8
}
