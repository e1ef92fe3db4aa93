//! Integer beat oscillators for pulsing and breathing.

use core::f32::consts::PI;

// TODO: why does the linter think this is unused when math functions on f32 are used. something about std being enabled in the linter?
#[allow(unused_imports)]
use micromath::F32Ext;

/// A sawtooth that wraps 0..=65535 `bpm` times per minute.
pub fn beat16(now_ms: u64, bpm: u16) -> u16 {
    // 65536 per beat. 60000ms per minute. 65536 / 60000 ~= 280 / 256
    ((now_ms.wrapping_mul(bpm as u64).wrapping_mul(280)) >> 8) as u16
}

/// `theta` covers a full circle in 0..=65535. Returns -32767..=32767.
pub fn sin16(theta: u16) -> i16 {
    let radians = theta as f32 * (2.0 * PI / 65536.0);

    (radians.sin() * 32767.0) as i16
}

/// A sine wave between `low` and `high` that repeats `bpm` times per minute.
///
/// `phase_offset` shifts the wave. 32768 is half a period.
pub fn beatsin16(now_ms: u64, bpm: u16, low: u16, high: u16, phase_offset: u16) -> u16 {
    let beat = beat16(now_ms, bpm).wrapping_add(phase_offset);

    let beatsin = (sin16(beat) as i32 + 32768) as u32;

    let range = high.saturating_sub(low) as u32;

    low + ((beatsin * range) >> 16) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beat16() {
        assert_eq!(beat16(0, 16), 0);

        // one beat at 60bpm is just under one second
        let x = beat16(990, 60);
        assert!(x > 64_000, "{x}");

        assert!(beat16(1_001, 60) < 500);
    }

    #[test]
    fn test_sin16() {
        assert_eq!(sin16(0), 0);
        assert!(sin16(16384) >= 32_700);
        assert!(sin16(49152) <= -32_700);
    }

    #[test]
    fn test_beatsin16_stays_in_range() {
        for now_ms in (0..10_000).step_by(7) {
            let x = beatsin16(now_ms, 16, 0, 240, 0);

            assert!(x <= 240, "{now_ms} -> {x}");
        }
    }

    #[test]
    fn test_beatsin16_phases() {
        assert_eq!(beatsin16(0, 16, 0, 240, 0), 120);

        // about a quarter beat at 16bpm
        assert!(beatsin16(936, 16, 0, 240, 0) >= 238);

        // and half a period later
        assert!(beatsin16(936, 16, 0, 240, 32767) <= 2);
    }
}
