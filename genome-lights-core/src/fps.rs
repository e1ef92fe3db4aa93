use crate::logging::info;

/// Counts frames and logs the rate once per second of the frame driver's clock.
pub struct FpsTracker {
    last_ms: Option<u64>,
    count: u64,
}

impl Default for FpsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsTracker {
    pub const fn new() -> Self {
        Self {
            last_ms: None,
            count: 0,
        }
    }

    /// Returns the frames per second each time a full second has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let last_ms = *self.last_ms.get_or_insert(now_ms);

        self.count += 1;

        let elapsed = now_ms.saturating_sub(last_ms);

        if elapsed < 1_000 {
            return None;
        }

        let fps = self.count * 1_000 / elapsed;

        self.count = 0;
        self.last_ms = Some(now_ms);

        info!("FPS: {}", fps);

        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::FpsTracker;

    #[test_log::test]
    fn test_fps() {
        let mut fps = FpsTracker::new();

        for now_ms in (0..1_000).step_by(10) {
            assert_eq!(fps.tick(now_ms), None);
        }

        // 100 frames in the first second, plus this one
        assert_eq!(fps.tick(1_000), Some(101));
        assert_eq!(fps.tick(1_010), None);
    }
}
