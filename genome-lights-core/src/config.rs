pub struct Config {
    pub frames_per_second: u16,
    pub leds_per_strand: usize,
    pub ms_per_pattern: u64,
    /// one segment per physical output
    pub outputs: usize,
    /// time to scroll the window by one whole base
    pub scroll_period_ms: u32,
    pub scroll_steps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames_per_second: 100,
            leds_per_strand: 50,
            ms_per_pattern: 60 * 1000,
            outputs: 2,
            scroll_period_ms: 500,
            scroll_steps: 20,
        }
    }
}
