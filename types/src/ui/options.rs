/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disables autoplay and timed transitions.
    pub reduced_motion: bool,
}

impl UiOptions {
    /// Enabled flags, for status lines and logs.
    #[must_use]
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.ascii_only {
            flags.push("ascii_only");
        }
        if self.high_contrast {
            flags.push("high_contrast");
        }
        if self.reduced_motion {
            flags.push("reduced_motion");
        }
        flags
    }
}
