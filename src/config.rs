//! Read-only library defaults.

/// Process-wide library defaults.
///
/// The values are fixed at build time and never change within a process;
/// widget code treats them as ambient constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Foreground color as RGBA.
    pub foreground: [u8; 4],
    /// Background color as RGBA.
    pub background: [u8; 4],
    /// Default color map for contour and image plots.
    pub color_map: &'static str,
}

static DEFAULTS: Config = Config {
    foreground: [0, 0, 0, 255],
    background: [225, 225, 225, 255],
    color_map: "plasma",
};

/// Access the library defaults.
pub fn config() -> &'static Config {
    &DEFAULTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_stable_across_calls() {
        assert!(std::ptr::eq(config(), config()));
        assert_eq!(config().color_map, "plasma");
        assert_eq!(config().background[3], 255);
    }
}
