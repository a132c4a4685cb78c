//! Configuration for the layout engine

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Size of the host area the text is rendered into (width, height)
    pub host_size: (f64, f64),

    /// Tilt applied to the inner block when perspective is enabled, in degrees
    pub perspective_tilt: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            host_size: (300.0, 150.0),
            perspective_tilt: 25.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host area size
    pub fn with_host_size(mut self, width: f64, height: f64) -> Self {
        self.host_size = (width, height);
        self
    }

    /// Set the perspective tilt angle
    pub fn with_perspective_tilt(mut self, degrees: f64) -> Self {
        self.perspective_tilt = degrees;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.host_size, (300.0, 150.0));
        assert_eq!(config.perspective_tilt, 25.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_host_size(640.0, 480.0)
            .with_perspective_tilt(10.0);

        assert_eq!(config.host_size, (640.0, 480.0));
        assert_eq!(config.perspective_tilt, 10.0);
    }
}
