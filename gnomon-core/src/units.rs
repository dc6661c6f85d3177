//! Unit conversion for display strings
//!
//! The face shows US customary units; sensors report metric.

/// Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 1.8 + 32.0
}

/// Hectopascals to inches of mercury
pub fn hpa_to_inhg(hpa: f32) -> f32 {
    hpa * 0.029_529_983
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        libm::fabsf(a - b) < eps
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert!(close(celsius_to_fahrenheit(0.0), 32.0, 0.001));
        assert!(close(celsius_to_fahrenheit(25.0), 77.0, 0.001));
        assert!(close(celsius_to_fahrenheit(-40.0), -40.0, 0.001));
    }

    #[test]
    fn test_hpa_to_inhg() {
        // One standard atmosphere
        assert!(close(hpa_to_inhg(1013.25), 29.92, 0.005));
    }
}
