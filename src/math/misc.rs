use std::f32::consts::PI;

pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deg_to_rad() {
        assert!((deg_to_rad(180.0) - PI).abs() < 0.000001);
        assert!((deg_to_rad(45.0) - PI / 4.0).abs() < 0.000001);
    }
}
