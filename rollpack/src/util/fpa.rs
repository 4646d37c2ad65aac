///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = 1e-4, ulps = 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_values_are_equal() {
        assert_eq!(FPA(0.1 + 0.2), FPA(0.3));
        assert_eq!(FPA(40.0), FPA(40.00005));
        assert_ne!(FPA(40.0), FPA(40.01));
    }
}
