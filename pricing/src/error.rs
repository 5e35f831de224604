use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A market parameter violated the domain of the pricing formula.
    #[error("{name} must be {constraint}, got {value}")]
    InvalidParameter {
        name: &'static str,
        constraint: &'static str,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display() {
        let err = PricingError::InvalidParameter {
            name: "spot price",
            constraint: "positive",
            value: -5.0,
        };
        assert_eq!(err.to_string(), "spot price must be positive, got -5");
    }
}
