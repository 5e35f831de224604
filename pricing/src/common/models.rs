use crate::error::PricingError;

/// Market and contract parameters of a single European option.
#[derive(Clone, Copy, Debug)]
pub struct OptionParameters {
    /// the underlying's price at time t
    pub spot: f64,
    /// the strike or exercise price of the option
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiry: f64,
    /// the annualized continuously compounded risk-free interest rate
    pub risk_free_rate: f64,
    /// the annualized standard deviation of the underlying's log-returns
    pub volatility: f64,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        }
    }

    /// Checks the domain of the pricing formula: spot, strike, time to expiry
    /// and volatility must be strictly positive, the rate finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        positive("spot price", self.spot)?;
        positive("strike price", self.strike)?;
        positive("time to expiry", self.time_to_expiry)?;
        positive("volatility", self.volatility)?;

        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "risk-free rate",
                constraint: "finite",
                value: self.risk_free_rate,
            });
        }
        Ok(())
    }
}

/// Theoretical fair values of the call and put struck on the same parameters.
#[derive(Clone, Copy, Debug)]
pub struct OptionPremium {
    pub call: f64,
    pub put: f64,
}

// NaN fails the comparison and is rejected with the same error.
fn positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if !(value > 0.0) {
        return Err(PricingError::InvalidParameter {
            name,
            constraint: "positive",
            value,
        });
    }
    Ok(())
}
