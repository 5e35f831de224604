use crate::analytic::distributions::norm_cdf;
use crate::common::models::{OptionParameters, OptionPremium};
use crate::error::PricingError;

/// Closed-form fair value of the European call and put on a parameter set.
pub trait OptionPrice {
    type Params;

    fn price(params: &Self::Params) -> Result<OptionPremium, PricingError>;
}

/// European put and call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// The standardized moneyness terms indexing into the normal CDF.
    /// Well-defined once the parameters validated: sigma * sqrt(T) > 0.
    pub(crate) fn d1_d2(dp: &OptionParameters) -> (f64, f64) {
        let sigma_exp = dp.volatility * dp.time_to_expiry.sqrt();
        let d1 = ((dp.spot / dp.strike).ln()
            + (dp.risk_free_rate + dp.volatility.powi(2) / 2.0) * dp.time_to_expiry)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn price(dp: &OptionParameters) -> Result<OptionPremium, PricingError> {
        dp.validate()?;

        let (d1, d2) = Self::d1_d2(dp);
        let discount = (-dp.risk_free_rate * dp.time_to_expiry).exp();

        let call = norm_cdf(d1) * dp.spot - norm_cdf(d2) * dp.strike * discount;
        let put = norm_cdf(-d2) * dp.strike * discount - norm_cdf(-d1) * dp.spot;

        Ok(OptionPremium { call, put })
    }
}
