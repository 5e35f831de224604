mod black_scholes;
mod distributions;

pub use black_scholes::{BlackScholesMerton, OptionPrice};
pub use distributions::norm_cdf;
