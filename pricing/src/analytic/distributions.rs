//! Standard normal distribution function used by the closed-form pricers.

/// Error function after Abramowitz & Stegun, formula 7.1.26.
/// The absolute error stays below 1.5e-7 over the whole real line.
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    // erf is odd, evaluate on |x| and restore the sign
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));

    sign * (1.0 - poly * (-x * x).exp())
}

/// The cumulative distribution function P(Z <= x) of the standard normal distribution.
/// https://en.wikipedia.org/wiki/Normal_distribution
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x * std::f64::consts::FRAC_1_SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use probability::distribution::{Distribution, Gaussian};

    #[test]
    fn midpoint() {
        assert_approx_eq!(norm_cdf(0.0), 0.5, 1e-9);
    }

    #[test]
    fn symmetry() {
        for i in -40..=40 {
            let x = i as f64 * 0.25;
            assert_approx_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, 1e-9);
        }
    }

    #[test]
    fn monotonicity() {
        let mut prev = norm_cdf(-10.05);
        for i in -100..=100 {
            let x = i as f64 * 0.1;
            let current = norm_cdf(x);
            assert!(current >= prev, "cdf decreased at x = {}", x);
            prev = current;
        }
    }

    #[test]
    fn table_values() {
        // table value for mu + 1 sigma
        assert_approx_eq!(norm_cdf(1.0), 0.8413, 0.0001);

        assert_approx_eq!(norm_cdf(1.0), 0.8413447460685429, 1.5e-7);
        assert_approx_eq!(norm_cdf(-1.0), 0.15865525393145707, 1.5e-7);
        assert_approx_eq!(norm_cdf(1.96), 0.9750021048517795, 1.5e-7);
        assert_approx_eq!(norm_cdf(2.0), 0.9772498680518208, 1.5e-7);
        assert_approx_eq!(norm_cdf(-3.0), 0.0013498980316300933, 1.5e-7);
    }

    #[test]
    fn saturates_for_large_arguments() {
        assert!(norm_cdf(8.0) > 0.999999);
        assert!(norm_cdf(8.0) <= 1.0);
        assert!(norm_cdf(-8.0) < 0.000001);
        assert!(norm_cdf(-8.0) >= 0.0);

        assert_eq!(norm_cdf(40.0), 1.0);
        assert_eq!(norm_cdf(-40.0), 0.0);
    }

    #[test]
    fn stays_within_unit_interval() {
        for i in -200..=200 {
            let x = i as f64 * 0.05;
            let c = norm_cdf(x);
            assert!((0.0..=1.0).contains(&c), "cdf out of [0, 1] at x = {}", x);
        }
    }

    #[test]
    fn matches_gaussian_reference() {
        let normal = Gaussian::new(0.0, 1.0);
        for i in -40..=40 {
            let x = i as f64 * 0.25;
            assert_approx_eq!(norm_cdf(x), normal.distribution(x), 1.5e-7);
        }
    }
}
