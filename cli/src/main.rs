//! Terminal shell around the pricing engine.
//!
//! Gathers the five market parameters, from command-line flags or by
//! prompting on stdin, and prints the fair values of the European call and
//! put. Parsing text is this shell's concern; validating the parsed numbers
//! is the engine's.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricing::analytic::{BlackScholesMerton, OptionPrice};
use pricing::common::models::{OptionParameters, OptionPremium};

/// Black-Scholes-Merton European option pricer
#[derive(Parser)]
#[command(name = "option_pricer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Current price of the underlying (S)
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price of the option (K)
    #[arg(long)]
    strike: Option<f64>,

    /// Time to expiration in years, e.g. 0.5 (T)
    #[arg(long)]
    expiry: Option<f64>,

    /// Annualized risk-free rate as a decimal, e.g. 0.05 (r)
    #[arg(long)]
    rate: Option<f64>,

    /// Annualized volatility as a decimal, e.g. 0.30 (sigma)
    #[arg(long)]
    vola: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let prompting = [cli.spot, cli.strike, cli.expiry, cli.rate, cli.vola]
        .iter()
        .any(Option::is_none);
    if prompting {
        println!("\n--- Black-Scholes-Merton European option pricer ---");
        println!("Please enter the required parameters.");
    }

    let mut input = io::stdin().lock();
    let spot = resolve(cli.spot, "Current stock price (S): ", &mut input)?;
    let strike = resolve(cli.strike, "Option strike price (K): ", &mut input)?;
    let expiry = resolve(cli.expiry, "Time to expiration (T, in years): ", &mut input)?;
    let rate = resolve(cli.rate, "Risk-free rate (r, decimal): ", &mut input)?;
    let vola = resolve(cli.vola, "Volatility (sigma, decimal): ", &mut input)?;

    let params = OptionParameters::new(spot, strike, expiry, rate, vola);
    debug!("pricing {:?}", params);

    let premium = BlackScholesMerton::price(&params)?;
    print!("{}", render(&params, &premium));
    Ok(())
}

fn resolve<R: BufRead>(given: Option<f64>, prompt: &str, input: &mut R) -> anyhow::Result<f64> {
    match given {
        Some(value) => Ok(value),
        None => prompt_for(prompt, input),
    }
}

/// Re-prompts until the line parses as a number.
fn prompt_for<R: BufRead>(prompt: &str, input: &mut R) -> anyhow::Result<f64> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("reading parameter")?;
        if bytes == 0 {
            anyhow::bail!("input closed before all parameters were given");
        }
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Error: invalid input, please enter a number."),
        }
    }
}

fn render(params: &OptionParameters, premium: &OptionPremium) -> String {
    let rule = "-".repeat(25);
    format!(
        "\n--- Results ---\n\
         Input parameters:\n\
        \x20 Spot price (S):      ${:.2}\n\
        \x20 Strike price (K):    ${:.2}\n\
        \x20 Time (T):            {:.4} years\n\
        \x20 Risk-free rate (r):  {:.4}\n\
        \x20 Volatility (sigma):  {:.4}\n\
         {rule}\n\
         European call price: ${:.4}\n\
         European put price:  ${:.4}\n\
         {rule}\n",
        params.spot,
        params.strike,
        params.time_to_expiry,
        params.risk_free_rate,
        params.volatility,
        premium.call,
        premium.put,
    )
}
