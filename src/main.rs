// Reference driver: sweeps the number of training passes and prints the
// network error reached after each count, one "<passes> <error>" line each.
//
//   cargo run -- --hidden 8
//   cargo run -- --hidden 8 --training-set data.json --eta 0.1
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use sigmoid_mlp::{Network, TrainingElement, TrainingSet};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sigmoid-mlp")]
#[command(
    about = "Train a sigmoid perceptron on y = x^2 + 1 and report the error",
    long_about = None
)]
struct Cli {
    /// Neurons in the hidden layer (prompted for when omitted)
    #[arg(long)]
    hidden: Option<usize>,

    /// Learning rate passed to every training pass
    #[arg(long, default_value = "0.2")]
    eta: f64,

    /// Largest pass count in the sweep
    #[arg(long, default_value = "29")]
    max_iterations: usize,

    /// Seed for weight initialisation; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON training set to use instead of the 21-point quadratic
    #[arg(long)]
    training_set: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: Level = cli
        .log_level
        .parse()
        .with_context(|| format!("invalid log level `{}`", cli.log_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let hidden = match cli.hidden {
        Some(h) => h,
        None => prompt_hidden()?,
    };
    if hidden == 0 {
        bail!("the hidden layer needs at least one neuron");
    }

    let training_set = match &cli.training_set {
        Some(path) => TrainingSet::load_json(path)
            .with_context(|| format!("failed to load training set from {path}"))?,
        None => TrainingSet::quadratic(21),
    };
    let (input_dim, output_dim) = dimensions_of(&training_set.elements)?;

    for n_iterations in 1..=cli.max_iterations {
        let mut network = match cli.seed {
            Some(seed) => Network::seeded(input_dim, output_dim, hidden, seed),
            None => Network::new(input_dim, output_dim, hidden),
        };
        network.set_training_set(training_set.elements.clone())?;

        for _ in 0..n_iterations {
            network.train(cli.eta);
        }

        let error = network.train(cli.eta);
        debug!(n_iterations, hidden, error, "sweep point");
        println!("{n_iterations} {error}");
    }

    Ok(())
}

fn prompt_hidden() -> Result<usize> {
    print!("Number of neurons in hidden layers: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    line.trim()
        .parse()
        .with_context(|| format!("expected a positive integer, got `{}`", line.trim()))
}

fn dimensions_of(elements: &[TrainingElement]) -> Result<(usize, usize)> {
    match elements.first() {
        Some(te) => Ok((te.input.len(), te.output.len())),
        None => bail!("training set is empty"),
    }
}
