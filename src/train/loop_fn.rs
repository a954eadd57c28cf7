use std::time::Instant;

use tracing::{info, trace};

use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Calls `network.train(config.learning_rate)` `config.epochs` times and
/// returns one `EpochStats` per call, in order.
///
/// The network trains on whatever set was last passed to
/// `Network::set_training_set`. Convergence is not checked; callers inspect
/// the error trend in the returned history.
pub fn train_loop(network: &mut Network, config: &TrainConfig) -> Vec<EpochStats> {
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let error = network.train(config.learning_rate);
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        trace!(epoch, error, elapsed_ms, "epoch finished");
        if config.log_every > 0 && epoch % config.log_every == 0 {
            info!(epoch, total = config.epochs, error, "training progress");
        }

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            error,
            elapsed_ms,
        });
    }

    if let Some(last) = history.last() {
        info!(epochs = config.epochs, final_error = last.error, "training finished");
    }

    history
}

/// Error of the last completed epoch, or `None` for an empty history.
pub fn final_error(history: &[EpochStats]) -> Option<f64> {
    history.last().map(|s| s.error)
}
