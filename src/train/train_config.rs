/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`       : number of `Network::train` calls, each one full pass
///                   over the training set
/// - `learning_rate`: `eta` handed to every call; not range-checked
/// - `log_every`    : emit an info line every this many epochs (0 disables)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_every: usize,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with periodic logging turned off.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_every: 0,
        }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }
}
