use sigmoid_mlp::{train_loop, Network, TrainConfig, TrainingSet};

fn main() {
    let mut network = Network::seeded(1, 1, 8, 2024);
    network
        .set_training_set(TrainingSet::quadratic(21).into_elements())
        .expect("quadratic set is 1 -> 1");

    let config = TrainConfig::new(2000, 0.2);
    let history = train_loop(&mut network, &config);

    for stats in history.iter().filter(|s| s.epoch == 1 || s.epoch % 200 == 0) {
        println!("Epoch {}: error = {:.6}", stats.epoch, stats.error);
    }

    // Targets lie in [1, 2], outside the sigmoid's range, so the fit saturates.
    for x in [-1.0, -0.5, 0.0, 0.5, 1.0] {
        let y = network.classify(&[x]);
        println!("x = {x:+.1} -> {:.4} (target {:.4})", y[0], x * x + 1.0);
    }
}
