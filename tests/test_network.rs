use sigmoid_mlp::{Network, TrainingElement, TrainingSet, WeightMatrix};

fn fixed_weights() -> Vec<WeightMatrix> {
    vec![
        WeightMatrix::from_weights(2, 3, vec![0.2, -0.4, 0.7, 0.1, -0.9, 0.5]).unwrap(),
        WeightMatrix::from_weights(3, 2, vec![0.3, -0.2, 0.8, -0.5, 0.6, 0.05]).unwrap(),
    ]
}

fn fixed_network() -> Network {
    Network::from_weights(&[2, 3, 2], fixed_weights()).unwrap()
}

#[test]
fn error_is_double_squared_then_rooted() {
    let mut net = fixed_network();
    let example = TrainingElement::new(vec![0.6, -1.2], vec![0.9, 0.1]);
    net.set_training_set(vec![example.clone()]).unwrap();

    let y_actual = net.clone().classify(&example.input);
    let err: f64 = example
        .output
        .iter()
        .zip(&y_actual)
        .map(|(d, a)| (d - a).powi(2))
        .sum();

    assert_eq!(net.train(0.3), (err * err).sqrt());
}

#[test]
fn one_pass_updates_each_weight_by_error_times_output() {
    let eta = 0.4;
    let mut net = fixed_network();
    let example = TrainingElement::new(vec![1.5, -0.5], vec![0.2, 0.8]);
    net.set_training_set(vec![example.clone()]).unwrap();

    let before: Vec<WeightMatrix> = net.weights().to_vec();
    let y_actual = net.clone().classify(&example.input);

    net.train(eta);

    // output error is the raw residual
    let out_error: Vec<f64> = example
        .output
        .iter()
        .zip(&y_actual)
        .map(|(d, a)| d - a)
        .collect();
    assert_eq!(net.layers()[2].error, out_error);

    for index in 1..net.layer_count() {
        let old = &before[index - 1];
        let new = &net.weights()[index - 1];
        let error = &net.layers()[index].error;
        let output = &net.layers()[index - 1].output;
        for i in 0..new.output_dimension() {
            for j in 0..new.input_dimension() {
                assert_eq!(new[(i, j)], old[(i, j)] + eta * (error[i] * output[j]));
            }
        }
    }
}

#[test]
fn empty_training_set_returns_zero_and_keeps_weights() {
    let mut net = fixed_network();
    let before = net.weights().to_vec();

    assert_eq!(net.train(0.2), 0.0);
    assert_eq!(net.weights(), &before[..]);

    net.set_training_set(Vec::new()).unwrap();
    assert_eq!(net.train(5.0), 0.0);
    assert_eq!(net.weights(), &before[..]);
}

#[test]
fn identical_weights_give_identical_runs() {
    let set = vec![
        TrainingElement::new(vec![0.1, 0.2], vec![0.3, 0.4]),
        TrainingElement::new(vec![-0.7, 0.9], vec![0.6, 0.1]),
    ];

    let mut a = fixed_network();
    let mut b = fixed_network();
    a.set_training_set(set.clone()).unwrap();
    b.set_training_set(set).unwrap();

    for _ in 0..10 {
        assert_eq!(a.train(0.25).to_bits(), b.train(0.25).to_bits());
    }
    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.classify(&[0.5, 0.5]), b.classify(&[0.5, 0.5]));
}

#[test]
fn same_seed_gives_same_network() {
    let a = Network::seeded(3, 2, 7, 99);
    let b = Network::seeded(3, 2, 7, 99);
    let c = Network::seeded(3, 2, 7, 100);
    assert_eq!(a.weights(), b.weights());
    assert_ne!(a.weights(), c.weights());
}

#[test]
fn quadratic_error_falls_over_a_hundred_passes() {
    for seed in [1, 2, 3, 4, 5] {
        let mut net = Network::seeded(1, 1, 6, seed);
        net.set_training_set(TrainingSet::quadratic(21).into_elements())
            .unwrap();

        let first = net.train(0.2);
        let mut last = first;
        for _ in 1..100 {
            last = net.train(0.2);
        }
        assert!(last < first, "seed {seed}: {last} !< {first}");
    }
}

#[test]
fn training_order_follows_the_set() {
    let a_elem = TrainingElement::new(vec![0.9, 0.1], vec![0.9, 0.1]);
    let b_elem = TrainingElement::new(vec![-0.3, 0.4], vec![0.2, 0.7]);

    let mut forward = fixed_network();
    forward
        .set_training_set(vec![a_elem.clone(), b_elem.clone()])
        .unwrap();
    let mut reversed = fixed_network();
    reversed.set_training_set(vec![b_elem, a_elem]).unwrap();

    forward.train(0.5);
    reversed.train(0.5);
    // online updates make the pass order-dependent
    assert_ne!(forward.weights(), reversed.weights());
}

#[test]
fn negative_learning_rate_is_accepted() {
    let mut net = fixed_network();
    net.set_training_set(vec![TrainingElement::new(vec![0.5, 0.5], vec![0.9, 0.9])])
        .unwrap();
    let first = net.train(-0.5);
    let second = net.train(-0.5);
    assert!(first.is_finite() && second.is_finite());
    // moving against the residual grows the error
    assert!(second > first);
}

#[test]
fn zero_width_input_still_drives_the_output() {
    let mut net = Network::seeded(0, 2, 3, 17);
    assert!(net.weights()[0].as_slice().is_empty());

    let y = net.classify(&[]);
    assert_eq!(y.len(), 2);
    assert!(y.iter().all(|v| *v > 0.0 && *v < 1.0));

    net.set_training_set(vec![TrainingElement::new(vec![], vec![0.9, 0.1])])
        .unwrap();
    let error = net.train(0.2);
    assert!(error.is_finite() && error > 0.0);
    assert!(net.weights()[0].as_slice().is_empty());
}

#[test]
fn zero_width_output_trains_to_nothing() {
    let mut net = Network::seeded(2, 0, 3, 17);
    let before = net.weights().to_vec();

    assert_eq!(net.classify(&[0.1, 0.2]), Vec::<f64>::new());

    net.set_training_set(vec![TrainingElement::new(vec![0.1, 0.2], vec![])])
        .unwrap();
    assert_eq!(net.train(0.2), 0.0);
    assert_eq!(net.weights(), &before[..]);
}
