// trainer/src/main.rs
use anyhow::{bail, Context, Result};
use log::info;
use rand::thread_rng;
use shallow_ml::{
    evaluate, load_split, plot_loss_curves, shuffle_split, train, DatasetSplit, Sgd, TwoLayerNet,
    HIDDEN_SIZE, INPUT_SIZE, ITERATIONS, LEARNING_RATE, OUTPUT_SIZE,
};

const TRAIN_PATH: &str = "data/classification_train.gz";
const VALIDATION_PATH: &str = "data/classification_validation.gz";
const TEST_PATH: &str = "data/classification_test.gz";
const PLOT_PATH: &str = "loss_curve.png";

fn check_shapes(name: &str, split: &DatasetSplit) -> Result<()> {
    if split.num_features() != INPUT_SIZE {
        bail!(
            "{} split has {} features, expected {}",
            name,
            split.num_features(),
            INPUT_SIZE
        );
    }
    if split.num_classes() != OUTPUT_SIZE {
        bail!(
            "{} split has {} classes, expected {}",
            name,
            split.num_classes(),
            OUTPUT_SIZE
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut train_split =
        load_split(TRAIN_PATH).context("loading training split (run gen-data first?)")?;
    let validation_split = load_split(VALIDATION_PATH).context("loading validation split")?;
    let test_split = load_split(TEST_PATH).context("loading test split")?;
    check_shapes("train", &train_split)?;
    check_shapes("validation", &validation_split)?;
    check_shapes("test", &test_split)?;
    info!(
        "loaded splits: train={} validation={} test={}",
        train_split.len(),
        validation_split.len(),
        test_split.len()
    );

    // Training instances arrive grouped by class; shuffle them jointly.
    let mut rng = thread_rng();
    shuffle_split(&mut train_split, &mut rng);

    let mut net = TwoLayerNet::new(INPUT_SIZE, HIDDEN_SIZE, OUTPUT_SIZE);
    let sgd = Sgd::new(LEARNING_RATE);
    let history = train(&mut net, &sgd, &train_split, &validation_split, ITERATIONS)?;

    let (_, test_accuracy) = evaluate(&net, &test_split)?;
    println!("Test accuracy : {:.2}", test_accuracy);

    plot_loss_curves(&history, PLOT_PATH)?;
    Ok(())
}
