// trainer/src/bin/gen_data.rs
//
// Materializes the three synthetic classification splits under data/ so the
// train binary has files to load.
use anyhow::Result;
use log::info;
use rand::thread_rng;
use shallow_ml::{generate_classification_splits, save_split};

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = thread_rng();
    let (train, validation, test) = generate_classification_splits(50, 20, 20, &mut rng);
    save_split(&train, "data/classification_train.gz")?;
    save_split(&validation, "data/classification_validation.gz")?;
    save_split(&test, "data/classification_test.gz")?;
    info!(
        "wrote splits under data/: train={} validation={} test={}",
        train.len(),
        validation.len(),
        test.len()
    );
    println!("Generated data/classification_{{train,validation,test}}.gz");
    Ok(())
}
