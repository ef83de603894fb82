use tracing_subscriber::EnvFilter;
use varstore::{config::load_config, store::DataStore, utils};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config()?;
    let store = DataStore::from(config.variables.unwrap_or_default());

    let result = utils::contains("DISTRO_FEATURES", "systemd", true, false, &store);
    println!("Result: {}", result);
    assert!(result);

    let result2 = utils::contains("DISTRO_FEATURES", "nothere", true, false, &store);
    println!("Result2: {}", result2);
    assert!(!result2);

    println!("All checks passed!");

    Ok(())
}
