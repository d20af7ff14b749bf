use anyhow::Context;

use pacatlas::{GeneratorConfig, generate, logging};

// Takes no arguments; anything on the command line is ignored.
fn main() -> anyhow::Result<()> {
    logging::init();

    let config = GeneratorConfig::default();
    let report = generate(&config)
        .with_context(|| format!("generating atlas into {}", config.output_dir.display()))?;

    println!("wrote {}", report.image_path.display());
    Ok(())
}
