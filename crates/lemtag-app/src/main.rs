use anyhow::Context;
use tracing_subscriber::EnvFilter;

use lemtag_lang_russian::RussianAnnotator;

mod config;
mod dataset;

use self::config::Config;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout and the output file stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();

    let annotator = RussianAnnotator::from_dictionary_file(&config.dictionary_path)
        .with_context(|| {
            format!(
                "loading morphology dictionary from {}",
                config.dictionary_path.display()
            )
        })?;

    dataset::annotate_file(&config.dataset_path, &config.output_path, &annotator)
}
