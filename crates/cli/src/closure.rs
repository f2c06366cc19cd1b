use reflscope_core::sink::JsonLinesSink;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn run(
    index: &Path,
    config: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Computing reflective closure (index: {}, config: {})",
        index.display(),
        config.display()
    );

    let step = reflscope_runtime::load_step(index, config)?;

    let report = match output {
        Some(path) => {
            let mut sink = JsonLinesSink::new(BufWriter::new(File::create(path)?));
            let report = step.run(&mut sink)?;
            sink.into_inner().flush()?;
            info!("Records written to {}", path.display());
            report
        }
        None => {
            let stdout = io::stdout();
            let mut sink = JsonLinesSink::new(BufWriter::new(stdout.lock()));
            let report = step.run(&mut sink)?;
            sink.into_inner().flush()?;
            report
        }
    };

    info!(
        "Closure complete: {} type(s) registered, {} unresolved",
        report.records,
        report.unresolved.len()
    );
    Ok(())
}
