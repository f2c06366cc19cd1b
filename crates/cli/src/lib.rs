mod closure;
mod schema;

use clap::{Parser, Subcommand, ValueEnum};
use reflscope_core::logging::LogOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reflscope",
    version,
    about = "Computes the reflective registration closure of a set of types",
    long_about = "Reflscope walks a type index from a set of seed types and lists every type \
                  whose structure must stay available to reflection: supertypes, known \
                  subtypes and implementors, generic arguments, field types and getter return types."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the closure of the configured seeds
    #[command(
        long_about = "Loads the type index and run configuration, then writes one JSON \
                            registration record per line. Unresolved types are reported once, \
                            as a warning on stderr."
    )]
    Closure {
        /// Type index document (JSON)
        #[arg(short, long, value_name = "INDEX")]
        index: PathBuf,

        /// Run configuration (JSON)
        #[arg(short, long, value_name = "CONFIG")]
        config: PathBuf,

        /// Write records to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Log traversal details
        #[arg(short, long)]
        verbose: bool,

        /// Log to the file only, not to stderr
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the JSON schema of an input or output document
    Schema {
        #[arg(value_enum, default_value_t = SchemaTarget::Config)]
        target: SchemaTarget,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    /// Run configuration
    Config,
    /// Type index document
    Index,
    /// Registration record
    Record,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Closure {
            index,
            config,
            output,
            verbose,
            quiet,
        } => {
            let options = LogOptions::new("closure").verbose(verbose).to_stderr(!quiet);
            let _guard = reflscope_runtime::init_logging(&options);
            closure::run(&index, &config, output.as_deref())
        }
        Commands::Schema { target } => schema::run(target),
    }
}
