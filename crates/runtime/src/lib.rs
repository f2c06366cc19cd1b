use reflscope_api::{RegistrationSink, TypeIndexPtr};
use reflscope_core::config::{ClosureConfig, SeedConfig};
use reflscope_core::logging::LogOptions;
use reflscope_core::{
    ClosureReport, HierarchyRequest, NamePredicate, ReflectiveHierarchyStep, ReflscopeError,
    Result,
};
use reflscope_java::{JavaTypeIndex, LayeredIndex, default_ignore_predicate, parse_signature};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Assembles a step from a run configuration.
///
/// Seed signatures are parsed up front, so a bad seed fails before any traversal.
/// Per-seed indexes are resolved against `base_dir` and layered over `index`.
pub fn build_step(
    config: &ClosureConfig,
    index: TypeIndexPtr,
    base_dir: &Path,
) -> Result<ReflectiveHierarchyStep> {
    let default_ignore = match &config.ignore_prefixes {
        Some(prefixes) => NamePredicate::prefixes(prefixes.clone()),
        None => default_ignore_predicate(),
    };

    let mut step = ReflectiveHierarchyStep::new(index.clone());
    for predicate in config.ignore_warning_predicates()? {
        step.register_ignore_warning(predicate);
    }
    for predicate in config.writable_predicates()? {
        step.register_writable(predicate);
    }
    for seed in &config.seeds {
        step.add_request(seed_request(seed, &default_ignore, &index, base_dir)?);
    }
    Ok(step)
}

fn seed_request(
    seed: &SeedConfig,
    default_ignore: &NamePredicate,
    global: &TypeIndexPtr,
    base_dir: &Path,
) -> Result<HierarchyRequest> {
    let ty = parse_signature(&seed.signature)
        .map_err(|e| ReflscopeError::Config(format!("seed `{}`: {}", seed.signature, e)))?;

    let ignore = match &seed.ignore_prefixes {
        Some(prefixes) => NamePredicate::prefixes(prefixes.clone()),
        None => default_ignore.clone(),
    };
    let mut request = HierarchyRequest::new(ty).with_ignore(ignore);

    if let Some(source) = &seed.source {
        request = request.with_source(source.clone());
    }
    if let Some(path) = &seed.index {
        let path = base_dir.join(path);
        debug!("Seed {} resolves through {}", seed.signature, path.display());
        let own: TypeIndexPtr = Arc::new(JavaTypeIndex::load(&path)?);
        request = request.with_index(Arc::new(LayeredIndex::new(vec![own, global.clone()])));
    }
    Ok(request)
}

/// Loads the index and configuration from disk and assembles a step, without running it.
pub fn load_step(index_path: &Path, config_path: &Path) -> Result<ReflectiveHierarchyStep> {
    let index: TypeIndexPtr = Arc::new(JavaTypeIndex::load(index_path)?);
    let config = ClosureConfig::load(config_path)?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    build_step(&config, index, base_dir)
}

/// Loads the index and configuration from disk and runs the closure into `sink`.
pub fn run_closure(
    index_path: &Path,
    config_path: &Path,
    sink: &mut dyn RegistrationSink,
) -> Result<ClosureReport> {
    load_step(index_path, config_path)?.run(sink)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(options: &LogOptions) -> impl Drop {
    reflscope_core::logging::init_logging(options)
}
