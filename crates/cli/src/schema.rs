use crate::SchemaTarget;
use reflscope_api::RegistrationRecord;
use reflscope_core::config::ClosureConfig;
use reflscope_java::IndexDocument;

pub fn run(target: SchemaTarget) -> Result<(), Box<dyn std::error::Error>> {
    let schema = match target {
        SchemaTarget::Config => schemars::schema_for!(ClosureConfig),
        SchemaTarget::Index => schemars::schema_for!(IndexDocument),
        SchemaTarget::Record => schemars::schema_for!(RegistrationRecord),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
