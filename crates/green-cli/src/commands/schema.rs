use anyhow::bail;
use green_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `greencheck schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let name = match (&args.name, args.list) {
        (Some(name), false) => name,
        _ => return output(&registry.list(), flags.format),
    };

    match registry.get(name) {
        Some(schema) => output(schema, flags.format),
        None => bail!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        ),
    }
}
