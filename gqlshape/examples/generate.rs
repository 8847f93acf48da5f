//! Prints the descriptors and Reason type expressions for a schema.
//!
//! Run with:
//! `cargo run --example generate -- schema.graphql [query.graphql ...]`
//!
//! Set `GQLSHAPE_CONFIG` to a JSON configuration file to override scalars or
//! enable input filtering, and `RUST_LOG=debug` to see pipeline logging.

use anyhow::Context;
use gqlshape::prelude::*;
use gqlshape::schema::validation::unresolved_references;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let schema_path = args
        .next()
        .context("usage: generate <schema.graphql> [documents...]")?;
    let document_paths: Vec<PathBuf> = args.collect();

    let config = match std::env::var_os("GQLSHAPE_CONFIG") {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", PathBuf::from(&path).display()))?;
            CodegenConfig::from_json(&json)?
        }
        None => CodegenConfig::new(),
    };

    let output = generate_from_files(&schema_path, &document_paths, &config)?;

    let unresolved = unresolved_references(&output.schema, &output.operations);
    for err in unresolved {
        tracing::warn!("{}", err);
    }

    for (name, target) in &output.custom_scalars {
        println!("type {} = {};", reason::type_name(name), target);
    }

    for object in &output.schema.objects {
        println!("module {} {{", object.name);
        for field in &object.fields {
            println!(
                "  {}: {} = {}",
                reason::sanitize_field_name(&field.name),
                reason::accessor_type(field),
                reason::field_getter_name(field)
            );
        }
        println!("}}");
    }

    for input in &output.input_objects {
        println!("input {} {{", reason::type_name(&input.name));
        for field in &input.fields {
            println!(
                "  \"{}\": {}",
                reason::sanitize_field_name(&field.name),
                reason::input_field_type(field)
            );
        }
        println!("}}");
    }

    for op in &output.operations {
        let args: Vec<String> = op.variables.iter().map(reason::labeled_argument).collect();
        println!(
            "{} {}({})",
            op.kind.keyword(),
            reason::module_name(op.name.as_deref()),
            args.join(", ")
        );
    }

    Ok(())
}
