use pagecraft_blocks::{parse_block_section, parse_section, validator, BlockError};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: blocks-validate <section.json>");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  blocks-validate features.json");
        eprintln!("  blocks-validate *.json");
        process::exit(1);
    }

    let mut exit_code = 0;
    let files: Vec<_> = args[1..].to_vec();

    for file_path in files {
        match validate_file(&file_path) {
            Ok(()) => {
                println!("✓ {} is valid", file_path);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn validate_file(path: &str) -> Result<(), BlockError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BlockError::ValidationError(format!("Failed to read file: {}", e)))?;

    // Block sections carry a "textImageBlocks" key; everything else is
    // treated as a Features section.
    if content.contains("\"textImageBlocks\"") {
        let section = parse_block_section(&content)?;
        validator::validate_block_section(&section)?;
    } else {
        let section = parse_section(&content)?;
        validator::validate_section(&section)?;
    }
    Ok(())
}

fn print_error(error: &BlockError) {
    match error {
        BlockError::ValidationError(msg) => {
            eprintln!("  Validation error:");
            eprintln!("    {}", msg);
        }
        BlockError::InvalidProperty {
            entity,
            property,
            reason,
        } => {
            eprintln!("  Invalid property '{}' for '{}':", property, entity);
            eprintln!("    {}", reason);
        }
        BlockError::InvalidColor {
            property,
            value,
            reason,
        } => {
            eprintln!("  Invalid color value '{}' for '{}':", value, property);
            eprintln!("    {}", reason);
        }
        BlockError::MissingProperty { entity, property } => {
            eprintln!("  Missing required property '{}' for '{}'", property, entity);
        }
        BlockError::ValueOutOfRange {
            property,
            value,
            range,
        } => {
            eprintln!("  Value out of range for '{}':", property);
            eprintln!("    Value: {}", value);
            eprintln!("    Expected range: {}", range);
        }
        BlockError::DuplicateId { id } => {
            eprintln!("  Duplicate id '{}'", id);
            eprintln!("    Entity ids must be unique within a section");
        }
        BlockError::DeserializationError(msg) => {
            eprintln!("  Deserialization error:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
