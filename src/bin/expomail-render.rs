use expomail::{parse_config, render, render_text, substitute_preview, TemplateError};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut check_only = false;
    let mut preview = false;
    let mut text_rendition = false;
    let mut files: Vec<String> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "--check" => check_only = true,
            "--preview" => preview = true,
            "--text" => text_rendition = true,
            other => files.push(other.to_string()),
        }
    }

    if files.is_empty() {
        eprintln!("Usage: expomail-render [--check] [--preview] [--text] <config.json>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  expomail-render invitation.json            render to stdout");
        eprintln!("  expomail-render --preview invitation.json  render with sample values");
        eprintln!("  expomail-render --text invitation.json     plain-text rendition");
        eprintln!("  expomail-render --check *.json             validate only");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &files {
        match process_file(file_path, check_only, preview, text_rendition) {
            Ok(()) => {
                if check_only {
                    println!("✓ {} is valid", file_path);
                }
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

fn process_file(
    path: &str,
    check_only: bool,
    preview: bool,
    text_rendition: bool,
) -> Result<(), TemplateError> {
    let content = fs::read_to_string(path)
        .map_err(|e| TemplateError::ValidationError(format!("Failed to read file: {}", e)))?;

    let config = parse_config(&content)?;
    if check_only {
        return Ok(());
    }

    let output = if text_rendition {
        render_text(&config)
    } else {
        render(&config)
    };
    if preview {
        println!("{}", substitute_preview(&output));
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn print_error(error: &TemplateError) {
    match error {
        TemplateError::UnknownDynamicField { key, expected } => {
            eprintln!("  Unknown dynamic field key '{}':", key);
            eprintln!("    Expected one of: {}", expected);
        }
        TemplateError::ValidationError(msg) => {
            eprintln!("  Validation error:");
            eprintln!("    {}", msg);
        }
        TemplateError::DeserializationError(msg) => {
            eprintln!("  Deserialization error:");
            eprintln!("    {}", msg);
        }
        TemplateError::SerializationError(msg) => {
            eprintln!("  Serialization error:");
            eprintln!("    {}", msg);
        }
    }
}
