use anyhow::{Context, Result};
use colored::Colorize;
use contact_form::validation::validate_named;

/// Print the violations for one value. Returns whether it was valid.
pub fn execute(field: &str, value: &str, json: bool) -> Result<bool> {
    let result = validate_named(field, value)
        .with_context(|| format!("Cannot validate field {:?}", field))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_valid());
    }

    if result.is_valid() {
        println!("{} {}", "✓".green().bold(), format!("{} is valid", field).green());
    } else {
        for violation in &result {
            println!("{} {}", "✗".red().bold(), violation.message.red());
        }
    }

    Ok(result.is_valid())
}
