use crate::cli::OutputFormat;
use crate::output;

/// Handle `uch schema`.
pub fn handle(format: OutputFormat) -> anyhow::Result<()> {
    let schema = uch_report::report_schema()?;
    println!("{}", output::render_json(&schema, format)?);
    Ok(())
}
