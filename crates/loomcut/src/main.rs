use anyhow::Context;
use loomcut::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let size = args.get(1).map(|s| s.as_str()).unwrap_or("medium");

    let mut session = LoomSession::new();
    match SizePreset::from_name(size) {
        Some(preset) => session.select_size(preset)?,
        None => match size.parse::<i32>() {
            Ok(teeth) => session.set_tooth_count(teeth)?,
            Err(_) => {
                println!("Usage: loomcut [small|medium|large|<teeth>] [label1] [label2]");
                println!("  small   - 12-tooth loom");
                println!("  medium  - 16-tooth loom (default)");
                println!("  large   - 20-tooth loom");
                println!("  <teeth> - explicit tooth count");
                println!("Writes {} to the current directory.", FILE_NAME);
                return Ok(());
            }
        },
    }

    if let Some(label1) = args.get(2) {
        session.edit_label("text1", label1)?;
    }
    if let Some(label2) = args.get(3) {
        session.edit_label("text2", label2)?;
    }

    let bytes = session.request_export()?;
    std::fs::write(FILE_NAME, &bytes).with_context(|| format!("write {}", FILE_NAME))?;

    if let Some(template) = session.template() {
        let params = template.params;
        println!(
            "Wrote {} ({} teeth, {}\" x {}\")",
            FILE_NAME,
            params.tooth_count,
            params.physical_width_in(),
            params.height / SHEET_UNITS_PER_INCH
        );
    }
    Ok(())
}
