use std::path::Path;

use colored::Colorize;

pub fn run(parses_path: &Path, world_path: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let parses = super::load_parses(parses_path)?;

    let interpretations =
        kw_interpret::interpret(&parses, &world).map_err(|e| e.to_string())?;

    for interpretation in &interpretations {
        println!("  {}", interpretation.parse.source.bold());
        println!("    {}", interpretation.goal.to_string().green());
    }
    println!();
    println!(
        "  {} of {} parses admit an interpretation",
        interpretations.len(),
        parses.len()
    );

    Ok(())
}
