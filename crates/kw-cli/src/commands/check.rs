use std::path::Path;

pub fn run(world_path: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let arm = match world.holding() {
        Some(id) => format!("holding {id}"),
        None => "arm empty".to_string(),
    };
    println!("  Scene is valid.");
    println!(
        "  {} objects in {} stacks, {arm}",
        world.object_count(),
        world.stacks().len()
    );

    Ok(())
}
