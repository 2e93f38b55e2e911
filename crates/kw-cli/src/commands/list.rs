use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use kw_core::{ObjectId, WorldState};

pub fn run(world_path: &Path, form: Option<&str>) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Form", "Size", "Color", "Position"]);

    let mut shown = 0;
    for (column, stack) in world.stacks().iter().enumerate() {
        for (height, id) in stack.iter().enumerate() {
            let position = format!("stack {column}, height {height}");
            if add_row(&mut table, &world, id, &position, form) {
                shown += 1;
            }
        }
    }
    if let Some(held) = world.holding()
        && add_row(&mut table, &world, held, "held by the arm", form)
    {
        shown += 1;
    }

    if shown == 0 {
        println!("  No objects found.");
        return Ok(());
    }

    println!("{table}");
    println!();
    println!("  {shown} objects");

    Ok(())
}

/// Add one object's row unless the form filter excludes it.
fn add_row(
    table: &mut Table,
    world: &WorldState,
    id: &ObjectId,
    position: &str,
    form: Option<&str>,
) -> bool {
    let Some(spec) = world.spec(id) else {
        return false;
    };
    if let Some(filter) = form
        && spec.form.to_string() != filter.to_lowercase()
    {
        return false;
    }
    table.add_row(vec![
        id.to_string(),
        spec.form.to_string(),
        spec.size.to_string(),
        spec.color.to_string(),
        position.to_string(),
    ]);
    true
}
