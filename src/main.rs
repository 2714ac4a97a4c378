//! Demo binary: renders the classic salt-circle scene once and prints
//! it. Takes an optional resolve seed as the first argument.

use anyhow::{Context, Result};

use runegrid::{Circle, Line, Material, Scene, Vec2};

fn main() -> Result<()> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid seed '{arg}'"))?,
        None => 0,
    };

    let scene = salt_circle_scene()?;
    print!("{}", scene.render_with_seed(seed));
    Ok(())
}

/// Nested circles with a five-point star across them: a dotted outer
/// disc with a speckled rune outline, hollowed by an inner blank disc.
fn salt_circle_scene() -> Result<Scene> {
    let edge_set = Material::glyph_set("0#$@", 2);
    let fill = Material::new('.', 0);
    let hollow = Material::new(' ', 1);

    let mut scene = Scene::new();
    scene.add(Circle::with_edge_set(
        Vec2::ZERO,
        10.0,
        edge_set.clone(),
        Some(fill),
    )?);
    scene.add(Circle::with_edge_set(Vec2::ZERO, 5.0, Vec::new(), Some(hollow))?);

    // Five-point star: hop around the circle in steps of 4/5 pi.
    let radius = 9.0;
    let mut prev = Vec2::new(0.0, 10.0);
    for i in 1..6 {
        let angle = i as f64 * std::f64::consts::PI * 4.0 / 5.0;
        let next = Vec2::new(radius * angle.sin(), radius * angle.cos());
        scene.add(Line::with_materials(prev, next, edge_set.clone())?);
        prev = next;
    }

    Ok(scene)
}
