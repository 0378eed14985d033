//! Headless demo: a tumbling cube on a grid, logged back to front each frame.

use anyhow::Result;
use axono::{NodeId, Scene};

struct Options {
    pitch: f64,
    rotation: f64,
    origin: (f64, f64),
    frames: u32,
    size: f64,
}

fn parse_f64(arg: &str, flag: &str, default: f64) -> f64 {
    match arg.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::warn!("Invalid value '{}' for {}, using {}.", arg, flag, default);
            default
        }
    }
}

fn parse_args() -> Options {
    // Accept: --pitch=DEG --rotation=DEG --origin=XxY --frames=N --size=N
    let mut opts = Options {
        pitch: 35.0,
        rotation: 45.0,
        origin: (0.0, 0.0),
        frames: 3,
        size: 100.0,
    };

    for arg in std::env::args().skip(1) {
        if let Some(v) = arg.strip_prefix("--pitch=") {
            opts.pitch = parse_f64(v, "--pitch", opts.pitch);
        } else if let Some(v) = arg.strip_prefix("--rotation=") {
            opts.rotation = parse_f64(v, "--rotation", opts.rotation);
        } else if let Some(v) = arg.strip_prefix("--size=") {
            opts.size = parse_f64(v, "--size", opts.size);
        } else if let Some(v) = arg.strip_prefix("--frames=") {
            match v.parse::<u32>() {
                Ok(n) => opts.frames = n,
                Err(_) => log::warn!("Invalid value '{}' for --frames, using {}.", v, opts.frames),
            }
        } else if let Some(v) = arg.strip_prefix("--origin=") {
            match v.split_once('x').or_else(|| v.split_once('X')) {
                Some((sx, sy)) => {
                    opts.origin = (parse_f64(sx, "--origin", 0.0), parse_f64(sy, "--origin", 0.0));
                }
                None => log::warn!("Invalid value '{}' for --origin, expected XxY.", v),
            }
        } else {
            log::warn!("Unknown argument '{}', ignoring.", arg);
        }
    }
    opts
}

/// Eight corner nodes under a pivot that spins about its own axes.
fn build_cube(scene: &mut Scene, size: f64) -> NodeId {
    let pivot = scene.create_node(Some("cube"));
    if let Some(node) = scene.node_mut(pivot) {
        node.set_local_rotation(true);
        node.translate(0.0, size, 0.0);
    }
    scene.add_child(pivot);

    let half = size / 2.0;
    for (i, &x) in [-half, half].iter().enumerate() {
        for (j, &y) in [-half, half].iter().enumerate() {
            for (k, &z) in [-half, half].iter().enumerate() {
                let label = format!("corner-{i}{j}{k}");
                let corner = scene.create_node(Some(label.as_str()));
                if let Some(node) = scene.node_mut(corner) {
                    node.translate(x, y, z);
                }
                scene.add_child_to(pivot, corner);
            }
        }
    }
    pivot
}

/// Flat ground grid, lowest priority so it draws under anything at equal depth.
fn build_grid(scene: &mut Scene, size: f64) {
    let grid = scene.create_node(Some("grid"));
    scene.add_child(grid);
    for step in -2..=2 {
        for (axis, (x, z)) in [("x", (step as f64 * size, 0.0)), ("z", (0.0, step as f64 * size))] {
            let label = format!("grid-{axis}{step}");
            let line = scene.create_node(Some(label.as_str()));
            if let Some(node) = scene.node_mut(line) {
                node.translate(x, 0.0, z);
                node.set_z_priority(-1.0);
            }
            scene.add_child_to(grid, line);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args();
    log::info!(
        "Starting axono demo. pitch={}, rotation={}, origin={}x{}, frames={}, size={}",
        opts.pitch,
        opts.rotation,
        opts.origin.0,
        opts.origin.1,
        opts.frames,
        opts.size
    );

    let mut scene = Scene::new(opts.pitch, opts.rotation);
    scene.set_origin(opts.origin.0, opts.origin.1);
    build_grid(&mut scene, opts.size);
    let cube = build_cube(&mut scene, opts.size);
    let shadow = scene.create_node(Some("shadow"));
    scene.add_child(shadow);

    for frame in 0..opts.frames {
        let angle = frame as f64 * 15.0;
        if let Some(node) = scene.node_mut(cube) {
            node.rotate(angle, angle * 0.5, 0.0);
        }

        scene.project_nodes();

        // Drop the helper onto the ground right under the cube.
        let centre = scene.node(cube).map(|n| n.vertex()).unwrap_or_default();
        if let Some(node) = scene.node_mut(shadow) {
            node.reset();
            node.translate(centre.x, 0.0, centre.z);
            node.set_z_priority(-0.5);
        }
        scene.project(shadow, true)?;

        let order = scene.sort_nodes();

        log::info!("frame {}: {} nodes", frame, order.len());
        for id in order {
            if let Some(node) = scene.node(id) {
                log::info!(
                    "  #{:<3} {:<12} px={:>9.2} py={:>9.2} depth={:>9.2}",
                    node.z_index(),
                    node.label().unwrap_or("-"),
                    node.px(),
                    node.py(),
                    node.z_depth()
                );
            }
        }
    }

    log::info!("Done.");
    Ok(())
}
