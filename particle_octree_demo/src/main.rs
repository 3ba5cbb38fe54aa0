//! Headless particle octree demo
//!
//! Scatters random particles in the unit cube, indexes them in an octree and
//! runs a few frames against a recording command list, logging what each
//! frame would upload. Usage: `particle_octree_demo [particle_count]`.

use particle_octree::glam::Vec3;
use particle_octree::octree3d::render::RecordingCommandList;
use particle_octree::octree3d::scene::{Drawable, Octree, Particle, Positioned};
use particle_octree::octree3d::Result;
use particle_octree::{octree_error, octree_info, octree_warn};
use rand::Rng;

const SOURCE: &str = "particle_octree_demo";

const NUM_PARTICLES: usize = 1000;
const DISPLAY_TREE: bool = false;
const FRAMES: usize = 3;

fn particle_count() -> usize {
    match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(count) => count,
            Err(_) => {
                octree_warn!(SOURCE, "Ignoring invalid particle count '{}'", arg);
                NUM_PARTICLES
            }
        },
        None => NUM_PARTICLES,
    }
}

fn run() -> Result<()> {
    let mut rng = rand::thread_rng();
    let count = particle_count();

    let mut tree = Octree::new(Vec3::ZERO, Vec3::ONE)?;
    tree.enable_draw(DISPLAY_TREE);

    // Ids are enough to remove a particle later
    let mut removal_order = Vec::with_capacity(count);
    for _ in 0..count {
        let particle = Particle::new(Vec3::new(rng.gen(), rng.gen(), rng.gen()));
        let id = particle.id();
        match tree.add(particle) {
            Ok(()) => removal_order.push(id),
            Err(e) => {
                let rejected = e.into_object();
                octree_warn!(
                    SOURCE,
                    "Skipped particle {:?} at {}: depth limit reached",
                    rejected.id(), rejected.position()
                );
            }
        }
    }

    let stats = tree.stats();
    octree_info!(
        SOURCE,
        "Indexed {} particles: {} nodes, {} leaves, depth {}",
        tree.len(), stats.nodes, stats.leaves, stats.deepest
    );

    let mut cmd = RecordingCommandList::new();
    for frame in 0..FRAMES {
        // Show the tree outline from the second frame on
        if frame == 1 {
            tree.enable_draw(true);
        }
        // Drop a particle between frames, outside of any draw
        let last = removal_order
            .pop()
            .and_then(|id| tree.occupants().find(|p| p.id() == id).cloned());
        if let Some(particle) = last {
            tree.remove(&particle);
        }

        cmd.clear();
        tree.draw(&mut cmd)?;

        octree_info!(
            SOURCE,
            "Frame {}: {} lines ({} bytes), {} points ({} bytes)",
            frame,
            cmd.line_count(),
            cmd.line_vertex_bytes().len(),
            cmd.point_count(),
            cmd.point_bytes().len()
        );
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        octree_error!(SOURCE, "Demo failed: {}", e);
        std::process::exit(1);
    }
}
