//! World geometry: the static backdrop and per-tick dynamic meshes

use glam::Vec3;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::bounds::WorldBounds;
use crate::sim::camera::Camera;
use crate::sim::targets::Target;

/// Grass square edge length
const GRASS_SIZE: f32 = 400.0;
const GRASS_Y: f32 = -0.5;

/// Runway
const RUNWAY_LENGTH: f32 = 350.0;
const RUNWAY_WIDTH: f32 = 40.0;
const RUNWAY_Y: f32 = 0.5;
const MARKING_Y: f32 = 0.51;
const DASH_LENGTH: f32 = 5.0;
const DASH_WIDTH: f32 = 1.0;
const EDGE_LINE_WIDTH: f32 = 0.5;
const EDGE_LINE_OFFSET: f32 = 2.0;

/// Clouds
const CLOUD_CENTERS: [[f32; 3]; 6] = [
    [-50.0, 60.0, 0.0],
    [0.0, 60.0, 40.0],
    [40.0, 60.0, -30.0],
    [-30.0, 60.0, 60.0],
    [60.0, 60.0, 20.0],
    [20.0, 60.0, -60.0],
];
const CLOUD_RADIUS: f32 = 15.0;
const CLOUD_SQUASH: f32 = 0.5;
const CLOUD_SEGMENTS: (u32, u32) = (12, 24);

/// Decorative rings: center, axis, color
const RINGS: [([f32; 3], [f32; 3], [f32; 4]); 3] = [
    ([0.0, 8.0, 40.0], [0.0, 1.0, 0.0], colors::RING_RED),
    ([-15.0, 12.0, 0.0], [0.0, 0.0, 1.0], colors::RING_GREEN),
    ([20.0, 20.0, -30.0], [1.0, 0.0, 0.0], colors::RING_BLUE),
];
const RING_RADIUS: f32 = 6.0;
const RING_TUBE_RADIUS: f32 = 1.0;
const RING_SEGMENTS: (u32, u32) = (48, 16);

/// Checkpoint sphere tessellation
pub const TARGET_SEGMENTS: (u32, u32) = (18, 36);

/// Distance of the airplane marker ahead of the camera
const MARKER_DISTANCE: f32 = 4.0;

/// Sky box, ground, clouds, runway and decorative rings.
///
/// Independent of simulation state; the sky box follows the world bounds.
pub fn build_static(bounds: &WorldBounds) -> Vec<Vertex> {
    let mut out = Vec::new();

    shapes::axis_box(&mut out, bounds.min(), bounds.max(), colors::SKY);

    let g = GRASS_SIZE / 2.0;
    shapes::horizontal_rect(&mut out, (-g, g), (-g, g), GRASS_Y, colors::GRASS);

    for center in CLOUD_CENTERS {
        shapes::ellipsoid(
            &mut out,
            Vec3::from_array(center),
            CLOUD_RADIUS,
            CLOUD_SQUASH,
            CLOUD_SEGMENTS.0,
            CLOUD_SEGMENTS.1,
            colors::CLOUD,
        );
    }

    push_runway(&mut out);

    for (center, normal, color) in RINGS {
        shapes::torus(
            &mut out,
            Vec3::from_array(center),
            Vec3::from_array(normal),
            RING_RADIUS,
            RING_TUBE_RADIUS,
            RING_SEGMENTS.0,
            RING_SEGMENTS.1,
            color,
        );
    }

    log::debug!("Static scene: {} triangles", out.len() / 3);
    out
}

fn push_runway(out: &mut Vec<Vertex>) {
    let (half_w, half_l) = (RUNWAY_WIDTH / 2.0, RUNWAY_LENGTH / 2.0);
    shapes::horizontal_rect(out, (-half_w, half_w), (-half_l, half_l), RUNWAY_Y, colors::RUNWAY);

    // Centre dashes
    let mut z = -half_l;
    while z < half_l {
        shapes::horizontal_rect(
            out,
            (-DASH_WIDTH / 2.0, DASH_WIDTH / 2.0),
            (z, z + DASH_LENGTH),
            MARKING_Y,
            colors::RUNWAY_DASH,
        );
        z += DASH_LENGTH * 2.0;
    }

    // Edge lines
    let inner = half_w - EDGE_LINE_OFFSET;
    for (a, b) in [(-inner, -inner + EDGE_LINE_WIDTH), (inner, inner - EDGE_LINE_WIDTH)] {
        shapes::horizontal_rect(out, (a, b), (-half_l, half_l), MARKING_Y, colors::RUNWAY_EDGE);
    }
}

/// One sphere per live checkpoint
pub fn push_targets(out: &mut Vec<Vertex>, targets: &[Target]) {
    for target in targets {
        shapes::sphere(
            out,
            target.center,
            target.radius,
            TARGET_SEGMENTS.0,
            TARGET_SEGMENTS.1,
            target.color,
        );
    }
}

/// Paper airplane just ahead of the camera, banked with it
pub fn push_marker(out: &mut Vec<Vertex>, camera: &Camera) {
    let pos = camera.position + camera.forward * MARKER_DISTANCE;
    shapes::paper_airplane(out, pos, camera.forward, camera.up(), colors::AIRPLANE);
}
