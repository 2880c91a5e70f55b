//! Shape generation for 3D primitives
//!
//! Every builder appends independent triangles (no index buffer) to `out`.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;

/// Vertices emitted by `ellipsoid`/`sphere` for the given tessellation
pub const fn sphere_vertex_count(lat_segments: u32, lon_segments: u32) -> usize {
    (lat_segments * lon_segments * 6) as usize
}

/// Two triangles: (a, b, c) and (a, c, d)
pub fn quad(out: &mut Vec<Vertex>, corners: [Vec3; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        out.push(Vertex::at(p, color));
    }
}

/// Horizontal rectangle at height `y`
pub fn horizontal_rect(out: &mut Vec<Vertex>, x: (f32, f32), z: (f32, f32), y: f32, color: [f32; 4]) {
    quad(
        out,
        [
            Vec3::new(x.0, y, z.0),
            Vec3::new(x.1, y, z.0),
            Vec3::new(x.1, y, z.1),
            Vec3::new(x.0, y, z.1),
        ],
        color,
    );
}

/// The six faces of an axis-aligned box
pub fn axis_box(out: &mut Vec<Vertex>, min: Vec3, max: Vec3, color: [f32; 4]) {
    let v = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];
    const FACES: [[usize; 4]; 6] = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [0, 4, 7, 3],
        [1, 5, 6, 2],
        [3, 2, 6, 7],
        [0, 1, 5, 4],
    ];
    for f in FACES {
        quad(out, [v[f[0]], v[f[1]], v[f[2]], v[f[3]]], color);
    }
}

/// Latitude/longitude ellipsoid; `y_scale` squashes it vertically
pub fn ellipsoid(
    out: &mut Vec<Vertex>,
    center: Vec3,
    radius: f32,
    y_scale: f32,
    lat_segments: u32,
    lon_segments: u32,
    color: [f32; 4],
) {
    let point = |theta: f32, phi: f32| {
        center
            + Vec3::new(
                radius * theta.sin() * phi.cos(),
                radius * y_scale * theta.cos(),
                radius * theta.sin() * phi.sin(),
            )
    };

    out.reserve(sphere_vertex_count(lat_segments, lon_segments));
    for lat in 0..lat_segments {
        let theta1 = lat as f32 / lat_segments as f32 * PI;
        let theta2 = (lat + 1) as f32 / lat_segments as f32 * PI;
        for lon in 0..lon_segments {
            let phi1 = lon as f32 / lon_segments as f32 * TAU;
            let phi2 = (lon + 1) as f32 / lon_segments as f32 * TAU;
            quad(
                out,
                [
                    point(theta1, phi1),
                    point(theta2, phi1),
                    point(theta2, phi2),
                    point(theta1, phi2),
                ],
                color,
            );
        }
    }
}

pub fn sphere(
    out: &mut Vec<Vertex>,
    center: Vec3,
    radius: f32,
    lat_segments: u32,
    lon_segments: u32,
    color: [f32; 4],
) {
    ellipsoid(out, center, radius, 1.0, lat_segments, lon_segments, color);
}

/// Torus around `normal` through `center`
pub fn torus(
    out: &mut Vec<Vertex>,
    center: Vec3,
    normal: Vec3,
    radius: f32,
    tube_radius: f32,
    segments: u32,
    tube_segments: u32,
    color: [f32; 4],
) {
    let normal = normal.normalize_or(Vec3::Y);
    let helper = if normal.y.abs() > 0.99 { Vec3::X } else { Vec3::Y };
    let tangent = normal.cross(helper).normalize();
    let bitangent = normal.cross(tangent).normalize();

    let point = |theta: f32, phi: f32| {
        let circle = tangent * theta.cos() + bitangent * theta.sin();
        let tube = circle * phi.cos() + normal * phi.sin();
        center + circle * radius + tube * tube_radius
    };

    for i in 0..segments {
        let theta1 = i as f32 / segments as f32 * TAU;
        let theta2 = (i + 1) as f32 / segments as f32 * TAU;
        for j in 0..tube_segments {
            let phi1 = j as f32 / tube_segments as f32 * TAU;
            let phi2 = (j + 1) as f32 / tube_segments as f32 * TAU;
            quad(
                out,
                [
                    point(theta1, phi1),
                    point(theta2, phi1),
                    point(theta2, phi2),
                    point(theta1, phi2),
                ],
                color,
            );
        }
    }
}

/// Flat dart pointing along `forward`
pub fn paper_airplane(out: &mut Vec<Vertex>, pos: Vec3, forward: Vec3, up: Vec3, color: [f32; 4]) {
    let right = forward.cross(up).normalize_or_zero();
    let nose = pos + forward * 6.0;
    let left_wing = pos - forward * 3.0 + right * 3.0;
    let right_wing = pos - forward * 3.0 - right * 3.0;
    for p in [nose, left_wing, right_wing] {
        out.push(Vertex::at(p, color));
    }
}
