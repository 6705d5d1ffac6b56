//! Icosphere generation for the slide meshes.

use glam::Vec3;

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Build a non-indexed triangle list for a sphere derived from an icosahedron,
/// each face split four ways per subdivision level and re-projected onto the
/// sphere. Normals point radially outward.
///
/// Vertex count is `20 * 4^subdivisions * 3`.
pub fn icosphere(radius: f32, subdivisions: u32) -> Vec<Vertex> {
    let mut triangles = icosahedron_faces();
    for _ in 0..subdivisions {
        let mut next = Vec::with_capacity(triangles.len() * 4);
        for [a, b, c] in triangles {
            let ab = ((a + b) * 0.5).normalize();
            let bc = ((b + c) * 0.5).normalize();
            let ca = ((c + a) * 0.5).normalize();
            next.push([a, ab, ca]);
            next.push([ab, b, bc]);
            next.push([ca, bc, c]);
            next.push([ab, bc, ca]);
        }
        triangles = next;
    }
    triangles
        .into_iter()
        .flatten()
        .map(|unit| Vertex {
            position: (unit * radius).to_array(),
            normal: unit.to_array(),
        })
        .collect()
}

/// The 20 faces of a unit icosahedron, counter-clockwise when viewed from
/// outside.
fn icosahedron_faces() -> Vec<[Vec3; 3]> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z).normalize();
    let p = [
        v(-1.0, t, 0.0),
        v(1.0, t, 0.0),
        v(-1.0, -t, 0.0),
        v(1.0, -t, 0.0),
        v(0.0, -1.0, t),
        v(0.0, 1.0, t),
        v(0.0, -1.0, -t),
        v(0.0, 1.0, -t),
        v(t, 0.0, -1.0),
        v(t, 0.0, 1.0),
        v(-t, 0.0, -1.0),
        v(-t, 0.0, 1.0),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    FACES.iter().map(|&[a, b, c]| [p[a], p[b], p[c]]).collect()
}
