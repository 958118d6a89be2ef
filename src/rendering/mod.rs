use macroquad::prelude::*;

use crate::application::ViewTransform;
use crate::error::Error;

/// Color of a live cell
pub const ALIVE_COLOR: Color = GREEN;
/// Color of a dead cell
pub const DEAD_COLOR: Color = BLACK;
/// Window clear color behind the board
pub const CLEAR_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// BatchMesh packs every cell quad of the grid into one pre-sized vertex
/// buffer, so drawing the whole board costs a single submission however
/// many cells it has.
///
/// The quad topology is fixed at construction; `batch` only rewrites the
/// four corner vertices of one cell, and is safe to call for every cell
/// every frame.
pub struct BatchMesh {
    grid_width: usize,
    grid_height: usize,
    cell: Vec2,
    mesh: Mesh,
}

impl BatchMesh {
    /// Allocate 4 vertices per cell plus the index list joining them into
    /// two triangles each. No per-cell geometry exists until `batch`.
    pub fn new(cell: Vec2, grid_width: usize, grid_height: usize) -> Result<Self, Error> {
        if grid_width == 0 || grid_height == 0 {
            return Err(Error::InvalidDimension {
                width: grid_width,
                height: grid_height,
            });
        }

        let cells = grid_width * grid_height;
        let vertex_count = cells * 4;
        // Mesh indices are u16, so every corner must stay addressable.
        if vertex_count > usize::from(u16::MAX) + 1 {
            return Err(Error::MeshTooLarge {
                width: grid_width,
                height: grid_height,
                vertices: vertex_count,
            });
        }

        let vertices = vec![Vertex::new(0.0, 0.0, 0.0, 0.0, 0.0, DEAD_COLOR); vertex_count];
        let mut indices = Vec::with_capacity(cells * 6);
        for quad in 0..cells {
            let base = (quad * 4) as u16;
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Ok(Self {
            grid_width,
            grid_height,
            cell,
            mesh: Mesh {
                vertices,
                indices,
                texture: None,
            },
        })
    }

    /// (Re)write the four corners of cell (x, y)'s quad and assign `color`
    /// to all of them. Idempotent; out-of-range coordinates are a no-op.
    pub fn batch(&mut self, x: usize, y: usize, color: Color) {
        if x >= self.grid_width || y >= self.grid_height {
            return;
        }

        let left = x as f32 * self.cell.x;
        let top = y as f32 * self.cell.y;
        let right = left + self.cell.x;
        let bottom = top + self.cell.y;

        let quad = &mut self.mesh.vertices[(y * self.grid_width + x) * 4..][..4];
        quad[0] = Vertex::new(left, top, 0.0, 0.0, 0.0, color);
        quad[1] = Vertex::new(right, top, 0.0, 0.0, 0.0, color);
        quad[2] = Vertex::new(right, bottom, 0.0, 0.0, 0.0, color);
        quad[3] = Vertex::new(left, bottom, 0.0, 0.0, 0.0, color);
    }

    /// Issue exactly one draw submission for the whole board under the
    /// given viewport transform.
    pub fn render(&self, view: &ViewTransform) {
        set_camera(&view.camera(screen_width(), screen_height()));
        draw_mesh(&self.mesh);
        set_default_camera();
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.mesh.indices.len()
    }
}
