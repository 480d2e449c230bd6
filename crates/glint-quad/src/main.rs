//! Draws a quad in a fixed 800×800 window, its vertex colors pulsing with a
//! sine wave fed through a uniform.

use std::path::Path;

use anyhow::Result;

use glint_engine::core::{App, FrameCtx, run};
use glint_engine::gl::{
    AttribType, AttributeLink, BufferKind, BufferObject, GlApi, ShaderProgram, VertexArray,
};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::window::{DesktopPlatform, WindowConfig};

const WINDOW_SIZE: u32 = 800;
const CLEAR_COLOR: (f32, f32, f32, f32) = (0.07, 0.13, 0.17, 1.0);

const SQRT_3: f32 = 1.732_050_8;

/// Interleaved position (xyz) + color (rgb), six vertices: three outer
/// corners of an equilateral triangle and the three edge midpoints.
#[rustfmt::skip]
const VERTICES: [f32; 36] = [
    -0.5,  -0.5 * SQRT_3 / 3.0,       0.0,    1.0, 1.0, 1.0, // lower left
     0.5,  -0.5 * SQRT_3 / 3.0,       0.0,    0.0, 0.0, 0.0, // lower right
     0.0,   0.5 * SQRT_3 * 2.0 / 3.0, 0.0,    0.0, 0.0, 0.0, // top
    -0.25,  0.5 * SQRT_3 / 6.0,       0.0,    1.0, 0.0, 0.0, // mid left
     0.25,  0.5 * SQRT_3 / 6.0,       0.0,    0.0, 1.0, 0.0, // mid right
     0.0,  -0.5 * SQRT_3 / 3.0,       0.0,    0.0, 0.0, 1.0, // mid bottom
];

/// Two triangles forming the central quad.
const INDICES: [u32; 6] = [0, 3, 5, 3, 5, 4];

const VERTEX_STRIDE: i32 = 6 * size_of::<f32>() as i32;

const VERT_PATH: &str = "resources/shaders/quad.vert";
const FRAG_PATH: &str = "resources/shaders/quad.frag";

struct Scene<G: GlApi> {
    program: ShaderProgram<G>,
    wave_uniform: Option<G::Uniform>,
    vao: VertexArray<G>,
    vbo: BufferObject<G>,
    ebo: BufferObject<G>,
}

/// The quad program: one buffer of interleaved vertices, one index buffer,
/// one vertex array linking both, one shader program with a wave uniform.
struct QuadApp<G: GlApi> {
    scene: Option<Scene<G>>,
    wave: f32,
}

impl<G: GlApi> QuadApp<G> {
    fn new() -> Self {
        Self {
            scene: None,
            wave: 0.0,
        }
    }
}

impl<G: GlApi> App<G> for QuadApp<G> {
    fn setup(&mut self, ctx: &mut FrameCtx<'_, G>) -> Result<()> {
        let gl = ctx.gl;

        // The window is not resizable; the viewport mapping is established
        // once here and never recalculated.
        let (width, height) = ctx.surface_size;
        gl.viewport(0, 0, width as i32, height as i32);

        let program = ShaderProgram::from_files(gl, Path::new(VERT_PATH), Path::new(FRAG_PATH))?;

        let mut vao = VertexArray::new(gl)?;
        vao.bind(gl);

        let vbo = BufferObject::new(gl, BufferKind::Vertex, bytemuck::cast_slice(&VERTICES))?;
        let ebo = BufferObject::new(gl, BufferKind::Index, bytemuck::cast_slice(&INDICES))?;
        vao.set_index_buffer(gl, &ebo);

        vao.link_buffer(
            gl,
            &vbo,
            AttributeLink {
                slot: 0,
                component_count: 3,
                component_type: AttribType::F32,
                stride_bytes: VERTEX_STRIDE,
                offset_bytes: 0,
            },
        );
        vao.link_buffer(
            gl,
            &vbo,
            AttributeLink {
                slot: 1,
                component_count: 3,
                component_type: AttribType::F32,
                stride_bytes: VERTEX_STRIDE,
                offset_bytes: 3 * size_of::<f32>() as i32,
            },
        );

        // Unbind so later code cannot mutate the configured objects by
        // accident. The array goes first; unbinding the index buffer while
        // the array is still active would detach it.
        vao.unbind(gl);
        vbo.unbind(gl);
        ebo.unbind(gl);

        let wave_uniform = program.uniform(gl, "u_wave");
        if wave_uniform.is_none() {
            log::warn!("shader has no u_wave uniform; color animation disabled");
        }

        self.scene = Some(Scene {
            program,
            wave_uniform,
            vao,
            vbo,
            ebo,
        });
        Ok(())
    }

    fn update(&mut self, ctx: &mut FrameCtx<'_, G>) {
        self.wave = ctx.time.elapsed.sin();
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_, G>) {
        let Some(scene) = self.scene.as_ref() else {
            return;
        };
        let gl = ctx.gl;

        let (r, g, b, a) = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear();

        scene.program.bind(gl);

        // Uniform upload only takes effect while the program is active.
        if let Some(location) = &scene.wave_uniform {
            gl.set_uniform_f32(location, self.wave);
        }

        scene.vao.bind(gl);
        let index_count = scene.vao.index_count().unwrap_or(0);
        gl.draw_indexed_triangles(index_count as i32);
    }

    fn cleanup(&mut self, ctx: &mut FrameCtx<'_, G>) {
        let gl = ctx.gl;
        if let Some(scene) = self.scene.take() {
            scene.vao.delete(gl);
            scene.vbo.delete(gl);
            scene.ebo.delete(gl);
            scene.program.delete(gl);
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let platform = DesktopPlatform::init()?;
    let config = WindowConfig {
        title: "glint quad".to_string(),
        width: WINDOW_SIZE,
        height: WINDOW_SIZE,
    };

    run(platform, config, QuadApp::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_within_the_vertex_range() {
        let vertex_count = (VERTICES.len() / 6) as u32;
        assert!(INDICES.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn index_count_is_a_whole_number_of_triangles() {
        assert_eq!(INDICES.len() % 3, 0);
    }

    #[test]
    fn vertex_data_fills_whole_strides() {
        assert_eq!(
            (VERTICES.len() * size_of::<f32>()) as i32 % VERTEX_STRIDE,
            0
        );
    }
}
