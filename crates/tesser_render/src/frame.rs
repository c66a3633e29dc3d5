//! Per-frame vertex batches and packed matrices
//!
//! The caller owns buffers and draw timing; this module only produces the
//! data to upload: one [`DrawBatch`] of line vertices per geometry, plus the
//! view and projection matrices as flat row-major coefficient buffers.

use tesser_math::{perspective, Camera, Float, Matrix, Rgb, Vector, Vector4d};

use crate::{Geometry, ObjectTransform, RenderError, Vertex, Visualization};

/// Pack all `N`² coefficients row-major as `f32`
pub fn pack_matrix<T: Float, const N: usize>(m: &Matrix<T, N>) -> Vec<f32> {
    let mut packed = Vec::with_capacity(N * N);
    m.for_each_coefficient(|_, value| packed.push(f32::from_f64(value.to_f64())));
    packed
}

/// Transform and visualize a raw point buffer into line vertices
///
/// `positions` holds 4 scalars per point. Every point is pushed through the
/// object's model matrix, brought down to 3D by `visualization`, and tagged
/// with `color` (`0xRRGGBB`).
pub fn build_vertices(
    positions: &[f64],
    transform: &ObjectTransform,
    color: u32,
    four_dimensional: bool,
    visualization: &Visualization,
) -> Result<Vec<Vertex>, RenderError> {
    if positions.len() % 4 != 0 {
        return Err(RenderError::PointBuffer { len: positions.len() });
    }

    let model = transform.model_matrix();
    let rgb = Rgb::<f32>::decode(color);
    let mut degenerate = 0usize;

    let mut vertices = Vec::with_capacity(positions.len() / 4);
    for chunk in positions.chunks_exact(4) {
        let point: Vector4d<f64> = Vector::try_from_slice(chunk)?;
        let visualized = visualization.apply(point * model, four_dimensional);
        if !visualized.is_finite() {
            degenerate += 1;
        }
        vertices.push(Vertex::new(visualized.cast(), rgb));
    }

    if degenerate > 0 {
        log::warn!(
            "{} of {} points projected to non-finite coordinates",
            degenerate,
            vertices.len()
        );
    }

    Ok(vertices)
}

/// View and projection matrices packed for upload
#[derive(Clone, Debug, PartialEq)]
pub struct FrameMatrices {
    /// 16 row-major coefficients
    pub view: Vec<f32>,
    /// 16 row-major coefficients
    pub projection: Vec<f32>,
}

impl FrameMatrices {
    pub fn new(camera: &Camera<f64>, near: f64, far: f64) -> Self {
        let view = camera.view_matrix();
        let projection = perspective(near, far);
        log::trace!("view matrix: {}", view);
        log::trace!("projection matrix: {}", projection);
        Self {
            view: pack_matrix(&view),
            projection: pack_matrix(&projection),
        }
    }
}

/// Vertices for one geometry, drawn as a line list
#[derive(Clone, Debug)]
pub struct DrawBatch {
    pub name: String,
    pub vertices: Vec<Vertex>,
}

impl DrawBatch {
    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

/// Everything needed to draw one frame
#[derive(Clone, Debug)]
pub struct Frame {
    pub matrices: FrameMatrices,
    pub batches: Vec<DrawBatch>,
}

impl Frame {
    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }
}

/// Build matrices and vertex batches for every geometry
pub fn prepare_frame(
    camera: &Camera<f64>,
    near: f64,
    far: f64,
    geometries: &[Geometry],
    visualization: &Visualization,
) -> Result<Frame, RenderError> {
    let matrices = FrameMatrices::new(camera, near, far);

    let mut batches = Vec::with_capacity(geometries.len());
    for geometry in geometries {
        let vertices = build_vertices(
            geometry.positions(),
            &geometry.transform,
            geometry.color,
            geometry.four_dimensional,
            visualization,
        )?;
        log::debug!("{}: {} vertices", geometry.name, vertices.len());
        batches.push(DrawBatch {
            name: geometry.name.clone(),
            vertices,
        });
    }

    Ok(Frame { matrices, batches })
}
