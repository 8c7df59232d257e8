pub type Vec3 = [f64; 3];
pub type Point2 = [f64; 2];

/// Edge function used in rasterization
pub fn edge_function(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (c[0] - a[0]) * (b[1] - a[1]) - (c[1] - a[1]) * (b[0] - a[0])
}

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &Vec3) -> Vec3 {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// `origin + a * u + b * v`
pub fn combine(origin: &Vec3, a: f64, u: &Vec3, b: f64, v: &Vec3) -> Vec3 {
    [
        origin[0] + a * u[0] + b * v[0],
        origin[1] + a * u[1] + b * v[1],
        origin[2] + a * u[2] + b * v[2],
    ]
}

/// Rotation about the X axis, angle in radians
pub fn rotation_x(angle: f64) -> [[f64; 3]; 3] {
    let (sin_a, cos_a) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, cos_a, -sin_a], [0.0, sin_a, cos_a]]
}

/// Rotation about the Y axis, angle in radians
pub fn rotation_y(angle: f64) -> [[f64; 3]; 3] {
    let (sin_a, cos_a) = angle.sin_cos();
    [[cos_a, 0.0, sin_a], [0.0, 1.0, 0.0], [-sin_a, 0.0, cos_a]]
}

/// Rotates `point` about the X axis by `pitch`, then about the Y axis by `yaw` (degrees)
pub fn rotate_point(point: &Vec3, pitch: f64, yaw: f64) -> Vec3 {
    let rotation = multiply_matrices(
        &rotation_y(yaw.to_radians()),
        &rotation_x(pitch.to_radians()),
    );
    multiply_matrix_vector(&rotation, point)
}

/// Perspective-projects a view-space point onto a `width`×`height` surface.
///
/// The viewer sits at `z = -viewer_distance`. Screen Y grows downwards, so world Y is flipped.
pub fn project_point(
    point: &Vec3,
    width: f64,
    height: f64,
    fov: f64,
    viewer_distance: f64,
) -> Point2 {
    let depth = point[2] + viewer_distance;
    let factor = if depth == 0.0 { fov } else { fov / depth };
    [
        point[0] * factor + width / 2.0,
        height / 2.0 - point[1] * factor,
    ]
}
