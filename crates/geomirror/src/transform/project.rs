use crate::sphere::{centroid, mean_point, Point, Ring, VertexOffset};

/// Re-anchor `ring` at `target`, keeping each vertex's great-circle distance
/// and initial bearing from the ring's centroid.
///
/// The map is a rigid rotation of the sphere (it carries the source pivot and
/// its north direction onto `target` and its north direction), so vertex
/// order, winding, and inter-vertex distances survive.
///
/// Total over valid rings: a degenerate ring falls back to the plain vertex
/// mean as pivot; coincident points map to `target` (bearing 0 convention).
pub fn project(ring: &Ring, target: Point) -> Ring {
    let pivot = match centroid(ring) {
        Ok(c) => c,
        Err(err) => {
            tracing::debug!(%err, "project: best-effort pivot");
            mean_point(ring.vertices())
        }
    };
    let points = ring
        .points()
        .iter()
        .map(|&v| VertexOffset::between(pivot, v).apply(target))
        .collect();
    Ring::from_mapped(points)
}
