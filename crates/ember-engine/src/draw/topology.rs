/// Primitive topology of a batch run.
///
/// `Separator` tags the single degenerate vertex inserted between two
/// adjacent strips of the same topology so they cannot weld together. It
/// maps to no GPU pipeline; the renderer skips the run but still advances
/// its vertex offset past it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    LineList,
    LineStrip,
    TriangleList,
    TriangleStrip,
    Separator,
}

impl Topology {
    /// Strips weld consecutive primitives; lists never do.
    #[inline]
    pub fn is_strip(self) -> bool {
        matches!(self, Topology::LineStrip | Topology::TriangleStrip)
    }
}

/// Run-length entry over the draw list's vertex vector.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Batch {
    pub topology: Topology,
    pub vertex_count: u32,
}
