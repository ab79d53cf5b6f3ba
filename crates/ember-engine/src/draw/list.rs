use crate::draw::{Batch, Topology, Vertex};

/// Hard capacity of the accumulator, in vertices.
///
/// The renderer allocates its GPU vertex buffer at exactly this size once,
/// so the list must never grow past it.
pub const MAX_VERTICES: usize = 0x10000;

/// Run-length batched vertex accumulator.
///
/// Vertices live in one contiguous vector; `batches` records `(topology,
/// count)` runs over it in submission order. Appending a primitive whose
/// topology matches the trailing run extends that run instead of starting a
/// new one, so consecutive same-topology primitives cost a single draw call.
///
/// Invariants, upheld by every mutation:
/// - the batch counts always sum to `vertices.len()`
/// - no two adjacent batches share a topology
/// - `vertices.len() <= capacity`
pub struct DrawList {
    vertices: Vec<Vertex>,
    batches: Vec<Batch>,
    capacity: usize,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::with_capacity(MAX_VERTICES)
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity override for tests and tooling; the renderer always uses
    /// [`MAX_VERTICES`].
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "draw list capacity must be non-zero");
        Self {
            vertices: Vec::new(),
            batches: Vec::new(),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Empties the list while keeping both allocations for the next frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    /// True when appending `count` vertices under `topology` (plus the
    /// separator that append would insert, if any) would exceed capacity.
    ///
    /// The renderer consults this before every append and submits the
    /// accumulated list mid-frame when it returns true.
    pub fn requires_flush(&self, count: usize, topology: Topology) -> bool {
        let extra = if self.needs_separator(topology) { 1 } else { 0 };
        self.vertices.len() + count + extra > self.capacity
    }

    /// Appends one vertex, extending the trailing run when its topology
    /// matches.
    pub fn push(&mut self, vertex: Vertex, topology: Topology) {
        assert!(
            self.vertices.len() < self.capacity,
            "draw list overflow: push past capacity {}",
            self.capacity
        );
        self.vertices.push(vertex);
        match self.batches.last_mut() {
            Some(batch) if batch.topology == topology => batch.vertex_count += 1,
            _ => self.batches.push(Batch {
                topology,
                vertex_count: 1,
            }),
        }
    }

    /// Appends a whole primitive as one run.
    ///
    /// Two same-topology strips in a row get one degenerate separator vertex
    /// between them; a strip followed by anything else does not. List
    /// topologies always coalesce into the trailing run.
    ///
    /// Panics when the primitive (plus any needed separator) cannot fit in
    /// an empty list; the caller is expected to have flushed already.
    pub fn append(&mut self, vertices: &[Vertex], topology: Topology) {
        let separator = self.needs_separator(topology);
        let extra = if separator { 1 } else { 0 };
        assert!(
            self.vertices.len() + vertices.len() + extra <= self.capacity,
            "primitive of {} vertices exceeds draw list capacity {}",
            vertices.len(),
            self.capacity
        );

        if separator {
            self.push(Vertex::default(), Topology::Separator);
        }
        for &v in vertices {
            self.push(v, topology);
        }
    }

    fn needs_separator(&self, topology: Topology) -> bool {
        topology.is_strip()
            && self
                .batches
                .last()
                .is_some_and(|batch| batch.topology == topology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec2::new(x, y), Color::opaque(1.0, 1.0, 1.0))
    }

    fn quad() -> [Vertex; 4] {
        [v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)]
    }

    fn check_invariants(list: &DrawList) {
        let sum: u32 = list.batches().iter().map(|b| b.vertex_count).sum();
        assert_eq!(sum as usize, list.len());
        for pair in list.batches().windows(2) {
            assert_ne!(pair[0].topology, pair[1].topology);
        }
        assert!(list.len() <= list.capacity());
    }

    #[test]
    fn list_topologies_coalesce() {
        let mut list = DrawList::new();
        list.append(&[v(0.0, 0.0), v(1.0, 1.0)], Topology::LineList);
        list.append(&[v(2.0, 2.0), v(3.0, 3.0)], Topology::LineList);
        assert_eq!(
            list.batches(),
            &[Batch {
                topology: Topology::LineList,
                vertex_count: 4
            }]
        );
        check_invariants(&list);
    }

    #[test]
    fn adjacent_same_strips_get_one_separator() {
        let mut list = DrawList::new();
        list.append(&quad(), Topology::TriangleStrip);
        list.append(&quad(), Topology::TriangleStrip);
        assert_eq!(
            list.batches(),
            &[
                Batch {
                    topology: Topology::TriangleStrip,
                    vertex_count: 4
                },
                Batch {
                    topology: Topology::Separator,
                    vertex_count: 1
                },
                Batch {
                    topology: Topology::TriangleStrip,
                    vertex_count: 4
                },
            ]
        );
        assert_eq!(list.len(), 9);
        check_invariants(&list);
    }

    #[test]
    fn strip_then_different_topology_needs_no_separator() {
        let mut list = DrawList::new();
        list.append(&quad(), Topology::TriangleStrip);
        list.append(&[v(0.0, 0.0), v(5.0, 5.0)], Topology::LineList);
        assert_eq!(list.batches().len(), 2);
        assert_eq!(list.len(), 6);
        check_invariants(&list);
    }

    #[test]
    fn strip_after_interleaved_list_restarts_without_separator() {
        let mut list = DrawList::new();
        list.append(&quad(), Topology::TriangleStrip);
        list.append(&[v(0.0, 0.0), v(5.0, 5.0)], Topology::LineList);
        list.append(&quad(), Topology::TriangleStrip);
        let topologies: Vec<_> = list.batches().iter().map(|b| b.topology).collect();
        assert_eq!(
            topologies,
            vec![
                Topology::TriangleStrip,
                Topology::LineList,
                Topology::TriangleStrip
            ]
        );
        check_invariants(&list);
    }

    #[test]
    fn clear_retains_allocations() {
        let mut list = DrawList::new();
        list.append(&quad(), Topology::TriangleStrip);
        let vertex_cap = list.vertices.capacity();
        list.clear();
        assert!(list.is_empty());
        assert!(list.batches().is_empty());
        assert_eq!(list.vertices.capacity(), vertex_cap);
    }

    #[test]
    fn requires_flush_accounts_for_separator() {
        let mut list = DrawList::with_capacity(9);
        list.append(&quad(), Topology::TriangleStrip);
        // 4 + 1 separator + 4 = 9 fits exactly.
        assert!(!list.requires_flush(4, Topology::TriangleStrip));
        assert!(list.requires_flush(5, Topology::TriangleStrip));
        // A list run needs no separator, so 5 more fit.
        assert!(!list.requires_flush(5, Topology::LineList));
    }

    #[test]
    fn flush_on_overflow_leaves_only_new_vertices() {
        // Mirrors the renderer's append path without a GPU.
        let mut list = DrawList::with_capacity(10);
        let mut flushes = 0;
        for _ in 0..3 {
            if list.requires_flush(4, Topology::TriangleStrip) {
                flushes += 1;
                list.clear();
            }
            list.append(&quad(), Topology::TriangleStrip);
        }
        // Two quads plus a separator fill 9 of 10 slots; the third forces
        // exactly one flush and lands alone in the emptied list.
        assert_eq!(flushes, 1);
        assert_eq!(list.len(), 4);
        assert_eq!(list.batches().len(), 1);
        check_invariants(&list);
    }

    #[test]
    #[should_panic(expected = "exceeds draw list capacity")]
    fn oversized_primitive_panics() {
        let mut list = DrawList::with_capacity(3);
        list.append(&quad(), Topology::TriangleStrip);
    }
}
