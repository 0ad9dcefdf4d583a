/// Relative position of a neighbor: `(dx, dy)`.
pub type Offset = (isize, isize);

/// Enumerates in-bounds Moore neighbors of a cell on a bounded field.
///
/// Offsets never wrap around: a corner cell gets 3 of them, an edge cell 5
/// and an interior cell 8 (fewer on fields that are 1 cell wide or tall).
pub struct NeighborOffsets;

impl NeighborOffsets {
    /// All valid offsets: diagonal ones first, then vertical, then horizontal.
    pub fn all(x: usize, y: usize, limit_width: usize, limit_height: usize) -> Vec<Offset> {
        let mut result = Self::diagonal(x, y, limit_width, limit_height);
        result.extend(Self::vertical(y, limit_height));
        result.extend(Self::horizontal(x, limit_width));
        result
    }

    /// Offsets `(dx, 0)` that stay inside `[0, limit_width)`.
    pub fn horizontal(x: usize, limit_width: usize) -> Vec<Offset> {
        Self::limits(x, limit_width).map(|dx| (dx, 0)).collect()
    }

    /// Offsets `(0, dy)` that stay inside `[0, limit_height)`.
    pub fn vertical(y: usize, limit_height: usize) -> Vec<Offset> {
        Self::limits(y, limit_height).map(|dy| (0, dy)).collect()
    }

    /// Corner directions only.
    pub fn diagonal(x: usize, y: usize, limit_width: usize, limit_height: usize) -> Vec<Offset> {
        Self::limits(x, limit_width)
            .flat_map(|dx| Self::limits(y, limit_height).map(move |dy| (dx, dy)))
            .collect()
    }

    fn limits(value: usize, max: usize) -> impl Iterator<Item = isize> {
        let lower = (value > 0).then_some(-1);
        let upper = (value + 1 < max).then_some(1);
        lower.into_iter().chain(upper)
    }
}
