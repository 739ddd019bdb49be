use core::ops::RangeInclusive;

/// Single coordinate axis used for board width, height, and positions.
///
/// Boards are therefore at most 255 cells wide and 255 cells high.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Conversion of board coordinates into an `ndarray` index (`[x, y]`).
pub trait GridIndex {
    fn grid_index(self) -> [usize; 2];
}

impl GridIndex for Coord2 {
    fn grid_index(self) -> [usize; 2] {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a `width` x `height` grid. Cannot overflow for `u8` axes.
pub const fn cell_area((width, height): Coord2) -> CellCount {
    width as CellCount * height as CellCount
}

/// Whether `dim`, as reported by `Array2::dim`, is exactly a grid of `size`.
pub(crate) fn dim_matches(dim: (usize, usize), size: Coord2) -> bool {
    dim == (usize::from(size.0), usize::from(size.1))
}

/// Clipped axis window `center-1 ..= center+1` within `0..len`.
fn window(center: Coord, len: Coord) -> RangeInclusive<Coord> {
    let last = len.saturating_sub(1);
    center.saturating_sub(1)..=center.saturating_add(1).min(last)
}

/// The up-to-8 cells surrounding a center cell, clipped at the grid edges, row by row.
#[derive(Debug, Clone)]
pub struct Neighbors {
    center: Coord2,
    xs: RangeInclusive<Coord>,
    ys: RangeInclusive<Coord>,
    x: RangeInclusive<Coord>,
    y: Option<Coord>,
}

impl Neighbors {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        let xs = window(center.0, size.0);
        let mut ys = window(center.1, size.1);
        let y = ys.next();
        Self {
            center,
            x: xs.clone(),
            xs,
            ys,
            y,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let y = self.y?;
            match self.x.next() {
                Some(x) if (x, y) == self.center => continue,
                Some(x) => return Some((x, y)),
                None => {
                    self.y = self.ys.next();
                    self.x = self.xs.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: [Coord2; 3] = [(1, 0), (0, 1), (1, 1)];

        assert!(Neighbors::new((0, 0), (4, 4)).eq(neighbors));
    }

    #[test]
    fn far_corner_has_three_neighbors() {
        let neighbors: [Coord2; 3] = [(2, 2), (3, 2), (2, 3)];

        assert!(Neighbors::new((3, 3), (4, 4)).eq(neighbors));
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(Neighbors::new((2, 0), (4, 4)).count(), 5);
        assert_eq!(Neighbors::new((3, 2), (4, 4)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors_and_skips_center() {
        let mut iter = Neighbors::new((1, 1), (3, 3));

        assert!(iter.clone().all(|pos| pos != (1, 1)));
        assert_eq!(iter.by_ref().count(), 8);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn last_axis_value_does_not_overflow() {
        assert_eq!(Neighbors::new((254, 254), (255, 255)).count(), 3);
        assert_eq!(Neighbors::new((0, 254), (1, 255)).count(), 1);
    }

    #[test]
    fn dim_match_is_exact() {
        assert!(dim_matches((255, 2), (255, 2)));
        assert!(!dim_matches((300, 2), (255, 2)));
        assert!(!dim_matches((2, 255), (255, 2)));
    }

    #[test]
    fn area_of_largest_grid() {
        assert_eq!(cell_area((10, 10)), 100);
        assert_eq!(cell_area((Coord::MAX, Coord::MAX)), 65025);
    }
}
