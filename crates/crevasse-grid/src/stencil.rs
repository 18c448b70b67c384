//! Neighbourhood views over a halo-carrying array.

/// Four-point star: centre plus east/west/north/south neighbours.
///
/// `e` is `(i+1, j)`, `w` is `(i−1, j)`, `n` is `(i, j+1)`, `s` is `(i, j−1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Star<T> {
    /// Centre value.
    pub c: T,
    /// East neighbour.
    pub e: T,
    /// West neighbour.
    pub w: T,
    /// North neighbour.
    pub n: T,
    /// South neighbour.
    pub s: T,
}

/// Full 3×3 neighbourhood, including diagonals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Box3<T> {
    /// `values[dj + 1][di + 1]` holds the value at `(i + di, j + dj)`.
    values: [[T; 3]; 3],
}

impl<T: Copy> Box3<T> {
    /// Build from a row-major `[dj + 1][di + 1]` table.
    pub const fn from_rows(values: [[T; 3]; 3]) -> Self {
        Self { values }
    }

    /// Value at offset `(di, dj)`, each in `-1..=1`.
    ///
    /// # Panics
    ///
    /// Panics if an offset is outside `-1..=1`.
    pub fn at(&self, di: i8, dj: i8) -> T {
        self.values[(dj + 1) as usize][(di + 1) as usize]
    }

    /// Centre value.
    pub fn center(&self) -> T {
        self.at(0, 0)
    }

    /// The four-point star contained in this box.
    pub fn star(&self) -> Star<T> {
        Star {
            c: self.at(0, 0),
            e: self.at(1, 0),
            w: self.at(-1, 0),
            n: self.at(0, 1),
            s: self.at(0, -1),
        }
    }

    /// A box holding `value` everywhere.
    pub fn uniform(value: T) -> Self {
        Self {
            values: [[value; 3]; 3],
        }
    }
}
