//! Abscissa sets and equidistant lookup.
//!
//! [`Abscissae`] is any indexable set of abscissa values used to rebuild a
//! series (see [`crate::collection::Series::configure`]); [`Grid`] is the
//! equidistant one. [`grid_lower_bound`] gives the O(1) lookup used by series
//! with [`crate::collection::Layout::Grid`].

use crate::collection::element::Element;


pub trait Abscissae {
    fn count(&self) -> usize;
    fn abscissa(&self, i: usize) -> f64;
}

impl Abscissae for [f64] {
    fn count(&self) -> usize {
        self.len()
    }
    fn abscissa(&self, i: usize) -> f64 {
        self[i]
    }
}

impl Abscissae for Vec<f64> {
    fn count(&self) -> usize {
        self.len()
    }
    fn abscissa(&self, i: usize) -> f64 {
        self[i]
    }
}

impl<const N: usize> Abscissae for [f64; N] {
    fn count(&self) -> usize {
        N
    }
    fn abscissa(&self, i: usize) -> f64 {
        self[i]
    }
}


/// `n` equidistant abscissas from `x_min` to `x_max` inclusive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    n: usize,
    x_min: f64,
    x_max: f64,
}

impl Grid {
    pub fn new(n: usize, x_min: f64, x_max: f64) -> Self {
        Self { n, x_min, x_max }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Spacing between consecutive abscissas; zero for fewer than two points.
    pub fn step(&self) -> f64 {
        if self.n > 1 {
            (self.x_max - self.x_min) / (self.n - 1) as f64
        } else {
            0.0
        }
    }
}

impl Abscissae for Grid {
    fn count(&self) -> usize {
        self.n
    }
    fn abscissa(&self, i: usize) -> f64 {
        if self.n > 1 {
            self.x_min + i as f64 * self.step()
        } else {
            self.x_min
        }
    }
}


/// Index of the first element not less than `x`, assuming equidistant abscissas.
///
/// The index estimated from `(x - xmin)·(n-1)/(xmax - xmin)` is corrected by
/// at most a step either way, so rounding never breaks lower-bound semantics.
pub(crate) fn grid_lower_bound<O>(elements: &[Element<O>], x: f64) -> usize {
    let n = elements.len();
    if n < 2 {
        return elements.partition_point(|e| e.x() < x);
    }

    let x_min = elements[0].x();
    let x_max = elements[n - 1].x();
    let t = (n - 1) as f64 * (x - x_min) / (x_max - x_min);

    let mut i = if t <= 0.0 {
        0
    } else if t > (n - 1) as f64 {
        n
    } else {
        t.ceil() as usize
    };

    while i > 0 && elements[i - 1].x() >= x {
        i -= 1;
    }
    while i < n && elements[i].x() < x {
        i += 1;
    }
    i
}
