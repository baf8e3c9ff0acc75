/// One `(abscissa, ordinate)` sample.
///
/// The abscissa is fixed at construction; only the ordinate can be mutated in
/// place, so a series never loses its ordering through element access.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Element<O> {
    x: f64,
    y: O,
}

impl<O> Element<O> {
    #[inline]
    pub fn new(x: f64, y: O) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> &O {
        &self.y
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut O {
        &mut self.y
    }

    pub fn into_parts(self) -> (f64, O) {
        (self.x, self.y)
    }
}

impl<O> From<(f64, O)> for Element<O> {
    fn from((x, y): (f64, O)) -> Self {
        Self { x, y }
    }
}
