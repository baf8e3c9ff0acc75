//! Ordered series of samples.
//!
//! A [`Series`] keeps its elements strictly ascending by abscissa under its
//! [`DistanceMetric`]; abscissas equal within the metric's precision are
//! coalesced rather than duplicated. The [`Layout`] selects how `lower_bound`
//! locates a query: binary search, or direct indexing for equidistant data.

use crate::collection::distance::DistanceMetric;
use crate::collection::element::Element;
use crate::collection::grid::{grid_lower_bound, Abscissae};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Accumulate;


/// Lookup strategy of a series.
/// - [`Layout::Ordered`] binary search, O(log n)
/// - [`Layout::Grid`]    direct index from the abscissa, O(1); requires equidistant abscissas
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Ordered,
    Grid,
}


#[derive(Debug, Clone, PartialEq)]
pub struct Series<O> {
    elements: Vec<Element<O>>,
    metric: DistanceMetric,
    layout: Layout,
}

impl<O> Default for Series<O> {
    fn default() -> Self {
        Self { elements: Vec::new(), metric: DistanceMetric::default(), layout: Layout::Ordered }
    }
}

impl<O> Series<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric(metric: DistanceMetric) -> Self {
        Self { metric, ..Self::default() }
    }

    /// Equidistant series; lookups are O(1).
    pub fn grid() -> Self {
        Self { layout: Layout::Grid, ..Self::default() }
    }

    #[must_use]
    pub fn set_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn set_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn metric(&self) -> &DistanceMetric {
        &self.metric
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<O>> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Element<O>> {
        self.elements.iter_mut()
    }

    pub fn as_slice(&self) -> &[Element<O>] {
        &self.elements
    }

    pub fn front(&self) -> Option<&Element<O>> {
        self.elements.first()
    }

    pub fn back(&self) -> Option<&Element<O>> {
        self.elements.last()
    }

    pub fn x_min(&self) -> Result<f64, InterpolationError> {
        self.front().map(Element::x).ok_or(InterpolationError::EmptyCollection)
    }

    pub fn x_max(&self) -> Result<f64, InterpolationError> {
        self.back().map(Element::x).ok_or(InterpolationError::EmptyCollection)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Index of the first element whose abscissa is not less than `x`.
    pub fn lower_bound(&self, x: f64) -> usize {
        match self.layout {
            Layout::Ordered => {
                let metric = self.metric;
                self.elements.partition_point(|e| metric.precedes(e.x(), x))
            }
            Layout::Grid => grid_lower_bound(&self.elements, x),
        }
    }

    /// Index of the element whose abscissa equals `x` within precision.
    pub fn position(&self, x: f64) -> Option<usize> {
        let i = self.lower_bound(x);
        if i < self.len() && self.metric.equals(self.elements[i].x(), x) {
            return Some(i);
        }
        if i > 0 && self.metric.equals(self.elements[i - 1].x(), x) {
            return Some(i - 1);
        }
        None
    }

    fn out_of_range(&self, x: f64) -> InterpolationError {
        match (self.front(), self.back()) {
            (Some(lo), Some(hi)) => {
                InterpolationError::ValueOutOfRange { got: x, x_min: lo.x(), x_max: hi.x() }
            }
            _ => InterpolationError::EmptyCollection,
        }
    }

    /// Ordinate at `x`; fails unless an element matches within precision.
    pub fn get(&self, x: f64) -> Result<&O, InterpolationError> {
        match self.position(x) {
            Some(i) => Ok(self.elements[i].y()),
            None => Err(self.out_of_range(x)),
        }
    }

    pub fn get_mut(&mut self, x: f64) -> Result<&mut O, InterpolationError> {
        match self.position(x) {
            Some(i) => Ok(self.elements[i].y_mut()),
            None => Err(self.out_of_range(x)),
        }
    }

    /// Mutable ordinate at `x`, inserting `make()` when absent.
    pub fn get_or_insert_with<F>(&mut self, x: f64, make: F) -> &mut O
    where
        F: FnOnce() -> O,
    {
        debug_assert!(x.is_finite(), "non-finite abscissa {x}");
        let i = match self.position(x) {
            Some(i) => i,
            None => {
                let i = self.lower_bound(x);
                self.elements.insert(i, Element::new(x, make()));
                i
            }
        };
        self.elements[i].y_mut()
    }

    pub fn get_or_insert_default(&mut self, x: f64) -> &mut O
    where
        O: Default,
    {
        self.get_or_insert_with(x, O::default)
    }

    /// Inserts `(x, y)` unless an element with the same abscissa exists.
    ///
    /// Returns `false` when the series already held `x`, whose ordinate is
    /// kept, or when `x` is not finite.
    pub fn insert(&mut self, x: f64, y: O) -> bool {
        if !x.is_finite() || self.position(x).is_some() {
            return false;
        }
        let i = self.lower_bound(x);
        self.elements.insert(i, Element::new(x, y));
        true
    }

    /// Inserts `(x, y)`, overwriting the ordinate of an existing abscissa.
    ///
    /// `x` must be finite; a NaN has no place in the ordering.
    pub fn put(&mut self, x: f64, y: O) {
        debug_assert!(x.is_finite(), "non-finite abscissa {x}");
        match self.position(x) {
            Some(i) => *self.elements[i].y_mut() = y,
            None => {
                let i = self.lower_bound(x);
                self.elements.insert(i, Element::new(x, y));
            }
        }
    }

    pub fn remove(&mut self, x: f64) -> Option<O> {
        self.position(x).map(|i| self.elements.remove(i).into_parts().1)
    }

    /// Restores ascending order; of several equal abscissas the first is kept.
    pub fn sort(&mut self) {
        self.elements.sort_by(|a, b| a.x().total_cmp(&b.x()));
        let metric = self.metric;
        self.elements.dedup_by(|later, earlier| metric.equals(earlier.x(), later.x()));
    }

    /// Maps every element through `f` and re-sorts.
    pub fn transform<F>(&mut self, mut f: F)
    where
        F: FnMut(Element<O>) -> Element<O>,
    {
        let elements = std::mem::take(&mut self.elements);
        self.elements = elements.into_iter().map(&mut f).collect();
        self.sort();
    }

    /// Rebuilds the series at the given abscissas with ordinates `f(x)`.
    pub fn configure<B, F>(&mut self, bounds: &B, mut f: F)
    where
        B: Abscissae + ?Sized,
        F: FnMut(f64) -> O,
    {
        self.elements.clear();
        self.elements.reserve(bounds.count());
        for i in 0..bounds.count() {
            let x = bounds.abscissa(i);
            self.put(x, f(x));
        }
    }

    /// Fallible variant of [`Series::configure`].
    pub fn try_configure<B, F>(&mut self, bounds: &B, mut f: F) -> Result<(), InterpolationError>
    where
        B: Abscissae + ?Sized,
        F: FnMut(f64) -> Result<O, InterpolationError>,
    {
        self.elements.clear();
        for i in 0..bounds.count() {
            let x = bounds.abscissa(i);
            let y = f(x)?;
            self.put(x, y);
        }
        Ok(())
    }

    /// Whether both series carry the same abscissas over their overlap.
    ///
    /// Leading elements of either side that lie before the other's first
    /// abscissa are skipped; from there on abscissas must pair up one to one
    /// until either side is exhausted.
    pub fn is_compatible<P>(&self, other: &Series<P>) -> bool {
        let (a, b) = (&self.elements, &other.elements);
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() && self.metric.exceeds(a[i].x(), b[j].x()) {
            i += 1;
        }
        while i < a.len() && j < b.len() && self.metric.exceeds(b[j].x(), a[i].x()) {
            j += 1;
        }
        while i < a.len() && j < b.len() {
            if !self.metric.equals(a[i].x(), b[j].x()) {
                return false;
            }
            i += 1;
            j += 1;
        }
        true
    }
}

impl<O: Clone> Series<O> {
    /// Ordinates only, in abscissa order.
    pub fn ordinates(&self) -> Vec<O> {
        self.elements.iter().map(|e| e.y().clone()).collect()
    }
}

impl<O> Series<O> {
    /// Abscissas only.
    pub fn abscissas(&self) -> Vec<f64> {
        self.elements.iter().map(Element::x).collect()
    }
}


impl<O: Accumulate + Clone> Series<O> {
    /// Walks both sorted sequences once, accumulating matched abscissas and
    /// taking unmatched elements of `other` as they are (negated if `negate`).
    fn merge(&mut self, other: &Self, negate: bool) -> Result<(), InterpolationError> {
        let metric = self.metric;
        let signed = |e: &Element<O>| {
            let mut e = e.clone();
            if negate {
                e.y_mut().negate();
            }
            e
        };

        let mut merged = Vec::with_capacity(self.len() + other.len());
        let mut rhs = other.elements.iter().peekable();

        for e in self.elements.iter() {
            while let Some(q) = rhs.next_if(|q| metric.exceeds(q.x(), e.x())) {
                merged.push(signed(q));
            }

            let mut e = e.clone();
            if let Some(q) = rhs.next_if(|q| metric.equals(q.x(), e.x())) {
                if negate {
                    e.y_mut().sub_assign_from(q.y())?;
                } else {
                    e.y_mut().add_assign_from(q.y())?;
                }
            }
            merged.push(e);
        }
        merged.extend(rhs.map(signed));

        self.elements = merged;
        Ok(())
    }

    /// Adds `other` element-wise; abscissas present on one side only are kept
    /// with their own ordinate.
    pub fn add(&mut self, other: &Self) -> Result<(), InterpolationError> {
        if self.is_empty() {
            self.elements = other.elements.clone();
            return Ok(());
        }
        self.merge(other, false)
    }

    /// Subtracts `other` element-wise.
    ///
    /// # Errors
    /// - [`InterpolationError::StructuralIncompatibility`] if the overlapping
    ///   abscissas of both series do not pair up.
    pub fn sub(&mut self, other: &Self) -> Result<(), InterpolationError> {
        if self.is_empty() {
            self.elements = other.elements.clone();
            self.negate();
            return Ok(());
        }
        if !self.is_compatible(other) {
            return Err(InterpolationError::StructuralIncompatibility {
                context: "series subtraction",
            });
        }
        self.merge(other, true)
    }

    pub fn mul(&mut self, factor: f64) {
        for e in self.elements.iter_mut() {
            e.y_mut().scale(factor);
        }
    }

    pub fn div(&mut self, factor: f64) -> Result<(), InterpolationError> {
        if factor == 0.0 {
            return Err(InterpolationError::DivisionByZero { context: "series division" });
        }
        self.mul(1.0 / factor);
        Ok(())
    }

    pub fn negate(&mut self) {
        for e in self.elements.iter_mut() {
            e.y_mut().negate();
        }
    }

    /// Adds a constant to every ordinate.
    pub fn add_value(&mut self, value: &O) -> Result<(), InterpolationError> {
        for e in self.elements.iter_mut() {
            e.y_mut().add_assign_from(value)?;
        }
        Ok(())
    }

    pub fn sub_value(&mut self, value: &O) -> Result<(), InterpolationError> {
        for e in self.elements.iter_mut() {
            e.y_mut().sub_assign_from(value)?;
        }
        Ok(())
    }

    /// Adds `f(x)` to the ordinate at every abscissa `x`.
    pub fn add_fn<F>(&mut self, mut f: F) -> Result<(), InterpolationError>
    where
        F: FnMut(f64) -> O,
    {
        for e in self.elements.iter_mut() {
            let v = f(e.x());
            e.y_mut().add_assign_from(&v)?;
        }
        Ok(())
    }

    pub fn sub_fn<F>(&mut self, mut f: F) -> Result<(), InterpolationError>
    where
        F: FnMut(f64) -> O,
    {
        for e in self.elements.iter_mut() {
            let v = f(e.x());
            e.y_mut().sub_assign_from(&v)?;
        }
        Ok(())
    }
}

impl<O: Accumulate + Clone> Accumulate for Series<O> {
    fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        self.add(other)
    }
    fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        self.sub(other)
    }
    fn scale(&mut self, factor: f64) {
        self.mul(factor);
    }
}


impl<O> FromIterator<(f64, O)> for Series<O> {
    fn from_iter<I: IntoIterator<Item = (f64, O)>>(iter: I) -> Self {
        let mut series = Series::new();
        series.extend(iter);
        series
    }
}

impl<O> Extend<(f64, O)> for Series<O> {
    /// Bulk load; later duplicates of an abscissa overwrite earlier ones.
    fn extend<I: IntoIterator<Item = (f64, O)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.put(x, y);
        }
    }
}

impl<'a, O> IntoIterator for &'a Series<O> {
    type Item = &'a Element<O>;
    type IntoIter = std::slice::Iter<'a, Element<O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<O> Abscissae for Series<O> {
    fn count(&self) -> usize {
        self.len()
    }
    fn abscissa(&self, i: usize) -> f64 {
        self.elements[i].x()
    }
}
