//! Coordinate and weight transformers for the innermost axis.
//!
//! A transformer maps a raw innermost abscissa to the stored one given the
//! outer abscissas (the context), and supplies a weight by which stored
//! ordinates are divided on insertion and multiplied on evaluation.
//!
//! ├ [`IdentityTransformer`]    : tag 0, no-op
//! └ [`AttenuationTransformer`] : tag 1, linear offset/scale, `e^(-d/λ)/d^α` weight

use std::fmt::Debug;
use std::io::{Read, Write};
use std::rc::Rc;

use crate::interpolation::errors::InterpolationError;
use crate::io::{read_f64, read_i32, read_optional_i32, write_f64, write_i32};


pub trait Transformer: Debug {
    /// Serialization tag.
    fn tag(&self) -> i32;

    /// Raw to stored abscissa.
    fn put_xn(&self, context: &[f64], xn: f64) -> f64;

    /// Stored to raw abscissa; inverse of [`Transformer::put_xn`].
    fn get_xn(&self, context: &[f64], xn: f64) -> f64;

    fn weight(&self, context: &[f64]) -> f64;

    /// Writes the parameters, without the tag.
    fn write_params(&self, w: &mut dyn Write) -> Result<(), InterpolationError>;
}


#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct IdentityTransformer;

impl IdentityTransformer {
    pub const TAG: i32 = 0;
}

impl Transformer for IdentityTransformer {
    fn tag(&self) -> i32 {
        Self::TAG
    }
    fn put_xn(&self, _context: &[f64], xn: f64) -> f64 {
        xn
    }
    fn get_xn(&self, _context: &[f64], xn: f64) -> f64 {
        xn
    }
    fn weight(&self, _context: &[f64]) -> f64 {
        1.0
    }
    fn write_params(&self, _w: &mut dyn Write) -> Result<(), InterpolationError> {
        Ok(())
    }
}


/// Re-parametrizes the innermost axis relative to a distance `R` taken from
/// the first context abscissa.
///
/// With `s = R·c⁻¹`:
/// ```text
/// stored = (raw - s·(k_min - k_0)) / (s·(k_max - k_min))     (scale only if k_max > k_min)
/// weight = e^(-d/λ) / d^α,  d = √(r_min² + R²)
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AttenuationTransformer {
    /// Attenuation length λ.
    pub length: f64,
    /// Power α of the distance fall-off.
    pub alpha: i32,
    pub k_min: f64,
    pub k_max: f64,
    /// Reference slope of the offset.
    pub k_0: f64,
    /// Inverse propagation speed c⁻¹.
    pub inverse_speed: f64,
    /// Regulator of the distance at `R = 0`.
    pub r_min: f64,
}

impl Default for AttenuationTransformer {
    fn default() -> Self {
        Self { length: 1.0, alpha: 0, k_min: 0.0, k_max: 0.0, k_0: 0.0, inverse_speed: 1.0, r_min: 0.01 }
    }
}

impl AttenuationTransformer {
    pub const TAG: i32 = 1;

    pub fn new(length: f64, alpha: i32, k_min: f64, k_max: f64) -> Result<Self, InterpolationError> {
        if !(length > 0.0) {
            return Err(InterpolationError::DivisionByZero { context: "attenuation length" });
        }
        Ok(Self { length, alpha, k_min, k_max, ..Self::default() })
    }

    #[must_use]
    pub fn set_k_0(mut self, k_0: f64) -> Self {
        self.k_0 = k_0;
        self
    }

    #[must_use]
    pub fn set_inverse_speed(mut self, inverse_speed: f64) -> Self {
        self.inverse_speed = inverse_speed;
        self
    }

    #[must_use]
    pub fn set_r_min(mut self, r_min: f64) -> Self {
        self.r_min = r_min;
        self
    }

    fn distance(context: &[f64]) -> f64 {
        context.first().copied().unwrap_or(0.0)
    }

    fn read_params<R: Read + ?Sized>(r: &mut R) -> Result<Self, InterpolationError> {
        Ok(Self {
            length: read_f64(r)?,
            alpha: read_i32(r)?,
            k_min: read_f64(r)?,
            k_max: read_f64(r)?,
            k_0: read_f64(r)?,
            inverse_speed: read_f64(r)?,
            r_min: read_f64(r)?,
        })
    }
}

impl Transformer for AttenuationTransformer {
    fn tag(&self) -> i32 {
        Self::TAG
    }

    fn put_xn(&self, context: &[f64], xn: f64) -> f64 {
        let s = Self::distance(context) * self.inverse_speed;
        let mut x = xn - s * (self.k_min - self.k_0);
        if self.k_max > self.k_min {
            x /= s * (self.k_max - self.k_min);
        }
        x
    }

    fn get_xn(&self, context: &[f64], xn: f64) -> f64 {
        let s = Self::distance(context) * self.inverse_speed;
        let mut x = xn;
        if self.k_max > self.k_min {
            x *= s * (self.k_max - self.k_min);
        }
        x + s * (self.k_min - self.k_0)
    }

    fn weight(&self, context: &[f64]) -> f64 {
        let r = Self::distance(context);
        let d = (self.r_min * self.r_min + r * r).sqrt();
        (-d / self.length).exp() / d.powi(self.alpha)
    }

    fn write_params(&self, w: &mut dyn Write) -> Result<(), InterpolationError> {
        write_f64(w, self.length)?;
        write_i32(w, self.alpha)?;
        write_f64(w, self.k_min)?;
        write_f64(w, self.k_max)?;
        write_f64(w, self.k_0)?;
        write_f64(w, self.inverse_speed)?;
        write_f64(w, self.r_min)
    }
}


/// Writes `[tag][params]`.
pub fn write_transformer<W: Write + ?Sized>(
    transformer: &dyn Transformer,
    w: &mut W,
) -> Result<(), InterpolationError> {
    write_i32(w, transformer.tag())?;
    let mut sink = w;
    transformer.write_params(&mut sink)
}

/// Reads a tagged transformer; an exhausted stream yields `None`.
///
/// # Errors
/// - [`InterpolationError::UnknownTransformer`] for an unregistered tag.
pub fn read_transformer<R: Read + ?Sized>(r: &mut R) -> Result<Option<Rc<dyn Transformer>>, InterpolationError> {
    let tag = match read_optional_i32(r)? {
        Some(tag) => tag,
        None => return Ok(None),
    };
    let transformer: Rc<dyn Transformer> = match tag {
        IdentityTransformer::TAG => Rc::new(IdentityTransformer),
        AttenuationTransformer::TAG => Rc::new(AttenuationTransformer::read_params(r)?),
        tag => return Err(InterpolationError::UnknownTransformer { tag }),
    };
    Ok(Some(transformer))
}
