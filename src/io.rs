//! Little-endian binary persistence.
//!
//! Fixed-width primitives written in declaration order:
//! ├ counts    : `i32`
//! ├ abscissas : `f64`
//! └ ordinates : every component as `f64`, see [`Ordinate::component`]
//!
//! A [`Series`] is `[count][x, ordinate]*`. Tensor maps nest the same layout
//! per axis down to the leaf series; a transformable map appends its
//! transformer tag and parameters after the body.

use std::io::{ErrorKind, Read, Write};

use crate::collection::Series;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::{Derivative, Hesse, Ordinate, Pdf, Polynome};


pub trait BinaryWrite {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), InterpolationError>;
}

/// Reads into an existing value, so that configuration not carried by the
/// stream (strategies, supervisors) survives.
pub trait BinaryRead {
    fn read_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<(), InterpolationError>;
}


pub(crate) fn write_i32<W: Write + ?Sized>(w: &mut W, v: i32) -> Result<(), InterpolationError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub(crate) fn read_i32<R: Read + ?Sized>(r: &mut R) -> Result<i32, InterpolationError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

pub(crate) fn write_f64<W: Write + ?Sized>(w: &mut W, v: f64) -> Result<(), InterpolationError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

pub(crate) fn read_f64<R: Read + ?Sized>(r: &mut R) -> Result<f64, InterpolationError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

pub(crate) fn write_count<W: Write + ?Sized>(w: &mut W, n: usize) -> Result<(), InterpolationError> {
    let n = i32::try_from(n).map_err(|_| {
        std::io::Error::new(ErrorKind::InvalidInput, format!("count {n} exceeds i32"))
    })?;
    write_i32(w, n)
}

pub(crate) fn read_count<R: Read + ?Sized>(r: &mut R) -> Result<usize, InterpolationError> {
    let n = read_i32(r)?;
    usize::try_from(n).map_err(|_| InterpolationError::NegativeCount { count: n })
}

/// Reads an `i32` tag, or `None` at a clean end of stream.
pub(crate) fn read_optional_i32<R: Read + ?Sized>(r: &mut R) -> Result<Option<i32>, InterpolationError> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(std::io::Error::from(ErrorKind::UnexpectedEof).into()),
            Ok(k) => filled += k,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(Some(i32::from_le_bytes(buf)))
}


fn write_components<O: Ordinate, W: Write + ?Sized>(o: &O, w: &mut W) -> Result<(), InterpolationError> {
    for k in 0..O::DIM {
        write_f64(w, o.component(k))?;
    }
    Ok(())
}

fn read_components<O: Ordinate, R: Read + ?Sized>(o: &mut O, r: &mut R) -> Result<(), InterpolationError> {
    for k in 0..O::DIM {
        *o.component_mut(k) = read_f64(r)?;
    }
    Ok(())
}

macro_rules! impl_binary_for_ordinate {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> BinaryWrite for $ty {
                fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), InterpolationError> {
                    write_components(self, w)
                }
            }

            impl<$($gen)*> BinaryRead for $ty {
                fn read_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<(), InterpolationError> {
                    read_components(self, r)
                }
            }
        )*
    };
}

impl_binary_for_ordinate!(
    [] f64,
    [T: Ordinate] Derivative<T>,
    [T: Ordinate] Hesse<T>,
    [T: Ordinate] Pdf<T>,
    [const N: usize, T: Ordinate] Polynome<N, T>,
);


impl<T: BinaryWrite> BinaryWrite for Series<T> {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), InterpolationError> {
        write_count(w, self.len())?;
        for e in self.iter() {
            write_f64(w, e.x())?;
            e.y().write_to(w)?;
        }
        Ok(())
    }
}

impl<T: BinaryRead + Default> BinaryRead for Series<T> {
    fn read_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<(), InterpolationError> {
        self.clear();
        let n = read_count(r)?;
        for _ in 0..n {
            let x = read_f64(r)?;
            let mut y = T::default();
            y.read_from(r)?;
            self.put(x, y);
        }
        Ok(())
    }
}
