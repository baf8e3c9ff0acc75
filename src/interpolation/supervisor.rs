//! Fallback policy for failed evaluations.
//!
//! A [`Supervisor`] is a cheap, shared handle (`Rc`) to a [`Policy`]. Every
//! interpolator holds one; cloning a tree's supervisor into all of its levels
//! makes them share a single policy, and installing a new handle retargets a
//! tree without touching any other tree.

use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Ordinate;


pub enum Policy<R> {
    /// Propagate the error to the caller.
    Rethrow,
    /// Replace any error with a fixed result.
    Fallback(R),
    /// Decide per error; `None` propagates it.
    Custom(Box<dyn Fn(&InterpolationError) -> Option<R>>),
}


pub struct Supervisor<R> {
    policy: Rc<Policy<R>>,
}

impl<R> Clone for Supervisor<R> {
    fn clone(&self) -> Self {
        Self { policy: Rc::clone(&self.policy) }
    }
}

impl<R> Default for Supervisor<R> {
    fn default() -> Self {
        Self { policy: Rc::new(Policy::Rethrow) }
    }
}

impl<R: fmt::Debug> fmt::Debug for Supervisor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.policy.as_ref() {
            Policy::Rethrow => f.write_str("Supervisor(Rethrow)"),
            Policy::Fallback(r) => write!(f, "Supervisor(Fallback({r:?}))"),
            Policy::Custom(_) => f.write_str("Supervisor(Custom)"),
        }
    }
}

impl<R> Supervisor<R> {
    pub fn rethrow() -> Self {
        Self::default()
    }

    pub fn fallback(result: R) -> Self {
        Self { policy: Rc::new(Policy::Fallback(result)) }
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&InterpolationError) -> Option<R> + 'static,
    {
        Self { policy: Rc::new(Policy::Custom(Box::new(f))) }
    }

    pub fn policy(&self) -> &Policy<R> {
        &self.policy
    }

    /// Whether both handles point at the same policy.
    pub fn shares(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.policy, &other.policy)
    }
}

impl<R: Ordinate> Supervisor<R> {
    /// Replaces any error with the zero result.
    pub fn zero() -> Self {
        Self::fallback(R::zero())
    }

    /// Applies the policy to a failed evaluation.
    pub fn recover(&self, error: InterpolationError) -> Result<R, InterpolationError> {
        match self.policy.as_ref() {
            Policy::Rethrow => Err(error),
            Policy::Fallback(r) => {
                trace!("supervisor fallback for: {error}");
                Ok(*r)
            }
            Policy::Custom(f) => match f(&error) {
                Some(r) => {
                    trace!("supervisor recovered from: {error}");
                    Ok(r)
                }
                None => Err(error),
            },
        }
    }
}
