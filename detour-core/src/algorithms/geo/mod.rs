//! This module contains geodesic distance related functionality.

mod distance;
pub use self::distance::*;
