//! This module contains standalone algorithms used by the router.

pub mod geo;
