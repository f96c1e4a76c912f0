//! Moon's tropical ecliptic longitude from mean elements and a truncated
//! ELP2000-85 periodic series.
//!
//! This crate provides:
//! - [`normalize_360`] for every longitude-like quantity in the pipeline
//! - Mean lunar/solar elements as quartic polynomials in Julian centuries
//! - The 59-term longitude table, kept as data in [`elp_terms`]
//! - Series evaluation through [`LunarTheory`]

pub mod angle;
pub mod elements;
pub mod elp_terms;
pub mod longitude;

pub use angle::normalize_360;
pub use elements::{ElementPolynomials, MEEUS_ELEMENTS, MeanElements, mean_elements, polynomial};
pub use elp_terms::{LONGITUDE_TERMS, PeriodicTerm, Quartic};
pub use longitude::{ELP2000_TRUNCATED, LunarTheory, tropical_longitude};
