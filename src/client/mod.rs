//! Client-side layer: fetches collections wholesale, holds them in memory,
//! and derives displayed views through pure recomputation.

pub mod api;
pub mod form;
pub mod store;
pub mod view;
