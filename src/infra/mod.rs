//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка (системный и детерминированный).

pub mod rng;

pub use rng::*;
