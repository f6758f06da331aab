//! The tasting menu: one module per design pattern vignette
//!
//! Each module keeps its toy hierarchy private and exposes a single
//! `*Vignette` type implementing [`crate::vignette::Vignette`].

pub mod behavioral;
pub mod creational;
pub mod structural;
