//! Expand symmetry-reduced KARMA CFG core maps into full-core input decks.

pub mod case_gen;
pub mod cfg_read;
pub mod cfg_write;
pub mod expand;
pub mod plot_map;
pub mod randomize;
pub mod swap_pin;
