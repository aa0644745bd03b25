//! Inputs the field controller works on.

pub mod translation;
