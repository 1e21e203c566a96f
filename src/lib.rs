//! shadow4d - 4D polytope shadows
//!
//! Application layer on top of [`shadow4d_core`]: layered configuration and
//! a headless demo driver.

pub mod config;
pub mod demo;
