/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use logger::*;
