//! HAL-agnostic GPIO types shared between the driver bindings and the configuration types.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod capability;
pub mod driver;
mod error;
pub mod gpio;
pub mod log;

pub use error::Error;
