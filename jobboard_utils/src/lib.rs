pub use jobboard_utils_derive::trace_instrument;

pub mod patch;

#[cfg(test)]
extern crate self as jobboard_utils;

mod macros;

/// Returns the version of the job board backend.
pub fn jobboard_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
