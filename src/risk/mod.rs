//! Deadline risk classification.
//!
//! Risk is derived, never stored. Every read path that shows a deadline
//! badge goes through [`classify`] so project and task badges cannot
//! disagree for the same inputs. Dates are compared as whole calendar days
//! in a single [`ReferenceFrame`].

mod classifier;
mod frame;
mod tier;

pub use classifier::{NEAR_WINDOW_DAYS, RiskClassifier, classify};
pub use frame::ReferenceFrame;
pub use tier::{Progress, RiskTier};

#[cfg(test)]
mod tests;
