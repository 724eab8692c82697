//! Provision Use Case
//!
//! First-install step: populate the target directory from the skeleton
//! bundled with the package, unless the target already exists.

mod result;
mod use_case;

pub use result::ProvisionOutcome;
pub use use_case::{provision, ProvisionUseCase};
