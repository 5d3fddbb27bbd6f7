//! # folio-core - Core Domain Types
//!
//! Foundation crate for termfolio. Provides the portfolio data model, the
//! hard-coded portfolio content, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Portfolio`] - Root record holding every section's display data
//! - [`Profile`], [`SocialLink`], [`ContactChannel`] - Hero and contact data
//! - [`EducationEntry`], [`SkillCategory`], [`ExperienceEntry`] - Section records
//! - [`Project`], [`ProjectCategory`], [`Certification`] - Work and credentials
//! - [`ContactMessage`] - The four-field payload handed to the mail collaborator
//!
//! ### Content (`content`)
//! - [`content::portfolio()`] - The static, immutable portfolio content
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all termfolio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    About, Certification, ContactChannel, ContactMessage, EducationEntry, ExperienceEntry, Footer,
    Portfolio, Profile, Project, ProjectCategory, SkillCategory, SocialLink, Tool,
};
