//! # sr-merge
//!
//! A git merge driver for markdown notes that carry spaced-repetition
//! scheduling comments (`<!--SR:!2024-01-01,3,250-->`).
//!
//! Review plugins rewrite those comments every time a card is studied, so two
//! machines reviewing the same note produce "conflicts" that contain no real
//! edits. The driver compares the ancestor and the incoming revision with all
//! scheduling comments stripped:
//!
//! 1. **Annotation-only change** — the stripped texts are identical, so the
//!    incoming side only touched scheduling state. The local file is kept as-is
//!    and its own scheduling state wins.
//! 2. **Content change** — anything else. The incoming revision is taken
//!    whole. This is a conservative stand-in, not a content merge: local edits
//!    are discarded and a warning is logged with the number of lost lines.
//!
//! ## Example
//!
//! ```rust
//! use sr_merge::{MergeScenario, ResolutionStrategy, Resolver};
//!
//! let resolver = Resolver::new();
//! let resolution = resolver.resolve(&MergeScenario::new(
//!     "Q?\n<!--SR:!2024-01-01,1,230-->\n",
//!     "Q?\n<!--SR:!2024-01-05,4,250-->\n",
//!     "Q?\n<!--SR:!2024-01-03,2,240-->\n",
//! ));
//!
//! assert_eq!(resolution.strategy, ResolutionStrategy::KeepCurrent);
//! ```

pub mod annotations;
pub mod driver;
pub mod resolver;
pub mod types;

// Re-export primary public API
pub use annotations::{annotation_insensitive_eq, strip_annotations};
pub use driver::{DriverError, DriverPaths, gitconfig_snippet, run_driver};
pub use resolver::Resolver;
pub use types::{MergeScenario, Resolution, ResolutionStrategy};
