//! Scroll-reactive reveal engine.
//!
//! - [`scroll`]: process-wide scroll offset with scoped subscriptions
//! - [`mapping`]: piecewise-linear control-point mappings
//! - [`parallax`]: hero shift/fade driven by the scroll offset
//! - [`reveal`]: one-shot `Unrevealed -> Revealing -> Revealed` groups
//! - [`stagger`]: per-item delays for cascading reveals
//!
//! Nothing in here touches the DOM; the browser side lives in `crate::hooks`.

pub mod mapping;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod stagger;

pub use parallax::{Parallax, ParallaxFrame};
pub use reveal::{RevealAction, RevealGroup, RevealTransition};
