//! Renderers for the generated Next.js source tree.
//!
//! Everything here is deterministic string assembly: page wrappers,
//! the global stylesheet, CMS artifacts, and the placeholder component
//! substituted when section generation yields nothing usable.

pub mod cms;
pub mod css;
pub mod naming;
pub mod page;
pub mod placeholder;
