//! # Design Patterns: Adapter, Bridge, Builder
//!
//! Each pattern lives in its own module and can be run on its own:
//!
//! ## Structural
//! - Adapter: one playback interface over incompatible players
//! - Bridge: shapes and drawing colors varying independently
//!
//! ## Creational
//! - Builder: payment cards and pizzas assembled step by step, with directors
//!
//! The catalog document (`docs/design-patterns.md`) repeats each pattern as
//! prose plus one self-contained sample; the [`catalog`] module checks it.
//!
//! ```bash
//! cargo run --bin p1_adapter
//! cargo run --bin p2_bridge
//! cargo run --bin p3_builder
//! cargo run --bin check_catalog -- docs/design-patterns.md
//! ```

pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod logging;

pub use error::{CatalogError, PatternError};
