//! # fixture-core
//!
//! Shape transformations for hand-authored JSON test fixtures.
//!
//! Writing request fixtures by hand usually means starting from a template,
//! filling in a few fields, and throwing away everything left blank before
//! the file goes to the API under test. This crate holds the pieces of that
//! workflow that are independent of any editor:
//!
//! - [`empty_like`] turns a template into a blank document of the same shape
//! - [`flatten`] / [`unflatten`] convert between nested documents and
//!   dotted-key maps, one entry per form field
//! - [`prune_empty`] strips null, empty and (optionally) null-like values
//! - [`FixtureSet`] keeps a working set of documents and exports them
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use fixture_core::{FixtureSet, EmptyScalars, PrunePolicy};
//!
//! let template = json!({"patient_id": "P0", "age": 40, "labs": {"hdl": 1.1}});
//! let mut set = FixtureSet::new(&template, EmptyScalars::Null);
//!
//! let first = set.add();
//! set.update_from_text(first, r#"{"patient_id": "P1", "age": 42, "labs": {"hdl": null}}"#)
//!     .unwrap();
//! set.add(); // left blank, dropped on export
//!
//! let exported = set.export(&PrunePolicy::lenient());
//! assert_eq!(exported, vec![json!({"patient_id": "P1", "age": 42})]);
//! ```
//!
//! ## Modules
//!
//! - [`empty`] — template → blank document
//! - [`flatten`] — nested ⇄ dotted-key maps, with type re-inference
//! - [`prune`] — empty-value stripping
//! - [`policy`] — `EmptyScalars`, `PrunePolicy`, `ShapeConfig`
//! - [`fixture`] — `FixtureSet` bookkeeping and bulk export
//! - [`codec`] — JSON text in and out
//! - [`template`] — the built-in health score template
//! - [`error`] — Error types

pub mod codec;
pub mod empty;
pub mod error;
pub mod fixture;
pub mod flatten;
pub mod policy;
pub mod prune;
pub mod template;

pub use codec::{parse_document, to_pretty};
pub use empty::empty_like;
pub use error::FixtureError;
pub use fixture::{Fixture, FixtureSet};
pub use flatten::{coerce_scalar, flatten, unflatten, unflatten_value};
pub use policy::{EmptyScalars, PrunePolicy, ShapeConfig, DEFAULT_SEPARATOR};
pub use prune::{is_blank, prune_empty};
pub use template::{health_score_template, DEFAULT_EXPORT_FILE};
