//! A working set of fixture documents stamped from one template.
//!
//! This is the bookkeeping an editing front end needs: documents get a fresh
//! id when created, keep their creation order, and are pruned and collected
//! into a single array on export. Edits arrive as raw text; a bad edit is
//! rejected and the document keeps its last good value.

use crate::codec::{parse_document, to_pretty};
use crate::empty::empty_like;
use crate::error::{FixtureError, Result};
use crate::policy::{EmptyScalars, PrunePolicy};
use crate::prune::{is_blank, prune_empty};
use serde_json::{Map, Value};
use tracing::{debug, trace};
use uuid::Uuid;

/// One document in a [`FixtureSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub id: Uuid,
    /// Creation order, starting at 0. Not reused after removal.
    pub ordinal: usize,
    pub data: Value,
}

/// Insertion-ordered collection of fixture documents.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    blank: Value,
    fixtures: Vec<Fixture>,
    next_ordinal: usize,
}

impl FixtureSet {
    /// Create an empty set whose new documents are `empty_like(template)`.
    pub fn new(template: &Value, scalars: EmptyScalars) -> Self {
        Self {
            blank: empty_like(template, scalars),
            fixtures: Vec::new(),
            next_ordinal: 0,
        }
    }

    /// The document every [`FixtureSet::add`] starts from.
    pub fn blank(&self) -> &Value {
        &self.blank
    }

    /// Add a blank document and return its id.
    pub fn add(&mut self) -> Uuid {
        let data = self.blank.clone();
        self.insert(data)
    }

    /// Add a document with the given contents and return its id.
    pub fn insert(&mut self, data: Value) -> Uuid {
        let id = Uuid::new_v4();
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        self.fixtures.push(Fixture { id, ordinal, data });
        debug!(%id, ordinal, "fixture added");
        id
    }

    /// Remove a document. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) -> Option<Fixture> {
        let index = self.fixtures.iter().position(|f| f.id == id)?;
        let removed = self.fixtures.remove(index);
        debug!(%id, "fixture removed");
        Some(removed)
    }

    /// Drop every document and restart ordinals at 0.
    pub fn clear(&mut self) {
        debug!(count = self.fixtures.len(), "clearing fixtures");
        self.fixtures.clear();
        self.next_ordinal = 0;
    }

    pub fn get(&self, id: Uuid) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    /// Documents in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter()
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Replace a document with the JSON in `text`.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::UnknownFixture`] if `id` is not in the set
    /// - [`FixtureError::JsonParse`] if `text` is not valid JSON; the document
    ///   keeps its previous contents
    pub fn update_from_text(&mut self, id: Uuid, text: &str) -> Result<()> {
        let fixture = self
            .fixtures
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(FixtureError::UnknownFixture(id))?;

        match parse_document(text) {
            Ok(data) => {
                fixture.data = data;
                trace!(%id, "fixture updated");
                Ok(())
            }
            Err(err) => {
                debug!(%id, error = %err, "rejected edit, keeping previous document");
                Err(err)
            }
        }
    }

    /// Number of documents that still hold something after pruning.
    pub fn valid_count(&self, policy: &PrunePolicy) -> usize {
        self.fixtures
            .iter()
            .filter(|f| !is_blank(&prune_empty(&f.data, policy)))
            .count()
    }

    /// Pruned documents in creation order, skipping ones that prune to blank.
    pub fn export(&self, policy: &PrunePolicy) -> Vec<Value> {
        self.fixtures
            .iter()
            .filter_map(|f| {
                let cleaned = prune_empty(&f.data, policy);
                if is_blank(&cleaned) {
                    debug!(id = %f.id, "skipping blank fixture on export");
                    None
                } else {
                    Some(cleaned)
                }
            })
            .collect()
    }

    /// [`FixtureSet::export`] rendered as an indented JSON array.
    pub fn export_json(&self, policy: &PrunePolicy) -> Result<String> {
        to_pretty(&Value::Array(self.export(policy)))
    }
}

impl Default for FixtureSet {
    /// A set whose blank document is `{}`, for callers that only insert.
    fn default() -> Self {
        Self::new(&Value::Object(Map::new()), EmptyScalars::default())
    }
}
