use thiserror::Error;
use tracing::error;

use crate::data_types::{Annotation, AnnotationId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("annotation id {0:?} already exists in the store")]
    DuplicateId(AnnotationId),
}

/// The authoritative set of drawn annotations for one chart session.
///
/// Insertion order is rendering order: later annotations draw on top
/// and win hit-test ties. Ids come from `next_id`, so `DuplicateId`
/// never fires in normal use.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    next_id: u64,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next session-unique id.
    pub fn next_id(&mut self) -> AnnotationId {
        let id = AnnotationId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add(&mut self, annotation: Annotation) -> Result<(), StoreError> {
        let id = annotation.id();
        if self.annotations.iter().any(|a| a.id() == id) {
            debug_assert!(false, "duplicate annotation id {id:?}");
            error!(?id, "rejected annotation with duplicate id");
            return Err(StoreError::DuplicateId(id));
        }
        self.annotations.push(annotation);
        Ok(())
    }

    pub fn remove(&mut self, id: AnnotationId) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id() != id);
        self.annotations.len() != before
    }

    /// Shifts every point of the annotation by `delta_price`, and by
    /// `delta_time` where the point's time is numeric. Unknown ids are
    /// a no-op.
    pub fn translate(&mut self, id: AnnotationId, delta_time: f64, delta_price: f64) {
        if let Some(a) = self.annotations.iter_mut().find(|a| a.id() == id) {
            a.translate(delta_time, delta_price);
        }
    }

    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id() == id)
    }

    /// Annotations in insertion order.
    pub fn list(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
