//! Reference in-memory object store.
//!
//! Keeps points and segments as two tables, with segments referencing points
//! by id. It is the collaborator on the other side of the intent stream: it
//! applies [`StoreIntent`]s and answers [`MemoryStore::select_all_objects`]
//! with the point-resolved segment list the workspace consumes.
//!
//! Deleting a segment never removes its points, even when no other segment
//! references them.

use std::collections::{HashMap, HashSet};

use draftkit_core::{PointEntity, PointRef, SegmentEntity, SegmentState, StoreError, StoreIntent};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    points: HashMap<String, PointEntity>,
    segments: Vec<SegmentEntity>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(&self, id: &str) -> Option<&PointEntity> {
        self.points.get(id)
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> &[SegmentEntity] {
        &self.segments
    }

    /// Inserts a standalone point.
    pub fn insert_point(&mut self, point: PointEntity) -> Result<(), StoreError> {
        if self.points.contains_key(&point.id) {
            return Err(StoreError::DuplicatePoint { id: point.id });
        }
        self.points.insert(point.id.clone(), point);
        Ok(())
    }

    /// Inserts a segment referencing existing points.
    pub fn insert_segment(&mut self, segment: SegmentEntity) -> Result<(), StoreError> {
        if self.segments.iter().any(|s| s.id == segment.id) {
            return Err(StoreError::DuplicateSegment { id: segment.id });
        }
        for point_id in &segment.geometry {
            if !self.points.contains_key(point_id) {
                return Err(StoreError::UnresolvedPoint {
                    segment_id: segment.id.clone(),
                    point_id: point_id.clone(),
                });
            }
        }
        self.segments.push(segment);
        Ok(())
    }

    /// Applies one intent. A rejected intent leaves the store unchanged.
    pub fn apply(&mut self, intent: &StoreIntent) -> Result<(), StoreError> {
        match intent {
            StoreIntent::AddSegment { id, geometry } => self.add_segment(id, geometry),
            StoreIntent::DeleteObjects { object_ids } => {
                self.delete_objects(object_ids);
                Ok(())
            }
        }
    }

    fn add_segment(&mut self, id: &str, geometry: &[PointRef; 2]) -> Result<(), StoreError> {
        if self.segments.iter().any(|s| s.id == id) {
            return Err(StoreError::DuplicateSegment { id: id.to_string() });
        }

        let mut fresh: Vec<&PointEntity> = Vec::new();
        for point in geometry {
            if let PointRef::New(entity) = point {
                if self.points.contains_key(&entity.id)
                    || fresh.iter().any(|p| p.id == entity.id)
                {
                    return Err(StoreError::DuplicatePoint {
                        id: entity.id.clone(),
                    });
                }
                fresh.push(entity);
            }
        }
        for point in geometry {
            if let PointRef::Existing(point_id) = point {
                let known = self.points.contains_key(point_id)
                    || fresh.iter().any(|p| &p.id == point_id);
                if !known {
                    return Err(StoreError::UnresolvedPoint {
                        segment_id: id.to_string(),
                        point_id: point_id.clone(),
                    });
                }
            }
        }

        for entity in fresh {
            self.points.insert(entity.id.clone(), entity.clone());
        }
        self.segments.push(SegmentEntity {
            id: id.to_string(),
            geometry: [geometry[0].id().to_string(), geometry[1].id().to_string()],
        });
        tracing::debug!("Added segment {}", id);
        Ok(())
    }

    fn delete_objects(&mut self, object_ids: &[String]) {
        let doomed: HashSet<&str> = object_ids.iter().map(String::as_str).collect();
        let before = self.segments.len();
        self.segments.retain(|s| !doomed.contains(s.id.as_str()));
        tracing::debug!("Deleted {} segment(s)", before - self.segments.len());
    }

    /// Point-resolved segments in insertion order.
    pub fn select_all_objects(&self) -> Result<Vec<SegmentState>, StoreError> {
        self.segments
            .iter()
            .map(|segment| -> Result<SegmentState, StoreError> {
                let resolve = |point_id: &String| {
                    self.points
                        .get(point_id)
                        .cloned()
                        .ok_or_else(|| StoreError::UnresolvedPoint {
                            segment_id: segment.id.clone(),
                            point_id: point_id.clone(),
                        })
                };
                Ok(SegmentState::new(
                    segment.id.clone(),
                    resolve(&segment.geometry[0])?,
                    resolve(&segment.geometry[1])?,
                ))
            })
            .collect()
    }
}
