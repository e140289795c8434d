//! Persisted entity types and their read-side join.
//!
//! Points and segments form a graph: a segment references two points by id and
//! a point may be shared by several segments. The engine never mutates these;
//! it reads [`SegmentState`] values and emits [`crate::StoreIntent`]s.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Segment};

/// A persisted, identity-bearing point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEntity {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl PointEntity {
    /// Creates a new point entity.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    /// Creates a point entity at `point`.
    pub fn at(id: impl Into<String>, point: Point) -> Self {
        Self::new(id, point.x, point.y)
    }

    /// Coordinates without the identity.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A persisted segment referencing its endpoints by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentEntity {
    pub id: String,
    pub geometry: [String; 2],
}

/// A segment with both point references resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentState {
    pub id: String,
    pub geometry: [PointEntity; 2],
}

impl SegmentState {
    /// Creates a resolved segment.
    pub fn new(id: impl Into<String>, start: PointEntity, end: PointEntity) -> Self {
        Self {
            id: id.into(),
            geometry: [start, end],
        }
    }

    /// Plain geometry in world space.
    pub fn segment(&self) -> Segment {
        Segment::new(self.geometry[0].point(), self.geometry[1].point())
    }

    /// Finds an endpoint by point id.
    pub fn endpoint(&self, point_id: &str) -> Option<&PointEntity> {
        self.geometry.iter().find(|p| p.id == point_id)
    }
}

/// Endpoint reference carried by an add-segment intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointRef {
    /// An id already present in the point table.
    Existing(String),
    /// A point the store must create.
    New(PointEntity),
}

impl PointRef {
    /// The referenced point id, whether existing or new.
    pub fn id(&self) -> &str {
        match self {
            PointRef::Existing(id) => id,
            PointRef::New(point) => &point.id,
        }
    }

    /// Returns `true` when the store has to allocate this point.
    pub fn is_new(&self) -> bool {
        matches!(self, PointRef::New(_))
    }
}
