//! # DraftKit Core
//!
//! Core types and utilities for DraftKit.
//! Provides the geometry primitives, persisted entity types, store intents
//! and the error types shared by the settings and workspace crates.

pub mod constants;
pub mod data;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod intent;

pub use data::{PointEntity, PointRef, SegmentEntity, SegmentState};
pub use error::{Error, Result, StoreError};
pub use geometry::{
    angle_from_slope, bounding_edges, contains_point, distance_to_segment, scale, scale_segment,
    segment_length, segment_to_rect, segments_intersect, translate, translate_segment, Point,
    PositionedRect, Rect, Segment, Vector,
};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use intent::{IntentDispatcher, StoreIntent};
