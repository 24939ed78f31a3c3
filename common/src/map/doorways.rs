#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use tracing::trace;

use super::emitter::emit_wall;
use crate::{constants::GEOMETRY_EPSILON, errors::LayoutError, geometry::LevelPiece};

// ============================================================================
// Wall Spans & Doors
// ============================================================================

// Horizontal axis a wall runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Z,
}

// A straight wall run: `start..end` along `axis`, at `fixed` on the other horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpan {
    axis: Axis,
    fixed: f32,
    start: f32,
    end: f32,
}

impl WallSpan {
    pub fn new(axis: Axis, fixed: f32, start: f32, end: f32) -> Result<Self, LayoutError> {
        // Written as a negated comparison so NaN bounds are rejected too
        if !(end > start) {
            return Err(LayoutError::EmptySpan { axis, fixed, start, end });
        }
        Ok(Self { axis, fixed, start, end })
    }

    pub fn centered(axis: Axis, fixed: f32, center: f32, length: f32) -> Result<Self, LayoutError> {
        Self::new(axis, fixed, center - length / 2.0, center + length / 2.0)
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub const fn fixed(&self) -> f32 {
        self.fixed
    }

    #[must_use]
    pub const fn start(&self) -> f32 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> f32 {
        self.end
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    #[must_use]
    pub fn midpoint(&self) -> f32 {
        f32::midpoint(self.start, self.end)
    }
}

// A door opening centered at `center` along the wall's run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorSpec {
    pub center: f32,
    pub width: f32,
    pub height: f32,
}

impl DoorSpec {
    #[must_use]
    pub fn start(&self) -> f32 {
        self.center - self.width / 2.0
    }

    #[must_use]
    pub fn end(&self) -> f32 {
        self.center + self.width / 2.0
    }
}

// ============================================================================
// Wall Segments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    // Full-height wall between openings
    Solid,
    // Panel above a door, from door height to wall height
    Lintel,
}

// One solid piece of a cut wall, as an interval along the run plus a vertical range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub kind: SegmentKind,
    pub start: f32,
    pub end: f32,
    pub bottom: f32,
    pub top: f32,
}

impl WallSegment {
    const fn solid(start: f32, end: f32, wall_height: f32) -> Self {
        Self {
            kind: SegmentKind::Solid,
            start,
            end,
            bottom: 0.0,
            top: wall_height,
        }
    }

    fn lintel(door: &DoorSpec, wall_height: f32) -> Self {
        Self {
            kind: SegmentKind::Lintel,
            start: door.start(),
            end: door.end(),
            bottom: door.height,
            top: wall_height,
        }
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn along_center(&self) -> f32 {
        f32::midpoint(self.start, self.end)
    }

    // For a lintel this is `door_height + (wall_height - door_height) / 2`.
    #[must_use]
    pub fn y_center(&self) -> f32 {
        f32::midpoint(self.bottom, self.top)
    }
}

// ============================================================================
// Doorway Segmenter
// ============================================================================

fn check_door(door: &DoorSpec, span: &WallSpan, wall_height: f32) -> Result<(), LayoutError> {
    if !(door.width > 0.0) {
        return Err(LayoutError::DoorTooNarrow { width: door.width });
    }
    if door.width > span.length() {
        return Err(LayoutError::DoorTooWide {
            span_length: span.length(),
            door_width: door.width,
        });
    }
    if !(door.height > 0.0 && door.height < wall_height) {
        return Err(LayoutError::DoorTooTall {
            door_height: door.height,
            wall_height,
        });
    }
    // Negated so a NaN or infinite center is rejected as well
    if !(door.start() >= span.start - GEOMETRY_EPSILON && door.end() <= span.end + GEOMETRY_EPSILON) {
        return Err(LayoutError::DoorOutsideSpan {
            center: door.center,
            width: door.width,
            start: span.start,
            end: span.end,
        });
    }
    Ok(())
}

// Cut a single door into the middle of `span`: two full-height side panels and a lintel.
// A span exactly as wide as the door keeps only the lintel.
pub fn segment_single_door(
    span: &WallSpan,
    door_width: f32,
    door_height: f32,
    wall_height: f32,
) -> Result<Vec<WallSegment>, LayoutError> {
    let door = DoorSpec {
        center: span.midpoint(),
        width: door_width,
        height: door_height,
    };
    check_door(&door, span, wall_height)?;

    let side_width = (span.length() - door.width) / 2.0;
    let mut segments = Vec::with_capacity(3);

    if side_width > GEOMETRY_EPSILON {
        let offset = side_width / 2.0 + door.width / 2.0;
        let left_center = door.center - offset;
        let right_center = door.center + offset;
        segments.push(WallSegment::solid(
            left_center - side_width / 2.0,
            left_center + side_width / 2.0,
            wall_height,
        ));
        segments.push(WallSegment::solid(
            right_center - side_width / 2.0,
            right_center + side_width / 2.0,
            wall_height,
        ));
    }
    segments.push(WallSegment::lintel(&door, wall_height));

    Ok(segments)
}

// Cut any number of doors into `span`. Doors are swept in ascending order of center;
// each gap before a door becomes one solid segment and each door gets a lintel.
// Doors may touch but not overlap. Equal centers always overlap and are rejected, so
// their relative order never matters.
pub fn segment_doors(span: &WallSpan, doors: &[DoorSpec], wall_height: f32) -> Result<Vec<WallSegment>, LayoutError> {
    let mut sorted = doors.to_vec();
    sorted.sort_by(|a, b| a.center.total_cmp(&b.center));

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = span.start;
    let mut previous: Option<DoorSpec> = None;

    for door in sorted {
        check_door(&door, span, wall_height)?;

        if let Some(prev) = previous
            && door.start() < cursor - GEOMETRY_EPSILON
        {
            return Err(LayoutError::DoorsOverlap {
                first: prev.center,
                second: door.center,
                width: door.width,
            });
        }

        if door.start() - cursor > GEOMETRY_EPSILON {
            segments.push(WallSegment::solid(cursor, door.start(), wall_height));
        }
        segments.push(WallSegment::lintel(&door, wall_height));

        cursor = door.end();
        previous = Some(door);
    }

    if span.end - cursor > GEOMETRY_EPSILON {
        segments.push(WallSegment::solid(cursor, span.end, wall_height));
    }

    trace!(
        "cut {:?} wall at {} into {} segments around {} doors",
        span.axis,
        span.fixed,
        segments.len(),
        doors.len()
    );

    Ok(segments)
}

// Turn segments of `span` into wall boxes with matching colliders.
#[must_use]
pub fn segments_to_pieces(span: &WallSpan, segments: &[WallSegment], thickness: f32) -> Vec<LevelPiece> {
    segments
        .iter()
        .map(|segment| {
            emit_wall(
                span.axis,
                span.fixed,
                segment.along_center(),
                segment.y_center(),
                segment.length(),
                segment.height(),
                thickness,
            )
        })
        .collect()
}
