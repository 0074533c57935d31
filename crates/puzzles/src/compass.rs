// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The 32 points of the compass.
use serde::{Deserialize, Serialize};

/// A compass point with its heading in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompassPoint {
    /// Short name like `NbE` or `SSW`.
    pub abbreviation: String,
    /// Heading in degrees clockwise from north.
    pub azimuth: f64,
}

/// Degrees between two consecutive points.
const STEP: f64 = 11.25;

/// Points between a cardinal direction and the next one.
const POINTS_PER_SIDE: usize = 8;

/// Returns the 32 compass points starting from north, clockwise.
///
/// Names are built only from the four cardinal directions, each quarter
/// between a cardinal and the next one has 8 points.
pub fn compass_points() -> Vec<CompassPoint> {
    const SIDES: [&str; 4] = ["N", "E", "S", "W"];

    let mut points = Vec::with_capacity(SIDES.len() * POINTS_PER_SIDE);
    for (side_idx, cur) in SIDES.iter().enumerate() {
        let next = SIDES[(side_idx + 1) % SIDES.len()];

        // NE, SE, SW, NW: north and south always come first.
        let mid = if side_idx % 2 == 0 {
            format!("{cur}{next}")
        } else {
            format!("{next}{cur}")
        };

        let names: [String; POINTS_PER_SIDE] = [
            cur.to_string(),
            format!("{cur}b{next}"),
            format!("{cur}{mid}"),
            format!("{mid}b{cur}"),
            mid.clone(),
            format!("{mid}b{next}"),
            format!("{next}{mid}"),
            format!("{next}b{cur}"),
        ];

        for (point_idx, abbreviation) in names.into_iter().enumerate() {
            let index = side_idx * POINTS_PER_SIDE + point_idx;
            points.push(CompassPoint {
                abbreviation,
                azimuth: index as f64 * STEP,
            });
        }
    }

    points
}
