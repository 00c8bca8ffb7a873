use std::f64::consts::TAU;

use serde::Serialize;

use crate::team_api::MatchRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Won,
    Lost,
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Won, Outcome::Lost, Outcome::Draw];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Won => "Won",
            Outcome::Lost => "Lost",
            Outcome::Draw => "Draw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsBucket {
    pub name: Outcome,
    pub value: usize,
}

/// Won/Lost/Draw tally over the recent matches, always in that order.
///
/// Only the exact statuses "Won" and "Lost" are recognised; every other status
/// (including "Draw", blanks, and unexpected values) lands in the draw bucket,
/// so the three values always sum to `matches.len()`.
pub fn match_stats(matches: &[MatchRecord]) -> [StatsBucket; 3] {
    let mut won = 0usize;
    let mut lost = 0usize;
    for m in matches {
        match m.match_status.as_str() {
            "Won" => won += 1,
            "Lost" => lost += 1,
            _ => {}
        }
    }
    let draw = matches.len() - (won + lost);

    [
        StatsBucket {
            name: Outcome::Won,
            value: won,
        },
        StatsBucket {
            name: Outcome::Lost,
            value: lost,
        },
        StatsBucket {
            name: Outcome::Draw,
            value: draw,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSegment {
    pub name: Outcome,
    pub value: usize,
    /// Radians, measured counter-clockwise from the positive x axis.
    pub start: f64,
    pub sweep: f64,
}

impl PieSegment {
    pub fn contains_angle(&self, angle: f64) -> bool {
        if self.sweep <= 0.0 {
            return false;
        }
        let rel = (angle - self.start).rem_euclid(TAU);
        rel < self.sweep || self.sweep >= TAU
    }

    pub fn share(&self) -> f64 {
        self.sweep / TAU
    }
}

/// One segment per bucket, laid out from 12 o'clock going clockwise.
pub fn pie_segments(buckets: &[StatsBucket; 3]) -> [PieSegment; 3] {
    let total: usize = buckets.iter().map(|b| b.value).sum();
    let mut cursor = TAU / 4.0;
    (*buckets).map(|b| {
        let sweep = if total == 0 {
            0.0
        } else {
            TAU * b.value as f64 / total as f64
        };
        cursor -= sweep;
        PieSegment {
            name: b.name,
            value: b.value,
            start: cursor.rem_euclid(TAU),
            sweep,
        }
    })
}
