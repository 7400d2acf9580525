//! Lane assignment for commit graphs
//!
//! Every commit of a newest-first history gets a visual column ("lane") so
//! the parent/child edges can be drawn with as few crossings as possible.
//!
//! ## Algorithm
//!
//! The assigner keeps a vector of lane slots. A slot is either empty or holds
//! the hash of the commit expected to appear next in that lane. For each
//! commit, in order:
//!
//! 1. Reuse the lane the commit's hash is waiting in; otherwise take the first
//!    empty slot, or append a new one.
//! 2. Clear that slot.
//! 3. Route every parent that is not already waiting in some lane: the first
//!    parent continues straight down the commit's own lane, every further
//!    (merge) parent takes the empty slot nearest to the commit's lane, or a
//!    new slot when none is empty.
//! 4. Drop trailing empty slots (tail compaction).
//! 5. Record the lane together with the running maximum lane index.
//!
//! Occupancy is mirrored in a hash -> slot index so the "is this hash already
//! waiting somewhere" checks are O(1).

use crate::artifacts::graph::commit_entry::CommitEntry;
use derive_new::new;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// Lane of a single commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct LaneAssignment {
    pub lane: usize,
    pub max_lane_so_far: usize,
}

/// Lane assignments keyed by commit hash, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LaneMap {
    assignments: IndexMap<String, LaneAssignment>,
}

impl LaneMap {
    pub fn get(&self, hash: &str) -> Option<&LaneAssignment> {
        self.assignments.get(hash)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LaneAssignment)> {
        self.assignments
            .iter()
            .map(|(hash, assignment)| (hash.as_str(), assignment))
    }

    /// Number of columns needed to draw every row so far
    pub fn width(&self) -> usize {
        self.assignments
            .last()
            .map(|(_, assignment)| assignment.max_lane_so_far + 1)
            .unwrap_or(0)
    }

    fn insert(&mut self, hash: String, assignment: LaneAssignment) {
        // a duplicate hash keeps its original position but takes the new value
        self.assignments.insert(hash, assignment);
    }
}

/// Incremental lane assigner
///
/// Commits must be fed newest-first. [`assign_lanes`] wraps this for the
/// common batch case.
#[derive(Debug, Clone, Default)]
pub struct LaneAssigner {
    active_lanes: Vec<Option<String>>,
    occupants: HashMap<String, usize>,
    max_lane: Option<usize>,
}

impl LaneAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lane slots, after tail compaction
    pub fn active_lanes(&self) -> &[Option<String>] {
        &self.active_lanes
    }

    pub fn assign(&mut self, entry: &CommitEntry) -> LaneAssignment {
        let lane = self.claim_lane(entry.hash());
        self.vacate(lane);

        for (position, parent) in entry.parent_hashes().iter().enumerate() {
            if self.occupants.contains_key(parent) {
                continue;
            }

            let parent_lane = if position == 0 {
                lane
            } else {
                self.nearest_free_lane(lane)
                    .unwrap_or_else(|| self.push_lane())
            };
            self.occupy(parent_lane, parent);

            tracing::trace!(
                commit = entry.hash(),
                parent = parent.as_str(),
                lane = parent_lane,
                "routed parent"
            );
        }

        self.compact_tail();

        let max_lane = self.max_lane.map_or(lane, |max| max.max(lane));
        self.max_lane = Some(max_lane);

        LaneAssignment::new(lane, max_lane)
    }

    fn claim_lane(&mut self, hash: &str) -> usize {
        if let Some(&lane) = self.occupants.get(hash) {
            return lane;
        }

        self.active_lanes
            .iter()
            .position(Option::is_none)
            .unwrap_or_else(|| self.push_lane())
    }

    fn nearest_free_lane(&self, origin: usize) -> Option<usize> {
        // on equal distance the lower index wins
        self.active_lanes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .min_by_key(|(idx, _)| idx.abs_diff(origin))
            .map(|(idx, _)| idx)
    }

    fn push_lane(&mut self) -> usize {
        self.active_lanes.push(None);
        self.active_lanes.len() - 1
    }

    fn occupy(&mut self, lane: usize, hash: &str) {
        self.active_lanes[lane] = Some(hash.to_string());
        self.occupants.insert(hash.to_string(), lane);
    }

    fn vacate(&mut self, lane: usize) {
        if let Some(hash) = self.active_lanes[lane].take() {
            self.occupants.remove(&hash);
        }
    }

    fn compact_tail(&mut self) {
        while matches!(self.active_lanes.last(), Some(None)) {
            self.active_lanes.pop();
        }
    }
}

/// Assign a lane to every commit of a newest-first history
pub fn assign_lanes<'e, I>(entries: I) -> LaneMap
where
    I: IntoIterator<Item = &'e CommitEntry>,
{
    let mut assigner = LaneAssigner::new();
    let mut lanes = LaneMap::default();

    for entry in entries {
        let assignment = assigner.assign(entry);
        lanes.insert(entry.hash().to_string(), assignment);
    }

    tracing::debug!(commits = lanes.len(), width = lanes.width(), "assigned lanes");

    lanes
}
