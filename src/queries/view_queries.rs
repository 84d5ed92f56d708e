use serde::Serialize;
use tracing::debug;

use crate::model::{
    Dimension, DistributionMode, FriendRecord, GroupFilter, LocationLevel, SortKey,
};
use crate::queries::filter_queries::{filter_friends, FilterCriteria};
use crate::queries::geo_queries::{geo_buckets, GeoBucket};
use crate::queries::relationship_queries::{relationship_edges, RelationshipEdge};
use crate::queries::sort_queries::sort_friends;
use crate::queries::stats_queries::{distribution, DistributionEntry};
use crate::queries::taxonomy_queries::group_options;
use crate::reference::ReferenceData;

/// Everything a caller has selected across the list, stats, map and graph
/// surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub dimension: Dimension,
    pub group: GroupFilter,
    pub query: String,
    pub sort: SortKey,
    pub distribution_mode: DistributionMode,
    pub location_level: LocationLevel,
}

impl ViewState {
    /// Switches the grouping dimension and resets the group to `All`.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        self.dimension = dimension;
        self.group = GroupFilter::All;
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            dimension: self.dimension,
            group: self.group.clone(),
            query: self.query.clone(),
        }
    }
}

/// The derived data behind every surface, computed from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FriendView<'a> {
    pub groups: Vec<GroupFilter>,
    /// Filtered and ordered records.
    pub friends: Vec<&'a FriendRecord>,
    pub distribution: Vec<DistributionEntry>,
    pub geo: Vec<GeoBucket<'a>>,
    pub edges: Vec<RelationshipEdge>,
}

/// Runs the whole pipeline: taxonomy, filter, sort, then the aggregations
/// over the ordered subset. Pure; recompute whenever any input changes.
pub fn compute_view<'a>(
    friends: &'a [FriendRecord],
    state: &ViewState,
    reference: &ReferenceData,
) -> FriendView<'a> {
    let groups = group_options(friends, state.dimension, reference);
    let filtered = filter_friends(friends, &state.criteria());
    let ordered = sort_friends(filtered, state.sort);

    let view = FriendView {
        groups,
        distribution: distribution(ordered.iter().copied(), state.distribution_mode, reference),
        geo: geo_buckets(ordered.iter().copied(), state.location_level, reference),
        edges: relationship_edges(&ordered, reference),
        friends: ordered,
    };

    debug!(
        shown = view.friends.len(),
        edges = view.edges.len(),
        buckets = view.geo.len(),
        "computed view"
    );
    view
}
