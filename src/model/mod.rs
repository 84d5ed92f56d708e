pub mod ids;
pub mod friend;
pub mod options;

// Re-exports for convenience
pub use ids::Id;
pub use friend::{FriendDraft, FriendRecord};
pub use options::{
    Dimension, DistributionMode, GroupFilter, LocationLevel, SortKey, ALL_GROUPS_LABEL,
};
