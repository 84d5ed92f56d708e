pub mod taxonomy_queries;
pub mod filter_queries;
pub mod sort_queries;
pub mod stats_queries;
pub mod geo_queries;
pub mod relationship_queries;
pub mod birthday_queries;
pub mod view_queries;
