use serde::Serialize;

use crate::model::{FriendRecord, LocationLevel};
use crate::queries::stats_queries::{count_by, DistributionEntry};
use crate::reference::ReferenceData;

/// Everyone sharing one location at the active granularity.
#[derive(Debug, Clone, Serialize)]
pub struct GeoBucket<'a> {
    /// The raw location string from the records.
    pub location: String,
    /// Name used by map geometry (official province name, or the raw city).
    pub map_name: String,
    pub total: usize,
    pub friends: Vec<&'a FriendRecord>,
    /// Per-type counts within the bucket, largest first.
    pub types: Vec<DistributionEntry>,
}

/// Buckets records by province or city, in first-seen order. Records with no
/// value at the chosen level are left out.
pub fn geo_buckets<'a, I>(
    friends: I,
    level: LocationLevel,
    reference: &ReferenceData,
) -> Vec<GeoBucket<'a>>
where
    I: IntoIterator<Item = &'a FriendRecord>,
{
    let mut buckets: Vec<GeoBucket<'a>> = Vec::new();

    for friend in friends {
        let location = match friend.location(level) {
            Some(loc) => loc,
            None => continue,
        };
        match buckets.iter().position(|b| b.location == location) {
            Some(i) => buckets[i].friends.push(friend),
            None => buckets.push(GeoBucket {
                location: location.to_string(),
                map_name: match level {
                    LocationLevel::Province => reference.region_map_name(location).to_string(),
                    LocationLevel::City => location.to_string(),
                },
                total: 0,
                friends: vec![friend],
                types: Vec::new(),
            }),
        }
    }

    for bucket in &mut buckets {
        bucket.total = bucket.friends.len();
        bucket.types = count_by(bucket.friends.iter(), |f| f.personality_type.clone());
    }
    buckets
}

/// City buckets of the records living in one province (map drill-down).
pub fn city_buckets_in<'a, I>(
    friends: I,
    province: &str,
    reference: &ReferenceData,
) -> Vec<GeoBucket<'a>>
where
    I: IntoIterator<Item = &'a FriendRecord>,
{
    geo_buckets(
        friends
            .into_iter()
            .filter(|f| f.province.as_deref() == Some(province)),
        LocationLevel::City,
        reference,
    )
}

pub fn find_bucket<'b, 'a>(buckets: &'b [GeoBucket<'a>], location: &str) -> Option<&'b GeoBucket<'a>> {
    buckets.iter().find(|b| b.location == location)
}
