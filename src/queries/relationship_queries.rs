use serde::Serialize;

use crate::model::{FriendRecord, Id};
use crate::reference::ReferenceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    BestMatch,
    Challenging,
}

impl EdgeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::BestMatch => "最佳匹配",
            EdgeKind::Challenging => "需要磨合",
        }
    }
}

/// An undirected compatibility link between two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipEdge {
    pub source: Id<FriendRecord>,
    pub target: Id<FriendRecord>,
    pub kind: EdgeKind,
}

/// Classifies a pair of types. Either side listing the other is enough;
/// a best match wins over a challenging listing.
pub fn classify_pair(a: &str, b: &str, reference: &ReferenceData) -> Option<EdgeKind> {
    let best = |of: &str, other: &str| {
        reference
            .compatibility(of)
            .map_or(false, |c| c.best_match.iter().any(|t| t == other))
    };
    let hard = |of: &str, other: &str| {
        reference
            .compatibility(of)
            .map_or(false, |c| c.challenging.iter().any(|t| t == other))
    };

    if best(a, b) || best(b, a) {
        Some(EdgeKind::BestMatch)
    } else if hard(a, b) || hard(b, a) {
        Some(EdgeKind::Challenging)
    } else {
        None
    }
}

/// Edges over every unordered pair of distinct records, each pair at most
/// once, in (i, j) input order.
pub fn relationship_edges(friends: &[&FriendRecord], reference: &ReferenceData) -> Vec<RelationshipEdge> {
    let mut edges = Vec::new();
    for (i, a) in friends.iter().enumerate() {
        for b in &friends[i + 1..] {
            if let Some(kind) = classify_pair(&a.personality_type, &b.personality_type, reference) {
                edges.push(RelationshipEdge {
                    source: a.id.clone(),
                    target: b.id.clone(),
                    kind,
                });
            }
        }
    }
    edges
}

/// Records that pair well or poorly with one type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompatibleFriends<'a> {
    pub best_match: Vec<&'a FriendRecord>,
    pub challenging: Vec<&'a FriendRecord>,
}

/// Looks up a type's lists and partitions the roster by them. Types without
/// a table entry yield empty lists.
pub fn compatible_friends<'a, I>(
    personality_type: &str,
    friends: I,
    reference: &ReferenceData,
) -> CompatibleFriends<'a>
where
    I: IntoIterator<Item = &'a FriendRecord>,
{
    let compat = match reference.compatibility(personality_type) {
        Some(c) => c,
        None => return CompatibleFriends::default(),
    };

    let mut result = CompatibleFriends::default();
    for friend in friends {
        if compat.best_match.contains(&friend.personality_type) {
            result.best_match.push(friend);
        }
        if compat.challenging.contains(&friend.personality_type) {
            result.challenging.push(friend);
        }
    }
    result
}
