//! Union-find grouping of candidates and their bridging friends.
//!
//! Second-degree candidates and the first-degree friends connecting them are
//! merged into disjoint sets, and each candidate is then assigned its
//! common-friend set. The forest is a plain value constructed per request;
//! nothing here is shared across requests.

use std::collections::{HashMap, HashSet};

use crate::error::{RecommendError, Result};
use crate::models::{CandidateInfo, MemberId, RecommendationCandidate};

/// Disjoint-set forest over member ids with path compression and
/// union by rank.
#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: HashMap<MemberId, MemberId>,
    rank: HashMap<MemberId, u32>,
}

impl DisjointSet {
    /// Creates a forest where every node is its own singleton set, rank 0.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = MemberId>,
    {
        let mut forest = Self::default();
        for node in nodes {
            forest.parent.entry(node).or_insert(node);
            forest.rank.entry(node).or_insert(0);
        }
        forest
    }

    /// Number of nodes in the initialized universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way to the root is re-parented directly to
    /// it. Fails with `InvalidState` when `node` is outside the universe.
    pub fn find(&mut self, node: MemberId) -> Result<MemberId> {
        if !self.parent.contains_key(&node) {
            return Err(RecommendError::InvalidState(format!(
                "member {node} is not in the initialized universe"
            )));
        }

        let mut root = node;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        // Path compression
        let mut current = node;
        while self.parent[&current] != current {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root; on a
    /// tie the surviving root's rank increments by exactly one. A no-op when
    /// both already share a root.
    pub fn union(&mut self, a: MemberId, b: MemberId) -> Result<()> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;

        if root_a == root_b {
            return Ok(());
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];

        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a);
            self.rank.insert(root_a, rank_a + 1);
        }

        Ok(())
    }

    /// Whether `a` and `b` currently share a set.
    pub fn connected(&mut self, a: MemberId, b: MemberId) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}

/// Establishes per-candidate common-friend sets for second-degree candidates.
pub struct CommonFriendGrouper;

impl CommonFriendGrouper {
    /// Unions each second-degree candidate with its bridging first-degree
    /// friends, then records each candidate's common friends.
    ///
    /// The common-friend set is assigned directly from the candidate's own
    /// bridging ids rather than from merged group membership, so candidates
    /// sharing a bridge still keep distinct sets.
    pub fn build_common_friend_groups(
        infos: &[CandidateInfo],
        candidates: &mut HashMap<MemberId, RecommendationCandidate>,
    ) -> Result<()> {
        let universe: HashSet<MemberId> = infos
            .iter()
            .flat_map(|info| {
                info.connected_ids
                    .iter()
                    .copied()
                    .chain(std::iter::once(info.candidate_id))
            })
            .collect();

        let mut forest = DisjointSet::new(universe);

        for info in infos {
            for friend in &info.connected_ids {
                forest.union(info.candidate_id, *friend)?;
            }
        }

        for info in infos {
            if let Some(candidate) = candidates.get_mut(&info.candidate_id) {
                for friend in &info.connected_ids {
                    candidate.add_common_friend(*friend);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Degree;

    fn id(value: u64) -> MemberId {
        MemberId::new(value)
    }

    fn ids(values: &[u64]) -> HashSet<MemberId> {
        values.iter().map(|&v| MemberId::new(v)).collect()
    }

    #[test]
    fn test_singletons_after_init() {
        let mut forest = DisjointSet::new([id(1), id(2), id(3)]);

        assert_eq!(forest.len(), 3);
        assert_eq!(forest.find(id(1)).unwrap(), id(1));
        assert!(!forest.connected(id(1), id(2)).unwrap());
    }

    #[test]
    fn test_union_joins_sets() {
        let mut forest = DisjointSet::new([id(1), id(2), id(3), id(4)]);

        forest.union(id(1), id(2)).unwrap();
        forest.union(id(3), id(4)).unwrap();

        assert!(forest.connected(id(1), id(2)).unwrap());
        assert!(forest.connected(id(3), id(4)).unwrap());
        assert!(!forest.connected(id(1), id(3)).unwrap());

        forest.union(id(2), id(3)).unwrap();
        assert!(forest.connected(id(1), id(4)).unwrap());
    }

    #[test]
    fn test_find_idempotent() {
        let mut forest = DisjointSet::new([id(1), id(2), id(3)]);
        forest.union(id(1), id(2)).unwrap();

        let first = forest.find(id(1)).unwrap();
        let second = forest.find(id(1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_union_by_rank_tie_increments_once() {
        let mut forest = DisjointSet::new([id(1), id(2)]);

        forest.union(id(1), id(2)).unwrap();
        let root = forest.find(id(1)).unwrap();
        assert_eq!(forest.rank[&root], 1);

        // Re-union is a no-op; rank stays put
        forest.union(id(1), id(2)).unwrap();
        assert_eq!(forest.rank[&root], 1);
    }

    #[test]
    fn test_lower_rank_attaches_beneath_higher() {
        let mut forest = DisjointSet::new([id(1), id(2), id(3)]);

        forest.union(id(1), id(2)).unwrap(); // root rank 1
        forest.union(id(3), id(1)).unwrap(); // singleton joins the taller tree

        let root = forest.find(id(1)).unwrap();
        assert_eq!(forest.find(id(3)).unwrap(), root);
        assert_eq!(forest.rank[&root], 1);
    }

    #[test]
    fn test_find_outside_universe_fails() {
        let mut forest = DisjointSet::new([id(1)]);

        assert!(matches!(
            forest.find(id(99)),
            Err(RecommendError::InvalidState(_))
        ));
        assert!(matches!(
            forest.union(id(1), id(99)),
            Err(RecommendError::InvalidState(_))
        ));
    }

    #[test]
    fn test_grouper_assigns_per_candidate_sets() {
        let infos = vec![
            CandidateInfo::new(id(100), ids(&[10])),
            CandidateInfo::new(id(200), ids(&[10, 20])),
        ];

        let mut candidates: HashMap<MemberId, RecommendationCandidate> = [
            (id(100), RecommendationCandidate::new(id(100), Degree::Second)),
            (id(200), RecommendationCandidate::new(id(200), Degree::Second)),
        ]
        .into_iter()
        .collect();

        CommonFriendGrouper::build_common_friend_groups(&infos, &mut candidates).unwrap();

        // 100 and 200 share bridge 10, but their sets stay distinct
        assert_eq!(candidates[&id(100)].common_friends(), &ids(&[10]));
        assert_eq!(candidates[&id(200)].common_friends(), &ids(&[10, 20]));
        assert!(candidates[&id(200)].has_many_acquaintances());
        assert!(!candidates[&id(100)].has_many_acquaintances());
    }

    #[test]
    fn test_grouper_empty_input() {
        let mut candidates = HashMap::new();
        CommonFriendGrouper::build_common_friend_groups(&[], &mut candidates).unwrap();
        assert!(candidates.is_empty());
    }
}
