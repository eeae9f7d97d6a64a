//! Relation graph and implicit relatedness.

use comention_core::types::{EntityId, EntityPair, FxHashMap};
use petgraph::graphmap::UnGraphMap;
use rayon::prelude::*;

use super::metrics::jaccard;
use super::types::{PairScore, Relatedness};

/// Undirected graph linking entities whose direct likelihood exceeds a
/// threshold. Edge weights are the pair's mutual information.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    graph: UnGraphMap<EntityId, f64>,
}

impl RelationGraph {
    /// Link every scored pair with `likelihood > edge_likelihood`.
    pub fn from_scores(scores: &[PairScore], edge_likelihood: f64) -> Self {
        let mut graph = UnGraphMap::new();
        for score in scores.iter().filter(|s| s.likelihood > edge_likelihood) {
            graph.add_edge(score.pair.first(), score.pair.second(), score.mutual_information);
        }
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Neighbors of `entity` in id order; empty if it has no edge.
    pub fn neighbors(&self, entity: EntityId) -> Vec<EntityId> {
        if !self.graph.contains_node(entity) {
            return Vec::new();
        }
        let mut neighbors: Vec<EntityId> = self.graph.neighbors(entity).collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Mutual information carried by the edge `a`–`b`.
    pub fn edge_mi(&self, a: EntityId, b: EntityId) -> Option<f64> {
        self.graph.edge_weight(a, b).copied()
    }

    /// Relatedness of every pair of graph nodes, ordered by pair.
    ///
    /// Pairs never co-mentioned are skipped unless `output_all`, in which
    /// case their direct scores are negative infinity.
    pub fn relatedness(
        &self,
        direct: &FxHashMap<EntityPair, PairScore>,
        output_all: bool,
    ) -> Vec<Relatedness> {
        let mut nodes: Vec<EntityId> = self.graph.nodes().collect();
        nodes.sort_unstable();
        let neighbors: Vec<Vec<EntityId>> = nodes.iter().map(|&n| self.neighbors(n)).collect();

        (0..nodes.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                let nodes = &nodes;
                let neighbors = &neighbors;
                (i + 1..nodes.len()).filter_map(move |j| {
                    let pair = EntityPair::new(nodes[i], nodes[j])?;
                    let (mutual_information, likelihood) = match direct.get(&pair) {
                        Some(score) => (score.mutual_information, score.likelihood),
                        None if output_all => (f64::NEG_INFINITY, f64::NEG_INFINITY),
                        None => return None,
                    };

                    let shared = intersect_sorted(&neighbors[i], &neighbors[j]);
                    let union = neighbors[i].len() + neighbors[j].len() - shared.len();
                    let mean_shared_mi = if shared.is_empty() {
                        0.0
                    } else {
                        let total: f64 = shared
                            .iter()
                            .map(|&n| {
                                let left = self.edge_mi(nodes[i], n).unwrap_or(f64::NEG_INFINITY);
                                let right = self.edge_mi(nodes[j], n).unwrap_or(f64::NEG_INFINITY);
                                left.min(right)
                            })
                            .sum();
                        total / shared.len() as f64
                    };

                    Some(Relatedness {
                        pair,
                        mutual_information,
                        likelihood,
                        jaccard: jaccard(shared.len(), union),
                        shared_neighbors: shared.len(),
                        mean_shared_mi,
                    })
                })
            })
            .collect()
    }
}

fn intersect_sorted(a: &[EntityId], b: &[EntityId]) -> Vec<EntityId> {
    let mut shared = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_intersection() {
        let ids = |v: &[u32]| v.iter().map(|&i| EntityId(i)).collect::<Vec<_>>();
        assert_eq!(intersect_sorted(&ids(&[1, 3, 5, 7]), &ids(&[2, 3, 7, 9])), ids(&[3, 7]));
        assert!(intersect_sorted(&ids(&[]), &ids(&[1])).is_empty());
    }
}
