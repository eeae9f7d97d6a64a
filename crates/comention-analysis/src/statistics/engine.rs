//! StatisticsEngine: counts in, report rows out.

use comention_core::config::{OutputMode, StatisticsConfig};
use comention_core::constants::{DEFAULT_EDGE_LIKELIHOOD, DEFAULT_LIKELIHOOD_CUTOFF, DEFAULT_MI_CUTOFF};
use comention_core::types::{EntityId, EntityPair, FxHashMap};

use super::graph::RelationGraph;
use super::metrics::{mutual_information, poisson_likelihood};
use super::types::{ComentionRow, MentionRow, PairRow, PairScore, RelatednessRow, Report};
use crate::dictionary::EntityRegistry;
use crate::scanner::AggregationState;

/// Scores a finished [`AggregationState`] and assembles the report for
/// one [`OutputMode`].
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    mode: OutputMode,
    output_all: bool,
    likelihood_cutoff: f64,
    mi_cutoff: f64,
    edge_likelihood: f64,
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new(OutputMode::default())
    }
}

impl StatisticsEngine {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            output_all: false,
            likelihood_cutoff: DEFAULT_LIKELIHOOD_CUTOFF,
            mi_cutoff: DEFAULT_MI_CUTOFF,
            edge_likelihood: DEFAULT_EDGE_LIKELIHOOD,
        }
    }

    pub fn from_config(config: &StatisticsConfig) -> Self {
        Self::new(config.effective_mode())
            .output_all(config.effective_output_all())
            .likelihood_cutoff(config.effective_likelihood_cutoff())
            .mi_cutoff(config.effective_mi_cutoff())
            .edge_likelihood(config.effective_edge_likelihood())
    }

    pub fn output_all(mut self, enabled: bool) -> Self {
        self.output_all = enabled;
        self
    }

    pub fn likelihood_cutoff(mut self, cutoff: f64) -> Self {
        self.likelihood_cutoff = cutoff;
        self
    }

    pub fn mi_cutoff(mut self, cutoff: f64) -> Self {
        self.mi_cutoff = cutoff;
        self
    }

    pub fn edge_likelihood(mut self, threshold: f64) -> Self {
        self.edge_likelihood = threshold;
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Direct scores of every co-mentioned pair, in pair order.
    ///
    /// Empty for an empty corpus.
    pub fn pair_scores(&self, state: &AggregationState) -> Vec<PairScore> {
        let n = state.lines();
        if n == 0 {
            return Vec::new();
        }

        state
            .sorted_pairs()
            .into_iter()
            .filter_map(|pair| {
                let n_ab = state.comentions(pair.first(), pair.second());
                let n_a = state.mentions(pair.first());
                let n_b = state.mentions(pair.second());
                if n_ab == 0 || n_a == 0 || n_b == 0 {
                    return None;
                }
                Some(PairScore {
                    pair,
                    mentions_first: n_a,
                    mentions_second: n_b,
                    comentions: n_ab,
                    mutual_information: mutual_information(n, n_a, n_b, n_ab),
                    likelihood: poisson_likelihood(n, n_a, n_b, n_ab),
                })
            })
            .collect()
    }

    /// Build the report for the configured mode.
    ///
    /// An empty corpus yields an empty report.
    pub fn compute(&self, state: &AggregationState, registry: &EntityRegistry) -> Report {
        let mut report = Report::empty(self.mode);
        if state.lines() == 0 {
            tracing::info!("empty corpus, no statistics");
            return report;
        }

        let name = |id: EntityId| -> String {
            registry
                .resolve(id)
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string())
        };

        match self.mode {
            OutputMode::Mention => {
                report.mentions = state
                    .sorted_entities()
                    .into_iter()
                    .map(|id| MentionRow {
                        entity: name(id),
                        first_seen: state.first_seen(id).unwrap_or(0),
                        mentions: state.mentions(id),
                    })
                    .collect();
            }
            OutputMode::Comention => {
                report.comentions = state
                    .sorted_pairs()
                    .into_iter()
                    .map(|pair| ComentionRow {
                        entity1: name(pair.first()),
                        entity2: name(pair.second()),
                        first_seen: state.pair_first_seen(pair.first(), pair.second()).unwrap_or(0),
                        comentions: state.comentions(pair.first(), pair.second()),
                    })
                    .collect();
            }
            OutputMode::Pairs => {
                report.pairs = self
                    .pair_scores(state)
                    .iter()
                    .filter(|s| {
                        self.output_all
                            || (s.likelihood > self.likelihood_cutoff
                                && s.mutual_information > self.mi_cutoff)
                    })
                    .map(|s| pair_row(s, &name))
                    .collect();
            }
            OutputMode::Implicit => {
                let scores = self.pair_scores(state);
                let graph = RelationGraph::from_scores(&scores, self.edge_likelihood);
                tracing::debug!(
                    nodes = graph.node_count(),
                    edges = graph.edge_count(),
                    "relation graph built"
                );

                report.pairs = scores.iter().map(|s| pair_row(s, &name)).collect();

                let direct: FxHashMap<EntityPair, PairScore> =
                    scores.iter().map(|s| (s.pair, *s)).collect();
                report.implicit = graph
                    .relatedness(&direct, self.output_all)
                    .into_iter()
                    .map(|r| RelatednessRow {
                        entity1: name(r.pair.first()),
                        entity2: name(r.pair.second()),
                        mutual_information: r.mutual_information,
                        likelihood: r.likelihood,
                        jaccard: r.jaccard,
                        shared_neighbors: r.shared_neighbors,
                        mean_shared_mi: r.mean_shared_mi,
                    })
                    .collect();
            }
        }

        tracing::info!(mode = %self.mode, rows = report.row_count(), "statistics computed");
        report
    }
}

fn pair_row(score: &PairScore, name: &impl Fn(EntityId) -> String) -> PairRow {
    PairRow {
        entity1: name(score.pair.first()),
        entity2: name(score.pair.second()),
        mentions1: score.mentions_first,
        mentions2: score.mentions_second,
        comentions: score.comentions,
        mutual_information: score.mutual_information,
        likelihood: score.likelihood,
    }
}
