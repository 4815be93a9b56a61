//! Graph generation strategies for stepper property tests.
//!
//! Each generator draws from a seeded [`SmallRng`] and hands out edge
//! identifiers in generation order. Pairs are canonical and never repeat, so
//! every generated edge is accepted by [`crate::Graph::add_edge`].

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Edge, EdgeId, NodeId};

use super::types::{StepperFixture, WeightDistribution};

const MIN_NODES: usize = 8;
const MAX_NODES: usize = 48;
/// Dense graphs stay small; every step walks the output subgraph.
const DENSE_MAX_NODES: usize = 24;

/// Samples a distribution and a seed, then generates the fixture.
pub(super) fn stepper_fixture_strategy() -> impl Strategy<Value = StepperFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicit distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> StepperFixture {
    match distribution {
        WeightDistribution::Unique => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            probabilistic(rng, node_count, (0.2, 0.6), distribution, continuous_weight)
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<f32> = (0..pool_size)
                .map(|_| f32::from(rng.gen_range(1_u8..=10)))
                .collect();
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            probabilistic(rng, node_count, (0.3, 0.7), distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            probabilistic(rng, node_count, (0.7, 0.95), distribution, continuous_weight)
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f32 {
    rng.gen_range(0.1_f32..100.0)
}

/// Accumulates unique canonical pairs with sequential edge identifiers.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<(Edge, NodeId, NodeId)>,
    pairs: BTreeSet<(usize, usize)>,
}

impl EdgeBuilder {
    /// Adds the pair unless it is a self-loop or already present.
    fn push(&mut self, a: usize, b: usize, weight: f32) {
        let pair = if a <= b { (a, b) } else { (b, a) };
        if pair.0 == pair.1 || !self.pairs.insert(pair) {
            return;
        }
        let id = u32::try_from(self.edges.len()).expect("edge count fits in u32");
        self.edges
            .push((Edge::new(EdgeId::new(id), weight), node(pair.0), node(pair.1)));
    }

    fn finish(self, node_count: usize, distribution: WeightDistribution) -> StepperFixture {
        StepperFixture {
            node_count,
            edges: self.edges,
            distribution,
        }
    }
}

fn node(index: usize) -> NodeId {
    NodeId::new(u32::try_from(index).expect("fixture node ids fit in u32"))
}

fn probabilistic(
    rng: &mut SmallRng,
    node_count: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f32,
) -> StepperFixture {
    let probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut builder = EdgeBuilder::default();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                builder.push(i, j, w);
            }
        }
    }
    if builder.edges.is_empty() {
        let w = weight(rng);
        builder.push(0, 1, w);
    }
    builder.finish(node_count, distribution)
}

fn generate_sparse(rng: &mut SmallRng) -> StepperFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut builder = EdgeBuilder::default();

    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
    for window in order.windows(2) {
        let w = continuous_weight(rng);
        builder.push(window[0], window[1], w);
    }

    let extra = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        let w = continuous_weight(rng);
        builder.push(a, b, w);
    }
    builder.finish(node_count, WeightDistribution::Sparse)
}

/// Two to five components of 3..=12 vertices, followed by up to three
/// isolated vertices.
fn generate_disconnected(rng: &mut SmallRng) -> StepperFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(3..=12)).collect();
    let isolated = rng.gen_range(0..=3);
    let node_count = sizes.iter().sum::<usize>() + isolated;

    let mut builder = EdgeBuilder::default();
    let mut offset = 0;
    for size in sizes {
        let probability: f64 = rng.gen_range(0.3..=0.8);
        let before = builder.edges.len();
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(probability) {
                    let w = continuous_weight(rng);
                    builder.push(offset + i, offset + j, w);
                }
            }
        }
        if builder.edges.len() == before {
            let w = continuous_weight(rng);
            builder.push(offset, offset + 1, w);
        }
        offset += size;
    }
    builder.finish(node_count, WeightDistribution::Disconnected)
}
