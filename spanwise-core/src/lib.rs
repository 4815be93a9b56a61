//! Spanwise core library.
//!
//! An unbalanced [`OrderedTree`], an undirected simple [`Graph`] and a
//! [`KruskalStepper`] that grows a minimum spanning forest one observable
//! step at a time.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod element;
mod error;
mod graph;
mod kruskal;
mod tree;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    element::{Edge, EdgeId, EdgeType, Endpoints, NodeId},
    error::{
        GraphError, GraphErrorCode, GraphResult, StepError, StepErrorCode, StepResult, TreeError,
        TreeErrorCode,
    },
    graph::{DEFAULT_MAX_VERTICES, Graph, GraphBuilder, GraphConfig},
    kruskal::{
        Annotation, Annotations, KruskalStepper, Phase, StepDecision, StepOutcome, StepStats,
        StepwiseAlgorithm,
    },
    tree::{OrderedTree, Traversal},
};
