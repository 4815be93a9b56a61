//! Error types for the spanwise core library.
//!
//! Each component exposes its own error enum together with a stable
//! machine-readable code. Soft failures (adding a vertex twice, removing an
//! absent edge) are reported as `false` and never appear here.

use std::fmt;

use thiserror::Error;

use crate::element::EdgeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::OrderedTree`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TreeError {
    /// An element comparing equal to the inserted one is already stored.
    #[error("duplicate item: {item}")]
    DuplicateItem {
        /// Debug rendering of the rejected element.
        item: String,
    },
    /// The element to remove is not stored in the tree.
    #[error("item not found: {item}")]
    ItemNotFound {
        /// Debug rendering of the missing element.
        item: String,
    },
    /// A minimum or maximum removal was requested on an empty tree.
    #[error("cannot remove the {end} item of an empty tree")]
    EmptyTree {
        /// Which extreme was requested (`"min"` or `"max"`).
        end: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`TreeError`] variants.
    enum TreeErrorCode for TreeError {
        /// An equal element is already stored.
        DuplicateItem => DuplicateItem { .. } => "TREE_DUPLICATE_ITEM",
        /// The element to remove is not stored.
        ItemNotFound => ItemNotFound { .. } => "TREE_ITEM_NOT_FOUND",
        /// Extreme removal on an empty tree.
        EmptyTree => EmptyTree { .. } => "TREE_EMPTY",
    }
}

/// Hard failures raised by [`crate::Graph`] construction and mutation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The configured vertex ceiling would be exceeded.
    #[error("graph already holds the maximum of {max_vertices} vertices")]
    CapacityExceeded {
        /// Configured vertex ceiling.
        max_vertices: usize,
    },
    /// A directed edge was requested on an undirected-only graph.
    #[error("edge {edge} was requested as directed, but only undirected edges are supported")]
    DirectedEdgeUnsupported {
        /// Identifier of the rejected edge.
        edge: EdgeId,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has a non-finite weight")]
    NonFiniteWeight {
        /// Identifier of the rejected edge.
        edge: EdgeId,
    },
    /// The builder was asked for a zero vertex ceiling.
    #[error("max_vertices must be at least 1 (got {got})")]
    InvalidCapacity {
        /// The rejected ceiling.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The configured vertex ceiling would be exceeded.
        CapacityExceeded => CapacityExceeded { .. } => "GRAPH_CAPACITY_EXCEEDED",
        /// A directed edge was requested.
        DirectedEdgeUnsupported => DirectedEdgeUnsupported { .. } => "GRAPH_DIRECTED_EDGE_UNSUPPORTED",
        /// An edge carried a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// The builder was asked for a zero vertex ceiling.
        InvalidCapacity => InvalidCapacity { .. } => "GRAPH_INVALID_CAPACITY",
    }
}

/// Errors raised when the stepping lifecycle is driven out of order or an
/// underlying structure fails.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StepError {
    /// A stepping call arrived before [`crate::KruskalStepper::start`].
    #[error("the algorithm has not been started")]
    NotStarted,
    /// [`crate::KruskalStepper::start`] was called twice without a reset.
    #[error("the algorithm is already started; reset before starting again")]
    AlreadyStarted,
    /// A step was requested after [`crate::KruskalStepper::finish`].
    #[error("the algorithm has already finished; reset before stepping again")]
    AlreadyFinished,
    /// A queued edge is no longer attached to two vertices of the input graph.
    #[error("queued edge {edge} is not attached to the input graph")]
    DetachedEdge {
        /// Identifier of the detached edge.
        edge: EdgeId,
    },
    /// The priority queue rejected an operation.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The output subgraph rejected an operation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`StepError`] variants.
    enum StepErrorCode for StepError {
        /// A stepping call arrived before start.
        NotStarted => NotStarted => "STEP_NOT_STARTED",
        /// Start was called twice without a reset.
        AlreadyStarted => AlreadyStarted => "STEP_ALREADY_STARTED",
        /// A step was requested after finish.
        AlreadyFinished => AlreadyFinished => "STEP_ALREADY_FINISHED",
        /// A queued edge is detached from the input graph.
        DetachedEdge => DetachedEdge { .. } => "STEP_DETACHED_EDGE",
        /// The priority queue rejected an operation.
        TreeFailure => Tree(..) => "STEP_TREE_FAILURE",
        /// The output subgraph rejected an operation.
        GraphFailure => Graph(..) => "STEP_GRAPH_FAILURE",
    }
}

impl StepError {
    /// Retrieve the inner [`TreeErrorCode`] when the priority queue failed.
    #[must_use]
    pub const fn tree_code(&self) -> Option<TreeErrorCode> {
        match self {
            Self::Tree(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`GraphErrorCode`] when the output subgraph failed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type GraphResult<T> = core::result::Result<T, GraphError>;

/// Convenient alias for results returned by the stepping lifecycle.
pub type StepResult<T> = core::result::Result<T, StepError>;
