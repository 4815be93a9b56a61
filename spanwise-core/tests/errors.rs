//! Stable error codes exposed by the core library.

use spanwise_core::{
    EdgeId, GraphError, GraphErrorCode, OrderedTree, StepError, StepErrorCode, TreeError,
    TreeErrorCode,
};
use rstest::rstest;

#[rstest]
#[case(TreeError::DuplicateItem { item: "1".into() }, TreeErrorCode::DuplicateItem, "TREE_DUPLICATE_ITEM")]
#[case(TreeError::ItemNotFound { item: "1".into() }, TreeErrorCode::ItemNotFound, "TREE_ITEM_NOT_FOUND")]
#[case(TreeError::EmptyTree { end: "min" }, TreeErrorCode::EmptyTree, "TREE_EMPTY")]
fn returns_expected_tree_code(
    #[case] error: TreeError,
    #[case] expected: TreeErrorCode,
    #[case] rendered: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), rendered);
    assert_eq!(error.code().to_string(), rendered);
}

#[rstest]
#[case(GraphError::CapacityExceeded { max_vertices: 200 }, GraphErrorCode::CapacityExceeded)]
#[case(
    GraphError::DirectedEdgeUnsupported { edge: EdgeId::new(3) },
    GraphErrorCode::DirectedEdgeUnsupported,
)]
#[case(GraphError::NonFiniteWeight { edge: EdgeId::new(3) }, GraphErrorCode::NonFiniteWeight)]
#[case(GraphError::InvalidCapacity { got: 0 }, GraphErrorCode::InvalidCapacity)]
fn returns_expected_graph_code(#[case] error: GraphError, #[case] expected: GraphErrorCode) {
    assert_eq!(error.code(), expected);
    assert!(error.code().as_str().starts_with("GRAPH_"));
}

#[rstest]
#[case(StepError::NotStarted, StepErrorCode::NotStarted, None, None)]
#[case(StepError::AlreadyStarted, StepErrorCode::AlreadyStarted, None, None)]
#[case(StepError::AlreadyFinished, StepErrorCode::AlreadyFinished, None, None)]
#[case(
    StepError::DetachedEdge { edge: EdgeId::new(1) },
    StepErrorCode::DetachedEdge,
    None,
    None,
)]
#[case(
    StepError::from(TreeError::EmptyTree { end: "min" }),
    StepErrorCode::TreeFailure,
    Some(TreeErrorCode::EmptyTree),
    None,
)]
#[case(
    StepError::from(GraphError::CapacityExceeded { max_vertices: 2 }),
    StepErrorCode::GraphFailure,
    None,
    Some(GraphErrorCode::CapacityExceeded),
)]
fn returns_expected_step_code(
    #[case] error: StepError,
    #[case] expected: StepErrorCode,
    #[case] tree: Option<TreeErrorCode>,
    #[case] graph: Option<GraphErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.tree_code(), tree);
    assert_eq!(error.graph_code(), graph);
}

#[rstest]
fn wrapped_errors_render_transparently() {
    let inner = TreeError::EmptyTree { end: "max" };
    let wrapped = StepError::from(inner.clone());
    assert_eq!(wrapped.to_string(), inner.to_string());
    assert_eq!(wrapped.to_string(), "cannot remove the max item of an empty tree");
}

#[rstest]
fn tree_errors_carry_the_offending_item() {
    let mut tree = OrderedTree::new();
    tree.insert(7_u32).expect("first insert succeeds");
    let err = tree.insert(7).expect_err("duplicate insert fails");
    assert_eq!(err, TreeError::DuplicateItem { item: "7".into() });
    let err = tree.remove(&9).expect_err("absent item cannot be removed");
    assert_eq!(err.code(), TreeErrorCode::ItemNotFound);
}
