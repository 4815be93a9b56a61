//! Parsing of `ID:WEIGHT:A-B` edge arguments.

use std::str::FromStr;

use spanwise_core::{Edge, EdgeId, NodeId};
use thiserror::Error;

/// An edge argument: identifier, weight and the two endpoint vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSpec {
    /// Edge value inserted into the graph.
    pub edge: Edge,
    /// First endpoint as written.
    pub first: NodeId,
    /// Second endpoint as written.
    pub second: NodeId,
}

/// Reasons an edge argument fails to parse.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EdgeSpecError {
    /// The argument does not have the `ID:WEIGHT:A-B` shape.
    #[error("expected `ID:WEIGHT:A-B`, got `{raw}`")]
    Malformed {
        /// The rejected argument.
        raw: String,
    },
    /// A numeric component failed to parse.
    #[error("invalid {part} `{value}` in `{raw}`")]
    InvalidNumber {
        /// Which component failed (`id`, `weight` or `vertex`).
        part: &'static str,
        /// The offending component.
        value: String,
        /// The whole argument.
        raw: String,
    },
}

impl FromStr for EdgeSpec {
    type Err = EdgeSpecError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || EdgeSpecError::Malformed {
            raw: raw.to_owned(),
        };
        let mut parts = raw.trim().splitn(3, ':');
        let (Some(id), Some(weight), Some(pair)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let (a, b) = pair.split_once('-').ok_or_else(malformed)?;

        let number = |part: &'static str, value: &str| EdgeSpecError::InvalidNumber {
            part,
            value: value.to_owned(),
            raw: raw.to_owned(),
        };
        let id = id.trim().parse::<u32>().map_err(|_| number("id", id))?;
        let weight = weight
            .trim()
            .parse::<f32>()
            .map_err(|_| number("weight", weight))?;
        let first = a.trim().parse::<u32>().map_err(|_| number("vertex", a))?;
        let second = b.trim().parse::<u32>().map_err(|_| number("vertex", b))?;

        Ok(Self {
            edge: Edge::new(EdgeId::new(id), weight),
            first: NodeId::new(first),
            second: NodeId::new(second),
        })
    }
}
