use thiserror::Error;

use crate::model::NodeId;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid node set: {0} is not a node of the parent graph")]
    InvalidNodeSet(NodeId),
}
