//! Graph store error types.

use thiserror::Error;

use crate::types::EdgeType;

/// Errors returned by every `GraphStore` operation.
#[derive(Debug, Clone, Error)]
pub enum GraphStoreError {
    /// The store could not be reached or rejected the credentials.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A read or write query failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// One of the endpoints of a relationship does not exist in the store.
    #[error("Endpoint not found for {edge_type} edge from {from} to {to}")]
    EndpointNotFound {
        edge_type: EdgeType,
        from: String,
        to: String,
    },

    /// A returned row could not be decoded into the expected type.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// A property name cannot be safely embedded in a query.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl GraphStoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    /// Create an endpoint not found error.
    pub fn endpoint_not_found(edge_type: EdgeType, from: impl ToString, to: impl ToString) -> Self {
        Self::EndpointNotFound {
            edge_type,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Whether the error means a referenced node is missing.
    pub fn is_missing_endpoint(&self) -> bool {
        matches!(self, Self::EndpointNotFound { .. })
    }
}

impl From<neo4rs::Error> for GraphStoreError {
    fn from(err: neo4rs::Error) -> Self {
        Self::QueryError(err.to_string())
    }
}
