// Neo4j implementation of the GraphStore interface
use async_trait::async_trait;
use neo4rs::{Graph, Query};
use tracing::{debug, info};

use super::connection::{connect, Neo4jConfig};
use crate::errors::GraphStoreError;
use crate::interfaces::GraphStore;
use crate::types::{
    is_valid_identifier, EdgeSpec, EdgeType, Endpoint, NodeId, NodeLabel, NodeSpec, Properties,
    PropertyValue,
};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// GraphStore backed by a Neo4j instance reached over Bolt.
pub struct Neo4jGraphStore {
    graph: Graph,
}

impl Neo4jGraphStore {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Connect to the configured instance.
    pub fn connect(config: &Neo4jConfig) -> Result<Self, GraphStoreError> {
        info!("Connecting to Neo4j at {}", config.uri);
        Ok(Self::new(connect(config)?))
    }

    /// Run a query and read an integer column from its first row.
    async fn fetch_count(&self, query: Query, column: &str) -> Result<Option<i64>, GraphStoreError> {
        let mut result = self.graph.execute(query).await?;
        match result.next().await? {
            Some(row) => row
                .get::<i64>(column)
                .map(Some)
                .map_err(|e| GraphStoreError::decode(format!("column {}: {}", column, e))),
            None => Ok(None),
        }
    }

    async fn write_edge(&self, edge: &EdgeSpec, mode: WriteMode) -> Result<(), GraphStoreError> {
        let (query_str, params) = edge_query(mode, edge)?;
        let query = bind_params(
            bind_endpoint(bind_endpoint(Query::new(query_str), "a", &edge.from), "b", &edge.to),
            params,
        );

        match self.fetch_count(query, "written").await? {
            Some(written) if written > 0 => {
                debug!("{} {} {} -> {}", mode.verb(), edge.edge_type, edge.from, edge.to);
                Ok(())
            }
            _ => Err(GraphStoreError::endpoint_not_found(
                edge.edge_type,
                &edge.from,
                &edge.to,
            )),
        }
    }

    async fn write_node(&self, node: &NodeSpec, mode: WriteMode) -> Result<(), GraphStoreError> {
        let (query_str, params) = node_query(mode, node)?;
        let query = bind_params(Query::new(query_str).param("key", node.key.clone()), params);
        self.graph.run(query).await?;
        Ok(())
    }
}

type QueryParams = Vec<(String, PropertyValue)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Create,
    Merge,
}

impl WriteMode {
    fn verb(self) -> &'static str {
        match self {
            WriteMode::Create => "CREATE",
            WriteMode::Merge => "MERGE",
        }
    }

    /// Properties on a merged element are only written when it is created.
    fn set_keyword(self) -> &'static str {
        match self {
            WriteMode::Create => "SET",
            WriteMode::Merge => "ON CREATE SET",
        }
    }
}

/// Node write keyed on `$key`.
///
/// A merge matches on the primary label only, so an existing node gains the
/// extra labels instead of being duplicated.
fn node_query(mode: WriteMode, node: &NodeSpec) -> Result<(String, QueryParams), GraphStoreError> {
    let (set_clauses, params) = property_assignments("n", &node.properties)?;

    let labels = match mode {
        WriteMode::Create => label_pattern(node),
        WriteMode::Merge => node.label.as_str().to_string(),
    };
    let mut query_str = format!(
        "{} (n:{} {{{}: $key}})",
        mode.verb(),
        labels,
        node.label.key_property()
    );
    if !set_clauses.is_empty() {
        query_str.push_str(&format!(" {} {}", mode.set_keyword(), set_clauses.join(", ")));
    }
    if mode == WriteMode::Merge {
        for label in &node.extra_labels {
            query_str.push_str(&format!(" SET n:{}", label.as_str()));
        }
    }

    Ok((query_str, params))
}

/// Edge write between `a` and `b`. Zero `written` rows means an endpoint did not match.
fn edge_query(mode: WriteMode, edge: &EdgeSpec) -> Result<(String, QueryParams), GraphStoreError> {
    let (set_clauses, params) = property_assignments("r", &edge.properties)?;

    let mut query_str = format!(
        "{} {} {} (a)-[r:{}]->(b)",
        match_clause("a", &edge.from),
        match_clause("b", &edge.to),
        mode.verb(),
        edge.edge_type.as_str()
    );
    if !set_clauses.is_empty() {
        query_str.push_str(&format!(" {} {}", mode.set_keyword(), set_clauses.join(", ")));
    }
    query_str.push_str(" RETURN count(r) AS written");

    Ok((query_str, params))
}

/// Cypher pattern resolving `endpoint` into the variable `var`.
fn match_clause(var: &str, endpoint: &Endpoint) -> String {
    match endpoint {
        Endpoint::Key { label, .. } => format!(
            "MATCH ({var}:{label} {{{key}: ${var}_ref}})",
            var = var,
            label = label.as_str(),
            key = label.key_property()
        ),
        Endpoint::Id { label, .. } => format!(
            "MATCH ({var}:{label}) WHERE id({var}) = ${var}_ref",
            var = var,
            label = label.as_str()
        ),
    }
}

fn bind_endpoint(query: Query, var: &str, endpoint: &Endpoint) -> Query {
    let name = format!("{}_ref", var);
    match endpoint {
        Endpoint::Key { key, .. } => query.param(&name, key.clone()),
        Endpoint::Id { id, .. } => query.param(&name, id.0),
    }
}

/// `SET` assignments for `properties` on `var`, with their parameters.
fn property_assignments(
    var: &str,
    properties: &Properties,
) -> Result<(Vec<String>, QueryParams), GraphStoreError> {
    let mut set_clauses = Vec::with_capacity(properties.len());
    let mut params = Vec::with_capacity(properties.len());

    for (idx, (key, value)) in properties.iter().enumerate() {
        if !is_valid_identifier(key) {
            return Err(GraphStoreError::invalid_identifier(key.clone()));
        }
        let param = format!("p{}", idx);
        match value {
            PropertyValue::DateTime(_) => {
                set_clauses.push(format!("{}.{} = datetime(${})", var, key, param))
            }
            _ => set_clauses.push(format!("{}.{} = ${}", var, key, param)),
        }
        params.push((param, value.clone()));
    }

    Ok((set_clauses, params))
}

fn bind_params(mut query: Query, params: QueryParams) -> Query {
    for (name, value) in params {
        query = match value {
            PropertyValue::String(s) => query.param(&name, s),
            PropertyValue::Integer(i) => query.param(&name, i),
            PropertyValue::DateTime(dt) => query.param(&name, dt.format(DATETIME_FORMAT).to_string()),
        };
    }
    query
}

fn label_pattern(node: &NodeSpec) -> String {
    node.labels()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(":")
}

#[async_trait]
impl GraphStore for Neo4jGraphStore {
    async fn verify_connectivity(&self) -> Result<(), GraphStoreError> {
        self.graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .map_err(|e| GraphStoreError::connection(e.to_string()))?;
        Ok(())
    }

    async fn create_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError> {
        self.write_node(node, WriteMode::Create).await
    }

    async fn merge_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError> {
        self.write_node(node, WriteMode::Merge).await
    }

    async fn create_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError> {
        self.write_edge(edge, WriteMode::Create).await
    }

    async fn merge_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError> {
        self.write_edge(edge, WriteMode::Merge).await
    }

    async fn node_ids(&self, label: NodeLabel) -> Result<Vec<NodeId>, GraphStoreError> {
        let query = Query::new(format!(
            "MATCH (n:{}) RETURN id(n) AS node_id",
            label.as_str()
        ));
        let mut result = self.graph.execute(query).await?;

        let mut ids = Vec::new();
        while let Some(row) = result.next().await? {
            let id = row
                .get::<i64>("node_id")
                .map_err(|e| GraphStoreError::decode(format!("node_id: {}", e)))?;
            ids.push(NodeId(id));
        }
        Ok(ids)
    }

    async fn node_keys(&self, label: NodeLabel) -> Result<Vec<String>, GraphStoreError> {
        let query = Query::new(format!(
            "MATCH (n:{label}) WHERE n.{key} IS NOT NULL RETURN n.{key} AS node_key",
            label = label.as_str(),
            key = label.key_property()
        ));
        let mut result = self.graph.execute(query).await?;

        let mut keys = Vec::new();
        while let Some(row) = result.next().await? {
            let key = row
                .get::<String>("node_key")
                .map_err(|e| GraphStoreError::decode(format!("node_key: {}", e)))?;
            keys.push(key);
        }
        Ok(keys)
    }

    async fn count_nodes(&self, label: NodeLabel) -> Result<Option<u64>, GraphStoreError> {
        let query = Query::new(format!(
            "MATCH (n:{}) RETURN count(n) AS total",
            label.as_str()
        ));
        Ok(self
            .fetch_count(query, "total")
            .await?
            .map(|total| total.max(0) as u64))
    }

    async fn count_edges(&self, edge_type: EdgeType) -> Result<Option<u64>, GraphStoreError> {
        let query = Query::new(format!(
            "MATCH ()-[r:{}]->() RETURN count(r) AS total",
            edge_type.as_str()
        ));
        Ok(self
            .fetch_count(query, "total")
            .await?
            .map(|total| total.max(0) as u64))
    }
}
