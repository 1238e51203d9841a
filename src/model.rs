// src/model.rs
//
// Schema-agnostic graph records.
//
// - Value: one scalar attribute. `Null` marks an attribute the source could not
//          supply; the encoder decides how it is written.
// - Attrs: insertion-ordered key/value block (one node or one edge).
// - Graph: nodes deduplicated by `id`, edges kept as-is (multigraph).

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Str(s!(v)) }
}
impl From<String> for Value {
    fn from(v: String) -> Self { Value::Str(v) }
}
impl From<&String> for Value {
    fn from(v: &String) -> Self { Value::Str(v.clone()) }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self { Value::Int(v) }
}
impl From<i32> for Value {
    fn from(v: i32) -> Self { Value::Int(i64::from(v)) }
}
impl From<u32> for Value {
    fn from(v: u32) -> Self { Value::Int(i64::from(v)) }
}
impl From<bool> for Value {
    fn from(v: bool) -> Self { Value::Bool(v) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Ordered attribute block. Keys keep the order they were first pushed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs(Vec<(String, Value)>);

impl Attrs {
    pub fn new() -> Self { Self(Vec::new()) }

    /// Set `key`. An existing key keeps its position and takes the new value.
    pub fn push(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((s!(key), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    pub fn id(&self) -> Option<&str> { self.get_str("id") }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// Directed multigraph under construction.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Attrs>,
    edges: Vec<Attrs>,
    /// node id → position in `nodes`
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self { Self::default() }

    /// Rebuild a graph from plain parts. Later nodes repeating an id are dropped.
    pub fn from_parts(nodes: Vec<Attrs>, edges: Vec<Attrs>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph.edges = edges;
        graph
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Insert `node` unless its id is already present. Returns whether it was inserted.
    pub fn add_node(&mut self, node: Attrs) -> bool {
        let id = node.id().map(str::to_owned);
        match id {
            Some(id) if self.index.contains_key(&id) => false,
            Some(id) => {
                self.index.insert(id, self.nodes.len());
                self.nodes.push(node);
                true
            }
            None => {
                self.nodes.push(node);
                true
            }
        }
    }

    /// Like `add_node`, but only builds the node when `id` is unseen.
    /// Used where building a node costs a lookup.
    pub fn add_node_with(&mut self, id: &str, make: impl FnOnce() -> Attrs) -> bool {
        if self.index.contains_key(id) {
            return false;
        }
        self.add_node(make())
    }

    pub fn add_edge(&mut self, edge: Attrs) {
        self.edges.push(edge);
    }

    pub fn node(&self, id: &str) -> Option<&Attrs> {
        self.index.get(id).and_then(|&ix| self.nodes.get(ix))
    }

    pub fn nodes(&self) -> &[Attrs] { &self.nodes }
    pub fn edges(&self) -> &[Attrs] { &self.edges }

    /// Both nodes and edges present; anything less is reported as a failed build.
    pub fn has_content(&self) -> bool {
        !self.nodes.is_empty() && !self.edges.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Attrs>, Vec<Attrs>) {
        (self.nodes, self.edges)
    }
}
