use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context};
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::error::GraphError;
use crate::point::Point;

/// Vertex identifier, a stable index assigned at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeIndex {
    fn from(ix: u32) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// An undirected graph of geographic points, weighted implicitly by the
/// great-circle distance between edge endpoints.
///
/// Vertices get a stable [`NodeIndex`] at insertion; adjacency is stored as
/// index lists, with a side lookup from coordinate value to index serving the
/// Point-based API. The store is write-once, read-many: all queries take
/// `&self`, so a fully built graph can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    points: Vec<Point>,
    adjacency: Vec<Vec<NodeIndex>>,
    index: FxHashMap<Point, NodeIndex>,
    num_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_vertices),
            adjacency: Vec::with_capacity(num_vertices),
            index: FxHashMap::with_capacity_and_hasher(num_vertices, Default::default()),
            num_edges: 0,
        }
    }

    /// Registers `p` as a vertex and returns its index.
    ///
    /// Idempotent: re-adding an existing coordinate returns the index it
    /// already has.
    pub fn add_vertex(&mut self, p: Point) -> NodeIndex {
        if let Some(&idx) = self.index.get(&p) {
            return idx;
        }

        let idx = NodeIndex::new(self.points.len());
        self.points.push(p);
        self.adjacency.push(Vec::new());
        self.index.insert(p, idx);
        idx
    }

    /// Inserts the undirected edge (a, b).
    ///
    /// Both endpoints must already be vertices. Re-inserting an existing edge
    /// is a no-op, as is a self-loop.
    pub fn add_edge(&mut self, a: &Point, b: &Point) -> Result<(), GraphError> {
        let ai = self.node_index(a).ok_or(GraphError::UnknownVertex(*a))?;
        let bi = self.node_index(b).ok_or(GraphError::UnknownVertex(*b))?;

        if ai == bi || self.adjacency[ai.index()].contains(&bi) {
            return Ok(());
        }

        self.adjacency[ai.index()].push(bi);
        self.adjacency[bi.index()].push(ai);
        self.num_edges += 1;
        Ok(())
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.index.contains_key(p)
    }

    /// Index of the vertex with coordinate `p`, if present.
    pub fn node_index(&self, p: &Point) -> Option<NodeIndex> {
        self.index.get(p).copied()
    }

    pub fn point(&self, idx: NodeIndex) -> Option<&Point> {
        self.points.get(idx.index())
    }

    /// Returns an iterator over the neighbors of `p`.
    pub fn neighbors(&self, p: &Point) -> Result<impl Iterator<Item = &Point> + '_, GraphError> {
        let idx = self.node_index(p).ok_or(GraphError::UnknownVertex(*p))?;
        Ok(self.neighbor_indices(idx).iter().map(|n| &self.points[n.index()]))
    }

    /// Adjacency list of a vertex by index. Used by the search algorithms.
    pub fn neighbor_indices(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[idx.index()]
    }

    /// Returns an iterator over all vertices in index order
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Weight of the edge between two vertices given by index.
    pub fn edge_weight(&self, a: NodeIndex, b: NodeIndex) -> Weight {
        self.points[a.index()].distance(&self.points[b.index()])
    }

    /// The vertex closest to `query` in great-circle distance.
    ///
    /// Linear scan over all vertices; ties resolve to the lowest vertex
    /// index. O(|V|) by design, there is no spatial index.
    pub fn nearest(&self, query: &Point) -> Result<&Point, GraphError> {
        let mut best: Option<(usize, Weight)> = None;

        for (i, p) in self.points.iter().enumerate() {
            let d = query.distance(p);
            match best {
                Some((_, shortest)) if d >= shortest => {}
                _ => best = Some((i, d)),
            }
        }

        best.map(|(i, _)| &self.points[i])
            .ok_or(GraphError::EmptyGraph)
    }

    /// Reads a graph from a `.graph` file.
    ///
    /// Format: a `<vertex-count> <edge-count>` header line, then one
    /// `<name> <lat> <lon>` record per vertex, then one `<u> <v> [name]`
    /// record per edge where `u` and `v` are zero-based vertex indices.
    /// Vertex and edge names are ignored.
    pub fn from_graph_file(path: &Path) -> anyhow::Result<Self> {
        info!("Parsing graph file: {:?}", path);
        let file = File::open(path).with_context(|| format!("Could not open {:?}", path))?;
        let g = Self::from_reader(BufReader::new(file))?;
        info!(
            "Graph has {} vertices and {} edges",
            g.num_vertices(),
            g.num_edges()
        );
        Ok(g)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> anyhow::Result<Self> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .context("Missing header line")?
            .context("Failed to read header line")?;
        let mut parts = header.split_whitespace();
        let num_vertices: usize = parts
            .next()
            .context("Missing vertex count")?
            .parse()
            .context("Failed to parse vertex count")?;
        let num_edges: usize = parts
            .next()
            .context("Missing edge count")?
            .parse()
            .context("Failed to parse edge count")?;

        let mut g = Graph::with_capacity(num_vertices);

        // Vertices are addressed by file position in the edge records, which
        // may differ from graph indices if the file repeats a coordinate.
        let mut file_order = Vec::with_capacity(num_vertices);

        for i in 0..num_vertices {
            let line = lines
                .next()
                .with_context(|| format!("Missing vertex record {i}"))?
                .with_context(|| format!("Failed to read vertex record {i}"))?;
            let mut parts = parts_skipping_name(&line);
            let lat: f64 = parts
                .next()
                .with_context(|| format!("Missing latitude in vertex record {i}"))?
                .parse()
                .with_context(|| format!("Failed to parse latitude in vertex record {i}"))?;
            let lon: f64 = parts
                .next()
                .with_context(|| format!("Missing longitude in vertex record {i}"))?
                .parse()
                .with_context(|| format!("Failed to parse longitude in vertex record {i}"))?;

            let p = Point::new(lat, lon);
            g.add_vertex(p);
            file_order.push(p);
        }

        for i in 0..num_edges {
            let line = lines
                .next()
                .with_context(|| format!("Missing edge record {i}"))?
                .with_context(|| format!("Failed to read edge record {i}"))?;
            let mut parts = line.split_whitespace();
            let u: usize = parts
                .next()
                .with_context(|| format!("Missing source index in edge record {i}"))?
                .parse()
                .with_context(|| format!("Failed to parse source index in edge record {i}"))?;
            let v: usize = parts
                .next()
                .with_context(|| format!("Missing target index in edge record {i}"))?
                .parse()
                .with_context(|| format!("Failed to parse target index in edge record {i}"))?;
            // A trailing edge name, if any, is ignored

            if u >= num_vertices || v >= num_vertices {
                bail!("Edge record {i} references vertex out of range: {u} {v}");
            }

            let (a, b) = (file_order[u], file_order[v]);
            g.add_edge(&a, &b)?;
        }

        Ok(g)
    }
}

impl std::ops::Index<NodeIndex> for Graph {
    type Output = Point;

    fn index(&self, idx: NodeIndex) -> &Point {
        &self.points[idx.index()]
    }
}

/// Splits a vertex record into fields, dropping the leading name column.
fn parts_skipping_name(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace().skip(1)
}
