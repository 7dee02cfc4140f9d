//! Cross-reference graph using petgraph.
//!
//! Nodes are root-relative document keys, edges are link occurrences from
//! source to target. Targets are registered whether or not they exist in
//! the store: a missing target becomes a phantom node, which keeps
//! in-degree queries uniform for orphan detection.

use docgraph_core::{LinkRef, ScanOptions, paths};
use docgraph_store::DocumentStore;
use petgraph::prelude::*;
use std::collections::HashMap;

type NodeIndex = petgraph::graph::NodeIndex;

/// Directed document reference graph with a reverse-link index.
pub struct DocGraph {
    /// Directed graph: nodes are document keys, edges are links
    graph: DiGraph<String, LinkRef>,

    /// Map from document key to node index (for quick lookups)
    path_index: HashMap<String, NodeIndex>,
}

impl DocGraph {
    /// Build the graph from a completed store. Every document becomes a
    /// node; every link registers a `(source -> target)` edge keyed by the
    /// anchor-stripped target. Anchor-only self references (empty after
    /// stripping) register no edge.
    pub fn build(store: &DocumentStore) -> Self {
        let mut built = Self {
            graph: DiGraph::new(),
            path_index: HashMap::new(),
        };

        for path in store.paths() {
            built.ensure_node(path);
        }

        for (path, doc) in store.iter() {
            let source_idx = built.ensure_node(path);
            for link in &doc.links {
                let target = link.target_path();
                if target.is_empty() {
                    continue;
                }
                let target_idx = built.ensure_node(target);
                built.graph.add_edge(source_idx, target_idx, link.clone());
            }
        }

        log::debug!(
            "graph built: {} nodes, {} edges",
            built.graph.node_count(),
            built.graph.edge_count()
        );

        built
    }

    fn ensure_node(&mut self, path: &str) -> NodeIndex {
        if let Some(&idx) = self.path_index.get(path) {
            idx
        } else {
            let idx = self.graph.add_node(path.to_string());
            self.path_index.insert(path.to_string(), idx);
            idx
        }
    }

    /// Number of incoming edges for a document key (0 for unknown keys).
    pub fn incoming_count(&self, path: &str) -> usize {
        self.path_index
            .get(path)
            .map(|&idx| self.graph.edges_directed(idx, Incoming).count())
            .unwrap_or(0)
    }

    /// Sorted source keys of every document linking to the given key.
    pub fn incoming_sources(&self, path: &str) -> Vec<String> {
        let Some(&idx) = self.path_index.get(path) else {
            return vec![];
        };

        let mut sources: Vec<String> = self
            .graph
            .edges_directed(idx, Incoming)
            .map(|edge| self.graph[edge.source()].clone())
            .collect();
        sources.sort();
        sources.dedup();
        sources
    }

    /// Find orphaned documents: zero incoming edges and a filename outside
    /// the conventional root-entry set. Root-name exclusion takes precedence
    /// over the edge count. The judgment is per-scan and non-recursive:
    /// only direct inbound edges count, never transitive reachability.
    pub fn orphans(&self, store: &DocumentStore, options: &ScanOptions) -> Vec<String> {
        store
            .paths()
            .filter(|path| {
                !options.is_root_name(paths::file_name(path)) && self.incoming_count(path) == 0
            })
            .cloned()
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docgraph_core::Document;

    fn doc(path: &str, content: &str) -> Document {
        docgraph_parser::parse_document(path, content, Utc::now())
    }

    fn store_of(docs: Vec<Document>) -> DocumentStore {
        DocumentStore::from_documents("/tmp/docgraph-test", docs)
    }

    #[test]
    fn test_three_document_scenario() {
        // a links to b; b has no outbound links; c is isolated
        let store = store_of(vec![
            doc("a.md", "# A\n[b](b.md)"),
            doc("b.md", "# B\nno links"),
            doc("c.md", "# C\nisolated"),
        ]);
        let graph = DocGraph::build(&store);
        let options = ScanOptions::new("/tmp/docgraph-test");

        assert_eq!(store.get("a.md").unwrap().title, "A");
        let orphans = graph.orphans(&store, &options);
        assert!(!orphans.contains(&"b.md".to_string()));
        assert!(orphans.contains(&"c.md".to_string()));
    }

    #[test]
    fn test_root_names_never_orphaned() {
        let store = store_of(vec![
            doc("index.md", "# Index\nno inbound links"),
            doc("README.md", "# Readme"),
            doc("lonely.md", "# Lonely"),
        ]);
        let graph = DocGraph::build(&store);
        let options = ScanOptions::new("/tmp/docgraph-test");

        let orphans = graph.orphans(&store, &options);
        assert_eq!(orphans, vec!["lonely.md".to_string()]);
    }

    #[test]
    fn test_missing_target_becomes_phantom_node() {
        let store = store_of(vec![doc("a.md", "# A\n[gone](missing.md)")]);
        let graph = DocGraph::build(&store);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.incoming_count("missing.md"), 1);
    }

    #[test]
    fn test_incoming_sources_sorted_and_deduped() {
        let store = store_of(vec![
            doc("z.md", "# Z\n[hub](hub.md) and again [hub](hub.md)"),
            doc("a.md", "# A\n[hub](hub.md)"),
            doc("hub.md", "# Hub"),
        ]);
        let graph = DocGraph::build(&store);

        assert_eq!(
            graph.incoming_sources("hub.md"),
            vec!["a.md".to_string(), "z.md".to_string()]
        );
    }

    #[test]
    fn test_anchor_only_links_register_no_edge() {
        let store = store_of(vec![doc("a.md", "# A\n[below](#section)")]);
        let graph = DocGraph::build(&store);
        assert_eq!(graph.edge_count(), 0);
    }
}
