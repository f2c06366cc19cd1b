//! In-memory type index over Java type descriptors.
//!
//! The hierarchy is kept as a petgraph graph with edges pointing from a type to its
//! superclass (`InheritsFrom`) and to the interfaces it lists (`Implements`). Subtype
//! and implementor queries walk those edges backwards.

use reflscope_api::{ApiResult, TypeDescriptor, TypeIndex, TypeName};
use reflscope_core::Result;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyEdge {
    InheritsFrom,
    Implements,
}

/// On-disk form of an index: a flat list of descriptors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IndexDocument {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

pub struct JavaTypeIndex {
    hierarchy: StableDiGraph<TypeName, HierarchyEdge>,
    nodes: HashMap<TypeName, NodeIndex>,
    descriptors: HashMap<TypeName, Arc<TypeDescriptor>>,
}

impl JavaTypeIndex {
    pub fn builder() -> JavaTypeIndexBuilder {
        JavaTypeIndexBuilder::default()
    }

    pub fn from_document(document: IndexDocument) -> Self {
        document
            .types
            .into_iter()
            .fold(Self::builder(), JavaTypeIndexBuilder::add)
            .build()
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let document: IndexDocument = serde_json::from_str(raw)?;
        Ok(Self::from_document(document))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let index = Self::from_json_str(&raw)?;
        if index.is_empty() {
            warn!("Type index {} holds no types, every name will be unresolved", path.display());
        } else {
            info!("Loaded {} type(s) from {}", index.len(), path.display());
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    fn is_interface(&self, name: &str) -> bool {
        self.descriptors
            .get(name)
            .is_some_and(|desc| desc.kind.is_interface_like())
    }

    /// Types with an `edge` pointing at `name`, in insertion order.
    fn direct_children(&self, name: &str, edge: HierarchyEdge) -> Vec<TypeName> {
        let Some(&idx) = self.nodes.get(name) else {
            return vec![];
        };
        let mut children: Vec<(NodeIndex, TypeName)> = self
            .hierarchy
            .edges_directed(idx, Direction::Incoming)
            .filter(|e| *e.weight() == edge)
            .map(|e| (e.source(), self.hierarchy[e.source()].clone()))
            .collect();
        // petgraph yields the most recently added edge first
        children.sort_by_key(|(idx, _)| *idx);
        children.into_iter().map(|(_, name)| name).collect()
    }

    fn all_subclasses(&self, name: &str, seen: &mut HashSet<TypeName>, out: &mut Vec<TypeName>) {
        let mut queue: VecDeque<TypeName> = self
            .direct_children(name, HierarchyEdge::InheritsFrom)
            .into();
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.clone()) {
                continue;
            }
            queue.extend(self.direct_children(&current, HierarchyEdge::InheritsFrom));
            out.push(current);
        }
    }
}

impl TypeIndex for JavaTypeIndex {
    fn resolve(&self, name: &str) -> ApiResult<Option<Arc<TypeDescriptor>>> {
        Ok(self.descriptors.get(name).cloned())
    }

    fn subtypes_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.all_subclasses(name, &mut seen, &mut out);
        Ok(out)
    }

    fn implementors_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        let mut visited_interfaces = HashSet::from([TypeName::from(name)]);
        let mut pending = VecDeque::from([TypeName::from(name)]);
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        while let Some(interface) = pending.pop_front() {
            for child in self.direct_children(&interface, HierarchyEdge::Implements) {
                if self.is_interface(&child) {
                    // Sub-interface: its implementors implement us too
                    if visited_interfaces.insert(child.clone()) {
                        pending.push_back(child);
                    }
                    continue;
                }
                if seen.insert(child.clone()) {
                    out.push(child.clone());
                }
                self.all_subclasses(&child, &mut seen, &mut out);
            }
        }
        Ok(out)
    }
}

#[derive(Default)]
pub struct JavaTypeIndexBuilder {
    hierarchy: StableDiGraph<TypeName, HierarchyEdge>,
    nodes: HashMap<TypeName, NodeIndex>,
    descriptors: HashMap<TypeName, Arc<TypeDescriptor>>,
}

impl JavaTypeIndexBuilder {
    /// Adds a descriptor. When the same name is added twice the first one wins.
    pub fn add(mut self, descriptor: TypeDescriptor) -> Self {
        if self.descriptors.contains_key(&descriptor.name) {
            debug!("Duplicate descriptor for {} ignored", descriptor.name);
            return self;
        }

        let idx = self.node(&descriptor.name);
        if let Some(super_name) = &descriptor.super_name {
            let parent = self.node(super_name);
            self.hierarchy.add_edge(idx, parent, HierarchyEdge::InheritsFrom);
        }
        for interface in &descriptor.interfaces {
            let parent = self.node(interface);
            self.hierarchy.add_edge(idx, parent, HierarchyEdge::Implements);
        }

        self.descriptors
            .insert(descriptor.name.clone(), Arc::new(descriptor));
        self
    }

    pub fn build(self) -> JavaTypeIndex {
        JavaTypeIndex {
            hierarchy: self.hierarchy,
            nodes: self.nodes,
            descriptors: self.descriptors,
        }
    }

    fn node(&mut self, name: &TypeName) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(name) {
            return idx;
        }
        let idx = self.hierarchy.add_node(name.clone());
        self.nodes.insert(name.clone(), idx);
        idx
    }
}
