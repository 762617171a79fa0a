//! Dependency graph over solid descriptors.
//!
//! Edges point from a descriptor to every solid its bindings or post-build
//! booleans read. The build order is computed once, with ties broken by
//! declaration order, and a cycle is an error rather than a silent
//! reordering.

use std::collections::{BTreeSet, HashMap};

use reactor_types::SolidName;

use crate::composition::CompositionStep;
use crate::descriptor::{Emission, SolidDescriptor};
use crate::error::GraphError;

/// Descriptors plus their declared edges and one valid topological order.
#[derive(Debug, Clone)]
pub struct DescriptorGraph {
    descriptors: Vec<SolidDescriptor>,
    /// `edges[i]` are indices of the descriptors `i` depends on.
    edges: Vec<Vec<usize>>,
    order: Vec<usize>,
}

impl DescriptorGraph {
    pub fn new(descriptors: Vec<SolidDescriptor>) -> Result<Self, GraphError> {
        let mut index: HashMap<&SolidName, usize> = HashMap::new();
        for (i, d) in descriptors.iter().enumerate() {
            if index.insert(&d.name, i).is_some() {
                return Err(GraphError::DuplicateName {
                    name: d.name.clone(),
                });
            }
        }

        let mut edges = Vec::with_capacity(descriptors.len());
        for d in &descriptors {
            let mut deps = Vec::new();
            for dep in d.dependencies() {
                let j = *index.get(dep).ok_or_else(|| GraphError::UnknownReference {
                    from: d.name.clone(),
                    to: dep.clone(),
                })?;
                if !deps.contains(&j) {
                    deps.push(j);
                }
            }
            edges.push(deps);
        }

        let order = topological_order(&edges).map_err(|stuck| GraphError::Cycle {
            involved: stuck.iter().map(|&i| descriptors[i].name.clone()).collect(),
        })?;

        Ok(Self {
            descriptors,
            edges,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in build order.
    pub fn ordered(&self) -> impl Iterator<Item = &SolidDescriptor> {
        self.order.iter().map(|&i| &self.descriptors[i])
    }

    /// Names in build order.
    pub fn order(&self) -> Vec<&SolidName> {
        self.ordered().map(|d| &d.name).collect()
    }

    pub fn descriptor(&self, name: &SolidName) -> Option<&SolidDescriptor> {
        self.descriptors.iter().find(|d| &d.name == name)
    }

    /// Names of the solids `name` directly depends on.
    pub fn dependencies_of(&self, name: &SolidName) -> Vec<&SolidName> {
        self.descriptors
            .iter()
            .position(|d| &d.name == name)
            .map(|i| {
                self.edges[i]
                    .iter()
                    .map(|&j| &self.descriptors[j].name)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Composition steps may only name known solids, and each target must
    /// be held back from the assembly until its cut has happened.
    pub fn check_composition(&self, steps: &[CompositionStep]) -> Result<(), GraphError> {
        for step in steps {
            let target = self
                .descriptor(&step.target)
                .ok_or_else(|| GraphError::UnknownReference {
                    from: SolidName::new("composition"),
                    to: step.target.clone(),
                })?;
            if self.descriptor(&step.op.tool).is_none() {
                return Err(GraphError::UnknownReference {
                    from: step.target.clone(),
                    to: step.op.tool.clone(),
                });
            }
            if target.emission != Emission::AfterComposition {
                return Err(GraphError::TargetNotDeferred {
                    name: step.target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Every `(dependent, dependency)` pair.
    pub fn edges(&self) -> Vec<(&SolidName, &SolidName)> {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(i, deps)| {
                deps.iter()
                    .map(move |&j| (&self.descriptors[i].name, &self.descriptors[j].name))
            })
            .collect()
    }
}

/// Kahn's algorithm; the ready set is ordered by declaration index so the
/// result is deterministic. On a cycle, returns the nodes never released.
fn topological_order(edges: &[Vec<usize>]) -> Result<Vec<usize>, Vec<usize>> {
    let n = edges.len();
    let mut pending: Vec<usize> = edges.iter().map(Vec::len).collect();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, deps) in edges.iter().enumerate() {
        for &j in deps {
            dependents[j].push(i);
        }
    }

    let mut ready: BTreeSet<usize> = (0..n).filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(i) = ready.pop_first() {
        order.push(i);
        for &k in &dependents[i] {
            pending[k] -= 1;
            if pending[k] == 0 {
                ready.insert(k);
            }
        }
    }

    if order.len() == n {
        Ok(order)
    } else {
        Err((0..n).filter(|&i| pending[i] > 0).collect())
    }
}
