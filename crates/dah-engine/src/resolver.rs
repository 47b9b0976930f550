//! ExtensionResolver: orders extensions so every dependency runs first.

use std::collections::{BTreeSet, HashMap};

use dah_core::errors::ExtensionDependencyError;
use dah_core::Extension;

/// Orders extensions by their declared dependency names.
///
/// Kahn's algorithm; among extensions that are ready at the same time,
/// the one registered first goes first.
pub struct ExtensionResolver;

impl ExtensionResolver {
    /// Resolve the initialization order of `extensions`.
    pub fn resolve<'a>(
        extensions: &'a [Box<dyn Extension>],
    ) -> Result<Vec<&'a dyn Extension>, ExtensionDependencyError> {
        let _span = dah_observability::resolve_span!(extensions.len()).entered();

        let declarations: Vec<(&str, Vec<String>)> = extensions
            .iter()
            .map(|ext| (ext.name(), ext.dependencies()))
            .collect();
        let order = Self::resolve_order(&declarations)?;
        Ok(order.into_iter().map(|i| extensions[i].as_ref()).collect())
    }

    /// Resolve over `(name, dependencies)` declarations, returning positions
    /// into `declarations` in initialization order.
    pub fn resolve_order<N: AsRef<str>>(
        declarations: &[(N, Vec<String>)],
    ) -> Result<Vec<usize>, ExtensionDependencyError> {
        let mut position: HashMap<&str, usize> = HashMap::with_capacity(declarations.len());
        for (i, (name, _)) in declarations.iter().enumerate() {
            if position.insert(name.as_ref(), i).is_some() {
                return Err(ExtensionDependencyError::DuplicateExtension {
                    name: name.as_ref().to_string(),
                });
            }
        }

        let mut in_degree = vec![0usize; declarations.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); declarations.len()];
        for (i, (name, deps)) in declarations.iter().enumerate() {
            for dep in deps {
                let Some(&d) = position.get(dep.as_str()) else {
                    return Err(ExtensionDependencyError::MissingDependency {
                        extension: name.as_ref().to_string(),
                        dependency: dep.clone(),
                    });
                };
                dependents[d].push(i);
                in_degree[i] += 1;
            }
        }

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &deg)| deg == 0)
            .map(|(i, _)| i)
            .collect();

        let mut sorted = Vec::with_capacity(declarations.len());
        while let Some(node) = ready.pop_first() {
            sorted.push(node);
            for &dependent in &dependents[node] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if sorted.len() != declarations.len() {
            let unresolved = in_degree
                .iter()
                .enumerate()
                .filter(|(_, &deg)| deg > 0)
                .map(|(i, _)| declarations[i].0.as_ref().to_string())
                .collect();
            return Err(ExtensionDependencyError::DependencyCycle { unresolved });
        }

        Ok(sorted)
    }
}
