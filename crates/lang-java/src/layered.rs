use reflscope_api::{ApiResult, TypeDescriptor, TypeIndex, TypeIndexPtr, TypeName};
use std::collections::HashSet;
use std::sync::Arc;

/// Resolves through an ordered stack of indexes; the first layer that knows a type
/// wins. Hierarchy queries merge the answers of every layer.
pub struct LayeredIndex {
    layers: Vec<TypeIndexPtr>,
}

impl LayeredIndex {
    pub fn new(layers: Vec<TypeIndexPtr>) -> Self {
        Self { layers }
    }

    fn merged(
        &self,
        query: impl Fn(&dyn TypeIndex) -> ApiResult<Vec<TypeName>>,
    ) -> ApiResult<Vec<TypeName>> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for layer in &self.layers {
            for name in query(&**layer)? {
                if seen.insert(name.clone()) {
                    out.push(name);
                }
            }
        }
        Ok(out)
    }
}

impl TypeIndex for LayeredIndex {
    fn resolve(&self, name: &str) -> ApiResult<Option<Arc<TypeDescriptor>>> {
        for layer in &self.layers {
            if let Some(desc) = layer.resolve(name)? {
                return Ok(Some(desc));
            }
        }
        Ok(None)
    }

    fn subtypes_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        self.merged(|index| index.subtypes_of(name))
    }

    fn implementors_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        self.merged(|index| index.implementors_of(name))
    }
}
