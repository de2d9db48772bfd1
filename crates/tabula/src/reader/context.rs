use crate::JsonSerializer;

use indexmap::IndexMap;
use std::{fmt, sync::Arc};
use tabula_core::{DefaultTypeResolver, DocumentSerializer, InstanceTypeResolver};

/// JSON text at least this long switches its map to streaming reads.
pub const DEFAULT_LARGE_DOCUMENT_THRESHOLD: usize = 85_000;

/// Collaborators used while reading rows.
#[derive(Clone)]
pub struct ReadContext {
    serializer: Arc<dyn DocumentSerializer>,

    /// Keyed by the name of the root document map
    resolvers: IndexMap<&'static str, Arc<dyn InstanceTypeResolver>>,

    default_resolver: Arc<dyn InstanceTypeResolver>,

    large_document_threshold: usize,
}

impl ReadContext {
    pub fn new(serializer: Arc<dyn DocumentSerializer>) -> Self {
        Self {
            serializer,
            resolvers: IndexMap::new(),
            default_resolver: Arc::new(DefaultTypeResolver),
            large_document_threshold: DEFAULT_LARGE_DOCUMENT_THRESHOLD,
        }
    }

    pub fn with_serializer(mut self, serializer: Arc<dyn DocumentSerializer>) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn with_resolver(
        mut self,
        root: &'static str,
        resolver: Arc<dyn InstanceTypeResolver>,
    ) -> Self {
        self.resolvers.insert(root, resolver);
        self
    }

    pub fn with_large_document_threshold(mut self, threshold: usize) -> Self {
        self.large_document_threshold = threshold;
        self
    }

    pub fn serializer(&self) -> &dyn DocumentSerializer {
        &*self.serializer
    }

    /// The resolver registered for `root`, or [`DefaultTypeResolver`].
    pub fn resolver(&self, root: &str) -> &dyn InstanceTypeResolver {
        self.resolvers
            .get(root)
            .unwrap_or(&self.default_resolver)
            .as_ref()
    }

    pub fn large_document_threshold(&self) -> usize {
        self.large_document_threshold
    }
}

impl Default for ReadContext {
    fn default() -> Self {
        Self::new(Arc::new(JsonSerializer::default()))
    }
}

impl fmt::Debug for ReadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadContext")
            .field("serializer", &self.serializer)
            .field("resolvers", &self.resolvers.keys().collect::<Vec<_>>())
            .field("large_document_threshold", &self.large_document_threshold)
            .finish()
    }
}
