use super::{Db, Shared};
use crate::{document::DocumentRoot, ReadContext};

use std::sync::Arc;
use tabula_core::{schema::ColumnNameResolver, Connection, DocumentSerializer, InstanceTypeResolver};

const DEFAULT_SCHEMA: &str = "dbo";

pub struct Builder {
    schema: String,
    cx: ReadContext,
    column_names: Option<Arc<dyn ColumnNameResolver>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            cx: ReadContext::default(),
            column_names: None,
        }
    }
}

impl Builder {
    /// Schema of tables named without one. Defaults to `dbo`.
    pub fn schema(&mut self, schema: &str) -> &mut Self {
        self.schema = schema.to_string();
        self
    }

    /// Replaces the JSON serializer used for document state.
    pub fn serializer(&mut self, serializer: impl DocumentSerializer + 'static) -> &mut Self {
        self.cx = self.cx.clone().with_serializer(Arc::new(serializer));
        self
    }

    /// Registers the type resolver for the hierarchy rooted at `R`.
    pub fn type_resolver<R: DocumentRoot>(
        &mut self,
        resolver: impl InstanceTypeResolver + 'static,
    ) -> &mut Self {
        let root = R::document_map().name();
        self.cx = self.cx.clone().with_resolver(root, Arc::new(resolver));
        self
    }

    /// Supplies physical column orders. Without one, document queries use
    /// the columns declared on their map.
    pub fn column_names(&mut self, resolver: impl ColumnNameResolver + 'static) -> &mut Self {
        self.column_names = Some(Arc::new(resolver));
        self
    }

    /// Size in characters at which a document map switches to streaming
    /// JSON reads.
    pub fn large_document_threshold(&mut self, threshold: usize) -> &mut Self {
        self.cx = self.cx.clone().with_large_document_threshold(threshold);
        self
    }

    pub fn build(&self, connection: impl Connection) -> Db {
        Db {
            shared: Arc::new(Shared {
                connection: Arc::new(connection),
                cx: self.cx.clone(),
                schema: self.schema.clone(),
                column_names: self.column_names.clone(),
            }),
        }
    }
}
