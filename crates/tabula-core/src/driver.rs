mod command;
pub use command::{Command, CommandParameter};

mod response;
pub use response::{Response, Rows};

mod row_stream;
pub use row_stream::RowStream;

use crate::async_trait;

use std::fmt::Debug;

/// Executes commands against the database engine.
///
/// Connection management, pooling and retries all live behind this trait.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Execute a command, returning either an affected-row count or rows.
    async fn exec(&self, command: Command) -> crate::Result<Response>;
}
