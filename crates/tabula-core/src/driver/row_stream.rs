use crate::{
    schema::RowShape,
    stmt::{Value, ValueRecord},
    Result,
};

use std::{
    collections::VecDeque,
    fmt,
    pin::Pin,
    task::{Context, Poll},
};
use tokio_stream::{Stream, StreamExt};

/// Rows of a result set together with the shape they share.
pub struct RowStream {
    shape: RowShape,
    buffer: VecDeque<ValueRecord>,
    stream: Option<DynStream>,
}

type DynStream = Pin<Box<dyn Stream<Item = Result<ValueRecord>> + Send + 'static>>;

impl RowStream {
    pub fn from_vec(shape: RowShape, rows: Vec<ValueRecord>) -> Self {
        Self {
            shape,
            buffer: rows.into(),
            stream: None,
        }
    }

    pub fn from_rows(shape: RowShape, rows: Vec<Vec<Value>>) -> Self {
        Self::from_vec(shape, rows.into_iter().map(ValueRecord::from_vec).collect())
    }

    pub fn from_stream<T>(shape: RowShape, stream: T) -> Self
    where
        T: Stream<Item = Result<ValueRecord>> + Send + 'static,
    {
        Self {
            shape,
            buffer: VecDeque::new(),
            stream: Some(Box::pin(stream)),
        }
    }

    pub fn shape(&self) -> &RowShape {
        &self.shape
    }

    /// Returns the next row in the stream
    pub async fn next(&mut self) -> Option<Result<ValueRecord>> {
        StreamExt::next(self).await
    }

    pub async fn collect(mut self) -> Result<Vec<ValueRecord>> {
        let mut ret = Vec::with_capacity(self.size_hint().0);

        while let Some(res) = self.next().await {
            ret.push(res?);
        }

        Ok(ret)
    }
}

impl Stream for RowStream {
    type Item = Result<ValueRecord>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(next) = self.buffer.pop_front() {
            Poll::Ready(Some(Ok(next)))
        } else if let Some(stream) = self.stream.as_mut() {
            Pin::new(stream).poll_next(cx)
        } else {
            Poll::Ready(None)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = match &self.stream {
            Some(stream) => stream.size_hint(),
            None => (0, Some(0)),
        };

        let buffered = self.buffer.len();
        low += buffered;
        if let Some(high) = high.as_mut() {
            *high += buffered;
        }

        (low, high)
    }
}

impl fmt::Debug for RowStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowStream")
            .field("shape", &self.shape)
            .field("buffered", &self.buffer.len())
            .field("streaming", &self.stream.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schema::ColumnInfo, stmt::SqlType, Error};
    use pretty_assertions::assert_eq;

    fn shape() -> RowShape {
        RowShape::new(vec![ColumnInfo::new("Id", SqlType::Int)])
    }

    #[tokio::test]
    async fn buffered_rows_in_order() {
        let rows = RowStream::from_rows(shape(), vec![vec![Value::I32(1)], vec![Value::I32(2)]]);
        assert_eq!(rows.size_hint(), (2, Some(2)));

        let mut ids = vec![];
        for mut row in rows.collect().await.unwrap() {
            ids.push(row.take(0));
        }
        assert_eq!(ids, vec![Value::I32(1), Value::I32(2)]);
    }

    #[tokio::test]
    async fn stream_errors_surface_per_row() {
        let stream = tokio_stream::iter(vec![
            Ok(ValueRecord::from_vec(vec![Value::I32(1)])),
            Err(Error::invalid_result("connection dropped")),
        ]);
        let mut rows = RowStream::from_stream(shape(), stream);

        assert!(rows.next().await.unwrap().is_ok());
        assert!(rows.next().await.unwrap().unwrap_err().is_invalid_result());
        assert!(rows.next().await.is_none());
    }
}
