use super::{Error, ErrorKind};

/// Error kinds that carry nothing beyond a free-form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Category {
    /// Produced by `err!` and `bail!`, or when a shared error is used as
    /// context. Displays the message alone.
    Adhoc,

    /// A reader plan cannot be compiled for a result shape: the id column
    /// is missing, the type column follows a JSON column, a required JSON
    /// column is absent, a record has no property for a column, or a
    /// primitive or tuple target receives the wrong number of columns.
    InvalidReader,

    /// The connection answered with the wrong kind of result, such as a row
    /// count where rows were expected.
    InvalidResult,

    /// A statement was assembled incorrectly and no SQL was produced.
    InvalidStatement,

    /// A document could not be converted to or from JSON.
    Serialization,
}

impl Category {
    fn prefix(self) -> Option<&'static str> {
        match self {
            Category::Adhoc => None,
            Category::InvalidReader => Some("invalid reader"),
            Category::InvalidResult => Some("invalid result"),
            Category::InvalidStatement => Some("invalid statement"),
            Category::Serialization => Some("serialization failure"),
        }
    }
}

#[derive(Debug)]
pub(super) struct MessageError {
    category: Category,
    message: Box<str>,
}

impl MessageError {
    pub(super) fn adhoc(message: impl Into<String>) -> MessageError {
        MessageError {
            category: Category::Adhoc,
            message: message.into().into_boxed_str(),
        }
    }
}

impl std::error::Error for MessageError {}

impl core::fmt::Display for MessageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.category.prefix() {
            Some(prefix) => write!(f, "{prefix}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error {
    /// Creates an error from format arguments. Used by the `err!` and `bail!`
    /// macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = args
            .as_str()
            .map_or_else(|| args.to_string(), str::to_string);
        Error::from(ErrorKind::Message(MessageError::adhoc(message)))
    }

    fn message(category: Category, message: String) -> Error {
        Error::from(ErrorKind::Message(MessageError {
            category,
            message: message.into_boxed_str(),
        }))
    }

    fn is_category(&self, category: Category) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::Message(err) if err.category == category))
    }
}

macro_rules! message_errors {
    ($($category:ident: $ctor:ident, $pred:ident;)*) => {
        impl Error {
            $(
                pub fn $ctor(message: impl Into<String>) -> Error {
                    Error::message(Category::$category, message.into())
                }

                pub fn $pred(&self) -> bool {
                    self.is_category(Category::$category)
                }
            )*
        }
    };
}

message_errors! {
    InvalidReader: invalid_reader, is_invalid_reader;
    InvalidResult: invalid_result, is_invalid_result;
    InvalidStatement: invalid_statement, is_invalid_statement;
    Serialization: serialization, is_serialization;
}
