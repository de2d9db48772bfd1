mod command;
pub use command::assemble;

mod params;
pub use params::{logical_name, pad_len, ParamNames, ParameterSet, PAD_STEPS};

pub mod serializer;
pub use serializer::{GenerateSql, Serializer};
