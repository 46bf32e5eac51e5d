mod cast;
mod map;
mod value;

pub use cast::{cast, cast_at, cast_mut, Kind};
pub use map::Map;
pub use value::Value;
