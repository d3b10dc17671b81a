mod dataset;
mod entity;
mod intent;

pub use self::dataset::*;
pub use self::entity::*;
pub use self::intent::*;
