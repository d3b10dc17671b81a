mod dataset;
mod entity;
mod intent;
mod loading;
mod value_pool;

pub use self::dataset::Dataset;
pub use self::entity::{Entity, EntityUtterance};
pub use self::intent::{Chunk, Intent, IntentUtterance, SlotChunk, SlotDefinition, TextChunk};
pub use self::loading::{load_text_files, load_yaml_files};
pub use self::value_pool::CyclicValuePool;
