pub mod entities;
pub mod normalize;

pub use entities::decode_entities;
pub use normalize::{normalize, strip_tags, NormalizedFormats, CURRENCY_CHANGER_MARKER};
