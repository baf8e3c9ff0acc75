pub mod key;
pub mod map;
pub mod node;
pub mod transformable;
pub mod transformer;

pub use key::{Array, MultiKey};
pub use map::MultiMap;
pub use node::Node;
pub use transformable::TransformableMap;
pub use transformer::{AttenuationTransformer, IdentityTransformer, Transformer};
