//! Composite scorers
//!
//! Both the correlation scorer and the SNS scorer are thin profiles over
//! the same `CompositeScorer` weighted sum.

pub mod composite;
pub mod hit;
pub mod sns;

pub use composite::{Blend, CompositeScorer};
pub use hit::HitScorer;
pub use sns::SnsScorer;
