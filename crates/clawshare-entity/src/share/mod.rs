//! Share domain entities.

pub mod model;
pub mod view;

pub use model::ShareRecord;
pub use view::ShareView;
