//! Small pure helpers shared by the state modules and the DOM layer.

pub mod clock;
pub mod email;
