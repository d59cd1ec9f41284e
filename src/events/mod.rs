pub mod nav;
pub mod pointer;

pub use nav::wire_nav_handlers;
pub use pointer::wire_pointer_handlers;
