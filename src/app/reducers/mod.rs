mod helpers;
mod layout;
mod pointer;
mod scroll;

pub use helpers::settle_layout;
pub use layout::reduce_layout;
pub use pointer::reduce_pointer;
pub use scroll::reduce_scroll;
