pub mod host;
pub mod renderer;
pub mod table_source;

pub use host::{HostSurface, HostView};
pub use renderer::{RenderOutput, Renderer};
pub use table_source::{TableSource, TableSourceError};

#[cfg(test)]
pub use host::MockHostSurface;
#[cfg(test)]
pub use renderer::MockRenderer;
