pub mod host;
pub mod renderer;

pub use host::TerminalHost;
pub use renderer::TuiRenderer;
