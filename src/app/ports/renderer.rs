use color_eyre::eyre::Result;

use crate::area::TableArea;
use crate::ports::host::HostView;
use crate::state::TableState;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RenderOutput {
    /// Where the table landed on this frame.
    pub table_area: TableArea,
}

#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    fn draw(&mut self, state: &TableState, host: &HostView) -> Result<RenderOutput>;
}
