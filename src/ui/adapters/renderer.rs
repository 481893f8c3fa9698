use color_eyre::eyre::Result;

use edtable_app::ports::{HostView, RenderOutput, Renderer};
use edtable_app::state::TableState;

use crate::components::layout::MainLayout;
use crate::tui::TuiRunner;

pub struct TuiRenderer<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiRenderer<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiRenderer<'_> {
    fn draw(&mut self, state: &TableState, host: &HostView) -> Result<RenderOutput> {
        let mut output = RenderOutput::default();
        self.tui.terminal().draw(|frame| {
            output = MainLayout::render(frame, state, host);
        })?;
        Ok(output)
    }
}
