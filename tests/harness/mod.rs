pub mod fixtures;

use std::collections::VecDeque;
use std::time::Instant;

use color_eyre::eyre::Result;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use edtable::app::action::Action;
use edtable::app::effect::Effect;
use edtable::app::effect_runner::run_effects;
use edtable::app::ports::{HostSurface, HostView, RenderOutput, Renderer};
use edtable::app::reducer::reduce;
use edtable::app::state::TableState;
use edtable::domain::TableSpec;
use edtable::ui::adapters::TerminalHost;
use edtable::ui::components::layout::MainLayout;
use edtable::ui::event::Event;
use edtable::ui::event::handler::handle_event;

/// 80 inner table cells once the border is drawn.
pub const TEST_WIDTH: u16 = 82;
pub const TEST_HEIGHT: u16 = 12;

/// Row of the header line inside the table border.
pub const HEADER_ROW: u16 = 2;

struct TestRenderer<'a> {
    terminal: &'a mut Terminal<TestBackend>,
}

impl Renderer for TestRenderer<'_> {
    fn draw(&mut self, state: &TableState, host: &HostView) -> Result<RenderOutput> {
        let mut output = RenderOutput::default();
        self.terminal.draw(|frame| {
            output = MainLayout::render(frame, state, host);
        })?;
        Ok(output)
    }
}

/// The event loop of `main`, driven synchronously with explicit instants.
pub struct TestApp {
    pub state: TableState,
    pub host: TerminalHost<Vec<u8>>,
    pub terminal: Terminal<TestBackend>,
}

impl TestApp {
    pub fn new(spec: TableSpec) -> Self {
        let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
        Self {
            state: TableState::new(spec),
            host: TerminalHost::new(Vec::new()),
            terminal: Terminal::new(backend).unwrap(),
        }
    }

    /// Mounted and measured, the way the first frames leave it.
    pub fn mounted(spec: TableSpec, now: Instant) -> Self {
        let mut app = Self::new(spec);
        app.send(Event::Init, now);
        app
    }

    /// Reduces `action` and every follow-up it produces.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            let mut effects = reduce(&mut self.state, action, now);
            if self.state.render_dirty {
                effects.push(Effect::Render);
            }
            let mut renderer = TestRenderer {
                terminal: &mut self.terminal,
            };
            let follow_ups =
                run_effects(effects, &mut self.host, &mut renderer, &self.state).unwrap();
            self.state.clear_dirty();
            queue.extend(follow_ups);
        }
    }

    pub fn send(&mut self, event: Event, now: Instant) {
        let action = handle_event(event, &self.state, &self.host.view());
        if action != Action::None {
            self.dispatch(action, now);
        }
    }

    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16, now: Instant) {
        self.send(
            Event::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }),
            now,
        );
    }

    /// Press on `from`, drag to `to` and release, all on the header row.
    pub fn drag_header(&mut self, from: u16, to: u16, now: Instant) {
        self.mouse(MouseEventKind::Moved, from, HEADER_ROW, now);
        self.mouse(MouseEventKind::Down(MouseButton::Left), from, HEADER_ROW, now);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), to, HEADER_ROW, now);
        self.mouse(MouseEventKind::Up(MouseButton::Left), to, HEADER_ROW, now);
    }

    pub fn resize_terminal(&mut self, width: u16, height: u16, now: Instant) {
        self.terminal.backend_mut().resize(width, height);
        self.send(Event::Resize(width, height), now);
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn line(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
            .collect()
    }
}
