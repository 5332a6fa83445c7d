use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use settings_kit::prelude::*;

/// Drives a [`SettingsList`] against an in-memory terminal
pub struct SettingsHarness {
    pub list: SettingsList,
    terminal: Terminal<TestBackend>,
}

impl SettingsHarness {
    pub fn new(list: SettingsList, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut harness = Self { list, terminal };
        harness.render();
        harness
    }

    pub fn render(&mut self) {
        let list = &mut self.list;
        self.terminal
            .draw(|frame| list.render(frame, frame.area()))
            .unwrap();
    }

    /// Press a key and redraw; returns whether the list handled it
    pub fn send_key(&mut self, code: KeyCode) -> bool {
        let handled = self
            .list
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        self.render();
        handled
    }

    fn send_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) -> bool {
        let handled = self.list.handle_mouse(MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        });
        self.render();
        handled
    }

    /// Left click (press and release) at a cell
    pub fn click(&mut self, x: u16, y: u16) -> bool {
        let handled = self.press(x, y);
        self.release(x, y);
        handled
    }

    pub fn press(&mut self, x: u16, y: u16) -> bool {
        self.send_mouse(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    pub fn drag(&mut self, x: u16, y: u16) -> bool {
        self.send_mouse(MouseEventKind::Drag(MouseButton::Left), x, y)
    }

    pub fn release(&mut self, x: u16, y: u16) -> bool {
        self.send_mouse(MouseEventKind::Up(MouseButton::Left), x, y)
    }

    pub fn screen_row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    pub fn screen_to_string(&self) -> String {
        let height = self.terminal.backend().buffer().area.height;
        (0..height)
            .map(|y| self.screen_row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Cell where `text` first appears on screen
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let height = self.terminal.backend().buffer().area.height;
        (0..height).find_map(|y| {
            let row = self.screen_row(y);
            row.find(text)
                .map(|byte| (row[..byte].chars().count() as u16, y))
        })
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }
}
