use ratatui::{backend::TestBackend, Terminal};
use stackview_config::GlobalConfig;
use stackview_core::test_support::full_stack;
use stackview_core::StackKey;
use stackview_tui::App;

pub fn shop_key() -> StackKey {
    StackKey::new("acme", "production", "shop")
}

/// App on the overview of the `shop` fixture, with a clipboard that always succeeds
#[allow(dead_code)]
pub fn shop_app() -> App {
    let mut app = App::from_snapshot(GlobalConfig::default(), shop_key(), full_stack());
    app.copy_fn = accept_copy;
    app
}

#[allow(dead_code)]
pub fn accept_copy(_: &str) -> Result<(), String> {
    Ok(())
}

#[allow(dead_code)]
pub fn reject_copy(_: &str) -> Result<(), String> {
    Err("No clipboard command available (tried wl-copy, xclip, xsel, pbcopy)".to_string())
}

/// Render the app to a TestBackend and capture output as a string
#[allow(dead_code)]
pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| stackview_tui::ui::draw(frame, app))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer_to_string(&buffer)
}

/// Convert a ratatui buffer to a string representation
#[allow(dead_code)]
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.get(x, y);
            output.push_str(cell.symbol());
        }
        output.push('\n');
    }
    output
}
