use std::io::{self, IsTerminal};

use pdfmerge::Application;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let terminal = io::stderr().is_terminal();
    let code = Application::new()
        .with_terminal(terminal)
        .with_telemetry(true)
        .execute(std::env::args_os(), &mut io::stdout(), &mut io::stderr())
        .await;

    std::process::exit(code);
}
