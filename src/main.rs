use shortwire::app::AppState;
use shortwire::runtime::spawn_submission_worker;
use shortwire::settings::load_from_cli;
use shortwire::ui::run_ui;

fn main() -> std::io::Result<()> {
    let settings = load_from_cli()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    let mut worker = spawn_submission_worker(settings.service_config(), event_tx);
    let app = AppState::new(&settings, worker.sender.clone());

    let result = run_ui(app, event_rx);
    worker.stop();
    result
}
