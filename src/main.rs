use midi_byte_monitor::ui;

const APP_NAME: &str = "MIDI Byte Monitor";
const CLIENT_NAME: &str = "midi-byte-monitor";

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Box::new(ui::App::new(APP_NAME, CLIENT_NAME, cc))),
    );
}
