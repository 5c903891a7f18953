mod artwork;
mod audio;
mod config;
mod error;
mod library;
mod logging;
mod runtime;
mod transport;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
