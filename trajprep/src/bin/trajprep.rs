//! converts raw trajectory datasets (Geolife and similar) into the numbered
//! plain-text layout read by the Fréchet distance benchmark.
use clap::Parser;
use trajprep::app::TrajprepApp;

fn main() {
    env_logger::init();
    let args = TrajprepApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("trajprep failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
