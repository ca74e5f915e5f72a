use clap::Parser;
use sitebench::app::SitebenchApp;

fn main() {
    env_logger::init();
    let args = SitebenchApp::parse();
    if let Err(e) = args.app.run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
