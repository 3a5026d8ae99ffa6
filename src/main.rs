use log::error;
use love_inquiry::app::App;
use love_inquiry::config::GreetingConfig;
use love_inquiry::{error::user_friendly_message, Result};

fn run() -> Result<()> {
    let config = GreetingConfig::load()?;

    let mut app = App::new(config)?;
    app.init()?;
    let outcome = app.run();
    app.restore()?;
    outcome
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}
