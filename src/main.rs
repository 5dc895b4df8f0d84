mod ui;

use std::path::PathBuf;

use clap::Parser;
use egui::{Pos2, Vec2};
use log::{info, warn};

use ui::{LaunchOptions, PortfolioApp};
use vitrine::{AppConfig, Catalogue, VitrineError, contact::MailConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Section to scroll to once the page is shown, e.g. `projects` or `#contact`
    #[arg(short, long)]
    section: Option<String>,

    /// Show the portfolio right away
    #[arg(long, default_value_t = false)]
    skip_preloader: bool,

    /// Append contact messages to this JSON-lines file instead of the configured transport
    #[arg(short, long)]
    outbox: Option<PathBuf>,

    /// Load the project catalogue from a JSON file instead of the built-in one
    #[arg(short, long)]
    catalogue: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), VitrineError> {
    let mut app_config = AppConfig::from_local_file().unwrap_or_default();
    if let Some(outbox) = args.outbox {
        info!("Writing contact messages to {:?}", outbox);
        app_config.mail = MailConfig::Outbox { path: Some(outbox) };
    }

    let catalogue = match &args.catalogue {
        Some(path) => Catalogue::from_file(path)?,
        None => Catalogue::embedded()?,
    };
    if catalogue.is_empty() {
        warn!("Project catalogue is empty");
    }
    let mail_transport = app_config.mail.transport()?;

    let window_size: Vec2 = app_config.window_size.clone().into();
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("Artin Teymoori | Portfolio")
        .with_inner_size(window_size)
        .with_min_inner_size(Vec2::new(480., 360.));
    if let Some(position) = app_config.window_position.clone() {
        native_options.viewport = native_options.viewport.with_position(Pos2::from(position));
    }

    let options = LaunchOptions {
        start_section: args.section,
        skip_preloader: args.skip_preloader,
    };
    eframe::run_native(
        "Vitrine",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(PortfolioApp::new(
                app_config,
                catalogue,
                mail_transport,
                options,
                cc,
            )))
        }),
    )
    .expect("could not start app");
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let args = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");
    run(args).expect("Error while running portfolio");
}
