use clap::Parser;
use env_logger::Env;
use log::{error, info};

use proxy_provider_converter::generator::{convert_entries, generate};
use proxy_provider_converter::models::TargetFormat;
use proxy_provider_converter::settings::init_settings;
use proxy_provider_converter::web_handlers::interfaces;
use proxy_provider_converter::Settings;

use actix_web::{web, App, HttpServer};

/// Convert Clash subscriptions into Proxy Provider and External Group (Surge) config fragments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u32>,

    /// Subscription URL to convert directly instead of starting the server
    /// (repeat for multiple subscriptions)
    #[arg(long, value_name = "URL")]
    url: Vec<String>,

    /// Target format for direct conversion (clash or surge)
    #[arg(short, long, value_name = "TARGET")]
    target: Option<String>,

    /// Origin prefix for rewritten URLs in direct conversion
    #[arg(long, value_name = "ORIGIN", default_value = "")]
    origin: String,

    /// Output file path for direct conversion (stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Parse command line arguments
    let args = Args::parse();

    // Initialize settings with config file path if provided
    if let Err(e) = init_settings(args.config.as_deref().unwrap_or("")) {
        error!("Failed to load settings: {}", e);
        std::process::exit(1);
    }

    // Check if URLs are provided for direct processing
    if !args.url.is_empty() {
        let settings = Settings::current();
        let target_token = args
            .target
            .clone()
            .unwrap_or_else(|| settings.default_target.clone());
        let target = match TargetFormat::from_str(&target_token) {
            Some(target) => target,
            None => {
                error!("Unsupported target format: {}", target_token);
                std::process::exit(1);
            }
        };

        info!(
            "Generating {} fragments for {} subscription(s)",
            target.as_str(),
            args.url.len()
        );

        let entries = convert_entries(&args.url, &args.origin, target);
        let fragments = generate(&entries, target, &settings.fragment_config());

        match args.output {
            Some(output_file) => match std::fs::write(&output_file, &fragments.combined) {
                Ok(_) => info!("Successfully wrote fragments to {}", output_file),
                Err(e) => {
                    error!("Failed to write to output file: {}", e);
                    std::process::exit(1);
                }
            },
            None => print!("{}", fragments.combined),
        }

        Ok(())
    } else {
        // Proceed with starting the web server
        let listen_address = {
            let settings = Settings::current();
            let address = args.address.unwrap_or_else(|| settings.listen_address.clone());
            let port = args.port.unwrap_or(settings.listen_port);
            if address.contains(':') {
                // Already has a port, use as is
                address
            } else {
                format!("{}:{}", address, port)
            }
        };

        info!("Proxy provider converter starting on {}", listen_address);

        HttpServer::new(move || {
            App::new()
                // Register web handlers
                .configure(interfaces::config)
                // For health check
                .route(
                    "/",
                    web::get().to(|| async { "Proxy provider converter is running!" }),
                )
        })
        .bind(listen_address)?
        .run()
        .await
    }
}
