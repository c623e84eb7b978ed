use clap::Parser;
use otter_quote::config::{OutputFormat, QuoteArgs};
use otter_quote::core::ConfigProvider;
use otter_quote::domain::model::Coordinates;
use otter_quote::utils::error::ErrorSeverity;
use otter_quote::utils::{logger, validation::Validate};
use otter_quote::{
    BookingConfig, BookingPrefill, CliConfig, Command, PricingEngine, QuoteRequest, RateCard,
    Result, ServiceAreaLocator, ServiceAreaResolver, StaticGeolocation,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match BookingConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => BookingConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(command: Command, config: &BookingConfig) -> Result<()> {
    match command {
        Command::Quote(args) => quote(args, config),
        Command::Zip { zip } => {
            let result = ServiceAreaResolver::new().resolve_by_zip(&zip);
            print_area(&result.message, result.in_service_area);
            Ok(())
        }
        Command::Locate { lat, lon, zip } => {
            let position = lat.zip(lon).map(|(lat, lon)| Coordinates::new(lat, lon));
            let locator = ServiceAreaLocator::with_options(
                StaticGeolocation::from_option(position),
                config.position_options(),
            );
            let result = locator.locate_or_zip(zip.as_deref()).await;
            if result.message.is_empty() {
                println!("📍 Location not available. Enter your ZIP to confirm.");
            } else {
                print_area(&result.message, result.in_service_area);
            }
            Ok(())
        }
        Command::RateCard { format } => {
            let card = RateCard::build(config.display_discount_percent());
            let output = match format {
                OutputFormat::Csv => card.to_csv()?,
                OutputFormat::Json => card.to_json()?,
            };
            print!("{}", output);
            if format == OutputFormat::Json {
                println!();
            }
            Ok(())
        }
    }
}

fn quote(args: QuoteArgs, config: &BookingConfig) -> Result<()> {
    let mut request = QuoteRequest::from_ids(&args.tier, &args.frequency)?
        .with_room_counts(args.rooms());

    let prefill = args
        .query
        .as_deref()
        .map(BookingPrefill::parse)
        .unwrap_or_default();
    prefill.apply(&mut request);
    request.add_on_ids.extend(args.add_ons);
    request.promo_code = args.promo;

    let quote = PricingEngine::from_config(config).compute_quote(&request)?;
    let area = prefill
        .zip
        .as_deref()
        .map(|zip| ServiceAreaResolver::new().resolve_by_zip(zip));

    if args.json {
        let output = serde_json::json!({
            "request": request,
            "quote": quote,
            "service_area": area,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "🧹 {} ({} bed / {} bath, {})",
        request.tier, request.bedrooms, request.bathrooms, request.frequency
    );
    println!("   Cleaning:   ${}", quote.cleaning_price);
    if quote.add_ons_subtotal > 0 {
        println!("   Add-ons:    ${}", quote.add_ons_subtotal);
    }
    if quote.frequency_discount_amount > 0 {
        println!(
            "   {} discount: -${}",
            request.frequency.label(),
            quote.frequency_discount_amount
        );
    }
    if quote.promo_applied {
        println!("   Promo:      -${}", quote.promo_discount_amount);
    } else if request.promo_code.is_some() {
        println!("   Invalid promo code");
    }
    println!("   Total:      ${}", quote.total);

    if let Some(area) = area {
        print_area(&area.message, area.in_service_area);
    }

    if config.features.booking {
        let handoff = BookingPrefill {
            bedrooms: Some(request.bedrooms),
            bathrooms: Some(request.bathrooms),
            zip: prefill.zip.clone(),
        };
        println!(
            "📅 Book online: {}/booking?{}",
            config.site.url.trim_end_matches('/'),
            handoff.to_query()
        );
    } else {
        tracing::info!("Online booking is disabled; call {}", config.contact.phone);
    }

    Ok(())
}

fn print_area(message: &str, in_service_area: bool) {
    if in_service_area {
        println!("✅ {}", message);
    } else {
        println!("❌ {}", message);
    }
}
