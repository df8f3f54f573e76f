use clap::Parser;
use product_application::config::application_file::load_application;
use product_application::utils::{logger, validation::Validate};
use product_application::{
    ApplicationDispatcher, ApplicationError, CliArgs, DispatcherConfig, DryRunBackends, Product,
    ProductApplicationService, SellerApplication, FAILED_APPLICATION,
};

fn load_config(args: &CliArgs) -> Result<DispatcherConfig, ApplicationError> {
    let config = match &args.config {
        Some(path) => DispatcherConfig::from_file(path)?,
        None => DispatcherConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[allow(deprecated)]
fn submit<P: ProductApplicationService>(
    service: &P,
    application: &SellerApplication,
    product_only: bool,
) -> Result<i32, ApplicationError> {
    if !product_only {
        return service.route(application);
    }

    let company = &application.company_data;
    match &application.product {
        Product::SelectiveInvoiceDiscount(sid) => {
            service.submit_selective_invoice_discount(company, sid)
        }
        Product::ConfidentialInvoiceDiscount(cid) => {
            service.submit_confidential_invoice_discount(company, cid)
        }
        Product::BusinessLoans(loans) => service.submit_business_loans(company, loans),
        Product::Unsupported => Err(ApplicationError::UnsupportedProduct),
    }
}

fn run(args: &CliArgs, config: DispatcherConfig) -> Result<i32, ApplicationError> {
    let application = load_application(&args.application)?;
    application.validate()?;
    tracing::debug!("Loaded application: {:?}", application);

    let backends = DryRunBackends::new(config.dry_run);
    let dispatcher = ApplicationDispatcher::new(backends.clone(), backends.clone(), backends);

    submit(&dispatcher, &application, args.product_only)
}

fn main() {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.json_logs() {
        logger::init_json_logger(args.verbose, config.log_level());
    } else {
        logger::init_cli_logger(args.verbose, config.log_level());
    }
    tracing::info!("Starting product-application");

    match run(&args, config) {
        Ok(outcome) => {
            let accepted = outcome != FAILED_APPLICATION;
            if args.json {
                println!(
                    "{}",
                    serde_json::json!({ "outcome": outcome, "accepted": accepted })
                );
            } else if accepted {
                println!("✅ Application submitted, outcome {}", outcome);
            } else {
                println!("⚠️  Application was not accepted (outcome {})", outcome);
            }
        }
        Err(e) => {
            tracing::error!("❌ Submission failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
