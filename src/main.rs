use clap::Parser;
use svg_animator::app::presentation::{read_svg_source, ResultPresenter};
use svg_animator::app::sample::fill_with_sample;
use svg_animator::config::connection::load_dotenv;
use svg_animator::core::prompt::{build_user_prompt, SYSTEM_PROMPT};
use svg_animator::utils::error::{AnimatorError, ErrorSeverity};
use svg_animator::utils::{logger, validation::Validate};
use svg_animator::{
    AnimationOutcome, AnimationRequest, Animator, AzureOpenAiClient, CliConfig, ConnectionConfig,
    LocalStorage, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting svg-animator");
    load_dotenv();
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let loaded = TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c));
            match loaded {
                Ok(c) => Some(c),
                Err(e) => exit_with(&e),
            }
        }
        None => None,
    };

    let connection = config.resolve_connection(ConnectionConfig::from_env(), file_config.as_ref());
    if let Err(e) = connection.validate() {
        exit_with(&e);
    }
    tracing::debug!("Connection: {:?}", connection);

    let svg_code = match (&config.svg_file, &config.svg_code) {
        (Some(path), _) => {
            let input_storage = LocalStorage::new(".".to_string());
            match read_svg_source(&input_storage, path).await {
                Ok(code) => code,
                Err(e) => exit_with(&e),
            }
        }
        (None, Some(code)) => code.clone(),
        (None, None) => String::new(),
    };

    let mut request =
        AnimationRequest::new(svg_code, config.description.clone(), config.animation.clone());
    if config.sample {
        tracing::info!("Filling missing inputs with the robot sample");
        request = fill_with_sample(request);
    }

    let client = match AzureOpenAiClient::from_config(&connection) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };

    if config.dry_run {
        print_dry_run(&connection, &client, &request)?;
        return Ok(());
    }

    let animator = Animator::new_with_monitoring(client, connection, config.monitor);

    let outcome = match animator.animate(&request).await {
        Ok(outcome) => outcome,
        Err(e) => exit_with(&e),
    };

    let output_path = config.resolve_output_path(file_config.as_ref());
    let storage = LocalStorage::new(output_path.clone());
    let presenter = ResultPresenter::new(
        storage,
        output_path,
        config.preview_enabled(file_config.as_ref()),
    );

    match presenter.present(&outcome).await {
        Ok(result) => {
            println!("✅ Animation created successfully!");
            println!("📁 Saved to: {} ({})", result.svg_path, result.media_type);
            if let Some(preview) = &result.preview_path {
                println!("🖼️ Preview: {}", preview);
            }
            if config.print {
                if let AnimationOutcome::Accepted { svg } = &outcome {
                    println!("{}", svg);
                }
            }
        }
        Err(e) => {
            if let AnimationOutcome::Rejected { raw } = &outcome {
                if !raw.is_empty() {
                    eprintln!("--- model output ---");
                    eprintln!("{}", raw);
                    eprintln!("--------------------");
                }
            }
            exit_with(&e);
        }
    }

    Ok(())
}

fn print_dry_run(
    connection: &ConnectionConfig,
    client: &AzureOpenAiClient,
    request: &AnimationRequest,
) -> anyhow::Result<()> {
    println!("🔍 DRY RUN MODE - the model will not be called");
    println!();
    println!("📋 Configuration Summary:");
    println!("  URL: {}", client.url());
    println!("  Endpoint: {}", connection.endpoint);
    println!("  Deployment: {}", connection.deployment_name);
    println!("  API Version: {}", connection.api_version);
    println!("  Temperature: {}", connection.temperature);
    println!("  Max Tokens: {}", connection.max_tokens);

    if !connection.is_configured() {
        println!(
            "  ⚠️ Placeholder values: {}",
            connection.placeholder_fields().join(", ")
        );
    }

    println!();
    println!("📝 Request body:");
    println!(
        "{}",
        client.render_request(SYSTEM_PROMPT, &build_user_prompt(request))?
    );
    Ok(())
}

fn exit_with(e: &AnimatorError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
