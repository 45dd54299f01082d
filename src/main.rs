use animal_site::core::site::validate_query;
use animal_site::core::ConfigProvider;
use animal_site::utils::{env_file, logger, validation::Validate};
use animal_site::{CliConfig, LocalStorage, SiteGenerator};
use clap::Parser;
use std::io::{self, BufRead, Write};

fn prompt_for_name() -> io::Result<String> {
    print!("Enter an animal name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> anyhow::Result<()> {
    // .env 必須在建立 runtime 與解析參數前載入，才能提供 API_KEY 等預設值
    let dotenv_result = env_file::load_env_file(".env");

    let cli = CliConfig::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, dotenv_result))
}

async fn run(cli: CliConfig, dotenv_result: animal_site::Result<usize>) -> anyhow::Result<()> {
    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    match dotenv_result {
        Ok(0) => {}
        Ok(count) => tracing::debug!("Loaded {} variable(s) from .env", count),
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }

    let config = match cli.to_site_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            println!("Error: {}", e);
            return Ok(());
        }
    };
    tracing::debug!("Site config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        println!("Error: {}", e);
        return Ok(());
    }

    let name = match cli.name.clone() {
        Some(name) => name.trim().to_string(),
        None => match prompt_for_name() {
            Ok(name) => name,
            Err(e) => {
                println!("Unexpected error: {}", e);
                return Ok(());
            }
        },
    };

    if let Err(e) = validate_query(config.source_kind(), &name) {
        tracing::error!("❌ {}", e);
        println!("Error: please enter an animal name");
        return Ok(());
    }

    let site = SiteGenerator::from_config(&config, LocalStorage::default());

    match site.generate(&name).await {
        Ok(output_path) => {
            tracing::info!("✅ Website generated");
            println!("Success! Website saved to {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Site generation failed: {}", e);
            println!("Error: {}", e);
        }
    }

    Ok(())
}
