use clap::Parser;
use webpage_rename::utils::{logger, validation::Validate};
use webpage_rename::{CliConfig, LocalStorage, RenameEngine, RenameError, RenamePipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting webpage-rename CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = RenamePipeline::new(storage, config);
    let engine = RenameEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Script generation completed successfully!");
            println!("✅ Files 'rename_files.sh' and '.htaccess' have been successfully generated.");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(RenameError::InvalidFilenames { pairs }) => {
            tracing::error!("❌ {} invalid filename pair(s), no files written", pairs.len());
            eprintln!("❌ Invalid filenames found:");
            for pair in &pairs {
                eprintln!("Old name: {}, New name: {}", pair.old_name, pair.new_name);
            }
            eprintln!("💡 Suggestion: remove the characters < > : \" / \\ | ? * and run again.");
        }
        Err(e) => {
            tracing::error!("❌ Script generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }
    }
}
