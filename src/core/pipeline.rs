use crate::core::{ConfigProvider, Pipeline, RenamePair, Storage, TransformResult};
use crate::utils::error::{RenameError, Result};
use crate::utils::validation::is_valid_filename;
use std::path::Path;

pub const SHELL_SCRIPT_NAME: &str = "rename_files.sh";
pub const HTACCESS_NAME: &str = ".htaccess";

pub struct RenamePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RenamePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RenamePipeline<S, C> {
    fn extract(&self) -> Result<Vec<RenamePair>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading rename pairs from: {}", input_path);

        if !Path::new(input_path).exists() {
            return Err(RenameError::MissingInput {
                path: input_path.to_string(),
            });
        }

        // flexible: 欄位數不固定的資料列由我們自己檢查,而不是讓解析器直接報錯
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(input_path)?;

        let mut pairs = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() != 2 {
                let fields: Vec<&str> = record.iter().collect();
                tracing::warn!(
                    "Invalid line structure {:?}. Each line requires exactly two columns.",
                    fields
                );
                continue;
            }
            pairs.push(RenamePair {
                old_name: record[0].to_string(),
                new_name: record[1].to_string(),
            });
        }

        tracing::debug!("Read {} well-formed rows", pairs.len());
        Ok(pairs)
    }

    fn transform(&self, pairs: Vec<RenamePair>) -> Result<TransformResult> {
        let mut shell_commands = Vec::new();
        let mut rewrite_rules = Vec::new();
        let mut invalid_pairs = Vec::new();

        for pair in &pairs {
            if !is_valid_filename(&pair.old_name) || !is_valid_filename(&pair.new_name) {
                invalid_pairs.push(pair.clone());
                continue;
            }

            shell_commands.push(format!("mv \"{}\" \"{}\"", pair.old_name, pair.new_name));
            rewrite_rules.push(format!(
                "RewriteRule ^{}$ {} [R=301,L]",
                pair.old_name, pair.new_name
            ));
        }

        // 只要有一組無效檔名,整批輸入都不輸出
        if !invalid_pairs.is_empty() {
            return Err(RenameError::InvalidFilenames {
                pairs: invalid_pairs,
            });
        }

        let mut shell_output = String::from("#!/bin/bash\n");
        for cmd in &shell_commands {
            shell_output.push_str(cmd);
            shell_output.push('\n');
        }

        let mut htaccess_output = String::from("RewriteEngine On\n");
        for rule in &rewrite_rules {
            htaccess_output.push_str(rule);
            htaccess_output.push('\n');
        }

        Ok(TransformResult {
            renames: pairs,
            shell_output,
            htaccess_output,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        tracing::debug!(
            "Writing {} ({} bytes) and {} ({} bytes)",
            SHELL_SCRIPT_NAME,
            result.shell_output.len(),
            HTACCESS_NAME,
            result.htaccess_output.len()
        );

        // 不做回滾:第二個檔案寫入失敗時,第一個檔案保持原樣
        self.storage
            .write_file(SHELL_SCRIPT_NAME, result.shell_output.as_bytes())?;
        self.storage
            .write_file(HTACCESS_NAME, result.htaccess_output.as_bytes())?;

        tracing::debug!("Output files saved successfully");
        Ok(self.config.output_path().to_string())
    }
}
