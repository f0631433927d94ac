use crate::domain::model::{RenamePair, TransformResult};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<RenamePair>>;
    fn transform(&self, pairs: Vec<RenamePair>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
