use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RenameEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RenameEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting script generation...");

        // Extract
        println!("Reading rename pairs...");
        let pairs = self.pipeline.extract()?;
        println!("Read {} rename pairs", pairs.len());

        // Transform
        println!("Generating commands...");
        let result = self.pipeline.transform(pairs)?;
        println!("Generated commands for {} renames", result.renames.len());

        // Load
        println!("Writing output files...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
