use crate::core::{DocPipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Drives one generation run: load, validate, then render and write each
/// event in catalog order. The first error stops the run; documents written
/// before it stay on disk.
pub struct DocsEngine<P: DocPipeline> {
    pipeline: P,
    overview: bool,
    dry_run: bool,
}

impl<P: DocPipeline> DocsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            overview: false,
            dry_run: false,
        }
    }

    pub fn with_overview(mut self, overview: bool) -> Self {
        self.overview = overview;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<RunSummary> {
        let catalog = self.pipeline.load_catalog()?;
        catalog.validate()?;

        let domains: Vec<String> = catalog.domains().into_iter().map(String::from).collect();
        tracing::info!(
            "Loaded {} events across {} domains",
            catalog.len(),
            domains.len()
        );

        let mut summary = RunSummary {
            domains: domains.clone(),
            dry_run: self.dry_run,
            ..RunSummary::default()
        };

        if self.dry_run {
            for event in &catalog.events {
                let doc = self.pipeline.render(event, &catalog.exchange)?;
                println!("Would generate: {}", doc.display_path);
                summary.files.push(doc.display_path);
            }
            summary.documents = summary.files.len();
            println!();
            println!(
                "Dry run: {} events would be documented, nothing written",
                summary.documents
            );
            return Ok(summary);
        }

        for domain in &domains {
            self.pipeline.prepare_domain(domain)?;
        }

        for event in &catalog.events {
            let doc = self.pipeline.render(event, &catalog.exchange)?;
            self.pipeline.write(&doc)?;
            tracing::debug!(
                "Wrote {} ({} bytes) for {}",
                doc.display_path,
                doc.markdown.len(),
                doc.event_name
            );
            println!("Generated: {}", doc.display_path);
            summary.files.push(doc.display_path);
        }
        summary.documents = summary.files.len();

        if self.overview {
            let overview = self.pipeline.write_overview(&catalog)?;
            println!("Generated: {}", overview);
            summary.overview_written = true;
        }

        println!();
        println!("Generated documentation for {} events", catalog.events.len());

        Ok(summary)
    }
}
