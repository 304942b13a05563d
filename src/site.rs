//! Site generation driver
//!
//! Runs the fixed page sequence: static pages first, then the pages whose
//! content holds generated tables. Any error aborts the run and pages
//! already written stay in the output folder.

use crate::config::{Config, SampleMap};
use crate::page::{self, PageSpec};
use crate::tables;
use crate::workspace::{self, OutputDir};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Pages rendered straight from their content page
pub const STATIC_PAGES: &[PageSpec] = &[
    PageSpec {
        output: "index.html",
        title: "Epigenetic aging of classical monocytes from healthy individuals",
        scripts: "",
        content: "_index.html",
    },
    PageSpec {
        output: "methods.html",
        title: "Methods",
        scripts: "",
        content: "_methods.html",
    },
    PageSpec {
        output: "tools.html",
        title: "Peak Calling Solution",
        scripts: "",
        content: "_tools.html",
    },
    PageSpec {
        output: "howto.html",
        title: "Visual peak calling how to",
        scripts: "",
        content: "_howto.html",
    },
    PageSpec {
        output: "team.html",
        title: "Team",
        scripts: "",
        content: "_team.html",
    },
];

pub type TableBuilder = fn(&Path, &Path, &str, &SampleMap) -> Result<()>;

/// A page whose content page is filled with tables before rendering
pub struct GeneratedPage {
    pub page: PageSpec,
    pub build: TableBuilder,
}

pub const GENERATED_PAGES: &[GeneratedPage] = &[
    GeneratedPage {
        page: PageSpec {
            output: "explore_data.html",
            title: "Explore Data",
            scripts: "",
            content: "_explore_data.html",
        },
        build: tables::generate_explore_page,
    },
    GeneratedPage {
        page: PageSpec {
            output: "download_data.html",
            title: "Download Data",
            scripts: "",
            content: "_download_data.html",
        },
        build: tables::generate_download_data_page,
    },
    GeneratedPage {
        page: PageSpec {
            output: "study_cases.html",
            title: "Study cases",
            scripts: "",
            content: "_study_cases.html",
        },
        build: tables::generate_study_cases_page,
    },
];

/// Files produced by one run
#[derive(Debug, Default)]
pub struct Summary {
    /// Static resources copied verbatim
    pub assets: Vec<String>,
    /// Pages rendered from the layout, in generation order
    pub pages: Vec<String>,
}

/// Generator inputs
#[derive(Debug, Clone)]
pub struct Site {
    pub site_dir: PathBuf,
    pub out_dir: PathBuf,
    pub config: Config,
}

impl Site {
    pub fn new(site_dir: PathBuf, out_dir: PathBuf, config: Config) -> Self {
        Site {
            site_dir,
            out_dir,
            config,
        }
    }

    /// Refuse output folders that would take the sources down with them
    fn check_folders(&self) -> Result<()> {
        let site = self
            .site_dir
            .canonicalize()
            .with_context(|| format!("Site folder not found: {}", self.site_dir.display()))?;
        let out = if self.out_dir.exists() {
            self.out_dir.canonicalize()?
        } else {
            std::env::current_dir()?.join(&self.out_dir)
        };
        if site.starts_with(&out) {
            anyhow::bail!(
                "Output folder {} would delete site folder {}",
                self.out_dir.display(),
                self.site_dir.display()
            );
        }
        Ok(())
    }

    /// Recreate the output folder and generate every page
    pub fn generate(&self) -> Result<Summary> {
        self.check_folders()?;

        let out = OutputDir::recreate(&self.out_dir)?;
        info!("Generating site structure in {}", out.path().display());

        let mut summary = Summary {
            assets: workspace::copy_static_assets(&self.site_dir, &out)?,
            ..Summary::default()
        };

        info!("Generate static pages");
        for spec in STATIC_PAGES {
            page::assemble(&self.site_dir, out.path(), spec)?;
            summary.pages.push(spec.output.to_string());
        }

        for generated in GENERATED_PAGES {
            info!("Creating {}", generated.page.title);
            (generated.build)(
                &self.site_dir,
                out.path(),
                generated.page.content,
                &self.config.samples,
            )?;
            page::assemble(&self.site_dir, out.path(), &generated.page)?;
            summary.pages.push(generated.page.output.to_string());
        }

        info!(
            "Done! {} pages, {} resources",
            summary.pages.len(),
            summary.assets.len()
        );
        Ok(summary)
    }
}
