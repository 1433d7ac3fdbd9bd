//! Graph command handler
//!
//! Builds the progression graph and prints it or writes it to a file in the
//! requested export format.

use super::{fail, CatalogSource};
use crate::args::CompletedArgs;
use course_planner::config::Config;
use course_planner::planner::{build_progression_graph, GraphOptions};
use course_planner::report::{GraphFormat, GraphReporter, MarkdownReporter};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for one graph run
#[derive(Debug, Clone)]
pub struct GraphRun {
    /// Expansion rounds override
    pub depth: Option<usize>,
    /// Node cap override
    pub max_nodes: Option<usize>,
    /// Export format
    pub format: GraphFormat,
    /// Explicit output file
    pub output: Option<PathBuf>,
    /// Write to the configured output directory
    pub save: bool,
}

impl GraphRun {
    /// Graph bounds: flags first, then config
    fn options(&self, config: &Config) -> GraphOptions {
        let defaults = config.graph_options();
        GraphOptions {
            max_depth: self.depth.unwrap_or(defaults.max_depth),
            max_nodes: self.max_nodes.unwrap_or(defaults.max_nodes),
        }
    }

    /// Destination file, if the graph is not going to stdout
    fn destination(&self, config: &Config) -> Option<PathBuf> {
        if self.save {
            let dept = config.planner.dept.trim().replace(' ', "_").to_lowercase();
            let name = format!("{dept}_graph.{}", self.format.extension());
            Some(Path::new(&config.paths.out_dir).join(name))
        } else {
            self.output.clone()
        }
    }
}

/// Run the graph command
pub fn run(source: CatalogSource<'_>, completed: &CompletedArgs, graph_run: &GraphRun, config: &Config) {
    if let Err(err) = graph(source, completed, graph_run, config) {
        fail("graph", &err);
    }
}

fn graph(
    source: CatalogSource<'_>,
    completed: &CompletedArgs,
    graph_run: &GraphRun,
    config: &Config,
) -> Result<(), String> {
    let catalog = source.load(config)?;
    let completed = completed.to_set()?;
    let options = graph_run.options(config);

    let graph = build_progression_graph(&catalog, &completed, &options);
    info!(
        "Built progression graph: {} nodes, {} edges (depth {}, cap {})",
        graph.node_count(),
        graph.edges.len(),
        options.max_depth,
        options.max_nodes
    );

    let reporter: Box<dyn GraphReporter> = match graph_run.format {
        GraphFormat::Markdown => Box::new(MarkdownReporter::with_title(&format!(
            "{} Course Progression",
            config.planner.dept
        ))),
        format => format.reporter(),
    };

    if let Some(path) = graph_run.destination(config) {
        reporter
            .generate(&graph, &path)
            .map_err(|e| format!("Failed to write graph to {}: {e}", path.display()))?;
        println!("✓ Graph written: {}", path.display());
    } else {
        let content = reporter
            .render(&graph)
            .map_err(|e| format!("Failed to render graph: {e}"))?;
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
