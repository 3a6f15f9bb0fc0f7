//! Learning Center Server
//!
//! Axum server that renders the course catalog site from embedded templates
//! and exposes catalog search and lookup as a JSON API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use learning_center_core::catalog::{filter_courses, result_heading, CourseQuery, ALL};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod pages;

use config::{load_catalog, resolve_catalog_path, ServeArgs, ServerConfig};

#[derive(Parser, Clone)]
#[command(author, version, about = "Learning Center - course catalog website")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the web server (default)
    Serve(ServeArgs),
    /// Search the catalog from the command line
    Search {
        /// Text matched against title, description and instructor
        query: Option<String>,
        /// Exact grade level
        #[arg(long, default_value = ALL)]
        grade: String,
        /// Exact category
        #[arg(long, default_value = ALL)]
        category: String,
        /// Catalog JSON file to search instead of the bundled one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Validate a catalog file
    Check {
        /// Catalog JSON file (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("learning_center_server=info,learning_center_core=info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    init_logging();

    let args = Args::parse();

    match args.command {
        Some(CliCommand::Search {
            query,
            grade,
            category,
            catalog,
        }) => {
            let catalog = load_catalog(resolve_catalog_path(catalog).as_ref())?;
            let query = CourseQuery::new(query.unwrap_or_default())
                .with_grade(&grade)
                .with_category(&category);
            let matches = filter_courses(catalog.courses(), &query);

            println!("{}", result_heading(matches.len()));
            for course in matches {
                println!(
                    "  [{}] {} - {} ({}, {})",
                    course.id, course.title, course.instructor, course.category, course.grade_level
                );
            }
            Ok(())
        }
        Some(CliCommand::Check { catalog }) => {
            let path = resolve_catalog_path(catalog);
            let catalog = load_catalog(path.as_ref())?;
            match path {
                Some(path) => println!("{:?}: {} courses, valid", path, catalog.len()),
                None => println!("bundled catalog: {} courses, valid", catalog.len()),
            }
            Ok(())
        }
        Some(CliCommand::Serve(serve)) => app::run_server(ServerConfig::resolve(serve)?).await,
        None => app::run_server(ServerConfig::resolve(ServeArgs::default())?).await,
    }
}
