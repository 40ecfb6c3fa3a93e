//! Command line interface

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::plan::Plan;
use crate::render::Format;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "taskpath", version, about = "Task dependency graphs and critical path analysis")]
pub struct Cli {
    /// Config file (defaults to ./taskpath.yml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail on dependency names that match no task
    #[arg(long, global = true)]
    pub strict: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a plan as gantt, flowchart, json or dot
    Render {
        plan: PathBuf,
        /// Output formats (repeatable); defaults to the configured list
        #[arg(short, long = "format", value_enum)]
        formats: Vec<Format>,
        /// Write <plan>.<ext> files here instead of printing
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the critical path
    Path { plan: PathBuf },
    /// Report unresolved dependencies and cycles
    Check { plan: PathBuf },
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = EngineConfig::load(cli.config.as_deref())?;
    if cli.strict {
        config.strict_resolution = true;
    }

    match cli.command {
        Command::Render {
            plan,
            formats,
            output_dir,
        } => {
            let formats = if formats.is_empty() {
                config.formats.clone()
            } else {
                formats
            };
            render(&config, &plan, &formats, output_dir.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Path { plan } => {
            print_path(&config, &plan)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { plan } => check(&config, &plan),
    }
}

fn render(config: &EngineConfig, plan_path: &Path, formats: &[Format], output_dir: Option<&Path>) -> Result<()> {
    let plan = Plan::from_file(plan_path)?;
    let result = Engine::new(config).build_plan(&plan)?;
    let renderings = result.renderings(formats);

    match output_dir {
        Some(dir) => {
            let stem = Plan::stem(plan_path);
            for rendering in &renderings {
                let path = dir.join(format!("{}.{}", stem, rendering.format.extension()));
                rendering.write_to(&path)?;
                log::info!("Wrote {} to {}", rendering.format, path.display());
            }
        }
        None => {
            let texts: Vec<&str> = renderings.iter().map(|r| r.content.as_str()).collect();
            print!("{}", texts.join("\n"));
        }
    }
    Ok(())
}

fn print_path(config: &EngineConfig, plan_path: &Path) -> Result<()> {
    let plan = Plan::from_file(plan_path)?;
    let result = Engine::new(config).build_plan(&plan)?;

    for task in result.critical_tasks() {
        println!("{}\t{}\t{}d", task.id, task.name, task.duration);
    }
    println!("total\t{}d", result.total_duration());
    Ok(())
}

fn check(config: &EngineConfig, plan_path: &Path) -> Result<ExitCode> {
    let plan = Plan::from_file(plan_path)?;
    // Lenient build so every problem is listed, not just the first
    let lenient = EngineConfig {
        strict_resolution: false,
        strict_cycles: false,
        ..config.clone()
    };
    let result = Engine::new(&lenient).build_plan(&plan)?;

    let mut problems = 0;
    for miss in result.graph().unresolved() {
        let name = result
            .graph()
            .get_task(miss.task)
            .map(|t| t.name.as_str())
            .unwrap_or_default();
        println!("{} ({}): unknown dependency \"{}\"", miss.task, name, miss.dependency);
        problems += 1;
    }
    if let Some(cycle) = result.cycle() {
        let mut ids: Vec<String> = cycle.iter().map(ToString::to_string).collect();
        if let Some(first) = cycle.first() {
            ids.push(first.to_string());
        }
        println!("cycle: {}", ids.join(" -> "));
        problems += 1;
    }

    if problems == 0 {
        println!("ok: {} tasks, {} dependencies", result.tasks().len(), result.graph().edge_count());
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
