//! Work order commands

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{display_opt, resolve_project, truncate_str};
use crate::cli::output::ListView;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, RecordKind};
use crate::entities::{WorkOrder, WorkOrderPriority, WorkOrderStatus, WorkOrderType};

#[derive(Subcommand)]
pub enum WoCommands {
    /// List work orders
    List(ListArgs),
    /// Show a single work order as YAML
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (e.g. "Open", "In Progress", "Completed")
    #[arg(long)]
    pub status: Option<WorkOrderStatus>,

    /// Filter by work order type (e.g. "Emergency Repair")
    #[arg(long = "type")]
    pub wo_type: Option<WorkOrderType>,

    /// Filter by priority
    #[arg(long)]
    pub priority: Option<WorkOrderPriority>,

    /// Filter by asset ID
    #[arg(long)]
    pub asset: Option<String>,

    /// Only outstanding work (Open or In Progress)
    #[arg(long)]
    pub open: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Work order ID (e.g. WO-000001)
    pub id: String,
}

pub fn run(cmd: WoCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        WoCommands::List(args) => run_list(args, global),
        WoCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let mut work_orders: Vec<WorkOrder> =
        loader::load_all(&project.record_dir(RecordKind::WorkOrder))?;

    if let Some(status) = args.status {
        work_orders.retain(|w| w.status == status);
    }
    if let Some(wo_type) = args.wo_type {
        work_orders.retain(|w| w.work_order_type == wo_type);
    }
    if let Some(priority) = args.priority {
        work_orders.retain(|w| w.priority == priority);
    }
    if let Some(asset) = &args.asset {
        work_orders.retain(|w| w.asset_id == *asset);
    }
    if args.open {
        work_orders.retain(|w| w.status.is_open());
    }

    work_orders.sort_by(|a, b| a.work_order_id.cmp(&b.work_order_id));

    if work_orders.is_empty() {
        if !global.quiet {
            println!("No work orders found.");
        }
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&work_orders).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&work_orders).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for w in &work_orders {
                println!("{}", w.work_order_id);
            }
        }
        format => {
            let mut view = ListView::new(vec![
                "ID",
                "ASSET",
                "TYPE",
                "PRIORITY",
                "STATUS",
                "SCHEDULED",
                "COMPLETED",
                "DESCRIPTION",
            ]);
            for w in &work_orders {
                view.push_row(vec![
                    w.work_order_id.clone(),
                    w.asset_id.clone(),
                    w.work_order_type.to_string(),
                    w.priority.to_string(),
                    w.status.to_string(),
                    display_opt(&w.scheduled_date),
                    display_opt(&w.completed_date),
                    truncate_str(w.description.as_deref().unwrap_or("-"), 40),
                ]);
            }
            match format {
                OutputFormat::Csv => view.print_csv(),
                OutputFormat::Md => view.print_md(),
                _ => view.print_tsv("work order", global.quiet),
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let dir = project.record_dir(RecordKind::WorkOrder);

    let Some((path, wo)) = loader::load_record::<WorkOrder>(&dir, &args.id)? else {
        return Err(miette::miette!("work order '{}' not found", args.id));
    };

    if global.verbose {
        eprintln!("{}", style(format!("# {}", path.display())).dim());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&wo).into_diagnostic()?);
        }
        OutputFormat::Id => println!("{}", wo.work_order_id),
        _ => print!("{}", serde_yml::to_string(&wo).into_diagnostic()?),
    }

    Ok(())
}
