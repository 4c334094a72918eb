//! Manufacturer contract commands

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{resolve_project, truncate_str};
use crate::cli::output::ListView;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, RecordKind};
use crate::entities::{Contract, ContractStatus};

#[derive(Subcommand)]
pub enum ContractCommands {
    /// List manufacturer contracts
    List(ListArgs),
    /// Show a single contract as YAML
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by manufacturer (exact match)
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Filter by contract status (e.g. "Active", "Expiring Soon")
    #[arg(long)]
    pub status: Option<ContractStatus>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Contract ID (e.g. CTR-0001)
    pub id: String,
}

pub fn run(cmd: ContractCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ContractCommands::List(args) => run_list(args, global),
        ContractCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let mut contracts: Vec<Contract> =
        loader::load_all(&project.record_dir(RecordKind::Contract))?;

    if let Some(manufacturer) = &args.manufacturer {
        contracts.retain(|c| c.manufacturer == *manufacturer);
    }
    if let Some(status) = args.status {
        contracts.retain(|c| c.contract_status == status);
    }

    contracts.sort_by(|a, b| a.contract_id.cmp(&b.contract_id));

    if contracts.is_empty() {
        if !global.quiet {
            println!("No contracts found.");
        }
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&contracts).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&contracts).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for c in &contracts {
                println!("{}", c.contract_id);
            }
        }
        format => {
            let mut view = ListView::new(vec![
                "ID",
                "MANUFACTURER",
                "TYPE",
                "STATUS",
                "START",
                "END",
                "ANNUAL USD",
                "SLA HRS",
            ]);
            for c in &contracts {
                view.push_row(vec![
                    c.contract_id.clone(),
                    truncate_str(&c.manufacturer, 28),
                    c.contract_type.to_string(),
                    c.contract_status.to_string(),
                    c.start_date.to_string(),
                    c.end_date.to_string(),
                    format!("{:.2}", c.annual_value_usd),
                    c.sla_response_hours.to_string(),
                ]);
            }
            match format {
                OutputFormat::Csv => view.print_csv(),
                OutputFormat::Md => view.print_md(),
                _ => view.print_tsv("contract", global.quiet),
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let dir = project.record_dir(RecordKind::Contract);

    let Some((path, contract)) = loader::load_record::<Contract>(&dir, &args.id)? else {
        return Err(miette::miette!("contract '{}' not found", args.id));
    };

    if global.verbose {
        eprintln!("{}", style(format!("# {}", path.display())).dim());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&contract).into_diagnostic()?
            );
        }
        OutputFormat::Id => println!("{}", contract.contract_id),
        _ => print!("{}", serde_yml::to_string(&contract).into_diagnostic()?),
    }

    Ok(())
}
