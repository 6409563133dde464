//! Role commands - resolve, classify, list

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::args::{GlobalOpts, OutputFormat};
use crate::core::roles::{is_admin_tier, is_team_member_tier, Privilege};

#[derive(Debug, Subcommand)]
pub enum RolesCommands {
    /// Resolve a role identifier to its privilege display name
    Resolve(ResolveArgs),

    /// Classify a set of role names into coarse access tiers
    Classify(ClassifyArgs),

    /// List known role identifiers and their privilege names
    List,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Backend role identifier (omit to resolve a missing role)
    pub role_id: Option<String>,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Role names as issued by the session provider
    pub roles: Vec<String>,
}

pub fn run(cmd: RolesCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        RolesCommands::Resolve(args) => resolve(&args, global),
        RolesCommands::Classify(args) => classify(&args, global),
        RolesCommands::List => list(global),
    }
}

fn resolve(args: &ResolveArgs, global: &GlobalOpts) -> Result<()> {
    let privilege = Privilege::resolve(args.role_id.as_deref());

    match global.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "role_id": args.role_id,
                "privilege": privilege.as_str(),
            });
            println!("{}", serde_json::to_string(&out).into_diagnostic()?);
        }
        _ => println!("{}", privilege),
    }
    Ok(())
}

fn classify(args: &ClassifyArgs, global: &GlobalOpts) -> Result<()> {
    let admin = is_admin_tier(&args.roles);
    let member = is_team_member_tier(&args.roles);

    match global.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "admin_tier": admin,
                "team_member_tier": member,
            });
            println!("{}", serde_json::to_string(&out).into_diagnostic()?);
        }
        _ => {
            println!("admin tier:       {}", yes_no(admin));
            println!("team member tier: {}", yes_no(member));
        }
    }
    Ok(())
}

fn yes_no(value: bool) -> String {
    if value {
        style("yes").green().to_string()
    } else {
        style("no").dim().to_string()
    }
}

fn list(global: &GlobalOpts) -> Result<()> {
    let known = Privilege::known();

    match global.format {
        OutputFormat::Id => {
            for (id, _) in known {
                println!("{}", id);
            }
            return Ok(());
        }
        OutputFormat::Json => {
            let out: Vec<_> = known
                .iter()
                .map(|(id, p)| {
                    serde_json::json!({ "role_id": id, "privilege": p.as_str() })
                })
                .collect();
            println!("{}", serde_json::to_string(&out).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    println!(
        "{:<16} {}",
        style("ROLE ID").bold().dim(),
        style("PRIVILEGE").bold().dim()
    );
    println!("{}", "-".repeat(32));
    for (id, privilege) in known {
        println!("{:<16} {}", style(id).cyan(), privilege);
    }

    if !global.quiet {
        println!();
        println!(
            "{} role identifier(s) known. Unrecognized identifiers resolve to {}.",
            style(known.len()).cyan(),
            style("Unknown").bold()
        );
    }
    Ok(())
}
