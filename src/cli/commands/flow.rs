//! Flow commands - list, show, validate, run
//!
//! `run` is the interactive host for the core wizard machine: it renders
//! the current step, computes the navigation predicates from prompt state,
//! and forwards transitions. All branching logic stays in the core.

use chrono::Utc;
use clap::{Args, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use miette::{bail, IntoDiagnostic, Result};
use ulid::Ulid;

use crate::cli::args::{GlobalOpts, OutputFormat};
use crate::cli::helpers::{theme_style, truncate_str};
use crate::core::nav;
use crate::core::wizard::{active_sequence, ShellConfig, StepDef, WizardEvent, WizardMachine};
use crate::core::Config;
use crate::flows::{self, FlowFile};

#[derive(Debug, Subcommand)]
pub enum FlowCommands {
    /// List builtin and discovered flow definitions
    List(ListArgs),

    /// Show a flow's shell config and active step sequence
    Show(ShowArgs),

    /// Check a flow definition for configuration faults
    Validate(ValidateArgs),

    /// Run a registration flow interactively
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Builtin flow name or path to a flow file
    pub flow: String,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Builtin flow name or path to a flow file
    pub flow: String,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Builtin flow name or path to a flow file
    pub flow: String,

    /// Badge text shown in the wizard header (e.g. a family surname)
    #[arg(long)]
    pub badge: Option<String>,

    /// Disable a step before the first one renders (repeatable)
    #[arg(long = "without", value_name = "STEP_ID")]
    pub without: Vec<String>,

    /// Answer every gate affirmatively and run non-interactively
    #[arg(long)]
    pub auto: bool,
}

pub fn run(cmd: FlowCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        FlowCommands::List(args) => list(&args, global),
        FlowCommands::Show(args) => show(&args, global),
        FlowCommands::Validate(args) => validate(&args, global),
        FlowCommands::Run(args) => run_flow(&args, global),
    }
}

fn load_flow(name_or_path: &str) -> Result<FlowFile> {
    flows::resolve(name_or_path).into_diagnostic()
}

fn list(_args: &ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dir = global.flows_dir.clone().or(config.flows_dir);

    if global.format == OutputFormat::Id {
        for name in flows::builtin_names() {
            println!("{}", name);
        }
        if let Some(dir) = dir.filter(|d| d.is_dir()) {
            for path in flows::discover(&dir) {
                println!("{}", path.display());
            }
        }
        return Ok(());
    }

    println!("{}", style("BUILTIN").bold().dim());
    for name in flows::builtin_names() {
        if let Ok(Some(flow)) = flows::builtin(&name) {
            println!("  {:<10} {}", style(&name).cyan(), flow.title);
        }
    }

    if let Some(dir) = dir.filter(|d| d.is_dir()) {
        let discovered = flows::discover(&dir);
        if !discovered.is_empty() {
            println!();
            println!(
                "{}",
                style(format!("DISCOVERED ({})", dir.display())).bold().dim()
            );
            for path in discovered {
                match FlowFile::load(&path) {
                    Ok(flow) => println!(
                        "  {:<40} {}",
                        style(truncate_str(&path.display().to_string(), 40)).cyan(),
                        flow.title
                    ),
                    Err(_) => println!(
                        "  {:<40} {}",
                        style(truncate_str(&path.display().to_string(), 40)).cyan(),
                        style("(invalid flow file)").red().dim()
                    ),
                }
            }
        }
    }
    Ok(())
}

fn show(args: &ShowArgs, global: &GlobalOpts) -> Result<()> {
    let flow = load_flow(&args.flow)?;

    match global.format {
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&flow).into_diagnostic()?);
            return Ok(());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&flow).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    let shell = flow.shell();
    let accent = theme_style(shell.theme);
    let sequence = active_sequence(&flow.step_defs()).into_diagnostic()?;

    println!("{}", accent.apply_to(&shell.title).bold());
    if let Some(badge) = shell.badge.as_deref().filter(|b| !b.is_empty()) {
        println!("badge: {}", style(badge).yellow());
    }
    println!("theme: {}", shell.theme);
    println!();

    for step in &flow.steps {
        if step.enabled {
            println!(
                "  {} {:<12} {}",
                accent.apply_to("●"),
                style(&step.id).cyan(),
                step.label
            );
        } else {
            println!(
                "  {} {:<12} {} {}",
                style("○").dim(),
                style(&step.id).dim(),
                style(&step.label).dim(),
                style("(disabled)").dim()
            );
        }
    }

    if !global.quiet {
        println!();
        println!(
            "{} active step(s): {}",
            style(sequence.len()).cyan(),
            sequence.join(" → ")
        );
    }
    Ok(())
}

fn validate(args: &ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let flow = load_flow(&args.flow)?;
    let defs = flow.step_defs();

    let sequence = match active_sequence(&defs) {
        Ok(sequence) => sequence,
        Err(e) => bail!("invalid flow '{}': {}", args.flow, e),
    };
    if sequence.is_empty() {
        bail!("invalid flow '{}': no enabled steps", args.flow);
    }

    if !global.quiet {
        println!(
            "{} Flow '{}' is valid ({} active step(s))",
            style("✓").green(),
            args.flow,
            sequence.len()
        );
    }
    Ok(())
}

fn run_flow(args: &RunArgs, global: &GlobalOpts) -> Result<()> {
    let flow = load_flow(&args.flow)?;
    let mut shell = flow.shell();
    if args.badge.is_some() {
        shell.badge = args.badge.clone();
    }

    let mut machine = WizardMachine::new(flow.step_defs()).into_diagnostic()?;

    // Host-side conditional disablement before the first step renders.
    if !args.without.is_empty() {
        let steps = with_disabled(machine.steps(), &args.without);
        if let Some(event) = machine.replace_steps(steps).into_diagnostic()? {
            report_event(&event, global);
        }
    }

    let prompt_theme = ColorfulTheme::default();
    let accent = theme_style(shell.theme);

    while let Some(step_id) = machine.active_step_id().map(str::to_string) {
        let label = machine
            .step(&step_id)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| step_id.clone());
        render_step_header(&shell, &accent, &label, &machine, global);

        if args.auto {
            if let Some(event) = machine.advance(true) {
                report_event(&event, global);
            }
            continue;
        }

        let can_back = !machine.is_first();
        let can_continue = Confirm::with_theme(&prompt_theme)
            .with_prompt(format!("Mark '{}' complete?", label))
            .default(true)
            .interact()
            .into_diagnostic()?;

        // The navigation bar renders only when it has content; otherwise it
        // is suppressed entirely and the completion gate re-prompts.
        if !nav::has_content(can_back, can_continue, shell.badge.as_deref()) {
            println!(
                "{}",
                style("Nothing to navigate yet - complete this step to continue.").dim()
            );
            continue;
        }

        let pending_optional = pending_optional_ids(&flow, &machine);
        let mut choices: Vec<&str> = Vec::new();
        if can_continue {
            choices.push("Continue");
        }
        if can_back {
            choices.push("Back");
        }
        if !pending_optional.is_empty() {
            choices.push("Skip optional steps");
        }
        choices.push("Abandon");

        let picked = Select::with_theme(&prompt_theme)
            .with_prompt("Navigate")
            .items(&choices)
            .default(0)
            .interact()
            .into_diagnostic()?;

        match choices[picked] {
            "Continue" => {
                if let Some(event) = machine.advance(can_continue) {
                    report_event(&event, global);
                }
            }
            "Back" => {
                if let Some(event) = machine.back(can_back) {
                    report_event(&event, global);
                }
            }
            "Skip optional steps" => {
                let steps = with_disabled(machine.steps(), &pending_optional);
                if let Some(event) = machine.replace_steps(steps).into_diagnostic()? {
                    report_event(&event, global);
                }
            }
            _ => bail!("registration abandoned"),
        }
    }

    print_summary(&shell, global);
    Ok(())
}

/// Copy a step list with the named steps disabled
fn with_disabled(steps: &[StepDef], ids: &[String]) -> Vec<StepDef> {
    steps
        .iter()
        .cloned()
        .map(|mut s| {
            if ids.contains(&s.id) {
                s.enabled = false;
            }
            s
        })
        .collect()
}

/// Optional steps that are still enabled, current step included
fn pending_optional_ids(flow: &FlowFile, machine: &WizardMachine) -> Vec<String> {
    let optional = flow.optional_ids();
    machine
        .steps()
        .iter()
        .filter(|s| s.enabled && optional.contains(&s.id.as_str()))
        .map(|s| s.id.clone())
        .collect()
}

fn render_step_header(
    shell: &ShellConfig,
    accent: &console::Style,
    label: &str,
    machine: &WizardMachine,
    global: &GlobalOpts,
) {
    if global.quiet {
        return;
    }
    let pos = machine.position().unwrap_or(0) + 1;

    println!();
    println!(
        "{}",
        accent
            .apply_to(format!(
                "{} - step {} of {}",
                shell.title,
                pos,
                machine.step_count()
            ))
            .bold()
    );
    if let Some(badge) = shell.badge.as_deref().filter(|b| !b.is_empty()) {
        println!("{}", style(format!("[{}]", badge)).yellow());
    }
    println!("{}", style("─".repeat(50)).dim());
    println!("{} {}", accent.apply_to("◆"), style(label).bold());
}

fn report_event(event: &WizardEvent, global: &GlobalOpts) {
    if !global.verbose {
        return;
    }
    match event {
        WizardEvent::Advanced { from, to } => eprintln!("advanced: {} → {}", from, to),
        WizardEvent::Rewound { from, to } => eprintln!("went back: {} → {}", from, to),
        WizardEvent::Skipped { from, to } => {
            eprintln!("skipped disabled step: {} → {}", from, to)
        }
        WizardEvent::Completed { from } => eprintln!("completed after: {}", from),
    }
}

fn print_summary(shell: &ShellConfig, global: &GlobalOpts) {
    println!();
    println!(
        "{} {} complete",
        style("✓").green(),
        style(&shell.title).bold()
    );
    if !global.quiet {
        println!(
            "  reference: {}",
            style(format!("REG-{}", Ulid::new())).cyan()
        );
        println!("  submitted: {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));
    }
}
