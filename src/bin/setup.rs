use std::env;

use anyhow::{anyhow, Context, Result};
use cyberguard::desk::{config_file_path, ensure_workspace_structure, load_or_default, save};
use cyberguard::reports::EvidencePolicy;

fn main() -> Result<()> {
    ensure_workspace_structure()?;
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = !config_path.exists();

    if let Some(name) = args.bot_name {
        if config.chat.bot_name != name {
            config.chat.bot_name = name;
            changed = true;
        }
    }
    if let Some(policy) = args.evidence_policy {
        if config.reports.evidence_policy != policy {
            config.reports.evidence_policy = policy;
            changed = true;
        }
    }
    if args.anonymous && config.reports.require_user {
        config.reports.require_user = false;
        changed = true;
    }

    if changed {
        save(&config)?;
        println!("Settings recorded at {}", config_path.display());
    } else {
        println!("Settings already configured.");
    }

    Ok(())
}

struct CliArgs {
    bot_name: Option<String>,
    evidence_policy: Option<EvidencePolicy>,
    anonymous: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut bot_name = None;
        let mut evidence_policy = None;
        let mut anonymous = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bot-name" => {
                    let value = args.next().context("Expected a name after --bot-name")?;
                    bot_name = Some(value);
                }
                "--evidence" => {
                    let value = args
                        .next()
                        .context("Expected single or split after --evidence")?;
                    evidence_policy = Some(match value.as_str() {
                        "single" => EvidencePolicy::SingleEntry,
                        "split" => EvidencePolicy::SplitWhitespace,
                        other => return Err(anyhow!("Unknown evidence policy '{other}'")),
                    });
                }
                "--allow-anonymous" => anonymous = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            bot_name,
            evidence_policy,
            anonymous,
        })
    }
}

fn print_usage() {
    println!("CyberGuard setup");
    println!("Writes chat and report settings to config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --bot-name <name>        Name the assistant introduces itself with (default: Billy)");
    println!("  --evidence single|split  Keep evidence as one entry or split on whitespace");
    println!("  --allow-anonymous        Keep reports submitted without a signed-in user");
}
