use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use cyberguard::reports::MAP_CENTER;
use cyberguard::{Message, ReportDesk, Sender, Submission, User};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let mut desk = ReportDesk::open()?;
    let user = User::new(args.username.clone(), format!("{}@localhost", args.username))
        .with_admin(args.admin);
    desk.sign_in(user);

    let mut shown = 0;
    shown = print_new_messages(&desk, shown);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        match input {
            "/quit" => break,
            "/reports" => {
                for summary in desk.report_summaries() {
                    println!("{}  {}", summary.id, summary.headline());
                    for link in &summary.evidence {
                        println!("    {}: {}", link.label, link.url);
                    }
                }
                continue;
            }
            "/map" => {
                let (lat, lng) = MAP_CENTER;
                println!("Map centred on ({lat}, {lng})");
                for cluster in desk.clusters() {
                    println!(
                        "({:.4}, {:.4}) {:?} {}",
                        cluster.lat,
                        cluster.lng,
                        cluster.color(),
                        cluster.label()
                    );
                }
                continue;
            }
            _ => {}
        }
        if let Some(id) = input.strip_prefix("/forward ") {
            match id.trim().parse::<uuid::Uuid>() {
                Ok(id) => match desk.report_to_authority(&id) {
                    Ok(()) => println!("Report {id} forwarded to the authorities."),
                    Err(err) => println!("Could not forward: {err:#}"),
                },
                Err(err) => println!("Not a report id: {err}"),
            }
            continue;
        }

        let answer = resolve_choice(&desk, input);
        if let Submission::Submitted(id) = desk.submit_answer(&answer)? {
            println!("(report {id} saved)");
        }
        shown = print_new_messages(&desk, shown);
    }

    Ok(())
}

/// A bare number picks the matching option when the bot offered choices.
fn resolve_choice(desk: &ReportDesk, input: &str) -> String {
    if let (Some(options), Ok(n)) = (desk.engine().current_options(), input.parse::<usize>()) {
        if let Some(label) = n.checked_sub(1).and_then(|idx| options.get(idx)) {
            return label.clone();
        }
    }
    input.to_string()
}

fn print_new_messages(desk: &ReportDesk, shown: usize) -> usize {
    let transcript = desk.transcript();
    for message in transcript.since(shown) {
        if message.sender == Sender::Bot {
            print_bot(message);
        }
    }
    transcript.len()
}

fn print_bot(message: &Message) {
    println!("bot: {}", message.text);
    if let Some(options) = &message.options {
        for (idx, option) in options.iter().enumerate() {
            println!("  {}. {}", idx + 1, option);
        }
    }
}

struct CliArgs {
    username: String,
    admin: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut username = env::var("USER").unwrap_or_else(|_| "reporter".into());
        let mut admin = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--admin" => admin = true,
                "--user" => {
                    username = args
                        .next()
                        .ok_or_else(|| anyhow!("Expected a username after --user"))?;
                }
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
        Ok(Self { username, admin })
    }
}

fn print_usage() {
    println!("CyberGuard chat (report a cyberbullying incident)");
    println!("Usage: cargo run --bin billy -- [options]");
    println!("Options:");
    println!("  --user <name>   Username to report as (default: $USER)");
    println!("  --admin         Allow /forward <report-id>");
    println!("Commands: /reports, /map, /forward <id>, /quit");
}
