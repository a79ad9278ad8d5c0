use clap::{Arg, ArgAction, Command};
use common::config::Settings;
use ingestion::session::Notice;
use ingestion::utils::logging;
use std::process;

fn main() -> anyhow::Result<()> {
    let matches = Command::new("Ingestion Config Manager")
        .version("1.0")
        .about("Validates CSV ingestion forms and emits configuration documents")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Sets a custom config file"),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a form snapshot and print the error report")
                .arg(form_arg()),
        )
        .subcommand(
            Command::new("save")
                .about("Validate a form snapshot and write its configuration document")
                .arg(form_arg())
                .arg(
                    Arg::new("draft")
                        .long("draft")
                        .action(ArgAction::SetTrue)
                        .help("Skip validation and write a draft"),
                )
                .arg(
                    Arg::new("created-by")
                        .long("created-by")
                        .value_name("NAME")
                        .help("Author stamped into the document"),
                )
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .value_name("DIR")
                        .help("Directory the document is written to"),
                ),
        )
        .get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(|s| s.as_str())
        .unwrap_or("config/ingestion.toml");
    let log_filter = logging::init();
    let mut settings = Settings::new(config_path)?;
    log_filter.apply_settings(&settings)?;

    match matches.subcommand() {
        Some(("validate", validate_matches)) => {
            let form_path = required_form(validate_matches);
            let report = ingestion::run_validate(form_path)?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if !report.is_valid() {
                process::exit(1);
            }
        }
        Some(("save", save_matches)) => {
            let form_path = required_form(save_matches);
            if let Some(name) = save_matches.get_one::<String>("created-by") {
                settings.created_by = Some(name.clone());
            }
            if let Some(dir) = save_matches.get_one::<String>("out") {
                settings.output_dir = dir.clone();
            }
            let draft = save_matches.get_flag("draft");

            match ingestion::run_save(&settings, form_path, draft) {
                Ok(saved) => {
                    println!("{}", saved.notice.message);
                    println!("Configuration written to {}", saved.path.display());
                }
                Err(e) => {
                    eprintln!("{}", Notice::from_error(&e).message);
                    if !e.is_user_facing() {
                        eprintln!("Error generating configuration: {}", e);
                    }
                    process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Please specify a valid subcommand");
            process::exit(1);
        }
    }

    Ok(())
}

fn form_arg() -> Arg {
    Arg::new("form")
        .short('f')
        .long("form")
        .value_name("FILE")
        .required(true)
        .help("Form snapshot JSON file")
}

fn required_form(matches: &clap::ArgMatches) -> &str {
    matches
        .get_one::<String>("form")
        .map(|s| s.as_str())
        .unwrap_or_default()
}
